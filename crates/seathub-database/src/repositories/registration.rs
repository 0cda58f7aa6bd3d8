//! Registration repository implementation.

use sqlx::{PgExecutor, PgPool};

use seathub_core::error::{AppError, ErrorKind};
use seathub_core::result::AppResult;
use seathub_entity::registration::Registration;

use super::QUERY_FAILED;

/// Public message for failed registration inserts.
pub const INSERT_FAILED: &str = "Failed to register user";

/// Repository for the `registrations` table.
#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    /// Create a new registration repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count stored registrations.
    pub async fn count(&self) -> AppResult<u64> {
        Self::count_with(&self.pool).await
    }

    /// List registrations, oldest first.
    pub async fn find_all(&self) -> AppResult<Vec<Registration>> {
        sqlx::query_as::<_, Registration>(
            "SELECT registration_id, name, email, created_at \
             FROM registrations ORDER BY created_at ASC, registration_id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, QUERY_FAILED, e))
    }

    /// Count stored registrations on the given executor.
    pub async fn count_with<'e, E>(executor: E) -> AppResult<u64>
    where
        E: PgExecutor<'e>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM registrations")
            .fetch_one(executor)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, QUERY_FAILED, e))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Insert a registration on the given executor and return the stored row.
    pub async fn insert_with<'e, E>(executor: E, registration: &Registration) -> AppResult<Registration>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Registration>(
            "INSERT INTO registrations (registration_id, name, email, created_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING registration_id, name, email, created_at",
        )
        .bind(registration.id)
        .bind(&registration.name)
        .bind(&registration.email)
        .bind(registration.created_at)
        .fetch_one(executor)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, INSERT_FAILED, e))
    }
}
