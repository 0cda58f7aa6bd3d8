//! Waitlist repository implementation.

use sqlx::{PgExecutor, PgPool};

use seathub_core::error::{AppError, ErrorKind};
use seathub_core::result::AppResult;
use seathub_entity::registration::NewSignup;
use seathub_entity::waitlist::WaitlistEntry;

use super::QUERY_FAILED;

/// Public message for failed waitlist inserts.
pub const INSERT_FAILED: &str = "Failed to add to waitlist";

/// Repository for the `waitlist` table.
#[derive(Debug, Clone)]
pub struct WaitlistRepository {
    pool: PgPool,
}

impl WaitlistRepository {
    /// Create a new waitlist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List waitlist entries in arrival order.
    pub async fn find_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        sqlx::query_as::<_, WaitlistEntry>(
            "SELECT id, name, email, created_at FROM waitlist ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, QUERY_FAILED, e))
    }

    /// Append a sign-up to the waitlist on the given executor.
    pub async fn insert_with<'e, E>(executor: E, signup: &NewSignup) -> AppResult<WaitlistEntry>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, WaitlistEntry>(
            "INSERT INTO waitlist (name, email) VALUES ($1, $2) \
             RETURNING id, name, email, created_at",
        )
        .bind(&signup.name)
        .bind(&signup.email)
        .fetch_one(executor)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, INSERT_FAILED, e))
    }
}
