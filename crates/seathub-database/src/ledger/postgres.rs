//! PostgreSQL seat ledger.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use seathub_core::error::{AppError, ErrorKind};
use seathub_core::result::AppResult;
use seathub_entity::registration::{NewSignup, Registration};
use seathub_entity::waitlist::WaitlistEntry;
use seathub_entity::workshop::SeatAvailability;

use super::{SeatClaim, SeatLedger};
use crate::repositories::{self, QUERY_FAILED, RegistrationRepository, WaitlistRepository};

/// Advisory lock key serializing seat claims ("seathub" in ASCII).
const SEAT_LOCK_KEY: i64 = 0x7365_6174_6875_62;

/// Seat ledger backed by the `registrations` and `waitlist` tables.
///
/// Each claim runs in its own transaction holding a transaction-scoped
/// advisory lock, so concurrent claims across processes see each other's
/// inserts and capacity is never exceeded.
#[derive(Debug, Clone)]
pub struct PgSeatLedger {
    pool: PgPool,
    registrations: RegistrationRepository,
    waitlist: WaitlistRepository,
}

impl PgSeatLedger {
    /// Creates a ledger over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            registrations: RegistrationRepository::new(pool.clone()),
            waitlist: WaitlistRepository::new(pool.clone()),
            pool,
        }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn database_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

#[async_trait]
impl SeatLedger for PgSeatLedger {
    async fn registered_count(&self) -> AppResult<u64> {
        self.registrations.count().await
    }

    async fn claim_seat(&self, signup: NewSignup, total_seats: u32) -> AppResult<SeatClaim> {
        let mut tx = self.pool.begin().await.map_err(database_error(QUERY_FAILED))?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SEAT_LOCK_KEY)
            .execute(&mut *tx)
            .await
            .map_err(database_error(QUERY_FAILED))?;

        let count = RegistrationRepository::count_with(&mut *tx).await?;
        let availability = SeatAvailability::from_count(total_seats, count);
        debug!(
            registered = count,
            seats_remaining = availability.seats_remaining,
            "Seat lock acquired"
        );

        let claim = if availability.has_free_seat() {
            let registration = Registration::from_signup(&signup);
            let stored = RegistrationRepository::insert_with(&mut *tx, &registration).await?;
            tx.commit()
                .await
                .map_err(database_error(repositories::registration::INSERT_FAILED))?;

            let seats_remaining = availability.after_claim().seats_remaining;
            info!(
                registration_id = %stored.id,
                seats_remaining,
                "Seat registered"
            );
            SeatClaim::Registered {
                registration: stored,
                seats_remaining,
            }
        } else {
            let entry = WaitlistRepository::insert_with(&mut *tx, &signup).await?;
            tx.commit()
                .await
                .map_err(database_error(repositories::waitlist::INSERT_FAILED))?;

            info!(waitlist_id = entry.id, "Workshop full, sign-up waitlisted");
            SeatClaim::Waitlisted { entry }
        };

        Ok(claim)
    }

    async fn list_registrations(&self) -> AppResult<Vec<Registration>> {
        self.registrations.find_all().await
    }

    async fn list_waitlist(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.waitlist.find_all().await
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
