//! Backend selection for the seat ledger.

use async_trait::async_trait;
use tracing::{info, warn};

use seathub_core::config::{DatabaseBackend, DatabaseConfig};
use seathub_core::result::AppResult;
use seathub_entity::registration::{NewSignup, Registration};
use seathub_entity::waitlist::WaitlistEntry;

use super::{MemorySeatLedger, PgSeatLedger, SeatClaim, SeatLedger};
use crate::connection::DatabasePool;
use crate::migration::run_migrations;

/// Dispatcher for seat ledger backends.
///
/// Switches between PostgreSQL and in-memory storage based on
/// `database.backend`.
#[derive(Debug, Clone)]
pub enum SeatLedgerDispatch {
    /// PostgreSQL ledger.
    Postgres(PgSeatLedger),
    /// In-memory ledger (single process).
    Memory(MemorySeatLedger),
}

impl SeatLedgerDispatch {
    /// Build the configured ledger.
    ///
    /// For PostgreSQL this connects the pool and, when
    /// `migrate_on_startup` is set, applies pending migrations.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Postgres => {
                let pool = DatabasePool::connect(config).await?.into_pool();
                if config.migrate_on_startup {
                    run_migrations(&pool).await?;
                }
                info!(backend = %config.backend, "Seat ledger ready");
                Ok(Self::Postgres(PgSeatLedger::new(pool)))
            }
            DatabaseBackend::Memory => {
                warn!("Using in-memory seat ledger; registrations are lost on restart");
                Ok(Self::Memory(MemorySeatLedger::new()))
            }
        }
    }

    /// Close any pooled connections.
    pub async fn close(&self) {
        if let Self::Postgres(ledger) = self {
            ledger.pool().close().await;
            info!("Database pool closed");
        }
    }
}

#[async_trait]
impl SeatLedger for SeatLedgerDispatch {
    async fn registered_count(&self) -> AppResult<u64> {
        match self {
            Self::Postgres(inner) => inner.registered_count().await,
            Self::Memory(inner) => inner.registered_count().await,
        }
    }

    async fn claim_seat(&self, signup: NewSignup, total_seats: u32) -> AppResult<SeatClaim> {
        match self {
            Self::Postgres(inner) => inner.claim_seat(signup, total_seats).await,
            Self::Memory(inner) => inner.claim_seat(signup, total_seats).await,
        }
    }

    async fn list_registrations(&self) -> AppResult<Vec<Registration>> {
        match self {
            Self::Postgres(inner) => inner.list_registrations().await,
            Self::Memory(inner) => inner.list_registrations().await,
        }
    }

    async fn list_waitlist(&self) -> AppResult<Vec<WaitlistEntry>> {
        match self {
            Self::Postgres(inner) => inner.list_waitlist().await,
            Self::Memory(inner) => inner.list_waitlist().await,
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self {
            Self::Postgres(inner) => inner.health_check().await,
            Self::Memory(inner) => inner.health_check().await,
        }
    }
}
