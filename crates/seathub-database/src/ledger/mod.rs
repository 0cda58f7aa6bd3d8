//! Seat ledger: the storage seam that owns seat allocation.
//!
//! Provides an atomic "register or waitlist" step using either:
//! - a PostgreSQL transaction serialized by an advisory lock
//! - an in-memory mutex (single process, tests and local development)

pub mod dispatch;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use seathub_core::result::AppResult;
use seathub_entity::registration::{NewSignup, Registration};
use seathub_entity::waitlist::WaitlistEntry;

pub use dispatch::SeatLedgerDispatch;
pub use memory::MemorySeatLedger;
pub use postgres::PgSeatLedger;

/// Outcome of a seat claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatClaim {
    /// A seat was free and is now held by this registration.
    Registered {
        /// The stored registration.
        registration: Registration,
        /// Seats left once this registration is counted.
        seats_remaining: u32,
    },
    /// Capacity was exhausted; the sign-up joined the waitlist.
    Waitlisted {
        /// The stored waitlist entry.
        entry: WaitlistEntry,
    },
}

/// Storage for registrations and the waitlist.
///
/// `claim_seat` must be atomic with respect to other `claim_seat` calls on
/// the same store: the capacity check and the insert it decides on may not
/// interleave with another claim.
#[async_trait]
pub trait SeatLedger: Send + Sync + std::fmt::Debug {
    /// Number of stored registrations.
    async fn registered_count(&self) -> AppResult<u64>;

    /// Register `signup` if fewer than `total_seats` registrations exist,
    /// otherwise append it to the waitlist.
    async fn claim_seat(&self, signup: NewSignup, total_seats: u32) -> AppResult<SeatClaim>;

    /// All registrations, oldest first.
    async fn list_registrations(&self) -> AppResult<Vec<Registration>>;

    /// All waitlist entries in arrival order.
    async fn list_waitlist(&self) -> AppResult<Vec<WaitlistEntry>>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
