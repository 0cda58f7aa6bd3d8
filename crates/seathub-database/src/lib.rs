//! # seathub-database
//!
//! PostgreSQL connection management, migrations, row repositories, and the
//! [`SeatLedger`](ledger::SeatLedger) implementations that own the atomic
//! register-or-waitlist decision.

pub mod connection;
pub mod ledger;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use ledger::{MemorySeatLedger, PgSeatLedger, SeatClaim, SeatLedger, SeatLedgerDispatch};
