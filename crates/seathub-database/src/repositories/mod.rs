//! Row-level repositories for registrations and the waitlist.
//!
//! Each repository exposes pool-backed methods for plain reads and
//! `*_with` associated functions that accept any executor, so the seat
//! ledger can run them inside its transaction.

pub mod registration;
pub mod waitlist;

/// Public message for failed reads.
pub const QUERY_FAILED: &str = "Database error";

pub use registration::RegistrationRepository;
pub use waitlist::WaitlistRepository;
