//! # seathub-service
//!
//! Business logic service layer for SeatHub. Services follow constructor
//! injection: the seat ledger and workshop settings are provided at
//! construction time.

pub mod registration;
pub mod workshop;

pub use registration::{RegistrationOutcome, RegistrationService};
pub use workshop::{WorkshopInfo, WorkshopService, WorkshopSettings};
