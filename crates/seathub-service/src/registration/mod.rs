//! Seat registration with waitlist overflow.

pub mod service;

pub use service::{RegistrationOutcome, RegistrationService};
