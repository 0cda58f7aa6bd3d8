//! Register an attendee or place them on the waitlist.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use seathub_core::error::AppError;
use seathub_core::result::AppResult;
use seathub_core::types::RegistrationId;
use seathub_database::ledger::{SeatClaim, SeatLedger};
use seathub_entity::registration::NewSignup;
use seathub_entity::workshop::PriceQuote;

use crate::workshop::WorkshopSettings;

/// Public message when name or email is missing.
pub const MISSING_FIELDS: &str = "Name and email are required";

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RegistrationOutcome {
    /// A seat was claimed.
    Registered {
        /// Confirmation token.
        registration_id: RegistrationId,
        /// Seats left including this registration.
        seats_remaining: u32,
        /// Price tier at `seats_remaining`.
        quote: PriceQuote,
    },
    /// Capacity was exhausted; the attendee joined the waitlist.
    Waitlisted,
}

/// Registration use case.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    ledger: Arc<dyn SeatLedger>,
    settings: Arc<WorkshopSettings>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(ledger: Arc<dyn SeatLedger>, settings: Arc<WorkshopSettings>) -> Self {
        Self { ledger, settings }
    }

    /// Register `name`/`email`, overflowing to the waitlist once full.
    ///
    /// Fails with a validation error when either field is empty, and with a
    /// database error when the ledger cannot complete the claim.
    pub async fn register(&self, name: &str, email: &str) -> AppResult<RegistrationOutcome> {
        let signup =
            NewSignup::new(name, email).ok_or_else(|| AppError::validation(MISSING_FIELDS))?;

        let claim = self
            .ledger
            .claim_seat(signup, self.settings.total_seats)
            .await?;

        let outcome = match claim {
            SeatClaim::Registered {
                registration,
                seats_remaining,
            } => RegistrationOutcome::Registered {
                registration_id: registration.id,
                seats_remaining,
                quote: self.settings.pricing.quote(seats_remaining),
            },
            SeatClaim::Waitlisted { entry } => {
                info!(waitlist_id = entry.id, "Registration overflowed to waitlist");
                RegistrationOutcome::Waitlisted
            }
        };

        Ok(outcome)
    }
}
