//! Response DTOs. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use seathub_entity::workshop::WorkshopDetails;
use seathub_service::{RegistrationOutcome, WorkshopInfo};

/// Message returned with a successful registration.
pub const REGISTERED_MESSAGE: &str = "Registration successful!";

/// Message returned when the sign-up was waitlisted.
pub const WAITLISTED_MESSAGE: &str = "Workshop full. You’ve been added to the waitlist.";

/// Error body: `{ "error": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Public error message.
    pub error: String,
}

/// `GET /api/workshop` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopResponse {
    /// Static descriptor.
    pub workshop: WorkshopDetails,
    /// Seats left.
    pub seats_remaining: u32,
    /// Capacity.
    pub total_seats: u32,
    /// Current tier label.
    pub price_label: String,
    /// Current price.
    pub price: u32,
}

impl From<WorkshopInfo> for WorkshopResponse {
    fn from(info: WorkshopInfo) -> Self {
        Self {
            workshop: info.workshop,
            seats_remaining: info.availability.seats_remaining,
            total_seats: info.availability.total_seats,
            price_label: info.quote.label().to_string(),
            price: info.quote.price,
        }
    }
}

/// `POST /api/register` body, tagged by `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum RegisterResponse {
    /// A seat was claimed.
    Registered {
        /// Confirmation message.
        message: String,
        /// Confirmation token.
        registration_id: String,
        /// Seats left including this registration.
        seats_remaining: u32,
        /// Tier label at `seats_remaining`.
        price_label: String,
        /// Price at `seats_remaining`.
        price: u32,
    },
    /// The sign-up joined the waitlist.
    Waitlisted {
        /// Explanation for the attendee.
        message: String,
    },
}

impl From<RegistrationOutcome> for RegisterResponse {
    fn from(outcome: RegistrationOutcome) -> Self {
        match outcome {
            RegistrationOutcome::Registered {
                registration_id,
                seats_remaining,
                quote,
            } => Self::Registered {
                message: REGISTERED_MESSAGE.to_string(),
                registration_id: registration_id.to_string(),
                seats_remaining,
                price_label: quote.label().to_string(),
                price: quote.price,
            },
            RegistrationOutcome::Waitlisted => Self::Waitlisted {
                message: WAITLISTED_MESSAGE.to_string(),
            },
        }
    }
}

/// `GET /api/health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `"connected"` or `"unreachable"`.
    pub database: String,
}

#[cfg(test)]
mod tests {
    use seathub_core::types::RegistrationId;
    use seathub_entity::workshop::PricingRules;

    use super::*;

    #[test]
    fn test_registered_wire_shape() {
        let id = RegistrationId::new();
        let body = RegisterResponse::from(RegistrationOutcome::Registered {
            registration_id: id,
            seats_remaining: 5,
            quote: PricingRules::default().quote(5),
        });
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "status": "registered",
                "message": "Registration successful!",
                "registrationId": id.to_string(),
                "seatsRemaining": 5,
                "priceLabel": "Standard Price",
                "price": 4499,
            })
        );
    }

    #[test]
    fn test_waitlisted_wire_shape() {
        let json = serde_json::to_value(RegisterResponse::from(RegistrationOutcome::Waitlisted))
            .expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "status": "waitlisted",
                "message": WAITLISTED_MESSAGE,
            })
        );
    }
}
