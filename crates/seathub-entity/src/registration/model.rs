//! Registration entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seathub_core::types::RegistrationId;

/// A confirmed seat. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Registration {
    /// Confirmation token returned to the attendee.
    #[sqlx(rename = "registration_id")]
    pub id: RegistrationId,
    /// Attendee name.
    pub name: String,
    /// Attendee email.
    pub email: String,
    /// When the seat was claimed.
    pub created_at: DateTime<Utc>,
}

impl Registration {
    /// Build a registration for `signup` with a freshly generated id.
    pub fn from_signup(signup: &NewSignup) -> Self {
        Self {
            id: RegistrationId::new(),
            name: signup.name.clone(),
            email: signup.email.clone(),
            created_at: Utc::now(),
        }
    }
}

/// A validated sign-up request, not yet placed as a seat or waitlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSignup {
    /// Attendee name. Never empty.
    pub name: String,
    /// Attendee email. Never empty.
    pub email: String,
}

impl NewSignup {
    /// Create a sign-up, returning `None` when either field is empty.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let email = email.into();
        if name.is_empty() || email.is_empty() {
            return None;
        }
        Some(Self { name, email })
    }
}
