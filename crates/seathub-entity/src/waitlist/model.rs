//! Waitlist entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sign-up received after capacity was exhausted. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct WaitlistEntry {
    /// Store-assigned sequence number; orders the queue.
    pub id: i64,
    /// Attendee name.
    pub name: String,
    /// Attendee email.
    pub email: String,
    /// When the attendee joined the waitlist.
    pub created_at: DateTime<Utc>,
}
