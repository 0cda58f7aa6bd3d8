//! Static workshop descriptor.

use serde::{Deserialize, Serialize};

use seathub_core::config::WorkshopDetailsConfig;

/// Public description of the workshop, serialized with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopDetails {
    /// Workshop name.
    pub name: String,
    /// Human-readable start date.
    pub start_date: String,
    /// Length of the programme in weeks.
    pub duration_weeks: u32,
    /// Days of the week sessions run on.
    pub session_days: Vec<String>,
    /// Human-readable session time.
    pub session_time: String,
    /// Delivery platform.
    pub platform: String,
    /// Attendee requirements.
    pub requirements: String,
}

impl From<&WorkshopDetailsConfig> for WorkshopDetails {
    fn from(config: &WorkshopDetailsConfig) -> Self {
        Self {
            name: config.name.clone(),
            start_date: config.start_date.clone(),
            duration_weeks: config.duration_weeks,
            session_days: config.session_days.clone(),
            session_time: config.session_time.clone(),
            platform: config.platform.clone(),
            requirements: config.requirements.clone(),
        }
    }
}
