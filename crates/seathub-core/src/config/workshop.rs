//! Workshop capacity, pricing, and descriptor configuration.

use serde::{Deserialize, Serialize};

/// Workshop section of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkshopConfig {
    /// Total number of seats before sign-ups overflow to the waitlist.
    #[serde(default = "default_total_seats")]
    pub total_seats: u32,
    /// Tier prices.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Static descriptor returned by `GET /api/workshop`.
    #[serde(default)]
    pub details: WorkshopDetailsConfig,
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        Self {
            total_seats: default_total_seats(),
            pricing: PricingConfig::default(),
            details: WorkshopDetailsConfig::default(),
        }
    }
}

/// Price tier configuration. Prices are whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Price while more than `early_bird_threshold` seats remain.
    #[serde(default = "default_early_bird")]
    pub early_bird: u32,
    /// Price while between one and `early_bird_threshold` seats remain.
    #[serde(default = "default_standard")]
    pub standard: u32,
    /// Seats-remaining value at or below which the standard price applies.
    #[serde(default = "default_early_bird_threshold")]
    pub early_bird_threshold: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            early_bird: default_early_bird(),
            standard: default_standard(),
            early_bird_threshold: default_early_bird_threshold(),
        }
    }
}

/// Descriptive workshop fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopDetailsConfig {
    /// Workshop name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Human-readable start date.
    #[serde(default = "default_start_date")]
    pub start_date: String,
    /// Length of the programme in weeks.
    #[serde(default = "default_duration_weeks")]
    pub duration_weeks: u32,
    /// Days of the week sessions run on.
    #[serde(default = "default_session_days")]
    pub session_days: Vec<String>,
    /// Human-readable session time.
    #[serde(default = "default_session_time")]
    pub session_time: String,
    /// Delivery platform.
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Attendee requirements.
    #[serde(default = "default_requirements")]
    pub requirements: String,
}

impl Default for WorkshopDetailsConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            start_date: default_start_date(),
            duration_weeks: default_duration_weeks(),
            session_days: default_session_days(),
            session_time: default_session_time(),
            platform: default_platform(),
            requirements: default_requirements(),
        }
    }
}

fn default_total_seats() -> u32 {
    20
}

fn default_early_bird() -> u32 {
    2499
}

fn default_standard() -> u32 {
    4499
}

fn default_early_bird_threshold() -> u32 {
    10
}

fn default_name() -> String {
    "Digiskill Academy".to_string()
}

fn default_start_date() -> String {
    "Saturday, November 15th, 2025".to_string()
}

fn default_duration_weeks() -> u32 {
    4
}

fn default_session_days() -> Vec<String> {
    vec!["Saturday".to_string(), "Sunday".to_string()]
}

fn default_session_time() -> String {
    "7:00 PM - 8:30 PM (IST)".to_string()
}

fn default_platform() -> String {
    "Live Online Sessions".to_string()
}

fn default_requirements() -> String {
    "A computer with an internet connection. No prior marketing experience is needed.".to_string()
}
