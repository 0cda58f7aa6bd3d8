//! Resolved workshop settings shared by the services.

use seathub_core::config::WorkshopConfig;
use seathub_entity::workshop::{PricingRules, SeatAvailability, WorkshopDetails};

/// Capacity, pricing rules, and descriptor resolved from configuration.
#[derive(Debug, Clone)]
pub struct WorkshopSettings {
    /// Fixed capacity.
    pub total_seats: u32,
    /// Tier pricing.
    pub pricing: PricingRules,
    /// Static descriptor.
    pub details: WorkshopDetails,
}

impl WorkshopSettings {
    /// Availability for a given registration count.
    pub fn availability(&self, registered: u64) -> SeatAvailability {
        SeatAvailability::from_count(self.total_seats, registered)
    }
}

impl From<&WorkshopConfig> for WorkshopSettings {
    fn from(config: &WorkshopConfig) -> Self {
        Self {
            total_seats: config.total_seats,
            pricing: PricingRules::new(&config.pricing),
            details: WorkshopDetails::from(&config.details),
        }
    }
}

impl Default for WorkshopSettings {
    fn default() -> Self {
        Self::from(&WorkshopConfig::default())
    }
}
