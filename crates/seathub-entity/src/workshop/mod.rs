//! Workshop descriptor, seat availability, and price tiers.

pub mod availability;
pub mod details;
pub mod pricing;

pub use availability::SeatAvailability;
pub use details::WorkshopDetails;
pub use pricing::{PriceQuote, PriceTier, PricingRules};
