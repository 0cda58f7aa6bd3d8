//! Workshop availability and pricing.

pub mod service;
pub mod settings;

pub use service::{WorkshopInfo, WorkshopService};
pub use settings::WorkshopSettings;
