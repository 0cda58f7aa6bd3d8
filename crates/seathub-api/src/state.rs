//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use seathub_core::config::AppConfig;
use seathub_database::ledger::SeatLedger;
use seathub_service::{RegistrationService, WorkshopService, WorkshopSettings};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Seat ledger (PostgreSQL or in-memory)
    pub ledger: Arc<dyn SeatLedger>,
    /// Workshop availability and pricing
    pub workshop_service: Arc<WorkshopService>,
    /// Registration with waitlist overflow
    pub registration_service: Arc<RegistrationService>,
}

impl AppState {
    /// Wire services around a ledger.
    pub fn new(config: AppConfig, ledger: Arc<dyn SeatLedger>) -> Self {
        let settings = Arc::new(WorkshopSettings::from(&config.workshop));

        let workshop_service = Arc::new(WorkshopService::new(
            Arc::clone(&ledger),
            Arc::clone(&settings),
        ));
        let registration_service = Arc::new(RegistrationService::new(
            Arc::clone(&ledger),
            Arc::clone(&settings),
        ));

        Self {
            config: Arc::new(config),
            ledger,
            workshop_service,
            registration_service,
        }
    }
}
