//! Workshop info: descriptor, seats remaining, and current price.

use std::sync::Arc;

use serde::Serialize;

use seathub_core::result::AppResult;
use seathub_database::ledger::SeatLedger;
use seathub_entity::workshop::{PriceQuote, SeatAvailability, WorkshopDetails};

use super::settings::WorkshopSettings;

/// Current view of the workshop.
#[derive(Debug, Clone, Serialize)]
pub struct WorkshopInfo {
    /// Static descriptor.
    pub workshop: WorkshopDetails,
    /// Seats left right now.
    pub availability: SeatAvailability,
    /// Price tier for `availability`.
    pub quote: PriceQuote,
}

/// Read-only workshop queries.
#[derive(Debug, Clone)]
pub struct WorkshopService {
    ledger: Arc<dyn SeatLedger>,
    settings: Arc<WorkshopSettings>,
}

impl WorkshopService {
    /// Creates a new workshop service.
    pub fn new(ledger: Arc<dyn SeatLedger>, settings: Arc<WorkshopSettings>) -> Self {
        Self { ledger, settings }
    }

    /// Descriptor plus seats remaining and the price tier they imply.
    pub async fn get_info(&self) -> AppResult<WorkshopInfo> {
        let registered = self.ledger.registered_count().await?;
        let availability = self.settings.availability(registered);

        Ok(WorkshopInfo {
            workshop: self.settings.details.clone(),
            availability,
            quote: self.settings.pricing.quote(availability.seats_remaining),
        })
    }
}

#[cfg(test)]
mod tests {
    use seathub_database::ledger::MemorySeatLedger;
    use seathub_entity::registration::NewSignup;
    use seathub_entity::workshop::PriceTier;

    use super::*;

    async fn service_with(registered: usize) -> WorkshopService {
        let ledger = MemorySeatLedger::new();
        for n in 0..registered {
            let signup = NewSignup::new(format!("A{n}"), format!("a{n}@example.com"))
                .expect("valid signup");
            ledger.claim_seat(signup, 20).await.expect("claim");
        }
        WorkshopService::new(Arc::new(ledger), Arc::new(WorkshopSettings::default()))
    }

    #[tokio::test]
    async fn test_empty_workshop_is_early_bird() {
        let info = service_with(0).await.get_info().await.expect("info");
        assert_eq!(info.availability.seats_remaining, 20);
        assert_eq!(info.availability.total_seats, 20);
        assert_eq!(info.quote.tier, PriceTier::EarlyBird);
        assert_eq!(info.workshop.name, "Digiskill Academy");
    }

    #[tokio::test]
    async fn test_price_follows_count() {
        let info = service_with(5).await.get_info().await.expect("info");
        assert_eq!(info.availability.seats_remaining, 15);
        assert_eq!(info.quote.price, 2499);

        let info = service_with(15).await.get_info().await.expect("info");
        assert_eq!(info.availability.seats_remaining, 5);
        assert_eq!(info.quote.price, 4499);

        let info = service_with(20).await.get_info().await.expect("info");
        assert_eq!(info.availability.seats_remaining, 0);
        assert_eq!(info.quote.tier, PriceTier::SoldOut);
        assert_eq!(info.quote.price, 0);
    }
}
