//! Seat status command.

use serde::Serialize;

use seathub_core::config::AppConfig;
use seathub_core::error::AppError;
use seathub_database::ledger::SeatLedger;
use seathub_service::WorkshopSettings;

use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusView {
    workshop: String,
    total_seats: u32,
    registered: u64,
    waitlisted: usize,
    seats_remaining: u32,
    price_label: &'static str,
    price: u32,
}

/// Print total seats, registrations, seats left and the current tier.
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let settings = WorkshopSettings::from(&config.workshop);
    let ledger = super::open_ledger(config).await?;

    let counts = async {
        let registered = ledger.registered_count().await?;
        let waitlisted = ledger.list_waitlist().await?.len();
        Ok::<_, AppError>((registered, waitlisted))
    }
    .await;
    ledger.close().await;
    let (registered, waitlisted) = counts?;

    let availability = settings.availability(registered);
    let quote = settings.pricing.quote(availability.seats_remaining);
    let view = StatusView {
        workshop: settings.details.name.clone(),
        total_seats: availability.total_seats,
        registered,
        waitlisted,
        seats_remaining: availability.seats_remaining,
        price_label: quote.label(),
        price: quote.price,
    };

    match format {
        OutputFormat::Table => {
            println!("{}", view.workshop);
            output::print_kv("Total seats", &view.total_seats.to_string());
            output::print_kv("Registered", &view.registered.to_string());
            output::print_kv("Waitlisted", &view.waitlisted.to_string());
            output::print_kv("Seats remaining", &view.seats_remaining.to_string());
            output::print_kv("Price", &format!("{} ({})", view.price, view.price_label));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&view)?;
            println!("{json}");
        }
    }

    Ok(())
}
