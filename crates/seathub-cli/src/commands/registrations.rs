//! Registration listing commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use seathub_core::config::AppConfig;
use seathub_core::error::AppError;
use seathub_database::ledger::SeatLedger;

use crate::output::{self, OutputFormat};

/// Arguments for registration commands
#[derive(Debug, Args)]
pub struct RegistrationsArgs {
    /// Registration subcommand
    #[command(subcommand)]
    pub command: RegistrationsCommand,
}

/// Registration subcommands
#[derive(Debug, Subcommand)]
pub enum RegistrationsCommand {
    /// List confirmed registrations, oldest first
    List,
}

/// Registration display row for table output
#[derive(Debug, Serialize, Tabled)]
struct RegistrationRow {
    /// Registration ID
    id: String,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Created at
    created_at: String,
}

/// Execute registration commands
pub async fn execute(
    args: &RegistrationsArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ledger = super::open_ledger(config).await?;

    match &args.command {
        RegistrationsCommand::List => {
            let registrations = ledger.list_registrations().await;
            ledger.close().await;

            let rows: Vec<RegistrationRow> = registrations?
                .into_iter()
                .map(|r| RegistrationRow {
                    id: r.id.to_string(),
                    name: r.name,
                    email: r.email,
                    created_at: r.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
