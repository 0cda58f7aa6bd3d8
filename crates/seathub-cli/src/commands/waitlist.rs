//! Waitlist listing commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use seathub_core::config::AppConfig;
use seathub_core::error::AppError;
use seathub_database::ledger::SeatLedger;

use crate::output::{self, OutputFormat};

/// Arguments for waitlist commands
#[derive(Debug, Args)]
pub struct WaitlistArgs {
    /// Waitlist subcommand
    #[command(subcommand)]
    pub command: WaitlistCommand,
}

/// Waitlist subcommands
#[derive(Debug, Subcommand)]
pub enum WaitlistCommand {
    /// List waitlisted sign-ups in queue order
    List,
}

#[derive(Debug, Serialize, Tabled)]
struct WaitlistRow {
    position: usize,
    name: String,
    email: String,
    created_at: String,
}

/// Execute waitlist commands
pub async fn execute(
    args: &WaitlistArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ledger = super::open_ledger(config).await?;

    match &args.command {
        WaitlistCommand::List => {
            let entries = ledger.list_waitlist().await;
            ledger.close().await;

            let rows: Vec<WaitlistRow> = entries?
                .into_iter()
                .enumerate()
                .map(|(index, entry)| WaitlistRow {
                    position: index + 1,
                    name: entry.name,
                    email: entry.email,
                    created_at: entry.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
