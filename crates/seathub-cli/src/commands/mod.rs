//! CLI command definitions and dispatch.

pub mod migrate;
pub mod registrations;
pub mod status;
pub mod waitlist;

use clap::{Parser, Subcommand};

use seathub_core::config::AppConfig;
use seathub_core::error::AppError;
use seathub_database::ledger::SeatLedgerDispatch;

use crate::output::OutputFormat;

/// SeatHub workshop registration administration
#[derive(Debug, Parser)]
#[command(name = "seathub", version, about, long_about = None)]
pub struct Cli {
    /// Path to the base configuration file
    #[arg(short, long, env = "SEATHUB_CONFIG", default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay (`{env}.toml` next to the base file)
    #[arg(short, long, env = "SEATHUB_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Seat count and current price tier
    Status,
    /// Confirmed registrations
    Registrations(registrations::RegistrationsArgs),
    /// Waitlisted sign-ups
    Waitlist(waitlist::WaitlistArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.config, &self.env)?;

        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Status => status::execute(&config, self.format).await,
            Commands::Registrations(args) => {
                registrations::execute(args, &config, self.format).await
            }
            Commands::Waitlist(args) => waitlist::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: open the configured ledger without applying migrations.
pub async fn open_ledger(config: &AppConfig) -> Result<SeatLedgerDispatch, AppError> {
    let mut database = config.database.clone();
    database.migrate_on_startup = false;
    SeatLedgerDispatch::from_config(&database).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_after_subcommand() {
        let cli = Cli::try_parse_from(["seathub", "registrations", "list", "--format", "json"])
            .expect("parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Registrations(_)));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["seathub", "status"]).expect("parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_migrate_requires_subcommand() {
        assert!(Cli::try_parse_from(["seathub", "migrate"]).is_err());
    }
}
