//! Database migration management commands.

use clap::{Args, Subcommand};

use seathub_core::config::{AppConfig, DatabaseBackend};
use seathub_core::error::AppError;
use seathub_database::DatabasePool;
use seathub_database::migration::run_migrations;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    if config.database.backend != DatabaseBackend::Postgres {
        return Err(AppError::configuration(format!(
            "Migrations require the postgres backend (configured: {})",
            config.database.backend
        )));
    }

    match &args.command {
        MigrateCommand::Run => {
            let pool = DatabasePool::connect(&config.database).await?.into_pool();
            println!("Running database migrations...");
            run_migrations(&pool).await?;
            pool.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
