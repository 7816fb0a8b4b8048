//! Dispatches a parsed command to its handler.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppResult;

/// Runs the selected subcommand; no subcommand means `serve`.
///
/// `serve` without `--dry-run` returns only after the server shuts down.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    warn_on_risky_args(cli);

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) => {
            ServeCommandHandler::new(settings).execute(*dry_run).await
        }
        None => ServeCommandHandler::new(settings).execute(false).await,
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings)
                .execute(*dry_run, *rollback)
                .await
        }
    }
}

fn warn_on_risky_args(cli: &Cli) {
    match &cli.command {
        Some(Commands::Serve {
            host: Some(host),
            port: Some(port),
            ..
        }) if *port < 1024 && host == "0.0.0.0" => {
            eprintln!(
                "Warning: Binding to 0.0.0.0 on port {} requires root privileges",
                port
            );
        }
        Some(Commands::Migrate {
            rollback: Some(steps),
            ..
        }) if *steps > 10 => {
            eprintln!(
                "Warning: Rolling back {} migrations drops every table they created",
                steps
            );
        }
        _ => {}
    }
}
