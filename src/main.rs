use clap::Parser;

use evcharge::cli::{execute_command, init_logger_from_settings, load_and_merge_config, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match load_and_merge_config(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logger_from_settings(&settings) {
        eprintln!("Logger initialization error: {:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = execute_command(&cli, settings).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
