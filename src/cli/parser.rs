//! CLI argument parsing with clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// EV charging station backend
#[derive(Parser, Debug)]
#[command(name = "evcharge")]
#[command(about = "Backend API for EV charging station discovery, booking and reviews")]
#[command(long_about = "
evcharge serves the REST API behind the EV charging web client: signup and
login, vehicles, the station catalogue, slot bookings, reviews and a payment
acknowledgement stub. It also manages the PostgreSQL schema.

EXAMPLES:
    # Start the server with the layered configuration in ./config
    evcharge serve

    # Listen on every interface
    evcharge serve --host 0.0.0.0 --port 8080

    # Load one explicit configuration file
    evcharge --config /etc/evcharge/production.toml serve

    # Check configuration without starting the server
    evcharge serve --dry-run

    # Apply, preview or roll back migrations
    evcharge migrate
    evcharge migrate --dry-run
    evcharge migrate --rollback 1
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load a single TOML file instead of the layered `config/` directory.
    ///
    /// The file must exist and be readable.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Environment overlay to load (`config/{env}.toml`).
    ///
    /// Overrides EVCHARGE_APP_ENV.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Log at debug level. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Log errors only. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Examples:
    ///   evcharge serve                            # Start with defaults
    ///   evcharge serve --host 0.0.0.0 --port 80  # Bind to all interfaces on port 80
    ///   evcharge serve --dry-run                  # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Default: 127.0.0.1
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on, 1-65535
        ///
        /// Default: 5000
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override. Wins over --verbose and --quiet.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Database migration operations
    ///
    /// Examples:
    ///   evcharge migrate                    # Apply all pending migrations
    ///   evcharge migrate --dry-run          # Show pending migrations without applying
    ///   evcharge migrate --rollback 2       # Roll back the last 2 migrations
    Migrate {
        /// Show pending migrations without applying
        #[arg(long, conflicts_with = "rollback")]
        dry_run: bool,

        /// Number of migrations to roll back, 1-100
        #[arg(long, value_name = "STEPS", conflicts_with = "dry_run", value_parser = super::validation::validate_rollback_steps)]
        rollback: Option<u32>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
