//! Logger setup based on `tracing-subscriber`.
//!
//! Supports console output with color control and an optional file output
//! in full, compact or JSON format. Rotation is left to the host (logrotate,
//! journald, container runtime).

pub mod config;
pub mod error;

pub use config::*;
pub use error::LoggerError;

use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::sync::Mutex;

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber described by `config`.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config.validate()?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let layers = build_layers(&config)?;

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))
}

/// Output layers for `config`. The file layer goes first so console ANSI
/// settings never leak into span fields written to the file.
fn build_layers(config: &LoggerConfig) -> Result<Vec<BoxedLayer>, LoggerError> {
    let mut layers = Vec::with_capacity(2);

    if config.file.enabled {
        layers.push(file_layer(&config.file)?);
    }
    if config.console.enabled {
        layers.push(console_layer(&config.console));
    }

    Ok(layers)
}

fn console_layer(config: &ConsoleConfig) -> BoxedLayer {
    let use_ansi = config.colored && std::io::stdout().is_terminal();

    fmt::layer()
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true)
        .boxed()
}

fn file_layer(config: &FileConfig) -> Result<BoxedLayer, LoggerError> {
    let writer = Mutex::new(open_log_file(config)?);

    let layer = match config.format {
        LogFormat::Full => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .compact()
            .with_writer(writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_ansi(false)
            .json()
            .with_writer(writer)
            .boxed(),
    };

    Ok(layer)
}

fn open_log_file(config: &FileConfig) -> Result<File, LoggerError> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&config.path)?;

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_only(path: std::path::PathBuf, format: LogFormat, append: bool) -> LoggerConfig {
        LoggerConfig {
            console: ConsoleConfig::new(false, false),
            file: FileConfig {
                enabled: true,
                path,
                append,
                format,
            },
            level: "info".to_string(),
        }
    }

    #[test]
    fn test_file_layer_writes_json_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/evcharge.log");
        let config = file_only(path.clone(), LogFormat::Json, true);

        let subscriber = tracing_subscriber::registry().with(build_layers(&config).unwrap());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(station_id = 7, "station created");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        let line: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        assert_eq!(line["fields"]["message"], "station created");
        assert_eq!(line["fields"]["station_id"], 7);
    }

    #[test]
    fn test_truncate_mode_discards_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("evcharge.log");
        std::fs::write(&path, "stale line\n").unwrap();

        let config = file_only(path.clone(), LogFormat::Compact, false);
        let subscriber = tracing_subscriber::registry().with(build_layers(&config).unwrap());
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("fresh line");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale line"));
        assert!(contents.contains("fresh line"));
    }

    #[test]
    fn test_disabled_outputs_build_no_layers() {
        let mut config = LoggerConfig::default();
        config.console.enabled = false;
        assert!(build_layers(&config).unwrap().is_empty());
    }
}
