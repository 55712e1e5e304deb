//! Wayfarer CLI entrypoint.
//!
//! Supports two operation modes:
//! - Search: apply the configured filters to a listing source and print
//!   the matching listings (`--api-url` or `--listings-file`)
//! - Suggest: print destination suggestions for partial input
//!   (`--suggest <TEXT>`)

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wayfarer::{OperationMode, WayfarerConfig, WayfarerError};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), WayfarerError> {
    let config = load_config()?;
    config.validate()?;
    debug!(mode = ?config.operation_mode(), "configuration loaded");

    match config.operation_mode() {
        OperationMode::Search => cli::search::run(&config).await,
        OperationMode::Suggest => cli::suggest::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`WayfarerError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<WayfarerConfig, WayfarerError> {
    WayfarerConfig::load().map_err(|error| WayfarerError::Configuration {
        message: error.to_string(),
    })
}

/// Installs the stderr log subscriber, honouring `WAYFARER_LOG` then
/// `RUST_LOG`.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("WAYFARER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .is_err()
    {
        debug!("tracing subscriber already installed");
    }
}
