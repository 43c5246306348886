//! Logging initialization.
//!
//! The terminal belongs to the UI, so tracing output goes to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::error::{Error, Result};

/// Install the global tracing subscriber writing to `config.log_file`.
pub fn init(config: &Config) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
