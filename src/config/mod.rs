use std::path::PathBuf;

use dotenvy::dotenv;
use serde::Deserialize;

use crate::error::Result;

fn default_database_url() -> String {
    "sqlite://vet_clinic.db".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("vet_clinic.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration for the application
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// SQLite connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// File that receives tracing output
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Variables from a `.env` file are loaded first if it exists. Unset
    /// variables fall back to their defaults.
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;

        Ok(config)
    }

    /// Build configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(mut self, database_url: Option<String>, log_file: Option<PathBuf>) -> Self {
        if let Some(url) = database_url {
            self.database_url = url;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    Config::load()
}
