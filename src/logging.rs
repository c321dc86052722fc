//! Tracing subscriber setup.

use std::{error::Error, fmt};

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    InvalidFilter { filter: String, reason: String },
    AlreadyInitialized(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilter { filter, reason } => {
                write!(f, "invalid log filter '{}': {}", filter, reason)
            }
            Self::AlreadyInitialized(reason) => {
                write!(f, "logging already initialized: {}", reason)
            }
        }
    }
}

impl Error for LoggingError {}

/// `RUST_LOG` when set and valid, otherwise the configured directives.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.filter).map_err(|err| LoggingError::InvalidFilter {
        filter: config.filter.clone(),
        reason: err.to_string(),
    })
}

/// Installs the global fmt subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| LoggingError::AlreadyInitialized(err.to_string()))?;

    tracing::info!(filter = %config.filter, "logging initialized");
    Ok(())
}
