//! Error types for the outer surfaces of the crate.
//!
//! The physics step itself never fails; these cover configuration loading,
//! handle lookups and name parsing.

use std::path::PathBuf;

use thiserror::Error;

use crate::world::BodyHandle;

/// Errors produced by configuration, lookups and parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The handle does not name a body currently in the engine.
    #[error("no body with handle {0}")]
    UnknownBody(BodyHandle),

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("unknown integration method: {0}")]
    UnknownIntegrationMethod(String),
}

impl Error {
    /// Create an invalid config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
