//! Error types for forzactl

use std::path::PathBuf;

use forza_telemetry_listener::{ConfigError, ListenerError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Listener error: {0}")]
    Listener(#[from] ListenerError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ReadFile { .. } => 3,
            CliError::InvalidConfiguration(_) => 4,
            CliError::Listener(err) => listener_exit_code(err),
            CliError::JsonError(_) | CliError::YamlError(_) => 1,
        }
    }
}

/// Exit code for a listener failure, wrapped in [`CliError`] or not.
pub fn listener_exit_code(error: &ListenerError) -> u8 {
    match error {
        ListenerError::Config(_) => 4,
        ListenerError::Bind { .. } => 5,
        ListenerError::AlreadyRunning | ListenerError::Io(_) => 1,
    }
}
