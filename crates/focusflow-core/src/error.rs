//! Core error types for focusflow-core.
//!
//! Configuration problems are the only errors this crate produces: the
//! scheduler itself never fails, and commands that make no sense in the
//! current state (for example `start_pause` with a zero focus duration)
//! are silent no-ops rather than faults.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focusflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration storage errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration storage errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load settings
    #[error("Failed to load settings from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save settings
    #[error("Failed to save settings to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse settings
    #[error("Failed to parse settings: {0}")]
    ParseFailed(String),
}

/// Configuration validation errors.
///
/// Raised when a plan is rejected at configuration time; the previously
/// accepted plan stays in effect.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Break trigger position must be strictly inside (0, 100).
    #[error("break {index}: trigger position {value}% must be strictly between 0 and 100")]
    TriggerOutOfRange { index: usize, value: f64 },

    /// Break duration must be at least one second.
    #[error("break {index}: duration must be greater than zero")]
    ZeroBreakDuration { index: usize },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
