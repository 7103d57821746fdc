//! Error types for Triad
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Triad operations
///
/// This enum encompasses all possible errors that can occur during
/// request handling, configuration loading, and provider interactions.
#[derive(Error, Debug)]
pub enum TriadError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or missing required input (surfaced to callers as 400)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Provider-related errors (unknown provider type, playback failures)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Note source errors (unknown source type, seed construction failures)
    #[error("Note source error: {0}")]
    NoteSource(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Triad operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
