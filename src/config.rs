//! Configuration management for Triad
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from a YAML file with environment-variable overrides.

use crate::error::{Result, TriadError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable carrying an API key for the chat provider.
///
/// Read into [`ChatConfig::api_key`] when the config file leaves it unset.
/// The scripted provider deliberately ignores it; it exists so that a real
/// provider can be dropped in without a config-format change.
pub const CHAT_API_KEY_ENV: &str = "TRIAD_CHAT_API_KEY";

/// Main configuration structure for Triad
///
/// Holds everything needed to run the server and the in-process notes
/// query: bind address, chat provider settings, and note source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat provider configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Note source configuration
    #[serde(default)]
    pub notes: NotesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            chat: ChatConfig::default(),
            notes: NotesConfig::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the HTTP listener to
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Chat provider configuration
///
/// Selects and parameterizes the conversation provider. Only the
/// `scripted` provider ships today; it replays `fragments` with
/// `delay_ms` between chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Type of provider to use
    #[serde(rename = "type", default = "default_chat_provider")]
    pub provider_type: String,

    /// Ordered text fragments replayed by the scripted provider
    #[serde(default = "default_fragments")]
    pub fragments: Vec<String>,

    /// Delay between consecutive fragments, in milliseconds
    #[serde(default = "default_chat_delay_ms")]
    pub delay_ms: u64,

    /// Optional API key, read from `TRIAD_CHAT_API_KEY` when unset here.
    /// Unused by the scripted provider.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_chat_provider() -> String {
    "scripted".to_string()
}

fn default_chat_delay_ms() -> u64 {
    100
}

fn default_fragments() -> Vec<String> {
    vec![
        "Hello there! ".to_string(),
        "I am a simulated assistant, ".to_string(),
        "running entirely in-process. ".to_string(),
        "How can I assist you today? ".to_string(),
        "Feel free to ask me anything.".to_string(),
    ]
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            provider_type: default_chat_provider(),
            fragments: default_fragments(),
            delay_ms: default_chat_delay_ms(),
            api_key: None,
        }
    }
}

/// Note source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Type of note source to use
    #[serde(rename = "type", default = "default_note_source")]
    pub source_type: String,

    /// Simulated round-trip latency before a query resolves, in milliseconds
    #[serde(default = "default_notes_latency_ms")]
    pub latency_ms: u64,

    /// Result cap applied when the caller does not supply one
    #[serde(default = "default_max_results")]
    pub default_max_results: u32,
}

fn default_note_source() -> String {
    "seeded".to_string()
}

fn default_notes_latency_ms() -> u64 {
    500
}

fn default_max_results() -> u32 {
    10
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            source_type: default_note_source(),
            latency_ms: default_notes_latency_ms(),
            default_max_results: default_max_results(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// A missing file is not an error: defaults are used so the demo runs
    /// with zero setup. After parsing, environment overrides are applied.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                TriadError::Config(format!("failed to read {}: {}", path.display(), e))
            })?;
            serde_yaml::from_str(&contents).map_err(|e| {
                TriadError::Config(format!("failed to parse {}: {}", path.display(), e))
            })?
        } else {
            tracing::debug!("config file {} not found, using defaults", path.display());
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment-variable overrides to the loaded configuration.
    fn apply_env_overrides(&mut self) {
        if self.chat.api_key.is_none() {
            if let Ok(key) = std::env::var(CHAT_API_KEY_ENV) {
                if !key.is_empty() {
                    self.chat.api_key = Some(key);
                }
            }
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`TriadError::Config`] when a field is out of range or names
    /// an unknown provider/source type.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TriadError::Config("server.port must be non-zero".to_string()).into());
        }
        if self.chat.provider_type != "scripted" {
            return Err(TriadError::Config(format!(
                "unknown chat provider type: {}",
                self.chat.provider_type
            ))
            .into());
        }
        if self.chat.fragments.is_empty() {
            return Err(
                TriadError::Config("chat.fragments must not be empty".to_string()).into(),
            );
        }
        if self.notes.source_type != "seeded" {
            return Err(TriadError::Config(format!(
                "unknown note source type: {}",
                self.notes.source_type
            ))
            .into());
        }
        if self.notes.default_max_results == 0 {
            return Err(TriadError::Config(
                "notes.default_max_results must be at least 1".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
