//! Chat slice: conversation provider abstraction and implementations
//!
//! The provider is the seam for the simulated LLM call. The scripted
//! implementation replays a fixed fragment sequence; a real provider would
//! implement the same trait and be selected through [`create_provider`].

pub mod scripted;

pub use scripted::ScriptedProvider;

use crate::config::ChatConfig;
use crate::error::{Result, TriadError};
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use std::sync::Arc;

/// A finite, non-restartable sequence of UTF-8 byte chunks.
///
/// The producer closes the stream after the last chunk; if the consumer
/// drops the stream early, the producer stops scheduling further chunks.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Bytes> + Send>>;

/// Capability interface for the chat backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationProvider: Send + Sync {
    /// Produce the reply to `message` as a lazy stream of byte chunks.
    ///
    /// # Errors
    ///
    /// Returns [`TriadError::InvalidInput`] when `message` is empty or
    /// whitespace-only after trimming; no stream is constructed in that
    /// case.
    async fn converse(&self, message: &str) -> Result<FragmentStream>;
}

#[cfg(test)]
impl std::fmt::Debug for dyn ConversationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn ConversationProvider")
    }
}

/// Validate a chat message before any stream work starts.
///
/// Returns the trimmed message or [`TriadError::InvalidInput`].
pub fn validate_message(raw: Option<&str>) -> Result<String> {
    let trimmed = raw.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Err(TriadError::InvalidInput(
            "Message is required and must be a non-empty string.".to_string(),
        )
        .into());
    }
    Ok(trimmed.to_string())
}

/// Create a provider instance based on configuration
///
/// # Errors
///
/// Returns [`TriadError::Provider`] if the configured provider type is
/// unknown.
pub fn create_provider(config: &ChatConfig) -> Result<Arc<dyn ConversationProvider>> {
    match config.provider_type.as_str() {
        "scripted" => {
            if config.api_key.is_some() {
                // Reference-implementation parity: the key is accepted but
                // never used by the scripted playback.
                tracing::debug!("chat api_key is set but unused by the scripted provider");
            }
            Ok(Arc::new(ScriptedProvider::from_config(config)))
        }
        other => Err(TriadError::Provider(format!("unknown provider type: {}", other)).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_message_trims() {
        assert_eq!(validate_message(Some(" hi ")).unwrap(), "hi");
    }

    #[test]
    fn test_validate_message_rejects_missing() {
        assert!(validate_message(None).is_err());
    }

    #[test]
    fn test_validate_message_rejects_whitespace_only() {
        assert!(validate_message(Some("  \t ")).is_err());
    }

    #[test]
    fn test_create_provider_scripted() {
        let config = ChatConfig::default();
        assert!(create_provider(&config).is_ok());
    }

    #[test]
    fn test_create_provider_unknown_type() {
        let config = ChatConfig {
            provider_type: "gemini".to_string(),
            ..ChatConfig::default()
        };
        let err = create_provider(&config).unwrap_err().to_string();
        assert!(err.contains("unknown provider type"));
    }
}
