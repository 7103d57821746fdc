//! Scripted conversation provider
//!
//! Replays a fixed, ordered list of text fragments with a fixed delay
//! between chunks, standing in for a real LLM call. Playback is
//! single-shot: there is no resumption or retry, a failed stream must be
//! restarted from the beginning by the caller.

use crate::chat::{validate_message, ConversationProvider, FragmentStream};
use crate::config::ChatConfig;
use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use tokio::sync::mpsc;

/// Conversation provider that replays a fixed fragment sequence
#[derive(Debug, Clone)]
pub struct ScriptedProvider {
    fragments: Vec<String>,
    delay: Duration,
}

impl ScriptedProvider {
    /// Creates a provider with an explicit fragment list and inter-chunk
    /// delay. Tests use this with a zero delay to avoid wall-clock sleeps.
    pub fn new(fragments: Vec<String>, delay: Duration) -> Self {
        Self { fragments, delay }
    }

    /// Creates a provider from the chat section of the configuration.
    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(
            config.fragments.clone(),
            Duration::from_millis(config.delay_ms),
        )
    }
}

#[async_trait]
impl ConversationProvider for ScriptedProvider {
    async fn converse(&self, message: &str) -> Result<FragmentStream> {
        let message = validate_message(Some(message))?;
        tracing::debug!(
            fragment_count = self.fragments.len(),
            delay_ms = self.delay.as_millis() as u64,
            message = %message,
            "starting scripted playback"
        );

        let fragments = self.fragments.clone();
        let delay = self.delay;

        // Bounded channel: each chunk is pushed only after the delay
        // elapses, and a dropped receiver surfaces as a send error so the
        // producer stops without further side effects.
        let (tx, rx) = mpsc::channel::<Bytes>(1);
        tokio::spawn(async move {
            for fragment in fragments {
                tokio::time::sleep(delay).await;
                if tx.send(Bytes::from(fragment)).await.is_err() {
                    tracing::debug!("chat consumer cancelled the stream, stopping playback");
                    return;
                }
            }
            // Dropping the sender closes the stream after the last fragment.
        });

        Ok(Box::pin(futures::stream::unfold(rx, |mut rx| async move {
            let chunk = rx.recv().await?;
            Some((chunk, rx))
        })))
    }
}
