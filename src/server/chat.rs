//! Chat endpoint handler
//!
//! Streams the provider's fragment sequence back to the client as a
//! chunked `text/plain` body. The producer runs in its own task; when the
//! client disconnects the body stream is dropped, the producer's channel
//! closes, and playback stops at the next chunk boundary.

use crate::chat::validate_message;
use crate::server::{ApiError, AppState};
use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use futures::StreamExt;
use metrics::increment_counter;
use serde::Deserialize;
use std::convert::Infallible;

/// Body of `POST /chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message; required and non-empty after trimming
    pub message: Option<String>,
}

/// POST /chat - stream the simulated reply
///
/// Responds 200 with a chunked UTF-8 text body on success, 400 when the
/// message is missing/empty or the body is malformed JSON, and 500 on
/// unexpected internal failure.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let message = validate_message(request.message.as_deref())?;

    let stream = state.chat.converse(&message).await?;
    increment_counter!("triad_chat_requests_total");
    tracing::info!(message = %message, "streaming chat reply");

    let body = Body::from_stream(stream.map(Ok::<_, Infallible>));
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(body)
        .map_err(|e| ApiError::Internal(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ConversationProvider, MockConversationProvider, ScriptedProvider};
    use crate::notes::SeededNoteSource;
    use crate::todo::InMemoryTodoStore;
    use std::sync::Arc;
    use std::time::Duration;

    fn state_with(provider: Arc<dyn ConversationProvider>) -> AppState {
        AppState {
            todos: Arc::new(InMemoryTodoStore::new()),
            chat: provider,
            notes: Arc::new(SeededNoteSource::new(Vec::new(), Duration::ZERO, 10)),
        }
    }

    #[tokio::test]
    async fn test_chat_sets_plain_text_content_type() {
        let provider = Arc::new(ScriptedProvider::new(
            vec!["hi".to_string()],
            Duration::ZERO,
        ));
        let body = ChatRequest {
            message: Some("hello".to_string()),
        };
        let response = chat(State(state_with(provider)), Ok(Json(body)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_message_before_streaming() {
        // The provider must not be consulted when validation fails.
        let mut provider = MockConversationProvider::new();
        provider.expect_converse().times(0);

        let body = ChatRequest {
            message: Some("   ".to_string()),
        };
        let result = chat(State(state_with(Arc::new(provider))), Ok(Json(body))).await;
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_as_internal() {
        let mut provider = MockConversationProvider::new();
        provider
            .expect_converse()
            .returning(|_| Err(anyhow::anyhow!("playback backend down")));

        let body = ChatRequest {
            message: Some("hello".to_string()),
        };
        let result = chat(State(state_with(Arc::new(provider))), Ok(Json(body))).await;
        assert!(matches!(result, Err(ApiError::Internal(_))));
    }
}
