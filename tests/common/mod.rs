//! Shared helpers for integration tests
//!
//! Builds the application router over fast test state (tiny chat delay,
//! zero notes latency) so no test depends on wall-clock sleeps.

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use triad::chat::ScriptedProvider;
use triad::config::NotesConfig;
use triad::notes::SeededNoteSource;
use triad::server::{create_router, AppState};
use triad::todo::InMemoryTodoStore;

/// Fragments replayed by the test chat provider.
#[allow(dead_code)]
pub const TEST_FRAGMENTS: [&str; 3] = ["Hello ", "from ", "triad."];

/// Builds a router with seeded state and near-zero delays.
#[allow(dead_code)]
pub fn test_router() -> Router {
    let notes_config = NotesConfig {
        latency_ms: 0,
        ..NotesConfig::default()
    };
    let state = AppState {
        todos: Arc::new(InMemoryTodoStore::seeded()),
        chat: Arc::new(ScriptedProvider::new(
            TEST_FRAGMENTS.iter().map(|s| s.to_string()).collect(),
            Duration::from_millis(1),
        )),
        notes: Arc::new(SeededNoteSource::from_config(&notes_config).expect("seed dataset builds")),
    };
    create_router(state)
}

/// Builds a GET request for the given URI.
#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

/// Builds a POST request with a JSON body.
#[allow(dead_code)]
pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

/// Collects the full response body as bytes.
#[allow(dead_code)]
pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects")
        .to_vec()
}

/// Collects the full response body and parses it as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body is valid JSON")
}
