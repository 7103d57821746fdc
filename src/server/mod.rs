//! HTTP server for the three demo slices
//!
//! One router, three leaf endpoints. Handlers hold no state of their own;
//! everything they touch arrives through [`AppState`], so the in-memory
//! store and the mocked backends can be swapped without touching handler
//! logic.

pub mod chat;
pub mod error;
pub mod notes;
pub mod todos;

pub use error::ApiError;

use crate::chat::ConversationProvider;
use crate::config::Config;
use crate::error::Result;
use crate::notes::NoteSource;
use crate::todo::{InMemoryTodoStore, TodoStore};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Shared application state injected into every handler
#[derive(Clone)]
pub struct AppState {
    /// Todo list store, the only mutable collection in the process
    pub todos: Arc<dyn TodoStore>,
    /// Chat backend
    pub chat: Arc<dyn ConversationProvider>,
    /// Notes backend
    pub notes: Arc<dyn NoteSource>,
}

impl AppState {
    /// Builds the production state from configuration: a seeded in-memory
    /// todo store plus the configured chat provider and note source.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            todos: Arc::new(InMemoryTodoStore::seeded()),
            chat: crate::chat::create_provider(&config.chat)?,
            notes: crate::notes::create_source(&config.notes)?,
        })
    }
}

/// Build the application router over the given state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route("/chat", post(chat::chat))
        .route("/notes", get(notes::list_notes))
        .with_state(state)
}

/// Bind the configured address and serve requests until shutdown.
///
/// # Errors
///
/// Returns an error if state construction, binding, or serving fails.
pub async fn run(config: &Config) -> Result<()> {
    let state = AppState::from_config(config)?;
    let router = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
