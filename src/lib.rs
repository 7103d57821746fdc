//! Triad - demo web backend library
//!
//! This library provides the core functionality for the Triad demo
//! backend: three independent vertical slices (todos, chat, notes) served
//! over HTTP, plus the in-process notes query API.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `todo`: In-memory todo list with create/list operations
//! - `chat`: Conversation provider abstraction and scripted playback
//! - `notes`: Note source abstraction and the seeded query service
//! - `server`: Axum router, shared state, and HTTP error mapping
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use triad::{AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml")?;
//!     config.validate()?;
//!
//!     let state = AppState::from_config(&config)?;
//!     let router = triad::server::create_router(state);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod notes;
pub mod server;
pub mod todo;

// Re-export commonly used types
pub use chat::{ConversationProvider, ScriptedProvider};
pub use config::Config;
pub use error::{Result, TriadError};
pub use notes::{ListNotesRequest, ListNotesResponse, Note, NoteSource, SeededNoteSource};
pub use server::AppState;
pub use todo::{InMemoryTodoStore, TodoItem, TodoStore};
