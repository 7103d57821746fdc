//! Todo slice: in-memory list with create/list operations
//!
//! State lives for the process lifetime only and is reset on restart.
//! There is no delete operation and no server-side completion toggle.

pub mod store;

pub use store::{InMemoryTodoStore, TodoItem, TodoStore};

use crate::error::{Result, TriadError};

/// Validate and normalize a todo title.
///
/// Returns the trimmed title, or [`TriadError::InvalidInput`] when the
/// title is absent or empty/whitespace after trimming.
pub fn validate_title(raw: Option<&str>) -> Result<String> {
    let trimmed = raw.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Err(TriadError::InvalidInput(
            "Title is required and must be a non-empty string.".to_string(),
        )
        .into());
    }
    Ok(trimmed.to_string())
}
