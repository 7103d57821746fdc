//! Notes slice: query types, the note source abstraction, and the
//! in-process `list_notes` entry point
//!
//! The source is the seam for the mocked external notes service. The
//! seeded implementation filters a fixed dataset; a real integration would
//! implement the same trait and be selected through [`create_source`].

pub mod seeded;

pub use seeded::SeededNoteSource;

use crate::config::NotesConfig;
use crate::error::{Result, TriadError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// A single note record
///
/// Field names serialize in camelCase to match the wire shape of the
/// service this mock stands in for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: Uuid,
    /// Non-empty title
    pub title: String,
    /// Optional body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last-update time, absent when never updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Ordered tag list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Input parameters for [`list_notes`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListNotesRequest {
    /// Cap on returned notes, applied after filtering. Must be at least 1
    /// when present; defaults to the configured value (10 out of the box).
    pub max_results: Option<u32>,
    /// Case-insensitive substring matched against title, content, and tags
    pub query: Option<String>,
}

impl ListNotesRequest {
    /// Validate the request.
    ///
    /// # Errors
    ///
    /// Returns [`TriadError::InvalidInput`] when `max_results` is present
    /// but not a positive integer.
    pub fn validate(&self) -> Result<()> {
        if let Some(0) = self.max_results {
            return Err(TriadError::InvalidInput(
                "maxResults must be a positive integer.".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Result of [`list_notes`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesResponse {
    /// Matching notes, truncated to the result cap, in dataset order
    pub notes: Vec<Note>,
    /// Count of matching notes before the cap was applied
    pub total_count: usize,
}

/// Capability interface for the notes backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteSource: Send + Sync {
    /// Fetch notes matching an already-validated request.
    async fn fetch_notes(&self, request: &ListNotesRequest) -> Result<ListNotesResponse>;
}

#[cfg(test)]
impl std::fmt::Debug for dyn NoteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn NoteSource")
    }
}

/// List notes from a source
///
/// Validates the request, then delegates to the source. This is the
/// in-process entry point shared by the HTTP handler and the CLI
/// subcommand.
///
/// # Errors
///
/// Returns [`TriadError::InvalidInput`] on a non-positive `max_results`,
/// or whatever error the source surfaces.
pub async fn list_notes(
    source: &dyn NoteSource,
    request: ListNotesRequest,
) -> Result<ListNotesResponse> {
    request.validate()?;
    source.fetch_notes(&request).await
}

/// Create a note source instance based on configuration
///
/// # Errors
///
/// Returns [`TriadError::NoteSource`] if the configured source type is
/// unknown, or if seed construction fails.
pub fn create_source(config: &NotesConfig) -> Result<Arc<dyn NoteSource>> {
    match config.source_type.as_str() {
        "seeded" => Ok(Arc::new(SeededNoteSource::from_config(config)?)),
        other => Err(TriadError::NoteSource(format!("unknown source type: {}", other)).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_missing_max_results() {
        let request = ListNotesRequest::default();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_positive_max_results() {
        let request = ListNotesRequest {
            max_results: Some(1),
            query: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_max_results() {
        let request = ListNotesRequest {
            max_results: Some(0),
            query: None,
        };
        assert!(request.validate().is_err());
    }

    #[tokio::test]
    async fn test_list_notes_rejects_invalid_request_before_fetch() {
        // The source must not be consulted when validation fails.
        let mut source = MockNoteSource::new();
        source.expect_fetch_notes().times(0);

        let request = ListNotesRequest {
            max_results: Some(0),
            query: None,
        };
        assert!(list_notes(&source, request).await.is_err());
    }

    #[test]
    fn test_create_source_seeded() {
        let config = NotesConfig::default();
        assert!(create_source(&config).is_ok());
    }

    #[test]
    fn test_create_source_unknown_type() {
        let config = NotesConfig {
            source_type: "notion".to_string(),
            ..NotesConfig::default()
        };
        let err = create_source(&config).unwrap_err().to_string();
        assert!(err.contains("unknown source type"));
    }

    #[test]
    fn test_note_serializes_camel_case() {
        let note = Note {
            id: Uuid::nil(),
            title: "t".to_string(),
            content: None,
            created_at: Utc::now(),
            updated_at: None,
            tags: None,
        };
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_none());
        assert!(json.get("content").is_none());
    }
}
