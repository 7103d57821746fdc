//! Seeded note source
//!
//! Holds a fixed, read-only dataset in place of a real notes integration
//! and answers queries with an artificial latency to model the network
//! round-trip. No actual I/O is performed.

use crate::config::NotesConfig;
use crate::error::Result;
use crate::notes::{ListNotesRequest, ListNotesResponse, Note, NoteSource};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::uuid;

/// Note source backed by a fixed in-memory dataset
#[derive(Debug, Clone)]
pub struct SeededNoteSource {
    notes: Vec<Note>,
    latency: Duration,
    default_max_results: u32,
}

impl SeededNoteSource {
    /// Creates a source over an explicit dataset. Tests use this with a
    /// zero latency to avoid wall-clock sleeps.
    pub fn new(notes: Vec<Note>, latency: Duration, default_max_results: u32) -> Self {
        Self {
            notes,
            latency,
            default_max_results,
        }
    }

    /// Creates a source over the standard seed dataset, configured with
    /// the simulated latency and default result cap from the notes section
    /// of the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a seed timestamp fails to parse.
    pub fn from_config(config: &NotesConfig) -> Result<Self> {
        Ok(Self::new(
            seed_notes()?,
            Duration::from_millis(config.latency_ms),
            config.default_max_results,
        ))
    }

    fn matches(note: &Note, needle: &str) -> bool {
        if note.title.to_lowercase().contains(needle) {
            return true;
        }
        if let Some(content) = &note.content {
            if content.to_lowercase().contains(needle) {
                return true;
            }
        }
        if let Some(tags) = &note.tags {
            if tags.iter().any(|tag| tag.to_lowercase().contains(needle)) {
                return true;
            }
        }
        false
    }
}

#[async_trait]
impl NoteSource for SeededNoteSource {
    async fn fetch_notes(&self, request: &ListNotesRequest) -> Result<ListNotesResponse> {
        // Simulated network round-trip; there is no real remote call.
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let filtered: Vec<&Note> = match request.query.as_deref() {
            Some(query) if !query.is_empty() => {
                let needle = query.to_lowercase();
                self.notes
                    .iter()
                    .filter(|note| Self::matches(note, &needle))
                    .collect()
            }
            _ => self.notes.iter().collect(),
        };

        let total_count = filtered.len();
        let max_results = request.max_results.unwrap_or(self.default_max_results) as usize;
        let notes: Vec<Note> = filtered.into_iter().take(max_results).cloned().collect();

        tracing::debug!(
            total_count,
            returned = notes.len(),
            query = request.query.as_deref().unwrap_or(""),
            "answered notes query from seed data"
        );

        Ok(ListNotesResponse { notes, total_count })
    }
}

fn seed_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}

/// The fixed demo dataset; never mutated at runtime.
fn seed_notes() -> Result<Vec<Note>> {
    Ok(vec![
        Note {
            id: uuid!("a1b2c3d4-e5f6-7890-1234-567890abcdef"),
            title: "Meeting Notes for Project X".to_string(),
            content: Some("Discussed Q3 strategy and action items.".to_string()),
            created_at: seed_timestamp("2023-01-15T10:00:00Z")?,
            updated_at: None,
            tags: Some(vec!["meeting".to_string(), "project-x".to_string()]),
        },
        Note {
            id: uuid!("b2c3d4e5-f6a7-8901-2345-67890abcdef1"),
            title: "Brainstorming Session: New Feature Ideas".to_string(),
            content: Some("Came up with several innovative concepts for v2.".to_string()),
            created_at: seed_timestamp("2023-02-01T14:30:00Z")?,
            updated_at: Some(seed_timestamp("2023-02-01T15:00:00Z")?),
            tags: Some(vec!["brainstorm".to_string(), "features".to_string()]),
        },
        Note {
            id: uuid!("c3d4e5f6-a7b8-9012-3456-7890abcdef23"),
            title: "Onboarding Checklist - New Hire".to_string(),
            content: Some(
                "Remember to set up their dev environment and introduce them to the team."
                    .to_string(),
            ),
            created_at: seed_timestamp("2023-03-10T09:00:00Z")?,
            updated_at: None,
            tags: Some(vec!["onboarding".to_string(), "hr".to_string()]),
        },
        Note {
            id: uuid!("d4e5f6a7-b8c9-0123-4567-890abcdef345"),
            title: "Weekly Sync Up".to_string(),
            content: Some("Reviewed progress and resolved blockers. Next steps defined.".to_string()),
            created_at: seed_timestamp("2023-04-05T11:00:00Z")?,
            updated_at: None,
            tags: Some(vec!["sync".to_string(), "status".to_string()]),
        },
    ])
}
