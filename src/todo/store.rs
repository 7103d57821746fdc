//! Todo item type and the in-memory store behind the todo endpoints
//!
//! The store is an explicit capability injected into handlers rather than
//! a module-level singleton, so a persistent implementation can replace it
//! without touching handler logic.

use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique, monotonically assigned identifier
    pub id: u64,
    /// Trimmed, non-empty title
    pub title: String,
    /// Completion flag, `false` for newly created items
    pub completed: bool,
}

/// Shared application state for the todo slice
///
/// Implementations must be safe to call from concurrent request handlers.
pub trait TodoStore: Send + Sync {
    /// Returns all items in insertion order.
    fn list(&self) -> Vec<TodoItem>;

    /// Appends a new item with the next id and `completed = false`.
    ///
    /// The title is stored as given; callers are expected to have
    /// validated and trimmed it already.
    fn append(&self, title: &str) -> TodoItem;

    /// Returns the id the next appended item would receive:
    /// `max(existing ids) + 1`, or 1 when the list is empty.
    fn next_id(&self) -> u64;
}

/// In-memory [`TodoStore`] guarded by a `RwLock`
///
/// `append` computes the next id and pushes under a single write lock, so
/// concurrent creates cannot observe or assign duplicate ids.
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    items: RwLock<Vec<TodoItem>>,
}

impl InMemoryTodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given items.
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Creates a store pre-populated with the demo seed data.
    pub fn seeded() -> Self {
        Self::with_items(vec![
            TodoItem {
                id: 1,
                title: "Explore the demo endpoints".to_string(),
                completed: false,
            },
            TodoItem {
                id: 2,
                title: "Wire up the list view".to_string(),
                completed: true,
            },
            TodoItem {
                id: 3,
                title: "Add a form for new items".to_string(),
                completed: false,
            },
        ])
    }

    fn max_id(items: &[TodoItem]) -> u64 {
        items.iter().map(|item| item.id).max().unwrap_or(0)
    }
}

impl TodoStore for InMemoryTodoStore {
    fn list(&self) -> Vec<TodoItem> {
        self.items
            .read()
            .expect("todo store lock poisoned")
            .clone()
    }

    fn append(&self, title: &str) -> TodoItem {
        let mut items = self.items.write().expect("todo store lock poisoned");
        let item = TodoItem {
            id: Self::max_id(&items) + 1,
            title: title.to_string(),
            completed: false,
        };
        items.push(item.clone());
        item
    }

    fn next_id(&self) -> u64 {
        let items = self.items.read().expect("todo store lock poisoned");
        Self::max_id(&items) + 1
    }
}
