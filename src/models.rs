//! Frontend Models
//!
//! Task records and the view filter, shaped like the persisted storage blob.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single reminder
///
/// Serializes as `{ "id", "text", "completed", "createdAt" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, immutable once assigned
    pub id: String,
    /// Trimmed, non-empty text
    pub text: String,
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds
    pub created_at: i64,
}

impl Task {
    pub fn new(id: String, text: String, created_at: i64) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// Create a fresh task with a random id, stamped with the current time
    pub fn create(text: String) -> Self {
        Self::new(
            Uuid::new_v4().to_string(),
            text,
            chrono::Utc::now().timestamp_millis(),
        )
    }
}

/// Which subset of the list is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Filter options in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Whether a task is visible under this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}
