//! Remote task store abstraction
//!
//! Defines the domain types and the `TaskStore` trait that the pipeline works
//! against, plus the Todoist-backed implementation. The trait exists so the
//! pipeline can be driven by a mock store in tests.

pub mod todoist;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use todoist::{TodoistClient, TodoistConfig};

/// A task in the remote project. `section_id` is `None` for unsectioned tasks;
/// some backends also report an empty string, which counts as unsectioned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub section_id: Option<String>,
}

/// A named section within the project. Read-only to this tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub id: String,
    pub name: String,
}

/// Remote store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport, auth, or decoding failure while talking to the store.
    /// Fatal to the run when it happens during listing.
    #[error("remote store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected a single move (permission denied, unknown id,
    /// rate limit). Local to that move only.
    #[error("remote store rejected request: {status} - {message}")]
    Rejected { status: u16, message: String },
}

/// Query-and-mutate interface over the remote task store.
///
/// Each call is a single attempt; no retries at this layer. Empty listings
/// are valid results, not errors.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// List all tasks in the project, in the store's returned order.
    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, StoreError>;

    /// List all sections in the project.
    async fn list_sections(&self, project_id: &str) -> Result<Vec<Section>, StoreError>;

    /// Assign a task to a section. Success means the call returned without a
    /// rejection; the task is not re-read to confirm.
    async fn move_task(&self, task_id: &str, section_id: &str) -> Result<(), StoreError>;
}

impl Task {
    /// Whether this task has no section assigned.
    pub fn is_unsectioned(&self) -> bool {
        match &self.section_id {
            None => true,
            Some(id) => id.is_empty(),
        }
    }
}
