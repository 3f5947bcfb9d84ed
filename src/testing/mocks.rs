//! Mock implementations for testing
//!
//! Provides mock `TaskStore` and `MappingOracle` implementations so the
//! pipeline can be exercised end to end without network access. Both record
//! their calls for assertions.

use crate::candidates::Candidate;
use crate::oracle::{MappingEntry, MappingOracle, OracleError};
use crate::store::{Section, StoreError, Task, TaskStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock task store with scripted listings and per-task move rejections.
pub struct MockTaskStore {
    pub tasks: Vec<Task>,
    pub sections: Vec<Section>,
    fail_listing: bool,
    rejections: HashMap<String, (u16, String)>,
    moves: Arc<Mutex<Vec<(String, String)>>>,
    list_calls: AtomicUsize,
}

impl MockTaskStore {
    pub fn new(tasks: Vec<Task>, sections: Vec<Section>) -> Self {
        Self {
            tasks,
            sections,
            fail_listing: false,
            rejections: HashMap::new(),
            moves: Arc::new(Mutex::new(Vec::new())),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Make every listing call fail with `StoreError::Unavailable`.
    pub fn with_failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Reject moves for one task id with the given status and message.
    pub fn with_rejected_task(mut self, task_id: &str, status: u16, message: &str) -> Self {
        self.rejections
            .insert(task_id.to_string(), (status, message.to_string()));
        self
    }

    /// All (task_id, section_id) pairs passed to `move_task`, in completion
    /// order.
    pub async fn recorded_moves(&self) -> Vec<(String, String)> {
        self.moves.lock().await.clone()
    }

    pub fn listing_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskStore for MockTaskStore {
    async fn list_tasks(&self, _project_id: &str) -> Result<Vec<Task>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(StoreError::Unavailable("mock listing failure".to_string()));
        }
        Ok(self.tasks.clone())
    }

    async fn list_sections(&self, _project_id: &str) -> Result<Vec<Section>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(StoreError::Unavailable("mock listing failure".to_string()));
        }
        Ok(self.sections.clone())
    }

    async fn move_task(&self, task_id: &str, section_id: &str) -> Result<(), StoreError> {
        self.moves
            .lock()
            .await
            .push((task_id.to_string(), section_id.to_string()));

        if let Some((status, message)) = self.rejections.get(task_id) {
            return Err(StoreError::Rejected {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(())
    }
}

/// Mock oracle with a scripted answer or a scripted contract violation.
pub struct MockOracle {
    entries: Vec<MappingEntry>,
    violate_contract: bool,
    calls: AtomicUsize,
    seen_candidates: Mutex<Vec<(Vec<Candidate>, Vec<Candidate>)>>,
}

impl MockOracle {
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        Self {
            entries,
            violate_contract: false,
            calls: AtomicUsize::new(0),
            seen_candidates: Mutex::new(Vec::new()),
        }
    }

    /// Make every call fail with `OracleError::ContractViolation`.
    pub fn with_contract_violation() -> Self {
        Self {
            entries: Vec::new(),
            violate_contract: true,
            calls: AtomicUsize::new(0),
            seen_candidates: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Candidate lists received on each call.
    pub async fn seen_candidates(&self) -> Vec<(Vec<Candidate>, Vec<Candidate>)> {
        self.seen_candidates.lock().await.clone()
    }
}

#[async_trait]
impl MappingOracle for MockOracle {
    async fn propose_mapping(
        &self,
        task_candidates: &[Candidate],
        section_candidates: &[Candidate],
    ) -> Result<Vec<MappingEntry>, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_candidates
            .lock()
            .await
            .push((task_candidates.to_vec(), section_candidates.to_vec()));

        if self.violate_contract {
            return Err(OracleError::ContractViolation(
                "mock response did not match schema".to_string(),
            ));
        }
        Ok(self.entries.clone())
    }
}
