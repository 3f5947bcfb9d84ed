//! Run orchestration
//!
//! Sequences the whole pipeline for exactly one project: list, filter,
//! classify, validate, apply, report. Each run is stateless and independent;
//! nothing persists between invocations.

use crate::candidates::build_candidates;
use crate::error::PipelineResult;
use crate::executor::apply_moves;
use crate::mapping::validate_entries;
use crate::oracle::MappingOracle;
use crate::store::TaskStore;
use std::sync::Arc;
use tracing::{error, info};

/// Counts describing a completed run.
///
/// A run that reaches the end is `Completed` even if every individual move
/// failed; only listing, classification, or configuration failures abort it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tasks found without a section
    pub unsectioned: usize,
    /// Assignments proposed by the oracle
    pub proposed: usize,
    /// Proposals dropped by validation
    pub dropped: usize,
    /// Moves that succeeded
    pub moved: usize,
    /// Moves the store rejected
    pub failed: usize,
}

/// One-project pipeline over an injected store and oracle.
pub struct Pipeline {
    store: Arc<dyn TaskStore>,
    oracle: Arc<dyn MappingOracle>,
}

impl Pipeline {
    pub fn new(store: Arc<dyn TaskStore>, oracle: Arc<dyn MappingOracle>) -> Self {
        Self { store, oracle }
    }

    /// Run the full assignment pipeline against one project.
    ///
    /// Returns `Ok` with counts when the pipeline executed end to end
    /// (partial move failure included), `Err` when a precondition failed
    /// before any mutation.
    pub async fn run(&self, project_id: &str) -> PipelineResult<RunSummary> {
        info!("Starting task-section assignment for project {}", project_id);

        let tasks = self.store.list_tasks(project_id).await?;

        let unsectioned = tasks.iter().filter(|t| t.is_unsectioned()).count();
        if unsectioned == 0 {
            info!("All tasks already have sections assigned");
            return Ok(RunSummary::default());
        }
        info!("Found {} tasks without section", unsectioned);

        let sections = self.store.list_sections(project_id).await?;

        let (task_candidates, section_candidates) = build_candidates(&tasks, &sections);

        info!("Requesting classifier to map tasks to sections");
        let proposed = self
            .oracle
            .propose_mapping(&task_candidates, &section_candidates)
            .await?;

        let proposed_count = proposed.len();
        let validated = validate_entries(proposed, &task_candidates, &section_candidates);
        let dropped = proposed_count - validated.len();
        if dropped > 0 {
            info!("Dropped {} invalid proposals from classifier output", dropped);
        }

        info!("Applying {} validated moves", validated.len());
        let outcomes = apply_moves(self.store.as_ref(), &validated, &tasks, &sections).await;

        let mut moved = 0;
        let mut failed = 0;
        for outcome in &outcomes {
            match &outcome.result {
                Ok(()) => {
                    moved += 1;
                    info!(
                        "Moved task '{}' to section '{}'",
                        outcome.task_name, outcome.section_name
                    );
                }
                Err(reason) => {
                    failed += 1;
                    error!(
                        "Failed to move task '{}' to section '{}': {}",
                        outcome.task_name, outcome.section_name, reason
                    );
                }
            }
        }

        info!(
            "Assignment complete: {} moved, {} failed, {} left unsectioned",
            moved,
            failed,
            unsectioned - moved
        );

        Ok(RunSummary {
            unsectioned,
            proposed: proposed_count,
            dropped,
            moved,
            failed,
        })
    }
}
