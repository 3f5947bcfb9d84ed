//! Candidate projection for the classifier
//!
//! The oracle only ever sees (id, name) pairs. Tasks that already carry a
//! section must never reach it, so the filter here is the single place where
//! the working set is decided.

use crate::store::{Section, Task};
use serde::{Deserialize, Serialize};

/// Minimal (id, name) projection of a task or section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub name: String,
}

/// Project tasks and sections into candidate lists for the oracle.
///
/// Only unsectioned tasks are included; input order is preserved on both
/// sides so the oracle sees a deterministic-within-run list.
pub fn build_candidates(tasks: &[Task], sections: &[Section]) -> (Vec<Candidate>, Vec<Candidate>) {
    let task_candidates = tasks
        .iter()
        .filter(|t| t.is_unsectioned())
        .map(|t| Candidate {
            id: t.id.clone(),
            name: t.name.clone(),
        })
        .collect();

    let section_candidates = sections
        .iter()
        .map(|s| Candidate {
            id: s.id.clone(),
            name: s.name.clone(),
        })
        .collect();

    (task_candidates, section_candidates)
}
