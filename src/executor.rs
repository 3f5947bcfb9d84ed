//! Concurrent move execution
//!
//! Fans out one move call per validated entry and waits for all of them.
//! Each outcome is isolated: a rejected move never cancels or affects a
//! sibling. No backoff or rate limiting is applied here; the store may
//! reject calls under load and those rejections are simply collected.

use crate::oracle::MappingEntry;
use crate::store::{Section, StoreError, Task, TaskStore};
use futures::future::join_all;
use std::collections::HashMap;

/// Outcome of a single move, carrying display names so callers can report
/// without dereferencing ids again.
#[derive(Debug)]
pub struct MoveOutcome {
    pub task_id: String,
    pub task_name: String,
    pub section_id: String,
    pub section_name: String,
    pub result: Result<(), StoreError>,
}

impl MoveOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Apply all validated entries against the store concurrently.
///
/// Waits for every call regardless of individual failures and returns one
/// outcome per entry, in entry order. Names fall back to the raw id when the
/// id is not in the lookup lists.
pub async fn apply_moves(
    store: &dyn TaskStore,
    entries: &[MappingEntry],
    tasks: &[Task],
    sections: &[Section],
) -> Vec<MoveOutcome> {
    let task_names: HashMap<&str, &str> = tasks
        .iter()
        .map(|t| (t.id.as_str(), t.name.as_str()))
        .collect();
    let section_names: HashMap<&str, &str> = sections
        .iter()
        .map(|s| (s.id.as_str(), s.name.as_str()))
        .collect();

    let results = join_all(
        entries
            .iter()
            .map(|entry| store.move_task(&entry.task_id, &entry.section_id)),
    )
    .await;

    entries
        .iter()
        .zip(results)
        .map(|(entry, result)| MoveOutcome {
            task_id: entry.task_id.clone(),
            task_name: task_names
                .get(entry.task_id.as_str())
                .copied()
                .unwrap_or(&entry.task_id)
                .to_string(),
            section_id: entry.section_id.clone(),
            section_name: section_names
                .get(entry.section_id.as_str())
                .copied()
                .unwrap_or(&entry.section_id)
                .to_string(),
            result,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mocks::MockTaskStore;

    fn entry(task_id: &str, section_id: &str) -> MappingEntry {
        MappingEntry {
            task_id: task_id.to_string(),
            section_id: section_id.to_string(),
        }
    }

    fn task(id: &str, name: &str) -> Task {
        Task {
            id: id.to_string(),
            name: name.to_string(),
            section_id: None,
        }
    }

    fn section(id: &str, name: &str) -> Section {
        Section {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_all_moves_attempted() {
        let store = MockTaskStore::new(
            vec![task("t1", "Pay electricity bill"), task("t2", "Buy cat food")],
            vec![section("sA", "Bills"), section("sB", "Groceries")],
        );

        let entries = vec![entry("t1", "sA"), entry("t2", "sB")];
        let outcomes = apply_moves(&store, &entries, &store.tasks, &store.sections).await;

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(MoveOutcome::is_success));
        assert_eq!(store.recorded_moves().await.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_isolated_to_one_entry() {
        let store = MockTaskStore::new(
            vec![task("t1", "a"), task("t2", "b"), task("t3", "c")],
            vec![section("sA", "A")],
        )
        .with_rejected_task("t2", 403, "insufficient permissions");

        let entries = vec![entry("t1", "sA"), entry("t2", "sA"), entry("t3", "sA")];
        let outcomes = apply_moves(&store, &entries, &store.tasks, &store.sections).await;

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_success());
        assert!(!outcomes[1].is_success());
        assert!(outcomes[2].is_success());

        // The original rejection reason is preserved verbatim.
        match &outcomes[1].result {
            Err(StoreError::Rejected { status, message }) => {
                assert_eq!(*status, 403);
                assert_eq!(message, "insufficient permissions");
            }
            other => panic!("expected rejection, got {other:?}"),
        }

        // Siblings were still attempted.
        assert_eq!(store.recorded_moves().await.len(), 3);
    }

    #[tokio::test]
    async fn test_names_resolved_for_reporting() {
        let store = MockTaskStore::new(
            vec![task("t1", "Pay electricity bill")],
            vec![section("sA", "Bills")],
        );

        let outcomes =
            apply_moves(&store, &[entry("t1", "sA")], &store.tasks, &store.sections).await;

        assert_eq!(outcomes[0].task_name, "Pay electricity bill");
        assert_eq!(outcomes[0].section_name, "Bills");
    }

    #[tokio::test]
    async fn test_unknown_name_falls_back_to_id() {
        let store = MockTaskStore::new(vec![], vec![]);
        let outcomes = apply_moves(&store, &[entry("t1", "sA")], &[], &[]).await;

        assert_eq!(outcomes[0].task_name, "t1");
        assert_eq!(outcomes[0].section_name, "sA");
    }

    #[tokio::test]
    async fn test_no_entries_no_calls() {
        let store = MockTaskStore::new(vec![], vec![]);
        let outcomes = apply_moves(&store, &[], &[], &[]).await;

        assert!(outcomes.is_empty());
        assert!(store.recorded_moves().await.is_empty());
    }
}
