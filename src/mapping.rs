//! Mapping validation
//!
//! The oracle output crosses a trust boundary: the model may invent ids or
//! repeat a task. Validation cross-checks every entry against the candidate
//! sets and dedupes per task before anything is applied.

use crate::candidates::Candidate;
use crate::oracle::MappingEntry;
use std::collections::HashSet;
use tracing::warn;

/// Filter oracle entries down to the referentially valid set.
///
/// Entries referencing ids outside the candidate sets are dropped, not
/// escalated. Per task, the first entry wins; later duplicates are dropped.
/// Surviving entries keep the oracle's output order, so the result is
/// deterministic given fixed oracle output.
pub fn validate_entries(
    entries: Vec<MappingEntry>,
    task_candidates: &[Candidate],
    section_candidates: &[Candidate],
) -> Vec<MappingEntry> {
    let task_ids: HashSet<&str> = task_candidates.iter().map(|c| c.id.as_str()).collect();
    let section_ids: HashSet<&str> = section_candidates.iter().map(|c| c.id.as_str()).collect();

    let mut seen_tasks: HashSet<String> = HashSet::new();
    let mut validated = Vec::with_capacity(entries.len());

    for entry in entries {
        if !task_ids.contains(entry.task_id.as_str()) {
            warn!(
                "Dropping mapping for unknown task id '{}' (section '{}')",
                entry.task_id, entry.section_id
            );
            continue;
        }
        if !section_ids.contains(entry.section_id.as_str()) {
            warn!(
                "Dropping mapping to unknown section id '{}' (task '{}')",
                entry.section_id, entry.task_id
            );
            continue;
        }
        if !seen_tasks.insert(entry.task_id.clone()) {
            warn!("Dropping duplicate mapping for task id '{}'", entry.task_id);
            continue;
        }
        validated.push(entry);
    }

    validated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("name-{id}"),
        }
    }

    fn entry(task_id: &str, section_id: &str) -> MappingEntry {
        MappingEntry {
            task_id: task_id.to_string(),
            section_id: section_id.to_string(),
        }
    }

    #[test]
    fn test_fabricated_task_id_is_dropped() {
        let tasks = vec![candidate("t1"), candidate("t2")];
        let sections = vec![candidate("sA"), candidate("sB")];
        let entries = vec![entry("t1", "sA"), entry("t2", "sB"), entry("t9", "sA")];

        let validated = validate_entries(entries, &tasks, &sections);

        assert_eq!(validated, vec![entry("t1", "sA"), entry("t2", "sB")]);
    }

    #[test]
    fn test_fabricated_section_id_is_dropped() {
        let tasks = vec![candidate("t1")];
        let sections = vec![candidate("sA")];
        let entries = vec![entry("t1", "sZ")];

        let validated = validate_entries(entries, &tasks, &sections);
        assert!(validated.is_empty());
    }

    #[test]
    fn test_duplicate_task_first_seen_wins() {
        let tasks = vec![candidate("t1")];
        let sections = vec![candidate("sA"), candidate("sB")];
        let entries = vec![entry("t1", "sA"), entry("t1", "sB")];

        let validated = validate_entries(entries, &tasks, &sections);
        assert_eq!(validated, vec![entry("t1", "sA")]);
    }

    #[test]
    fn test_oracle_order_is_preserved() {
        let tasks = vec![candidate("t1"), candidate("t2"), candidate("t3")];
        let sections = vec![candidate("sA")];
        let entries = vec![entry("t3", "sA"), entry("t1", "sA"), entry("t2", "sA")];

        let validated = validate_entries(entries, &tasks, &sections);
        let ids: Vec<&str> = validated.iter().map(|e| e.task_id.as_str()).collect();
        assert_eq!(ids, vec!["t3", "t1", "t2"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let validated = validate_entries(vec![], &[candidate("t1")], &[candidate("sA")]);
        assert!(validated.is_empty());
    }

    #[test]
    fn test_sectioned_task_not_in_candidates_is_dropped() {
        // A task that already has a section is not a candidate, so the oracle
        // must not be able to smuggle it into a move.
        let tasks = vec![candidate("t1")];
        let sections = vec![candidate("sA")];
        let entries = vec![entry("t3", "sA"), entry("t1", "sA")];

        let validated = validate_entries(entries, &tasks, &sections);
        assert_eq!(validated, vec![entry("t1", "sA")]);
    }
}
