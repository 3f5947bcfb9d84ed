//! Sectionize - LLM-assisted section assignment for Todoist
//!
//! Finds tasks without a section in one Todoist project, asks an OpenAI
//! classifier to match them against the project's existing sections by name,
//! validates the answer, and applies the moves concurrently.
//!
//! # Overview
//!
//! The pipeline has five stages, each behind its own module:
//! - [`store`]: the remote task store (Todoist) behind the `TaskStore` trait
//! - [`candidates`]: projection of tasks/sections to (id, name) pairs
//! - [`oracle`]: the classifier behind the `MappingOracle` trait
//! - [`mapping`]: referential validation of classifier output
//! - [`executor`]: concurrent, fault-isolated move application
//!
//! [`pipeline::Pipeline`] sequences them for exactly one project per run.
//!
//! # Quick Start
//!
//! ```rust
//! use sectionize::candidates::build_candidates;
//! use sectionize::store::{Section, Task};
//!
//! let tasks = vec![
//!     Task { id: "t1".into(), name: "Pay electricity bill".into(), section_id: None },
//!     Task { id: "t2".into(), name: "Drafted".into(), section_id: Some("s9".into()) },
//! ];
//! let sections = vec![Section { id: "sA".into(), name: "Bills".into() }];
//!
//! let (task_candidates, section_candidates) = build_candidates(&tasks, &sections);
//! assert_eq!(task_candidates.len(), 1); // only the unsectioned task
//! assert_eq!(section_candidates.len(), 1);
//! ```

pub mod candidates;
pub mod config;
pub mod error;
pub mod executor;
pub mod mapping;
pub mod oracle;
pub mod pipeline;
pub mod store;
pub mod testing;

pub use candidates::{build_candidates, Candidate};
pub use config::{ConfigError, RunConfig};
pub use error::{PipelineError, PipelineResult};
pub use executor::MoveOutcome;
pub use oracle::{MappingEntry, MappingOracle, OracleError};
pub use pipeline::{Pipeline, RunSummary};
pub use store::{Section, StoreError, Task, TaskStore};
