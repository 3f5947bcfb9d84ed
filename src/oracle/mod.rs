//! Mapping oracle abstraction
//!
//! The oracle is a single-shot text classifier: given the candidate task and
//! section lists it proposes (task, section) assignments. The trait keeps the
//! pipeline independent of the model backend and lets tests script answers.

pub mod openai;
pub mod schema;

use crate::candidates::Candidate;
use async_trait::async_trait;
use thiserror::Error;

pub use openai::{OpenAiClassifier, OpenAiConfig};
pub use schema::{AssignmentOutput, MappingEntry};

/// Oracle errors
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle not configured: {0}")]
    NotConfigured(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("oracle API error: {status} - {message}")]
    Api { status: u16, message: String },
    /// The response did not satisfy the output contract. Never partially
    /// accepted; the whole call fails.
    #[error("oracle response violated output contract: {0}")]
    ContractViolation(String),
}

/// Single-shot mapping classifier.
///
/// The call is idempotent in intent but not guaranteed deterministic across
/// runs; callers must only rely on the output satisfying the schema. Omitting
/// tasks is legitimate, inventing ids is not (enforced by the validator).
#[async_trait]
pub trait MappingOracle: Send + Sync {
    async fn propose_mapping(
        &self,
        task_candidates: &[Candidate],
        section_candidates: &[Candidate],
    ) -> Result<Vec<MappingEntry>, OracleError>;
}
