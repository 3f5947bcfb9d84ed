//! Run-level error taxonomy
//!
//! Only failures that abort a run live here. Per-move rejections are not
//! errors at this level; they are collected into the run summary instead.

use crate::config::ConfigError;
use crate::oracle::OracleError;
use crate::store::StoreError;
use thiserror::Error;

/// A failure that aborts the run before any further mutation.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Listing tasks or sections failed; no moves were attempted.
    #[error("remote store error: {0}")]
    Store(#[from] StoreError),

    /// The classifier call failed or its response violated the contract;
    /// no moves were attempted.
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),
}

/// Result type for run-level operations
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_conversion() {
        let err: PipelineError = StoreError::Unavailable("connection refused".to_string()).into();
        assert!(matches!(err, PipelineError::Store(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_oracle_error_conversion() {
        let err: PipelineError =
            OracleError::ContractViolation("not a JSON object".to_string()).into();
        assert!(matches!(err, PipelineError::Oracle(_)));
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: PipelineError = ConfigError::MissingCredential("TODOIST_API_TOKEN").into();
        assert!(err.to_string().contains("TODOIST_API_TOKEN"));
    }
}
