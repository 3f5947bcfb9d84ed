//! Structured output schema for the classifier
//!
//! The model must answer with this exact shape; anything else is a contract
//! violation and the run aborts before any move is issued. The schema is fed
//! to OpenAI's structured-output feature so conforming answers are enforced
//! server-side as well as parsed strictly client-side.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One proposed (task, section) assignment from the classifier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MappingEntry {
    /// Identifier of the task to move
    pub task_id: String,
    /// Identifier of the section to move it into
    pub section_id: String,
}

/// Full classifier answer: the list of proposed assignments.
///
/// The model may omit tasks it cannot confidently place; an empty list is a
/// valid answer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AssignmentOutput {
    pub assignments: Vec<MappingEntry>,
}

impl AssignmentOutput {
    /// Generate the JSON schema for OpenAI's `response_format`.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(AssignmentOutput);
        serde_json::to_value(schema).expect("Schema should be serializable")
    }
}
