//! OpenAI-backed mapping classifier
//!
//! One chat completion per run. The request pins the answer shape with a
//! strict JSON schema via `response_format`, and the assistant content is
//! parsed strictly into [`AssignmentOutput`]; any deviation is a contract
//! violation that aborts the run.

use crate::candidates::Candidate;
use crate::oracle::schema::AssignmentOutput;
use crate::oracle::{MappingEntry, MappingOracle, OracleError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const INSTRUCTIONS: &str =
    "Assign each task to the best fitting section, based on task name and section name. \
     Only use task and section IDs from the provided lists. \
     Omit tasks you cannot confidently place.";

/// OpenAI classifier configuration
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// OpenAI implementation of the mapping oracle
pub struct OpenAiClassifier {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiClassifier {
    pub fn new(config: OpenAiConfig) -> Result<Self, OracleError> {
        if config.api_key.is_empty() {
            return Err(OracleError::NotConfigured(
                "OpenAI API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OracleError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Build the user prompt from the candidate lists (pure function).
    ///
    /// Only ids and names are disclosed to the model.
    fn build_prompt(task_candidates: &[Candidate], section_candidates: &[Candidate]) -> String {
        let tasks = task_candidates
            .iter()
            .map(|c| format!("{} [TASK_ID: {}]", c.name, c.id))
            .collect::<Vec<_>>()
            .join("\n");

        let sections = section_candidates
            .iter()
            .map(|c| format!("{} [SECTION_ID: {}]", c.name, c.id))
            .collect::<Vec<_>>()
            .join("\n");

        format!("List of tasks:\n{tasks}\n\nList of sections:\n{sections}")
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: INSTRUCTIONS,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.1,
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: "section_assignments",
                    strict: true,
                    schema: AssignmentOutput::json_schema(),
                },
            },
        }
    }

    /// Parse the assistant content under the strict output contract (pure
    /// function).
    fn parse_content(content: &str) -> Result<Vec<MappingEntry>, OracleError> {
        let output: AssignmentOutput = serde_json::from_str(content).map_err(|e| {
            OracleError::ContractViolation(format!("failed to parse assignments: {e}"))
        })?;
        Ok(output.assignments)
    }

    async fn request_completion(&self, prompt: &str) -> Result<ChatResponse, OracleError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| OracleError::Network(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAI API error - Status: {}, Response: {}", status, body);
            return Err(OracleError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| OracleError::ContractViolation(format!("invalid completion response: {e}")))
    }
}

#[async_trait]
impl MappingOracle for OpenAiClassifier {
    async fn propose_mapping(
        &self,
        task_candidates: &[Candidate],
        section_candidates: &[Candidate],
    ) -> Result<Vec<MappingEntry>, OracleError> {
        let prompt = Self::build_prompt(task_candidates, section_candidates);
        debug!("Classifier prompt:\n{}", prompt);

        let completion = self.request_completion(&prompt).await?;

        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            OracleError::ContractViolation("no choices in completion response".to_string())
        })?;

        let content = choice.message.content.ok_or_else(|| {
            OracleError::ContractViolation("no content in completion response".to_string())
        })?;

        let entries = Self::parse_content(&content)?;
        debug!("Classifier proposed {} assignments", entries.len());
        Ok(entries)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
