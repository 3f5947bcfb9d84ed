//! Todoist implementation of the task store
//!
//! Talks to the Todoist unified API with a bearer token. Listing endpoints
//! are cursor-paginated; this client follows `next_cursor` until exhaustion
//! so callers always see the complete project.

use crate::store::{Section, StoreError, Task, TaskStore};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Todoist client configuration
#[derive(Debug, Clone)]
pub struct TodoistConfig {
    pub api_token: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for TodoistConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            base_url: "https://api.todoist.com/api/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Todoist-backed `TaskStore`
pub struct TodoistClient {
    config: TodoistConfig,
    client: Client,
}

impl TodoistClient {
    pub fn new(config: TodoistConfig) -> Result<Self, StoreError> {
        if config.api_token.is_empty() {
            return Err(StoreError::Unavailable(
                "Todoist API token is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Fetch every page of a paginated listing endpoint.
    async fn list_paginated<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        project_id: &str,
    ) -> Result<Vec<T>, StoreError> {
        let mut items = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(format!("{}/{path}", self.config.base_url))
                .header("Authorization", format!("Bearer {}", self.config.api_token))
                .query(&[("project_id", project_id)]);

            if let Some(ref c) = cursor {
                request = request.query(&[("cursor", c.as_str())]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| StoreError::Unavailable(format!("HTTP request failed: {e}")))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                warn!("Todoist listing error - Status: {}, Response: {}", status, body);
                return Err(StoreError::Unavailable(format!(
                    "Todoist API error: {status} - {body}"
                )));
            }

            let page: Page<T> = response
                .json()
                .await
                .map_err(|e| StoreError::Unavailable(format!("invalid listing response: {e}")))?;

            items.extend(page.results);

            match page.next_cursor {
                Some(next) if !next.is_empty() => {
                    debug!("Following pagination cursor for {}", path);
                    cursor = Some(next);
                }
                _ => break,
            }
        }

        Ok(items)
    }
}

#[async_trait]
impl TaskStore for TodoistClient {
    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, StoreError> {
        let tasks: Vec<TodoistTask> = self.list_paginated("tasks", project_id).await?;
        debug!("Fetched {} tasks from Todoist", tasks.len());
        Ok(tasks.into_iter().map(TodoistTask::into_task).collect())
    }

    async fn list_sections(&self, project_id: &str) -> Result<Vec<Section>, StoreError> {
        let sections: Vec<TodoistSection> = self.list_paginated("sections", project_id).await?;
        debug!("Fetched {} sections from Todoist", sections.len());
        Ok(sections
            .into_iter()
            .map(|s| Section { id: s.id, name: s.name })
            .collect())
    }

    async fn move_task(&self, task_id: &str, section_id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .post(format!("{}/tasks/{task_id}/move", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .json(&MoveRequest { section_id })
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }
}

/// One page of a Todoist listing response
#[derive(Debug, Deserialize)]
struct Page<T> {
    results: Vec<T>,
    #[serde(default)]
    next_cursor: Option<String>,
}

/// Task as Todoist returns it; `content` is the display name.
#[derive(Debug, Deserialize)]
struct TodoistTask {
    id: String,
    content: String,
    #[serde(default)]
    section_id: Option<String>,
}

impl TodoistTask {
    fn into_task(self) -> Task {
        Task {
            id: self.id,
            name: self.content,
            section_id: self.section_id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TodoistSection {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct MoveRequest<'a> {
    section_id: &'a str,
}
