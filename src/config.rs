//! Run configuration
//!
//! All credentials and endpoints are resolved once at startup and passed
//! explicitly into the pipeline's constructors; no component reads the
//! environment on its own. Resolution fails before any network call when a
//! credential is missing.

use thiserror::Error;

/// Environment variable holding the Todoist bearer token.
pub const TODOIST_TOKEN_VAR: &str = "TODOIST_API_TOKEN";
/// Environment variable holding the OpenAI API key. No CLI override exists
/// for this one.
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

/// Default classifier model, overridable via `OPENAI_MODEL` or `--model`.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub todoist_token: String,
    pub openai_api_key: String,
    pub model: String,
}

impl RunConfig {
    /// Resolve configuration from CLI inputs and environment values.
    ///
    /// The Todoist token prefers the CLI flag and falls back to the
    /// environment; the OpenAI key comes from the environment only.
    pub fn resolve(
        cli_token: Option<String>,
        env_token: Option<String>,
        env_openai_key: Option<String>,
        model: String,
    ) -> Result<Self, ConfigError> {
        let todoist_token = cli_token
            .filter(|t| !t.is_empty())
            .or(env_token.filter(|t| !t.is_empty()))
            .ok_or(ConfigError::MissingCredential(TODOIST_TOKEN_VAR))?;

        let openai_api_key = env_openai_key
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingCredential(OPENAI_KEY_VAR))?;

        Ok(Self {
            todoist_token,
            openai_api_key,
            model,
        })
    }

    /// Resolve from the current process environment.
    pub fn from_env(cli_token: Option<String>, model: String) -> Result<Self, ConfigError> {
        Self::resolve(
            cli_token,
            std::env::var(TODOIST_TOKEN_VAR).ok(),
            std::env::var(OPENAI_KEY_VAR).ok(),
            model,
        )
    }
}
