//! Sectionize - Main Entry Point
//!
//! Resolves credentials, wires the Todoist client and OpenAI classifier into
//! the pipeline, and runs it for one project. Exit code 0 means the pipeline
//! ran end to end (individual move failures included); 1 means the run was
//! aborted before any mutation.

use clap::Parser;
use sectionize::config::{RunConfig, DEFAULT_MODEL};
use sectionize::oracle::{OpenAiClassifier, OpenAiConfig};
use sectionize::pipeline::Pipeline;
use sectionize::store::{TodoistClient, TodoistConfig};
use std::process;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Assign unsectioned Todoist tasks to sections with an LLM classifier
#[derive(Parser)]
#[command(name = "sectionize")]
#[command(about = "Assign Todoist tasks to sections using an AI classifier")]
#[command(version)]
struct Cli {
    /// Todoist project ID to operate on
    #[arg(long, value_name = "ID")]
    project_id: String,

    /// Todoist API token. Optional if TODOIST_API_TOKEN is set.
    #[arg(long, value_name = "TOKEN")]
    api_token: Option<String>,

    /// Classifier model
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = match RunConfig::from_env(cli.api_token, cli.model) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to resolve configuration: {}", e);
            process::exit(1);
        }
    };

    let pipeline = match build_pipeline(&config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Failed to initialize clients: {}", e);
            process::exit(1);
        }
    };

    match pipeline.run(&cli.project_id).await {
        Ok(summary) => {
            info!(
                "Run completed: {} moved, {} failed",
                summary.moved, summary.failed
            );
        }
        Err(e) => {
            error!("Run aborted: {}", e);
            process::exit(1);
        }
    }
}

/// Wire concrete clients into the pipeline. Coupling lives here, not in the
/// pipeline itself.
fn build_pipeline(config: &RunConfig) -> Result<Pipeline, Box<dyn std::error::Error>> {
    let store = TodoistClient::new(TodoistConfig {
        api_token: config.todoist_token.clone(),
        ..Default::default()
    })?;

    let oracle = OpenAiClassifier::new(OpenAiConfig {
        api_key: config.openai_api_key.clone(),
        model: config.model.clone(),
        ..Default::default()
    })?;

    Ok(Pipeline::new(Arc::new(store), Arc::new(oracle)))
}
