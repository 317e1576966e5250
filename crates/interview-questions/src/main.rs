mod config;
mod error;
mod model;
mod server;

use rmcp::{ServiceExt, transport::stdio};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use catalog_common::loader;
use catalog_common::state::{CatalogSession, CatalogState};

use config::Config;
use error::AppError;
use server::InterviewQuestionsServer;

/// Static message shown for the lifetime of the process when the one-shot
/// load fails.
const CATALOG_UNAVAILABLE: &str = "Could not load the question bank. Please try again later.";

async fn load_catalog(config: &Config) -> Result<CatalogSession, AppError> {
    let groups: Vec<model::QuestionGroup> = loader::fetch_document(&config.catalog_source).await?;
    Ok(CatalogSession::start(model::to_document(groups))?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing to stderr (stdout is reserved for MCP JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting interview-questions catalog server");

    let config = Config::from_env()?;
    info!(source = %config.catalog_source.describe(), "configuration loaded");

    let loaded = load_catalog(&config).await;
    match &loaded {
        Ok(session) => info!(
            questions = session.catalog().items().len(),
            categories = session.catalog().categories().len(),
            "question bank ready"
        ),
        Err(e) => error!(error = %e, "question bank load failed, serving failure state"),
    }
    let state = CatalogState::from_load(loaded, CATALOG_UNAVAILABLE);

    let server = InterviewQuestionsServer::new(state);

    info!("MCP server ready, serving on stdio");
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!(error = %e, "MCP server error");
    })?;

    service.waiting().await?;
    info!("MCP server shut down");
    Ok(())
}
