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
use server::AiToolsServer;

/// Static message shown for the lifetime of the process when the one-shot
/// catalog load fails. There is no automatic retry.
const CATALOG_UNAVAILABLE: &str = "Could not load the tool catalog. Please try again later.";

async fn load_catalog(config: &Config) -> Result<CatalogSession, AppError> {
    let groups: Vec<model::ToolGroup> = loader::fetch_document(&config.catalog_source).await?;
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

    info!("starting ai-tools catalog server");

    // 1. Load config from environment
    let config = Config::from_env()?;
    info!(source = %config.catalog_source.describe(), "configuration loaded");

    // 2. One-shot load and index; failure is terminal but does not exit
    let loaded = load_catalog(&config).await;
    match &loaded {
        Ok(session) => info!(
            items = session.catalog().items().len(),
            categories = session.catalog().categories().len(),
            "catalog ready"
        ),
        Err(e) => error!(error = %e, "catalog load failed, serving failure state"),
    }
    let state = CatalogState::from_load(loaded, CATALOG_UNAVAILABLE);

    // 3. Build MCP server and serve on stdio
    let server = AiToolsServer::new(state);

    info!("MCP server ready, serving on stdio");
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!(error = %e, "MCP server error");
    })?;

    service.waiting().await?;
    info!("MCP server shut down");
    Ok(())
}
