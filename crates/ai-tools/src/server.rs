/// MCP server for the AI tool directory.
///
/// Exposes five tools mirroring the page's controls:
/// - `show_catalog`: Render the directory under the current filters
/// - `select_category`: Set the category restriction ("All" clears it)
/// - `search`: Set the free-text search term
/// - `reset_filters`: Clear both filters
/// - `list_categories`: The category selector row with the active selection
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tokio::sync::RwLock;

use catalog_common::catalog_api::{
    self, CatalogViewResponse, CategoryListResponse, SearchParams, SelectCategoryParams,
};
use catalog_common::state::{CatalogSession, CatalogState};
use catalog_common::view;

/// Placeholder shown when the filtered subset is empty.
const NO_RESULTS: &str = "No tools match the current filters.";

#[derive(Clone)]
pub struct AiToolsServer {
    state: Arc<RwLock<CatalogState>>,
    tool_router: ToolRouter<AiToolsServer>,
}

impl AiToolsServer {
    pub fn new(state: CatalogState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            tool_router: Self::tool_router(),
        }
    }

    fn rendered(session: &CatalogSession) -> CatalogViewResponse {
        let items = session.visible_items();
        let view = view::render(&items, NO_RESULTS);
        catalog_api::view_response(session.filter(), &view)
    }
}

#[tool_router]
impl AiToolsServer {
    #[tool(description = "Show the AI tool directory with the current category and search filters applied. Each card carries a category tag, name, description, and either a working external link or a disabled placeholder.")]
    async fn show_catalog(&self) -> Result<Json<CatalogViewResponse>, String> {
        let state = self.state.read().await;
        match &*state {
            CatalogState::Ready(session) => Ok(Json(Self::rendered(session))),
            CatalogState::Failed { message } => Err(message.clone()),
        }
    }

    #[tool(description = "Select a category to browse. Pass 'All' to clear the category restriction. The search term is left untouched.")]
    async fn select_category(
        &self,
        Parameters(params): Parameters<SelectCategoryParams>,
    ) -> Result<Json<CatalogViewResponse>, String> {
        let category = params.category.trim().to_string();
        if category.is_empty() {
            return Err("category must not be empty".to_string());
        }

        let mut state = self.state.write().await;
        match &mut *state {
            CatalogState::Ready(session) => {
                session.select_category(&category)?;
                Ok(Json(Self::rendered(session)))
            }
            CatalogState::Failed { message } => Err(message.clone()),
        }
    }

    #[tool(description = "Search tools by name or description, case-insensitively. A whitespace-only term clears the text filter. The category selection is left untouched.")]
    async fn search(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<Json<CatalogViewResponse>, String> {
        let mut state = self.state.write().await;
        match &mut *state {
            CatalogState::Ready(session) => {
                session.set_search_term(params.term);
                Ok(Json(Self::rendered(session)))
            }
            CatalogState::Failed { message } => Err(message.clone()),
        }
    }

    #[tool(description = "Clear the category selection and the search term, returning the full directory.")]
    async fn reset_filters(&self) -> Result<Json<CatalogViewResponse>, String> {
        let mut state = self.state.write().await;
        match &mut *state {
            CatalogState::Ready(session) => {
                session.reset_filters();
                Ok(Json(Self::rendered(session)))
            }
            CatalogState::Failed { message } => Err(message.clone()),
        }
    }

    #[tool(description = "List the category selector row: 'All' plus every category in the directory with its tool count, marking the active selection.")]
    async fn list_categories(&self) -> Result<Json<CategoryListResponse>, String> {
        let state = self.state.read().await;
        match &*state {
            CatalogState::Ready(session) => Ok(Json(catalog_api::category_list_response(session))),
            CatalogState::Failed { message } => Err(message.clone()),
        }
    }
}

#[tool_handler]
impl ServerHandler for AiToolsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ai-tools".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "AI tool directory server. The catalog is loaded once at startup; \
                 use select_category and search to narrow it, reset_filters to \
                 clear both filters, list_categories for the selector row, and \
                 show_catalog to re-render the current view."
                    .to_string(),
            ),
        }
    }
}
