/// MCP server for the content review criteria catalog.
///
/// Exposes four tools:
/// - `search_criteria`: Substring search with a result limit
/// - `select_category`: Restrict to one main heading ("All" clears it)
/// - `get_criterion`: Look up a single criterion by exact title
/// - `list_categories`: The main headings with criterion counts
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::RwLock;

use catalog_common::catalog_api::{
    self, CardResponse, CatalogViewResponse, CategoryListResponse, SelectCategoryParams,
};
use catalog_common::state::{CatalogSession, CatalogState};
use catalog_common::view::{self, CardView, LinkView};

/// Placeholder shown when no criterion matches the filters.
const NO_RESULTS: &str = "No criteria match the current filters.";

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchCriteriaParams {
    /// Free-text search term matched case-insensitively against criterion
    /// titles and detail text. A whitespace-only term clears the text filter.
    term: String,
    /// Maximum number of cards to return (default: 10, max: 50). The
    /// response's total always reports the full match count.
    limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GetCriterionParams {
    /// Exact criterion title, matched case-insensitively.
    title: String,
}

#[derive(Clone)]
pub struct ReviewCriteriaServer {
    state: Arc<RwLock<CatalogState>>,
    tool_router: ToolRouter<ReviewCriteriaServer>,
}

impl ReviewCriteriaServer {
    pub fn new(state: CatalogState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            tool_router: Self::tool_router(),
        }
    }

    /// Render the visible subset, truncated to `limit` cards but reporting
    /// the untruncated match count.
    fn rendered_limited(session: &CatalogSession, limit: usize) -> CatalogViewResponse {
        let matched = session.visible_items();
        let total = matched.len();
        let limited: Vec<_> = matched.into_iter().take(limit).collect();
        let view = view::render(&limited, NO_RESULTS);
        let mut response = catalog_api::view_response(session.filter(), &view);
        response.total = total;
        response
    }
}

#[tool_router]
impl ReviewCriteriaServer {
    #[tool(description = "Search review criteria by title or detail text, case-insensitively. Returns up to `limit` cards (default 10, max 50); `total` is the full match count.")]
    async fn search_criteria(
        &self,
        Parameters(params): Parameters<SearchCriteriaParams>,
    ) -> Result<Json<CatalogViewResponse>, String> {
        let limit = params.limit.unwrap_or(10).min(50) as usize;

        let mut state = self.state.write().await;
        match &mut *state {
            CatalogState::Ready(session) => {
                session.set_search_term(params.term);
                Ok(Json(Self::rendered_limited(session, limit)))
            }
            CatalogState::Failed { message } => Err(message.clone()),
        }
    }

    #[tool(description = "Restrict the catalog to one main heading, or pass 'All' to clear the restriction. Returns the first 10 matching cards; total reports the full count.")]
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
                Ok(Json(Self::rendered_limited(session, 10)))
            }
            CatalogState::Failed { message } => Err(message.clone()),
        }
    }

    #[tool(description = "Get a single review criterion by its exact title (case-insensitive), with its detail bullets.")]
    async fn get_criterion(
        &self,
        Parameters(params): Parameters<GetCriterionParams>,
    ) -> Result<Json<CardResponse>, String> {
        let title = params.title.trim().to_string();
        if title.is_empty() {
            return Err("title must not be empty".to_string());
        }

        let state = self.state.read().await;
        match &*state {
            CatalogState::Ready(session) => {
                let item = session
                    .catalog()
                    .items()
                    .iter()
                    .find(|i| i.name.eq_ignore_ascii_case(&title))
                    .ok_or_else(|| format!("criterion not found: {title}"))?;
                let card = CardView {
                    category: item.category.clone(),
                    name: item.name.clone(),
                    description: item.description.clone(),
                    notes: item.notes.clone(),
                    link: LinkView::for_item(item),
                };
                Ok(Json(CardResponse::from(&card)))
            }
            CatalogState::Failed { message } => Err(message.clone()),
        }
    }

    #[tool(description = "List the main criteria headings with their criterion counts, marking the active selection. 'All' is listed first.")]
    async fn list_categories(&self) -> Result<Json<CategoryListResponse>, String> {
        let state = self.state.read().await;
        match &*state {
            CatalogState::Ready(session) => Ok(Json(catalog_api::category_list_response(session))),
            CatalogState::Failed { message } => Err(message.clone()),
        }
    }
}

#[tool_handler]
impl ServerHandler for ReviewCriteriaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "review-criteria".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Content review criteria catalog. The document is loaded once \
                 at startup; use search_criteria for text search with a result \
                 limit, select_category to browse one main heading, \
                 get_criterion for a single criterion's detail bullets, and \
                 list_categories for the headings."
                    .to_string(),
            ),
        }
    }
}
