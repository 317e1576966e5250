/// MCP server for browsing the interview question bank.
///
/// Exposes four tools mirroring the browse page:
/// - `browse_questions`: Render the bank under the current filters
/// - `select_category`: Restrict to one category ("All" clears it)
/// - `search`: Match question text or model answer
/// - `list_categories`: Category options, sorted alphabetically
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

/// Placeholder shown when no question matches the filters.
const NO_RESULTS: &str = "No questions match the current filters.";

#[derive(Clone)]
pub struct InterviewQuestionsServer {
    state: Arc<RwLock<CatalogState>>,
    tool_router: ToolRouter<InterviewQuestionsServer>,
}

impl InterviewQuestionsServer {
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
impl InterviewQuestionsServer {
    #[tool(description = "Browse the interview question bank with the current filters applied. Each card carries the category, question, model answer, and vocabulary hints; the response's total is the match count.")]
    async fn browse_questions(&self) -> Result<Json<CatalogViewResponse>, String> {
        let state = self.state.read().await;
        match &*state {
            CatalogState::Ready(session) => Ok(Json(Self::rendered(session))),
            CatalogState::Failed { message } => Err(message.clone()),
        }
    }

    #[tool(description = "Restrict browsing to one question category, or pass 'All' to clear the restriction.")]
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

    #[tool(description = "Search questions by question text or model answer, case-insensitively. A whitespace-only term clears the text filter.")]
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

    #[tool(description = "List the question categories alphabetically, with question counts and the active selection marked. 'All' is listed first.")]
    async fn list_categories(&self) -> Result<Json<CategoryListResponse>, String> {
        let state = self.state.read().await;
        match &*state {
            CatalogState::Ready(session) => {
                let mut response = catalog_api::category_list_response(session);
                // The browse page sorts its category dropdown; keep "All" first.
                response.categories[1..].sort_by(|a, b| a.label.cmp(&b.label));
                Ok(Json(response))
            }
            CatalogState::Failed { message } => Err(message.clone()),
        }
    }
}

#[tool_handler]
impl ServerHandler for InterviewQuestionsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "interview-questions".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Interview question bank browser. The bank is loaded once at \
                 startup; use select_category and search to narrow it, \
                 list_categories for the category options, and browse_questions \
                 to re-render the current view."
                    .to_string(),
            ),
        }
    }
}
