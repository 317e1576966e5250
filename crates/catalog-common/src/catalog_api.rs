use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::filter::FilterState;
use crate::state::{CatalogSession, CategoryButton};
use crate::view::{CardView, CatalogView, LinkView};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SelectCategoryParams {
    /// Category label to select, or "All" to clear the category restriction.
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Free-text search term matched case-insensitively against item names
    /// and descriptions. A whitespace-only term clears the text filter.
    pub term: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CardResponse {
    pub category: String,
    pub name: String,
    pub description: String,
    /// Extra display lines, e.g. vocabulary hints or detail bullets.
    pub notes: Vec<String>,
    /// Working external URL; absent when the item has none.
    pub link: Option<String>,
    /// False when the card's link is a disabled placeholder.
    pub link_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogViewResponse {
    /// Applied category selection ("All" when unrestricted).
    pub category: String,
    /// Applied search term as typed.
    pub search_term: String,
    /// Number of items matching the filters.
    pub total: usize,
    pub cards: Vec<CardResponse>,
    /// No-results placeholder, present exactly when `cards` is empty.
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryButtonResponse {
    pub label: String,
    pub item_count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryButtonResponse>,
}

impl From<&CardView> for CardResponse {
    fn from(card: &CardView) -> Self {
        let (link, link_enabled) = match &card.link {
            LinkView::External(url) => (Some(url.clone()), true),
            LinkView::Disabled => (None, false),
        };
        Self {
            category: card.category.clone(),
            name: card.name.clone(),
            description: card.description.clone(),
            notes: card.notes.clone(),
            link,
            link_enabled,
        }
    }
}

impl From<&CategoryButton> for CategoryButtonResponse {
    fn from(button: &CategoryButton) -> Self {
        Self {
            label: button.label.clone(),
            item_count: button.item_count,
            active: button.active,
        }
    }
}

/// Assemble the standard view response from a render and the filter state
/// it was produced under.
pub fn view_response(filter: &FilterState, view: &CatalogView) -> CatalogViewResponse {
    let (cards, placeholder) = match view {
        CatalogView::Cards(cards) => (cards.iter().map(CardResponse::from).collect(), None),
        CatalogView::Empty { message } => (Vec::new(), Some(message.clone())),
    };
    CatalogViewResponse {
        category: filter.category.label().to_string(),
        search_term: filter.search_term.clone(),
        total: view.card_count(),
        cards,
        placeholder,
    }
}

/// Assemble the category selector response for a session.
pub fn category_list_response(session: &CatalogSession) -> CategoryListResponse {
    CategoryListResponse {
        categories: session
            .category_buttons()
            .iter()
            .map(CategoryButtonResponse::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogDocument, CategoryGroup, Entry};
    use crate::view::{render, URL_MISSING};

    #[test]
    fn view_response_flattens_link_variants() {
        let doc = CatalogDocument::from_groups(vec![CategoryGroup {
            label: "Writing".to_string(),
            entries: vec![
                Entry::new("Scribe", "draft emails").with_link("https://x"),
                Entry::new("Ghost", "no site").with_link(URL_MISSING),
            ],
        }]);
        let session = CatalogSession::start(doc).expect("start session");
        let items = session.visible_items();
        let view = render(&items, "nothing");
        let response = view_response(session.filter(), &view);

        assert_eq!(response.category, "All");
        assert_eq!(response.total, 2);
        assert!(response.placeholder.is_none());
        assert_eq!(response.cards[0].link.as_deref(), Some("https://x"));
        assert!(response.cards[0].link_enabled);
        assert!(response.cards[1].link.is_none());
        assert!(!response.cards[1].link_enabled);
    }

    #[test]
    fn empty_view_response_carries_placeholder_only() {
        let doc = CatalogDocument::from_groups(vec![CategoryGroup {
            label: "Writing".to_string(),
            entries: vec![Entry::new("Scribe", "draft emails")],
        }]);
        let mut session = CatalogSession::start(doc).expect("start session");
        session.set_search_term("zzz");
        let items = session.visible_items();
        let view = render(&items, "No tools match the current filters.");
        let response = view_response(session.filter(), &view);

        assert_eq!(response.total, 0);
        assert!(response.cards.is_empty());
        assert_eq!(
            response.placeholder.as_deref(),
            Some("No tools match the current filters.")
        );
        assert_eq!(response.search_term, "zzz");
    }
}
