/// Pure rendering step: filtered items to card view models.
///
/// Widget construction (here, the MCP response envelope) stays out of this
/// module so the mapping can be tested without any serving machinery. Every
/// render is a full replacement of the previous output.
use crate::catalog::Item;

/// String sentinel the source documents use for "no URL available". An item
/// carrying it renders as a disabled link rather than a broken one.
pub const URL_MISSING: &str = "URL_NOT_FOUND";

/// How the card's link should behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkView {
    /// A working external link.
    External(String),
    /// A non-navigating placeholder: the item has no usable URL.
    Disabled,
}

impl LinkView {
    /// Decide the link treatment for an item: external only when a URL is
    /// present and is not the missing-URL sentinel.
    pub fn for_item(item: &Item) -> Self {
        match item.link.as_deref() {
            Some(url) if !url.is_empty() && url != URL_MISSING => {
                LinkView::External(url.to_string())
            }
            _ => LinkView::Disabled,
        }
    }
}

/// One rendered catalog card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub category: String,
    pub name: String,
    pub description: String,
    pub notes: Vec<String>,
    pub link: LinkView,
}

impl CardView {
    fn from_item(item: &Item) -> Self {
        Self {
            category: item.category.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            notes: item.notes.clone(),
            link: LinkView::for_item(item),
        }
    }
}

/// A full render of the visible catalog: either cards or a single
/// no-results placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    Cards(Vec<CardView>),
    Empty { message: String },
}

impl CatalogView {
    pub fn card_count(&self) -> usize {
        match self {
            CatalogView::Cards(cards) => cards.len(),
            CatalogView::Empty { .. } => 0,
        }
    }
}

/// Map the filtered subset to cards, or to the page's placeholder message
/// when nothing matched.
pub fn render(items: &[&Item], empty_message: &str) -> CatalogView {
    if items.is_empty() {
        return CatalogView::Empty {
            message: empty_message.to_string(),
        };
    }
    CatalogView::Cards(items.iter().map(|item| CardView::from_item(item)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogDocument, CategoryGroup, Entry};

    fn writing_items() -> Vec<Item> {
        let doc = CatalogDocument::from_groups(vec![CategoryGroup {
            label: "Writing".to_string(),
            entries: vec![
                Entry::new("Scribe", "draft emails").with_link("https://x"),
                Entry::new("Ghost", "no site").with_link(URL_MISSING),
                Entry::new("Quill", "long form").with_notes(vec!["nib: pen tip".to_string()]),
            ],
        }]);
        Catalog::index(doc).items().to_vec()
    }

    #[test]
    fn cards_carry_category_name_description() {
        let items = writing_items();
        let refs: Vec<&Item> = items.iter().collect();
        let CatalogView::Cards(cards) = render(&refs, "nothing here") else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].category, "Writing");
        assert_eq!(cards[0].name, "Scribe");
        assert_eq!(cards[0].description, "draft emails");
        assert!(cards[0].notes.is_empty());
        assert_eq!(cards[2].notes, vec!["nib: pen tip"]);
    }

    #[test]
    fn present_url_renders_as_external_link() {
        let items = writing_items();
        assert_eq!(
            LinkView::for_item(&items[0]),
            LinkView::External("https://x".to_string())
        );
    }

    #[test]
    fn sentinel_url_renders_as_disabled_link() {
        let items = writing_items();
        assert_eq!(LinkView::for_item(&items[1]), LinkView::Disabled);
    }

    #[test]
    fn absent_url_renders_as_disabled_link() {
        let items = writing_items();
        assert_eq!(LinkView::for_item(&items[2]), LinkView::Disabled);
    }

    #[test]
    fn empty_subset_renders_single_placeholder() {
        let view = render(&[], "No tools match the current filters.");
        assert_eq!(
            view,
            CatalogView::Empty {
                message: "No tools match the current filters.".to_string()
            }
        );
        assert_eq!(view.card_count(), 0);
    }
}
