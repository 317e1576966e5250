/// Per-page session state.
///
/// The page lifecycle is `Loading -> {Ready | LoadFailed}`. Loading is the
/// startup await around the one-shot fetch; once resolved, the state never
/// changes kind again. `LoadFailed` is terminal: every subsequent request is
/// answered with the page's static failure message, and the catalog stays
/// empty. Within `Ready`, only the `FilterState` mutates, driven by explicit
/// user actions.
use crate::catalog::{Catalog, CatalogDocument, Item};
use crate::error::LoadError;
use crate::filter::{self, CategoryFilter, FilterState, ALL_CATEGORIES};

/// A category selector button as the page shows it: label, item count, and
/// whether it is the active selection. Exactly one button is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub label: String,
    pub item_count: usize,
    pub active: bool,
}

/// The live page state behind a successful load: the immutable indexed
/// catalog plus the mutable filter selection.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    catalog: Catalog,
    filter: FilterState,
}

impl CatalogSession {
    /// Index a loaded document and start a session with default filters.
    ///
    /// Rejects documents that flatten to zero items: an empty catalog is a
    /// load failure, not a valid page.
    pub fn start(doc: CatalogDocument) -> Result<Self, LoadError> {
        if doc.entry_count() == 0 {
            return Err(LoadError::Empty);
        }
        Ok(Self {
            catalog: Catalog::index(doc),
            filter: FilterState::default(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Set the category restriction. The label must be the "All" sentinel or
    /// a label present in the catalog.
    pub fn select_category(&mut self, label: &str) -> Result<(), String> {
        if label != ALL_CATEGORIES && !self.catalog.has_category(label) {
            let available = self.catalog.category_labels().join(", ");
            return Err(format!(
                "unknown category: '{label}'. Available categories: {ALL_CATEGORIES}, {available}"
            ));
        }
        self.filter.category = CategoryFilter::from_label(label);
        Ok(())
    }

    /// Set the free-text search term. Trimming and the empty-means-no-filter
    /// rule are applied at filter time, not here, so the stored state echoes
    /// what the user typed.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    /// Clear both filters back to the startup default.
    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// The currently visible subset, in catalog order.
    pub fn visible_items(&self) -> Vec<&Item> {
        filter::apply(self.catalog.items(), &self.filter)
    }

    /// The category selector row: the "All" sentinel first, then every
    /// distinct label in catalog order, with the active selection marked.
    pub fn category_buttons(&self) -> Vec<CategoryButton> {
        let active_label = self.filter.category.label();
        let mut buttons = Vec::with_capacity(self.catalog.categories().len() + 1);
        buttons.push(CategoryButton {
            label: ALL_CATEGORIES.to_string(),
            item_count: self.catalog.items().len(),
            active: active_label == ALL_CATEGORIES,
        });
        for category in self.catalog.categories() {
            buttons.push(CategoryButton {
                label: category.label.clone(),
                item_count: category.item_count,
                active: active_label == category.label,
            });
        }
        buttons
    }
}

/// The resolved page state a server is constructed with.
#[derive(Debug)]
pub enum CatalogState {
    Ready(CatalogSession),
    Failed { message: String },
}

impl CatalogState {
    /// Fold a load outcome into the terminal page state, pairing success with
    /// a session and failure with the page's static message.
    pub fn from_load<E>(result: Result<CatalogSession, E>, failure_message: &str) -> Self {
        match result {
            Ok(session) => CatalogState::Ready(session),
            Err(_) => CatalogState::Failed {
                message: failure_message.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogState::Ready(_))
    }
}
