/// Filter and search engine over the flattened item list.
///
/// `apply` is pure and deterministic: category exact-match and case-insensitive
/// substring search over name or description, ANDed, with input order
/// preserved. A search term that trims to empty means "no text filter".
use crate::catalog::Item;

/// Sentinel label meaning "no category restriction". Selecting it is
/// equivalent to clearing the category filter.
pub const ALL_CATEGORIES: &str = "All";

/// Current category restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Selected(String),
}

impl CategoryFilter {
    /// Build from a user-supplied label, mapping the "All" sentinel to `All`.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Selected(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Selected(label) => label,
        }
    }
}

/// The page's filter state, mutated only by explicit user actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search_term: String,
}

impl FilterState {
    /// True when neither filter is in effect.
    pub fn is_default(&self) -> bool {
        self.category == CategoryFilter::All && self.search_term.trim().is_empty()
    }

    fn matches(&self, item: &Item, needle: Option<&str>) -> bool {
        if let CategoryFilter::Selected(label) = &self.category {
            if &item.category != label {
                return false;
            }
        }
        match needle {
            Some(needle) => {
                item.name.to_lowercase().contains(needle)
                    || item.description.to_lowercase().contains(needle)
            }
            None => true,
        }
    }
}

/// Return the subset of `items` matching `state`, in input order.
pub fn apply<'a>(items: &'a [Item], state: &FilterState) -> Vec<&'a Item> {
    let trimmed = state.search_term.trim();
    let needle = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    };

    items
        .iter()
        .filter(|item| state.matches(item, needle.as_deref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogDocument, CategoryGroup, Entry};

    fn items() -> Vec<Item> {
        let doc = CatalogDocument::from_groups(vec![
            CategoryGroup {
                label: "Writing".to_string(),
                entries: vec![
                    Entry::new("Scribe", "draft emails with AI tools"),
                    Entry::new("Ghost", "no site"),
                ],
            },
            CategoryGroup {
                label: "Images".to_string(),
                entries: vec![
                    Entry::new("Brush", "paint pictures"),
                    Entry::new("Draftsman", "technical drawings"),
                ],
            },
        ]);
        Catalog::index(doc).items().to_vec()
    }

    fn names(filtered: &[&Item]) -> Vec<String> {
        filtered.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn default_state_is_identity() {
        let items = items();
        let filtered = apply(&items, &FilterState::default());
        assert_eq!(filtered.len(), items.len());
        for (kept, original) in filtered.iter().zip(items.iter()) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn category_filter_keeps_exactly_that_category_in_order() {
        let items = items();
        let state = FilterState {
            category: CategoryFilter::Selected("Images".to_string()),
            search_term: String::new(),
        };
        let filtered = apply(&items, &state);
        assert_eq!(names(&filtered), vec!["Brush", "Draftsman"]);
        assert!(filtered.iter().all(|i| i.category == "Images"));
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let items = items();
        let state = FilterState {
            category: CategoryFilter::All,
            search_term: "AI".to_string(),
        };
        // "AI" matches "AI tools" in a description.
        assert_eq!(names(&apply(&items, &state)), vec!["Scribe"]);

        let state = FilterState {
            category: CategoryFilter::All,
            search_term: "DRAFT".to_string(),
        };
        // Matches both a description ("draft emails") and a name ("Draftsman").
        assert_eq!(names(&apply(&items, &state)), vec!["Scribe", "Draftsman"]);
    }

    #[test]
    fn filters_compose_with_and_semantics() {
        let items = items();
        let state = FilterState {
            category: CategoryFilter::Selected("Writing".to_string()),
            search_term: "draft".to_string(),
        };
        assert_eq!(names(&apply(&items, &state)), vec!["Scribe"]);
    }

    #[test]
    fn whitespace_only_search_term_means_no_text_filter() {
        let items = items();
        let state = FilterState {
            category: CategoryFilter::All,
            search_term: "   \t".to_string(),
        };
        assert_eq!(apply(&items, &state).len(), items.len());
    }

    #[test]
    fn apply_is_idempotent() {
        let items = items();
        let state = FilterState {
            category: CategoryFilter::All,
            search_term: "draft".to_string(),
        };
        let once: Vec<Item> = apply(&items, &state).into_iter().cloned().collect();
        let twice = apply(&once, &state);
        assert_eq!(names(&twice), names(&apply(&items, &state)));
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let items = items();
        let state = FilterState {
            category: CategoryFilter::All,
            search_term: "zzz".to_string(),
        };
        assert!(apply(&items, &state).is_empty());
    }

    #[test]
    fn category_filter_from_label_maps_sentinel() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("Writing"),
            CategoryFilter::Selected("Writing".to_string())
        );
        assert_eq!(CategoryFilter::All.label(), ALL_CATEGORIES);
    }
}
