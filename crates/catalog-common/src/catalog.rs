/// Catalog data model and indexer.
///
/// A `CatalogDocument` is the normalized form every page's wire document
/// converts into: an ordered list of category groups, each holding ordered
/// entries. `Catalog::index` flattens the groups into one item sequence in
/// document order and derives the distinct category labels with their item
/// counts. Both structures are immutable after load.
use serde::{Deserialize, Serialize};

/// An entry as it appears inside its category group, before indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name shown as the card heading.
    pub name: String,
    /// Free-text description; missing descriptions normalize to "".
    pub description: String,
    /// External link, if the source document carries one. A present value may
    /// still be the missing-URL sentinel, which the view layer handles.
    pub link: Option<String>,
    /// Extra display lines (for example vocabulary hints). Rendered on the
    /// card but never searched.
    pub notes: Vec<String>,
}

impl Entry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            link: None,
            notes: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// One category block of the catalog document: a label plus its entries,
/// both in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub label: String,
    pub entries: Vec<Entry>,
}

/// The normalized catalog document: an ordered sequence of category groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub groups: Vec<CategoryGroup>,
}

impl CatalogDocument {
    pub fn from_groups(groups: Vec<CategoryGroup>) -> Self {
        Self { groups }
    }

    /// Total number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

/// A flattened catalog item, carrying the label of the group it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub link: Option<String>,
    pub notes: Vec<String>,
    /// Back-reference to the owning group's label.
    pub category: String,
}

/// A distinct category label with the number of items it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub item_count: usize,
}

/// The indexed catalog: the flat item sequence plus the category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Flatten a document into one item sequence and derive its categories.
    ///
    /// Item order follows document order (group order, then entry order
    /// within the group) and is never re-sorted afterwards. Category order is
    /// first-seen; a label appearing in more than one group keeps its first
    /// position and accumulates the counts.
    pub fn index(doc: CatalogDocument) -> Self {
        let mut items = Vec::with_capacity(doc.entry_count());
        let mut categories: Vec<Category> = Vec::new();

        for group in doc.groups {
            match categories.iter_mut().find(|c| c.label == group.label) {
                Some(category) => category.item_count += group.entries.len(),
                None => categories.push(Category {
                    label: group.label.clone(),
                    item_count: group.entries.len(),
                }),
            }

            for entry in group.entries {
                items.push(Item {
                    name: entry.name,
                    description: entry.description,
                    link: entry.link,
                    notes: entry.notes,
                    category: group.label.clone(),
                });
            }
        }

        Self { items, categories }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c.label == label)
    }

    pub fn category_labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.label.as_str()).collect()
    }
}
