/// Wire model for the content review criteria document.
///
/// `criteria.json` is an ordered array of `{ main_title, criteria: [...] }`
/// blocks; the main title is the category heading and each criterion has a
/// title plus detail bullets. Details are joined into the searchable
/// description and kept as individual note lines for display.
use serde::Deserialize;

use catalog_common::catalog::{CatalogDocument, CategoryGroup, Entry};

#[derive(Debug, Clone, Deserialize)]
pub struct CriterionGroup {
    #[serde(rename = "main_title")]
    pub heading: String,
    #[serde(default)]
    pub criteria: Vec<CriterionRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CriterionRecord {
    pub title: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Normalize the wire document, preserving heading and criterion order.
pub fn to_document(groups: Vec<CriterionGroup>) -> CatalogDocument {
    CatalogDocument::from_groups(
        groups
            .into_iter()
            .map(|group| CategoryGroup {
                label: group.heading,
                entries: group
                    .criteria
                    .into_iter()
                    .map(|criterion| Entry {
                        name: criterion.title,
                        description: criterion.details.join(" "),
                        link: None,
                        notes: criterion.details,
                    })
                    .collect(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "main_title": "Accuracy",
            "criteria": [
                {"title": "No factual errors", "details": ["Check dates", "Check units"]},
                {"title": "Sources are cited"}
            ]
        },
        {
            "main_title": "Visual design",
            "criteria": [
                {"title": "Figures have captions", "details": ["Every figure is numbered"]}
            ]
        }
    ]"#;

    #[test]
    fn main_titles_become_category_labels() {
        let groups: Vec<CriterionGroup> = serde_json::from_str(SAMPLE).expect("parse sample");
        let doc = to_document(groups);
        assert_eq!(doc.groups[0].label, "Accuracy");
        assert_eq!(doc.groups[1].label, "Visual design");
        assert_eq!(doc.entry_count(), 3);
    }

    #[test]
    fn details_join_into_description_and_stay_as_notes() {
        let groups: Vec<CriterionGroup> = serde_json::from_str(SAMPLE).expect("parse sample");
        let doc = to_document(groups);

        let first = &doc.groups[0].entries[0];
        assert_eq!(first.description, "Check dates Check units");
        assert_eq!(first.notes, vec!["Check dates", "Check units"]);

        let bare = &doc.groups[0].entries[1];
        assert_eq!(bare.description, "");
        assert!(bare.notes.is_empty());
    }
}
