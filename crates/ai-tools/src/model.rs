/// Wire model for the AI tool directory document.
///
/// The published `ai_tools.json` is Turkish-keyed: an ordered array of
/// `{ kategori, araclar: [{ isim, aciklama, url }] }`. Field names are mapped
/// here and nowhere else; the rest of the crate works on the normalized
/// catalog types. A missing `aciklama` normalizes to an empty string and a
/// literal `URL_NOT_FOUND` url is carried through for the view layer to
/// render as a disabled link.
use serde::Deserialize;

use catalog_common::catalog::{CatalogDocument, CategoryGroup, Entry};

#[derive(Debug, Clone, Deserialize)]
pub struct ToolGroup {
    #[serde(rename = "kategori")]
    pub category: String,
    #[serde(rename = "araclar", default)]
    pub tools: Vec<ToolRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolRecord {
    #[serde(rename = "isim")]
    pub name: String,
    #[serde(rename = "aciklama", default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Normalize the wire document, preserving group and tool order.
pub fn to_document(groups: Vec<ToolGroup>) -> CatalogDocument {
    CatalogDocument::from_groups(
        groups
            .into_iter()
            .map(|group| CategoryGroup {
                label: group.category,
                entries: group
                    .tools
                    .into_iter()
                    .map(|tool| Entry {
                        name: tool.name,
                        description: tool.description,
                        link: tool.url,
                        notes: Vec::new(),
                    })
                    .collect(),
            })
            .collect(),
    )
}
