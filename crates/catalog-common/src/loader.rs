/// One-shot loader for catalog documents.
///
/// A catalog is fetched exactly once per process: single attempt, no retry,
/// and no enforced timeout. The fetch is the only suspension point in the
/// page lifecycle; everything after it is synchronous. Transport failures,
/// unreadable files, and malformed JSON all surface as `LoadError` and no
/// partial data is ever accepted.
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::LoadError;

/// Where a page's catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

impl CatalogSource {
    /// Interpret a config value: anything with an http(s) scheme is a URL,
    /// everything else a filesystem path.
    pub fn from_spec(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            CatalogSource::Url(spec.to_string())
        } else {
            CatalogSource::File(PathBuf::from(spec))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Url(url) => url.clone(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

/// Fetch and parse the catalog document in one attempt.
///
/// `T` is the page's wire type; each page converts it into the normalized
/// `CatalogDocument` afterwards.
pub async fn fetch_document<T: DeserializeOwned>(source: &CatalogSource) -> Result<T, LoadError> {
    let body = match source {
        CatalogSource::Url(url) => fetch_url(url).await?,
        CatalogSource::File(path) => read_file(path).await?,
    };
    let document = serde_json::from_str(&body)?;
    info!(source = %source.describe(), bytes = body.len(), "catalog document loaded");
    Ok(document)
}

async fn fetch_url(url: &str) -> Result<String, LoadError> {
    let response = reqwest::Client::new()
        .get(url)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.text().await?)
}

async fn read_file(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryGroup;

    #[test]
    fn source_spec_distinguishes_urls_from_paths() {
        assert_eq!(
            CatalogSource::from_spec("https://example.com/tools.json"),
            CatalogSource::Url("https://example.com/tools.json".to_string())
        );
        assert_eq!(
            CatalogSource::from_spec("http://localhost:8000/tools.json"),
            CatalogSource::Url("http://localhost:8000/tools.json".to_string())
        );
        assert_eq!(
            CatalogSource::from_spec("./data/tools.json"),
            CatalogSource::File(PathBuf::from("./data/tools.json"))
        );
    }

    #[tokio::test]
    async fn missing_file_is_an_io_load_error() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/tools.json"));
        let result = fetch_document::<Vec<CategoryGroup>>(&source).await;
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_load_error() {
        let path = std::env::temp_dir().join("catalog_loader_malformed_test.json");
        tokio::fs::write(&path, "{not json").await.expect("write temp file");

        let source = CatalogSource::File(path.clone());
        let result = fetch_document::<Vec<CategoryGroup>>(&source).await;
        assert!(matches!(result, Err(LoadError::Parse(_))));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn well_formed_file_parses_into_wire_type() {
        let path = std::env::temp_dir().join("catalog_loader_wellformed_test.json");
        let body = r#"[{"label":"Writing","entries":[{"name":"Scribe","description":"draft emails","link":null,"notes":[]}]}]"#;
        tokio::fs::write(&path, body).await.expect("write temp file");

        let source = CatalogSource::File(path.clone());
        let groups: Vec<CategoryGroup> = fetch_document(&source).await.expect("parse document");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Writing");
        assert_eq!(groups[0].entries[0].name, "Scribe");

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn unreachable_url_is_an_http_load_error() {
        // Nothing listens on port 9; the connection is refused immediately.
        let source = CatalogSource::Url("http://127.0.0.1:9/tools.json".to_string());
        let result = fetch_document::<Vec<CategoryGroup>>(&source).await;
        assert!(matches!(result, Err(LoadError::Http(_))));
    }
}
