use catalog_common::loader::CatalogSource;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
///
/// No default is assumed for the catalog location; the caller must provide it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the tool directory document lives: an http(s) URL or a
    /// filesystem path to `ai_tools.json`.
    pub catalog_source: CatalogSource,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `AI_TOOLS_CATALOG_URL`: http(s) URL or filesystem path of the
    ///   catalog document
    pub fn from_env() -> Result<Self, AppError> {
        let spec = std::env::var("AI_TOOLS_CATALOG_URL").map_err(|_| {
            AppError::Config("AI_TOOLS_CATALOG_URL environment variable is required".to_string())
        })?;

        let catalog_source = CatalogSource::from_spec(&spec);

        // A file source must exist up front; a URL is only probed by the
        // one-shot fetch itself.
        if let CatalogSource::File(path) = &catalog_source {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "catalog document not found at {}",
                    path.display()
                )));
            }
        }

        Ok(Self { catalog_source })
    }
}
