use catalog_common::loader::CatalogSource;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the question bank document lives: an http(s) URL or a
    /// filesystem path.
    pub catalog_source: CatalogSource,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `INTERVIEW_QUESTIONS_URL`: http(s) URL or filesystem path of the
    ///   question bank document
    pub fn from_env() -> Result<Self, AppError> {
        let spec = std::env::var("INTERVIEW_QUESTIONS_URL").map_err(|_| {
            AppError::Config("INTERVIEW_QUESTIONS_URL environment variable is required".to_string())
        })?;

        let catalog_source = CatalogSource::from_spec(&spec);

        if let CatalogSource::File(path) = &catalog_source {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "question bank not found at {}",
                    path.display()
                )));
            }
        }

        Ok(Self { catalog_source })
    }
}
