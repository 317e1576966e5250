use catalog_common::error::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("config error: {0}")]
    Config(String),
}
