/// Error types shared across catalog server crates.
///
/// `LoadError` covers the single failure path in the catalog lifecycle: the
/// one-shot fetch and parse of the catalog document at startup. Everything
/// downstream of a successful load (indexing, filtering, rendering) is total
/// and has no error variants here. Application-specific errors are defined in
/// each server crate and wrap `LoadError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog document contains no items")]
    Empty,
}
