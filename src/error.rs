use thiserror::Error;

/// Result alias for fallible catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by the command-line surfaces around the catalog.
///
/// The catalog data itself never fails; these cover lookups driven by user
/// input and writing reports out.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown method: {0}")]
    UnknownMethod(String),

    #[error("no method uses selector {0}")]
    UnknownSignature(String),
}

impl CatalogError {
    pub fn unknown_category(key: impl Into<String>) -> Self {
        Self::UnknownCategory(key.into())
    }

    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod(name.into())
    }

    pub fn unknown_signature(selector: impl Into<String>) -> Self {
        Self::UnknownSignature(selector.into())
    }
}
