#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("catalog returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("catalog response from {url} is malformed: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid catalog url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorKind {
    NetworkFailure,
    MalformedResponse,
}

impl CatalogError {
    /// Collapses the error into the two failure classes callers act on.
    pub fn kind(&self) -> CatalogErrorKind {
        match self {
            CatalogError::Network { .. } | CatalogError::Status { .. } => {
                CatalogErrorKind::NetworkFailure
            }
            CatalogError::Malformed { .. } | CatalogError::InvalidUrl(_) => {
                CatalogErrorKind::MalformedResponse
            }
        }
    }
}
