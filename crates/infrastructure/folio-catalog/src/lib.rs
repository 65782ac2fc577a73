mod error;
pub mod http;

pub use error::{CatalogError, CatalogErrorKind};
pub use http::{default_http_client, HttpCatalogClient};

use folio_core::RawCatalogRecord;

/// Read access to the external book catalog.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_book_by_id(&self, id: &str) -> Result<RawCatalogRecord, CatalogError>;

    /// Searches the catalog. An empty query falls back to the default query; at most
    /// `SEARCH_MAX_RESULTS` records are requested.
    async fn search_books(&self, query: &str) -> Result<Vec<RawCatalogRecord>, CatalogError>;
}

/// Query actually sent for a user-supplied search string.
pub fn effective_query(query: &str) -> &str {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        folio_config::DEFAULT_SEARCH_QUERY
    } else {
        trimmed
    }
}
