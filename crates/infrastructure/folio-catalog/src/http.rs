use folio_core::{CatalogSearchResponse, RawCatalogRecord};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{effective_query, CatalogClient, CatalogError};

/// Shared HTTP client with the catalog timeouts applied.
pub fn default_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(folio_config::HTTP_CONNECT_TIMEOUT)
        .timeout(folio_config::HTTP_REQUEST_TIMEOUT)
        .build()
}

/// Catalog client for the Google Books `volumes` resource (or anything serving its shape).
pub struct HttpCatalogClient {
    client: Client,
    base: Url,
}

/// Parses a base URL and makes sure it ends with `/` so relative joins append to it.
fn normalize_base(base_url: &str) -> Result<Url, CatalogError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| CatalogError::InvalidUrl(format!("{base_url}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(CatalogError::InvalidUrl(format!(
            "{base_url}: cannot be used as a base"
        )));
    }
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

impl HttpCatalogClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            client,
            base: normalize_base(base_url)?,
        })
    }

    /// Client against the build-time configured catalog.
    pub fn from_config(client: Client) -> Result<Self, CatalogError> {
        Self::new(client, folio_config::catalog_base_url())
    }

    pub(crate) fn volume_url(&self, id: &str) -> Result<Url, CatalogError> {
        let mut url = self.volumes_url()?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl(self.base.to_string()))?
            .push(id);
        Ok(url)
    }

    pub(crate) fn search_url(&self, query: &str) -> Result<Url, CatalogError> {
        let mut url = self.volumes_url()?;
        url.query_pairs_mut()
            .append_pair("q", effective_query(query))
            .append_pair(
                "maxResults",
                &folio_config::SEARCH_MAX_RESULTS.to_string(),
            );
        Ok(url)
    }

    fn volumes_url(&self) -> Result<Url, CatalogError> {
        self.base
            .join("volumes")
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {e}", self.base)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let url_str = url.to_string();
        debug!(url = %url_str, "catalog GET");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Network {
                url: url_str.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status,
                url: url_str,
            });
        }

        let bytes = resp.bytes().await.map_err(|source| CatalogError::Network {
            url: url_str.clone(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| CatalogError::Malformed {
            url: url_str,
            source,
        })
    }
}

#[async_trait::async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_book_by_id(&self, id: &str) -> Result<RawCatalogRecord, CatalogError> {
        let url = self.volume_url(id)?;
        self.get_json(url).await
    }

    async fn search_books(&self, query: &str) -> Result<Vec<RawCatalogRecord>, CatalogError> {
        let url = self.search_url(query)?;
        let resp: CatalogSearchResponse = self.get_json(url).await?;
        Ok(resp.items)
    }
}
