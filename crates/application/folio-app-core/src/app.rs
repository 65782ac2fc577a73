use std::sync::Arc;

use anyhow::Context;
use folio_bus::EventBus;
use folio_catalog::HttpCatalogClient;

use crate::app_core::AppStore;
use crate::kernel::AppKernel;

/// The detail view wired to the real catalog.
pub type FolioApplication = AppKernel<HttpCatalogClient>;

/// Builds the detail view against the configured catalog and the given bus. The view is
/// not mounted yet; call [`AppKernel::mount`] once the host is ready.
pub fn build_application(bus: Arc<dyn EventBus>) -> anyhow::Result<FolioApplication> {
    let client = folio_catalog::default_http_client().context("Failed to build HTTP client")?;
    let catalog = HttpCatalogClient::from_config(client).context("Invalid catalog base URL")?;
    Ok(AppKernel::new(AppStore::default(), catalog, bus))
}
