//! Central configuration constants for the catalog, the mapper fallbacks and runtime limits.

use std::time::Duration;

/// Catalog API root used when no base URL was provided at build time.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://www.googleapis.com/books/v1";

/// Catalog API root. Override at build time with `FOLIO_CATALOG_BASE_URL`.
pub fn catalog_base_url() -> &'static str {
    option_env!("FOLIO_CATALOG_BASE_URL").unwrap_or(DEFAULT_CATALOG_BASE_URL)
}

/// Query sent to the search endpoint when the caller passes an empty one.
pub const DEFAULT_SEARCH_QUERY: &str = "programming";

/// Upper bound on search results requested from the provider.
pub const SEARCH_MAX_RESULTS: u32 = 8;

/// Descriptions are cut to this many characters before the ellipsis is appended.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

pub const ELLIPSIS: &str = "...";

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Price shown when the provider has no list price.
pub const DEFAULT_PRICE: f64 = 12.49;

pub const UNKNOWN_TITLE: &str = "Untitled";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_PUBLISHER: &str = "Unknown Publisher";
pub const UNKNOWN_DATE: &str = "Unknown Date";
pub const UNKNOWN_LANGUAGE: &str = "Unknown Language";
pub const UNKNOWN_PAGE_COUNT: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description available.";

/// Quantity a fresh selection starts with.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Advisory lower bound shown by the quantity widget. Not enforced by the state machine.
pub const QUANTITY_INPUT_MIN: u32 = 1;

pub const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Capacity of the kernel's inbound event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Capacity of the in-memory bus's cart broadcast channel.
pub const CART_CHANNEL_CAPACITY: usize = 64;
