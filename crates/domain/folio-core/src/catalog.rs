//! Wire shapes of the catalog provider (Google Books `volumes` resource).
//!
//! Only `id` and `volumeInfo` are required; everything else is untrusted and optional
//! and gets defaulted by [`crate::mapper`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalogRecord {
    pub id: String,
    pub volume_info: VolumeInfo,
    #[serde(default)]
    pub sale_info: Option<SaleInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u64>,
    pub categories: Option<Vec<String>>,
    pub image_links: Option<ImageLinks>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleInfo {
    pub list_price: Option<ListPrice>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListPrice {
    pub amount: Option<f64>,
    pub currency_code: Option<String>,
}

/// Body of `GET /volumes?q=...`. The provider omits `items` when nothing matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSearchResponse {
    pub total_items: u64,
    pub items: Vec<RawCatalogRecord>,
}

impl RawCatalogRecord {
    pub fn list_price_amount(&self) -> Option<f64> {
        self.sale_info
            .as_ref()
            .and_then(|s| s.list_price.as_ref())
            .and_then(|p| p.amount)
    }
}
