#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_app_core::{AppKernel, AppState};
use folio_catalog::{CatalogClient, CatalogError};
use folio_core::RawCatalogRecord;
use serde_json::{json, Value};

/// In-memory catalog with per-book latency and a request counter.
#[derive(Clone, Default)]
pub struct FakeCatalog {
    books: Arc<HashMap<String, (Value, Duration)>>,
    calls: Arc<AtomicUsize>,
}

impl FakeCatalog {
    pub fn new(books: Vec<(Value, Duration)>) -> Self {
        let books = books
            .into_iter()
            .map(|(json, delay)| {
                let id = json["id"].as_str().unwrap_or_default().to_string();
                (id, (json, delay))
            })
            .collect();
        Self {
            books: Arc::new(books),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CatalogClient for FakeCatalog {
    async fn fetch_book_by_id(&self, id: &str) -> Result<RawCatalogRecord, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Unknown ids come back without `volumeInfo`, which is a malformed response.
        let (json, delay) = self
            .books
            .get(id)
            .cloned()
            .unwrap_or_else(|| (json!({ "id": id }), Duration::ZERO));
        tokio::time::sleep(delay).await;
        serde_json::from_value(json).map_err(|source| CatalogError::Malformed {
            url: format!("fake://volumes/{id}"),
            source,
        })
    }

    async fn search_books(&self, _query: &str) -> Result<Vec<RawCatalogRecord>, CatalogError> {
        Ok(self
            .books
            .values()
            .filter_map(|(json, _)| serde_json::from_value(json.clone()).ok())
            .collect())
    }
}

pub fn record(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "volumeInfo": {
            "title": title,
            "authors": ["Frank Herbert"],
            "imageLinks": {
                "thumbnail": format!("https://img/{id}.jpg"),
                "smallThumbnail": format!("https://img/{id}-small.jpg")
            }
        }
    })
}

pub fn tick_until(
    kernel: &mut AppKernel<FakeCatalog>,
    what: &str,
    pred: impl Fn(&AppState) -> bool,
) {
    let deadline = Instant::now() + Duration::from_secs(3);
    while Instant::now() < deadline {
        kernel.tick();
        if pred(&kernel.store.state()) {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("timed out waiting for {what}");
}

pub fn loaded_book_id(state: &AppState) -> Option<&str> {
    state.book.as_ref().map(|b| b.id.as_str())
}
