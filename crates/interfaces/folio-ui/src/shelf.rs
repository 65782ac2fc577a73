//! Search results for the dev host's shelf. Runs off the UI thread and reports back
//! over a channel drained each frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use folio_catalog::{CatalogClient, HttpCatalogClient};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShelfEntry {
    pub id: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShelfState {
    Idle,
    Searching,
    Ready(Vec<ShelfEntry>),
    Error { message: String },
}

pub struct ShelfClient {
    busy: Arc<AtomicBool>,
    tx: mpsc::Sender<ShelfState>,
}

impl ShelfClient {
    pub fn new() -> (Self, mpsc::Receiver<ShelfState>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                busy: Arc::new(AtomicBool::new(false)),
                tx,
            },
            rx,
        )
    }

    pub fn start_search(&self, query: String) {
        if self.busy.swap(true, Ordering::SeqCst) {
            return;
        }

        let tx = self.tx.clone();
        let busy = self.busy.clone();

        thread::spawn(move || {
            let _ = tx.send(ShelfState::Searching);

            let state = match search(&query) {
                Ok(entries) => ShelfState::Ready(entries),
                Err(message) => {
                    tracing::warn!("Shelf search failed: {message}");
                    ShelfState::Error { message }
                }
            };

            let _ = tx.send(state);
            busy.store(false, Ordering::SeqCst);
        });
    }
}

fn search(query: &str) -> Result<Vec<ShelfEntry>, String> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| e.to_string())?;
    let client = folio_catalog::default_http_client().map_err(|e| e.to_string())?;
    let catalog = HttpCatalogClient::from_config(client).map_err(|e| e.to_string())?;

    let records = rt
        .block_on(catalog.search_books(query))
        .map_err(|e| e.to_string())?;

    Ok(records
        .iter()
        .map(|record| ShelfEntry {
            id: record.id.clone(),
            title: folio_core::map_to_view_model(record).title,
        })
        .collect())
}
