use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod mapper;
pub mod text;

pub use catalog::{CatalogSearchResponse, ImageLinks, ListPrice, RawCatalogRecord, SaleInfo, VolumeInfo};
pub use mapper::map_to_view_model;

pub type BookId = String;

/// Normalized, always fully populated representation of a book used for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookViewModel {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub price: String,
    pub description: String,
    pub publisher: String,
    pub publication_date: String,
    pub language: String,
    pub page_count: String,
    /// Primary (thumbnail) then secondary (small thumbnail).
    pub images: [String; 2],
}

impl BookViewModel {
    pub fn primary_image(&self) -> &str {
        &self.images[0]
    }

    pub fn secondary_image(&self) -> &str {
        &self.images[1]
    }
}

/// Item handed to the cart application over the bus. Not retained locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub title: String,
    pub image: String,
    pub book_id: BookId,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn for_book(book: &BookViewModel, quantity: u32) -> Self {
        Self {
            title: book.title.clone(),
            image: book.primary_image().to_string(),
            book_id: book.id.clone(),
            quantity,
        }
    }
}

/// Payload of the shell's "selected book" stream: `{ "book": <id | null> }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedBookState {
    #[serde(default)]
    pub book: Option<BookId>,
}

impl SelectedBookState {
    pub fn selected(id: impl Into<BookId>) -> Self {
        Self {
            book: Some(id.into()),
        }
    }

    /// The selected id, if the shell actually selected something.
    pub fn selected_id(&self) -> Option<&str> {
        self.book
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
