use folio_core::{BookId, BookViewModel};

/// Identifies one catalog fetch. Strictly increasing per kernel.
pub type RequestToken = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPhase {
    /// No selection yet; the promotional placeholder is shown.
    Idle,
    Loading {
        book_id: BookId,
        token: RequestToken,
    },
    Loaded,
    /// Last fetch failed. Whatever was displayed before stays displayed.
    Error { message: String },
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: DetailPhase,
    pub book: Option<BookViewModel>,
    pub main_image: String,
    pub quantity: u32,
    pub selected_book_id: Option<BookId>,
    pub latest_request: Option<RequestToken>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: DetailPhase::Idle,
            book: None,
            main_image: String::new(),
            quantity: folio_config::DEFAULT_QUANTITY,
            selected_book_id: None,
            latest_request: None,
        }
    }
}

impl AppState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DetailPhase::Loading { .. })
    }

    pub fn is_current_request(&self, token: RequestToken) -> bool {
        self.latest_request == Some(token)
    }
}

/// Reads the quantity field the way a numeric input reports it: empty is zero,
/// fractions are truncated. Negative or non-numeric text yields `None`.
pub fn parse_quantity_input(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Ok(n) = trimmed.parse::<u32>() {
        return Some(n);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f <= u32::MAX as f64 => Some(f.trunc() as u32),
        _ => None,
    }
}
