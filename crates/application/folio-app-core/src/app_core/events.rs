use folio_core::{BookId, BookViewModel};

use crate::domain::RequestToken;

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Inbound from the shell
    SelectionReceived(BookId),

    // Fetch lifecycle
    FetchStarted {
        book_id: BookId,
        token: RequestToken,
    },
    BookLoaded {
        token: RequestToken,
        book: BookViewModel,
    },
    FetchFailed {
        token: RequestToken,
        message: String,
    },

    // Local UI state
    MainImageChanged(String),
    QuantityChanged(u32),
}

impl DomainEvent {
    /// Token of a fetch outcome, if this is one.
    pub fn fetch_token(&self) -> Option<RequestToken> {
        match self {
            DomainEvent::BookLoaded { token, .. } | DomainEvent::FetchFailed { token, .. } => {
                Some(*token)
            }
            _ => None,
        }
    }
}
