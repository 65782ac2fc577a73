use crate::domain::{AppState, DetailPhase};

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::SelectionReceived(book_id) => {
            state.selected_book_id = Some(book_id);
        }

        DomainEvent::FetchStarted { book_id, token } => {
            state.selected_book_id = Some(book_id.clone());
            state.latest_request = Some(token);
            state.phase = DetailPhase::Loading { book_id, token };
        }

        DomainEvent::BookLoaded { token, book } => {
            if !state.is_current_request(token) {
                return state;
            }
            state.main_image = book.primary_image().to_string();
            state.quantity = folio_config::DEFAULT_QUANTITY;
            state.book = Some(book);
            state.phase = DetailPhase::Loaded;
        }

        DomainEvent::FetchFailed { token, message } => {
            if !state.is_current_request(token) {
                return state;
            }
            state.phase = DetailPhase::Error { message };
        }

        DomainEvent::MainImageChanged(url) => {
            let is_known_image = state
                .book
                .as_ref()
                .is_some_and(|b| b.images.iter().any(|img| *img == url));
            if is_known_image {
                state.main_image = url;
            }
        }

        DomainEvent::QuantityChanged(quantity) => state.quantity = quantity,
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::BookViewModel;

    fn book(id: &str) -> BookViewModel {
        BookViewModel {
            id: id.to_string(),
            title: format!("Title {id}"),
            author: "Someone".into(),
            price: "12.49".into(),
            description: "No description available.".into(),
            publisher: "Unknown Publisher".into(),
            publication_date: "Unknown Date".into(),
            language: "en".into(),
            page_count: "N/A".into(),
            images: [format!("https://img/{id}/1.jpg"), format!("https://img/{id}/2.jpg")],
        }
    }

    fn loaded(id: &str, token: u64) -> AppState {
        let state = reduce(
            AppState::default(),
            DomainEvent::FetchStarted {
                book_id: id.into(),
                token,
            },
        );
        reduce(
            state,
            DomainEvent::BookLoaded {
                token,
                book: book(id),
            },
        )
    }

    #[test]
    fn fetch_started_enters_loading_and_keeps_previous_book() {
        let state = loaded("a", 1);
        let state = reduce(
            state,
            DomainEvent::FetchStarted {
                book_id: "b".into(),
                token: 2,
            },
        );

        assert_eq!(
            state.phase,
            DetailPhase::Loading {
                book_id: "b".into(),
                token: 2
            }
        );
        assert_eq!(state.book.as_ref().map(|b| b.id.as_str()), Some("a"));
    }

    #[test]
    fn book_loaded_resets_main_image_and_quantity() {
        let mut state = loaded("a", 1);
        state = reduce(state, DomainEvent::QuantityChanged(5));
        state = reduce(state, DomainEvent::MainImageChanged("https://img/a/2.jpg".into()));
        state = reduce(
            state,
            DomainEvent::FetchStarted {
                book_id: "b".into(),
                token: 2,
            },
        );
        state = reduce(
            state,
            DomainEvent::BookLoaded {
                token: 2,
                book: book("b"),
            },
        );

        assert_eq!(state.phase, DetailPhase::Loaded);
        assert_eq!(state.quantity, 1);
        assert_eq!(state.main_image, "https://img/b/1.jpg");
    }

    #[test]
    fn stale_outcomes_are_ignored() {
        let state = reduce(
            loaded("a", 1),
            DomainEvent::FetchStarted {
                book_id: "b".into(),
                token: 2,
            },
        );

        let state = reduce(
            state,
            DomainEvent::BookLoaded {
                token: 1,
                book: book("stale"),
            },
        );
        let state = reduce(
            state,
            DomainEvent::FetchFailed {
                token: 1,
                message: "late failure".into(),
            },
        );

        assert!(state.is_loading());
        assert_eq!(state.book.as_ref().map(|b| b.id.as_str()), Some("a"));
    }

    #[test]
    fn failure_keeps_model_quantity_and_main_image() {
        let mut state = loaded("a", 1);
        state = reduce(state, DomainEvent::QuantityChanged(4));
        state = reduce(state, DomainEvent::MainImageChanged("https://img/a/2.jpg".into()));
        state = reduce(
            state,
            DomainEvent::FetchStarted {
                book_id: "b".into(),
                token: 2,
            },
        );
        state = reduce(
            state,
            DomainEvent::FetchFailed {
                token: 2,
                message: "boom".into(),
            },
        );

        assert_eq!(
            state.phase,
            DetailPhase::Error {
                message: "boom".into()
            }
        );
        assert_eq!(state.book, Some(book("a")));
        assert_eq!(state.quantity, 4);
        assert_eq!(state.main_image, "https://img/a/2.jpg");
    }

    #[test]
    fn thumbnail_outside_current_book_is_ignored() {
        let state = reduce(
            loaded("a", 1),
            DomainEvent::MainImageChanged("https://elsewhere/x.jpg".into()),
        );
        assert_eq!(state.main_image, "https://img/a/1.jpg");

        let idle = reduce(
            AppState::default(),
            DomainEvent::MainImageChanged("https://img/a/1.jpg".into()),
        );
        assert_eq!(idle.main_image, "");
    }

    #[test]
    fn quantity_is_not_clamped() {
        let state = reduce(loaded("a", 1), DomainEvent::QuantityChanged(0));
        assert_eq!(state.quantity, 0);
    }
}
