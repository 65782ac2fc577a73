use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use folio_core::{BookId, CartLineItem, SelectedBookState};
use tokio::sync::broadcast;
use tracing::debug;

use crate::{BusError, EventBus, SelectionCallback, Subscription};

type SharedCallback = Arc<dyn Fn(&SelectedBookState) + Send + Sync + 'static>;

/// Process-local bus used by the dev host and tests.
///
/// Selection behaves like a behavior subject: a new subscriber immediately receives the
/// current selection state. Cart items fan out to every [`InMemoryEventBus::cart_items`]
/// receiver.
#[derive(Clone)]
pub struct InMemoryEventBus {
    inner: Arc<Inner>,
}

struct Inner {
    selection: Mutex<SelectionSlot>,
    cart_tx: broadcast::Sender<CartLineItem>,
    cart_published: AtomicUsize,
}

#[derive(Default)]
struct SelectionSlot {
    current: SelectedBookState,
    next_id: u64,
    subscribers: BTreeMap<u64, SharedCallback>,
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        let (cart_tx, _) = broadcast::channel(folio_config::CART_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                selection: Mutex::new(SelectionSlot::default()),
                cart_tx,
                cart_published: AtomicUsize::new(0),
            }),
        }
    }

    /// Shell-side publish of a selection.
    pub fn set_selected_book(&self, id: impl Into<BookId>) {
        self.publish_selection(SelectedBookState::selected(id));
    }

    pub fn publish_selection(&self, state: SelectedBookState) {
        let callbacks: Vec<SharedCallback> = {
            let mut slot = self.inner.lock_selection();
            slot.current = state.clone();
            slot.subscribers.values().cloned().collect()
        };
        debug!(book = ?state.book, subscribers = callbacks.len(), "selection published");
        for cb in callbacks {
            cb(&state);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock_selection().subscribers.len()
    }

    /// Receiver for every cart item published after this call.
    pub fn cart_items(&self) -> broadcast::Receiver<CartLineItem> {
        self.inner.cart_tx.subscribe()
    }

    /// Number of cart items published since the bus was created.
    pub fn cart_published(&self) -> usize {
        self.inner.cart_published.load(Ordering::SeqCst)
    }
}

impl Inner {
    fn lock_selection(&self) -> MutexGuard<'_, SelectionSlot> {
        self.selection.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventBus for InMemoryEventBus {
    fn subscribe_selected_book(
        &self,
        callback: SelectionCallback,
    ) -> Result<Subscription, BusError> {
        let callback: SharedCallback = Arc::from(callback);
        let (id, current) = {
            let mut slot = self.inner.lock_selection();
            let id = slot.next_id;
            slot.next_id += 1;
            slot.subscribers.insert(id, callback.clone());
            (id, slot.current.clone())
        };
        debug!(subscription = id, "selection subscriber added");

        callback(&current);

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.lock_selection().subscribers.remove(&id);
                debug!(subscription = id, "selection subscriber released");
            }
        }))
    }

    fn add_to_cart(&self, item: CartLineItem) -> Result<(), BusError> {
        debug!(book_id = %item.book_id, quantity = item.quantity, "cart item published");
        self.inner.cart_published.fetch_add(1, Ordering::SeqCst);
        // No receivers is fine: the cart application may not be mounted yet.
        let _ = self.inner.cart_tx.send(item);
        Ok(())
    }
}
