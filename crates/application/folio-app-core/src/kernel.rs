use std::sync::Arc;

use folio_bus::{BusError, EventBus, Subscription};
use folio_catalog::CatalogClient;
use folio_core::{map_to_view_model, BookId, CartLineItem, SelectedBookState};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::{parse_quantity_input, RequestToken};

/// Called after an event is queued for [`AppKernel::tick`], so a host that only ticks
/// when it redraws knows to redraw.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Drives the detail view: owns the bus subscription, runs catalog fetches off the UI
/// thread and funnels every outcome back through [`AppKernel::tick`].
pub struct AppKernel<C: CatalogClient + 'static> {
    pub store: AppStore,
    catalog: Arc<C>,
    bus: Arc<dyn EventBus>,

    subscription: Option<Subscription>,
    next_token: RequestToken,
    in_flight: Option<CancellationToken>,
    waker: Option<Waker>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<C: CatalogClient + 'static> AppKernel<C> {
    pub fn new(store: AppStore, catalog: C, bus: Arc<dyn EventBus>) -> Self {
        let (tx, rx) = mpsc::channel(folio_config::EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            catalog: Arc::new(catalog),
            bus,
            subscription: None,
            next_token: 0,
            in_flight: None,
            waker: None,
            tx,
            rx,
        }
    }

    /// Installs the wake hook. Set it before [`AppKernel::mount`]; an active subscription
    /// keeps the hook it was created with.
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.waker = Some(Arc::new(waker));
    }

    /// Subscribes to the shell's selection stream. Calling it again while mounted is a no-op.
    pub fn mount(&mut self) -> Result<(), BusError> {
        if self.subscription.is_some() {
            return Ok(());
        }

        let tx = self.tx.clone();
        let waker = self.waker.clone();
        let subscription = self
            .bus
            .subscribe_selected_book(Box::new(move |state: &SelectedBookState| {
                let Some(book_id) = state.selected_id() else {
                    return;
                };
                debug!(book_id, "selection received from bus");
                match tx.try_send(DomainEvent::SelectionReceived(book_id.to_string())) {
                    Ok(()) => {
                        if let Some(wake) = &waker {
                            wake();
                        }
                    }
                    Err(e) => warn!(book_id, "dropping selection: {e}"),
                }
            }))?;

        self.subscription = Some(subscription);
        Ok(())
    }

    /// Releases the bus subscription and cancels any fetch in flight. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        self.cancel_in_flight();
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::SelectBook(book_id) => self.start_fetch(book_id),

            AppCommand::SelectThumbnail(url) => {
                self.store.apply(DomainEvent::MainImageChanged(url));
            }

            AppCommand::SetQuantity(quantity) => {
                self.store.apply(DomainEvent::QuantityChanged(quantity));
            }

            AppCommand::SetQuantityInput(input) => match parse_quantity_input(&input) {
                Some(quantity) => self.store.apply(DomainEvent::QuantityChanged(quantity)),
                None => debug!(input = %input, "ignoring non-numeric quantity input"),
            },

            AppCommand::AddToCart => {
                let item = self.store.with_state(|state| {
                    state
                        .book
                        .as_ref()
                        .map(|book| CartLineItem::for_book(book, state.quantity))
                });
                let Some(item) = item else {
                    debug!("add to cart ignored: no book loaded");
                    return;
                };

                info!(book_id = %item.book_id, quantity = item.quantity, "adding to cart");
                if let Err(e) = self.bus.add_to_cart(item) {
                    error!("Failed to publish cart item: {e}");
                }
            }
        }
    }

    /// Call this from the UI loop to apply inbound selections and fetch outcomes.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            match ev {
                DomainEvent::SelectionReceived(book_id) => {
                    self.store
                        .apply(DomainEvent::SelectionReceived(book_id.clone()));
                    self.start_fetch(book_id);
                }
                ev => {
                    if let Some(token) = ev.fetch_token() {
                        let current = self.store.state().latest_request;
                        if current != Some(token) {
                            debug!(token, ?current, "discarding stale fetch outcome");
                            continue;
                        }
                        self.in_flight = None;
                    }
                    self.store.apply(ev);
                }
            }
        }
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    fn start_fetch(&mut self, book_id: BookId) {
        self.cancel_in_flight();
        self.next_token += 1;
        let token = self.next_token;

        info!(book_id = %book_id, token, "fetching book details");
        self.store.apply(DomainEvent::FetchStarted {
            book_id: book_id.clone(),
            token,
        });

        let rt = match crate::async_runtime::runtime() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to start async runtime: {e}");
                self.store.apply(DomainEvent::FetchFailed {
                    token,
                    message: format!("Failed to start async runtime: {e}"),
                });
                return;
            }
        };

        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());
        let catalog = self.catalog.clone();
        let tx = self.tx.clone();
        let waker = self.waker.clone();

        rt.spawn(async move {
            let ev = tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(book_id = %book_id, token, "fetch cancelled");
                    return;
                }
                res = catalog.fetch_book_by_id(&book_id) => match res {
                    Ok(raw) => DomainEvent::BookLoaded {
                        token,
                        book: map_to_view_model(&raw),
                    },
                    Err(e) => {
                        warn!(book_id = %book_id, kind = ?e.kind(), "Error fetching book details: {e}");
                        DomainEvent::FetchFailed {
                            token,
                            message: e.to_string(),
                        }
                    }
                },
            };
            if tx.send(ev).await.is_ok() {
                if let Some(wake) = waker {
                    wake();
                }
            }
        });
    }
}

impl<C: CatalogClient + 'static> Drop for AppKernel<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
