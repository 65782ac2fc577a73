//! Integration surface with the host shell.
//!
//! The detail view only ever sees the [`EventBus`] capability: a stream of selected
//! book ids in, cart line items out. Concrete transports live behind it.

mod error;
pub mod host;
pub mod memory;
mod subscription;

pub use error::BusError;
pub use host::HostBus;
pub use memory::InMemoryEventBus;
pub use subscription::Subscription;

use folio_core::{CartLineItem, SelectedBookState};

/// Invoked for every selection the shell publishes, on the publisher's thread.
pub type SelectionCallback = Box<dyn Fn(&SelectedBookState) + Send + Sync + 'static>;

pub trait EventBus: Send + Sync + 'static {
    /// Starts delivery of selection changes to `callback`. Delivery stops when the
    /// returned handle is released or dropped.
    fn subscribe_selected_book(&self, callback: SelectionCallback)
        -> Result<Subscription, BusError>;

    /// Enqueues an item for the cart application. No acknowledgment.
    fn add_to_cart(&self, item: CartLineItem) -> Result<(), BusError>;
}
