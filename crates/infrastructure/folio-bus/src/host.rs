//! The process-wide bus installed by the hosting shell at load time.
//!
//! Nothing here falls back to a private bus: calling through [`HostBus`] before the
//! shell has called [`install`] fails with [`BusError::IntegrationMissing`].

use std::sync::{Arc, OnceLock};

use folio_core::CartLineItem;

use crate::{BusError, EventBus, SelectionCallback, Subscription};

static HOST_BUS: OnceLock<Arc<dyn EventBus>> = OnceLock::new();

/// Installs the shell's bus. Only one bus can be installed per process.
pub fn install(bus: Arc<dyn EventBus>) -> Result<(), BusError> {
    HOST_BUS.set(bus).map_err(|_| BusError::AlreadyInstalled)?;
    tracing::info!("host event bus installed");
    Ok(())
}

pub fn installed() -> Result<Arc<dyn EventBus>, BusError> {
    HOST_BUS.get().cloned().ok_or(BusError::IntegrationMissing)
}

pub fn is_installed() -> bool {
    HOST_BUS.get().is_some()
}

/// Proxy that resolves the installed bus on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostBus;

impl EventBus for HostBus {
    fn subscribe_selected_book(
        &self,
        callback: SelectionCallback,
    ) -> Result<Subscription, BusError> {
        installed()?.subscribe_selected_book(callback)
    }

    fn add_to_cart(&self, item: CartLineItem) -> Result<(), BusError> {
        installed()?.add_to_cart(item)
    }
}
