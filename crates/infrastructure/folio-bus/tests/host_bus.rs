use std::sync::{Arc, Mutex};

use folio_bus::{host, BusError, EventBus, HostBus, InMemoryEventBus};
use folio_core::{CartLineItem, SelectedBookState};

fn item() -> CartLineItem {
    CartLineItem {
        title: "Dune".into(),
        image: "https://img/dune.jpg".into(),
        book_id: "abc123".into(),
        quantity: 3,
    }
}

// The host slot is process-wide, so the whole lifecycle lives in one test.
#[test]
fn host_bus_fails_until_installed_then_proxies() {
    assert!(!host::is_installed());
    assert_eq!(HostBus.add_to_cart(item()), Err(BusError::IntegrationMissing));
    let missing = HostBus.subscribe_selected_book(Box::new(|_: &SelectedBookState| {}));
    assert!(matches!(missing, Err(BusError::IntegrationMissing)));

    let bus = InMemoryEventBus::new();
    host::install(Arc::new(bus.clone())).unwrap();
    assert_eq!(
        host::install(Arc::new(InMemoryEventBus::new())),
        Err(BusError::AlreadyInstalled)
    );

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let sub = HostBus
        .subscribe_selected_book(Box::new(move |s: &SelectedBookState| {
            if let Some(id) = s.selected_id() {
                sink.lock().unwrap().push(id.to_string());
            }
        }))
        .unwrap();

    bus.set_selected_book("zyTCAlFPjgYC");
    let mut rx = bus.cart_items();
    HostBus.add_to_cart(item()).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["zyTCAlFPjgYC".to_string()]);
    assert_eq!(rx.try_recv().unwrap(), item());

    sub.unsubscribe();
    assert_eq!(bus.subscriber_count(), 0);
}
