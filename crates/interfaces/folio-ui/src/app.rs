use std::time::Duration;

use crate::components::shell;
use crate::screens::{detail, promo};
use crate::shelf::{ShelfClient, ShelfState};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};
use folio_app_core::{
    parse_quantity_input, viewmodel, AppCommand, DetailScreenVm, FolioApplication,
};
use folio_bus::InMemoryEventBus;
use folio_core::CartLineItem;
use tokio::sync::broadcast::{self, error::TryRecvError};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct FolioUiApp {
    core: FolioApplication,
    bus: InMemoryEventBus,
    shelf_client: ShelfClient,
    shelf_events: std::sync::mpsc::Receiver<ShelfState>,
    shelf_state: ShelfState,
    cart_events: broadcast::Receiver<CartLineItem>,
    cart_count: u32,
    quantity_text: String,
}

impl FolioUiApp {
    pub fn new(core: FolioApplication, bus: InMemoryEventBus) -> Self {
        let (shelf_client, shelf_events) = ShelfClient::new();
        shelf_client.start_search(String::new());
        let cart_events = bus.cart_items();

        Self {
            core,
            bus,
            shelf_client,
            shelf_events,
            shelf_state: ShelfState::Idle,
            cart_events,
            cart_count: 0,
            quantity_text: String::new(),
        }
    }

    fn drain_background(&mut self) -> bool {
        let mut changed = false;

        while let Ok(state) = self.shelf_events.try_recv() {
            changed |= state != self.shelf_state;
            self.shelf_state = state;
        }

        loop {
            match self.cart_events.try_recv() {
                Ok(item) => {
                    self.cart_count = self.cart_count.saturating_add(item.quantity);
                    changed = true;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "cart counter fell behind");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }

        changed
    }

    /// Keeps the quantity field in step with the store when the store moves on its own,
    /// e.g. the reset to one after a new book loads.
    fn sync_quantity_text(&mut self, quantity: u32) {
        if parse_quantity_input(&self.quantity_text) != Some(quantity) {
            self.quantity_text = quantity.to_string();
        }
    }
}

impl eframe::App for FolioUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.tick();
        if self.drain_background() {
            ctx.request_repaint();
        }

        let state = self.core.store.state();
        let screen = viewmodel::detail_screen_vm(&state);
        self.sync_quantity_text(state.quantity);

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::new(3).unwrap();
        });
        ctx.style_mut(|style| {
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let mut shell_resp = None;
        let mut detail_resp = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(48.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        shell_resp = Some(shell::draw(
                            tui,
                            &self.shelf_state,
                            state.selected_book_id.as_deref(),
                            self.cart_count,
                        ));
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: percent(1.),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Scroll,
                        },
                        ..Default::default()
                    })
                    .add(|tui| match &screen {
                        DetailScreenVm::Promo(vm) => promo::draw(tui, vm),
                        DetailScreenVm::Book(vm) => {
                            detail_resp = Some(detail::draw(tui, vm, &mut self.quantity_text));
                        }
                    });
                });
        });

        if let Some(resp) = shell_resp {
            if let Some(id) = resp.selected_id {
                self.bus.set_selected_book(id);
                ctx.request_repaint();
            }
            if resp.refresh_clicked {
                self.shelf_client.start_search(String::new());
            }
        }

        if let Some(resp) = detail_resp {
            if let Some(url) = resp.thumbnail_clicked {
                self.core.dispatch(AppCommand::SelectThumbnail(url));
            }
            if resp.quantity_edited {
                self.core
                    .dispatch(AppCommand::SetQuantityInput(self.quantity_text.clone()));
            }
            if resp.add_to_cart {
                self.core.dispatch(AppCommand::AddToCart);
            }
        }

        if state.is_loading() || matches!(self.shelf_state, ShelfState::Idle | ShelfState::Searching)
        {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}
