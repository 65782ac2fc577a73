use crate::shelf::ShelfState;
use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct ShellResponse {
    pub selected_id: Option<String>,
    pub refresh_clicked: bool,
}

/// The host strip: stands in for the surrounding storefront by publishing selections
/// and counting what lands in the cart.
pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    shelf: &ShelfState,
    selected_id: Option<&str>,
    cart_count: u32,
) -> ShellResponse {
    let mut resp = ShellResponse {
        selected_id: None,
        refresh_clicked: false,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(8.0),
        gap: length(12.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_SURFACE)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.label(
                egui::RichText::new("B-WORLD")
                    .size(14.0)
                    .extra_letter_spacing(2.0)
                    .strong()
                    .color(COL_ACCENT),
            );

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                flex_grow: 1.0,
                min_size: taffy::Size {
                    width: length(0.0),
                    height: length(0.0),
                },
                overflow: taffy::Point {
                    x: taffy::Overflow::Scroll,
                    y: taffy::Overflow::Hidden,
                },
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| match shelf {
                ShelfState::Idle | ShelfState::Searching => {
                    tui.ui_add(egui::Spinner::new());
                    tui.colored_label(COL_TEXT_DIM, "Loading shelf");
                }
                ShelfState::Error { message } => {
                    tui.colored_label(COL_WARN, format!("Shelf unavailable: {message}"));
                }
                ShelfState::Ready(entries) if entries.is_empty() => {
                    tui.colored_label(COL_TEXT_DIM, "No books on the shelf");
                }
                ShelfState::Ready(entries) => {
                    for entry in entries {
                        let is_selected = selected_id == Some(entry.id.as_str());
                        let clicked = tui
                            .id(egui_taffy::tid(("shelf", &entry.id)))
                            .ui(|ui| {
                                ui.add(egui::Button::selectable(
                                    is_selected,
                                    egui::RichText::new(&entry.title).size(12.0),
                                ))
                            })
                            .clicked();
                        if clicked {
                            resp.selected_id = Some(entry.id.clone());
                        }
                    }
                }
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                flex_shrink: 0.0,
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                let searching = matches!(shelf, ShelfState::Searching);
                resp.refresh_clicked |= tui
                    .ui(|ui| cmd_button(ui, "Refresh", "secondary", !searching))
                    .clicked();
                tui.label(
                    egui::RichText::new(format!("CART: {cart_count}"))
                        .size(12.0)
                        .strong()
                        .color(COL_TEXT),
                );
            });
        },
    );

    resp
}
