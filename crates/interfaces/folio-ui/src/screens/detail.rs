use crate::theme::*;
use crate::utils::{cmd_button, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use folio_app_core::{BookDetailVm, MetaRowVm, ThumbnailVm};

const THUMB_SIZE: egui::Vec2 = egui::vec2(72.0, 104.0);
const COVER_SIZE: egui::Vec2 = egui::vec2(280.0, 400.0);

#[derive(Default)]
pub struct DetailResponse {
    pub thumbnail_clicked: Option<String>,
    /// The quantity field was edited; its text is in the buffer passed to [`draw`].
    pub quantity_edited: bool,
    pub add_to_cart: bool,
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    vm: &BookDetailVm,
    quantity_text: &mut String,
) -> DetailResponse {
    let mut resp = DetailResponse::default();

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        align_items: Some(taffy::AlignItems::FlexStart),
        gap: length(20.0),
        padding: length(20.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(8.0),
            flex_shrink: 0.0,
            ..Default::default()
        })
        .add(|tui| {
            for thumb in &vm.thumbnails {
                if thumbnail(&mut *tui, thumb) {
                    resp.thumbnail_clicked = Some(thumb.url.clone());
                }
            }
        });

        tui.style(taffy::Style {
            flex_shrink: 0.0,
            padding: length(4.0),
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_SURFACE)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0),
            |tui| {
                tui.ui_add(
                    egui::Image::new(vm.main_image.as_str())
                        .fit_to_exact_size(COVER_SIZE)
                        .maintain_aspect_ratio(true)
                        .alt_text(&vm.title),
                );
            },
        );

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(10.0),
            flex_grow: 1.0,
            flex_basis: length(0.0),
            min_size: taffy::Size {
                width: length(0.0),
                height: length(0.0),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new(&vm.title)
                        .size(24.0)
                        .strong()
                        .color(COL_TEXT),
                );
                if vm.is_loading {
                    tui.ui_add(egui::Spinner::new());
                }
            });
            tui.colored_label(COL_TEXT_DIM, &vm.byline);
            tui.label(
                egui::RichText::new(&vm.price_label)
                    .size(20.0)
                    .strong()
                    .color(COL_PRICE),
            );

            tui.ui(|ui| ui.add(egui::Label::new(&vm.description).wrap()));

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.ui(|ui| section_label(ui, "QUANTITY"));
                resp.quantity_edited |= tui
                    .ui_add(
                        egui::TextEdit::singleline(quantity_text)
                            .hint_text(vm.quantity_min.to_string())
                            .desired_width(56.0),
                    )
                    .changed();
                resp.add_to_cart |= tui
                    .ui(|ui| cmd_button(ui, "Add to cart", "primary", true))
                    .clicked();
            });

            tui.separator();

            for row in &vm.meta {
                meta_row(&mut *tui, row);
            }
        });
    });

    resp
}

fn thumbnail<'a>(tui: impl TuiBuilderLogic<'a>, vm: &ThumbnailVm) -> bool {
    let mut clicked = false;
    tui.id(egui_taffy::tid(("thumb", &vm.url, &vm.label)))
        .style(taffy::Style {
            padding: length(2.0),
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_SURFACE)
                .with_border_color(if vm.is_main { COL_ACCENT } else { COL_BORDER })
                .with_border_width(if vm.is_main { 2.0 } else { 1.0 }),
            |tui| {
                clicked = tui
                    .ui_add(
                        egui::Image::new(vm.url.as_str())
                            .fit_to_exact_size(THUMB_SIZE)
                            .maintain_aspect_ratio(true)
                            .alt_text(&vm.label)
                            .sense(egui::Sense::click()),
                    )
                    .on_hover_text(&vm.label)
                    .clicked();
            },
        );
    clicked
}

fn meta_row<'a>(tui: impl TuiBuilderLogic<'a>, row: &MetaRowVm) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        gap: length(8.0),
        ..Default::default()
    })
    .add(|tui| {
        tui.label(
            egui::RichText::new(format!("{}:", row.label))
                .strong()
                .color(COL_TEXT),
        );
        tui.colored_label(COL_TEXT_DIM, &row.value);
    });
}
