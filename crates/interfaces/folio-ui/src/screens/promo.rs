use crate::theme::*;
use crate::utils::section_label;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use folio_app_core::PromoVm;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &PromoVm) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        align_items: Some(taffy::AlignItems::Center),
        gap: length(12.0),
        padding: length(24.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.label(
            egui::RichText::new(vm.heading)
                .size(26.0)
                .strong()
                .color(COL_TEXT),
        );
        tui.colored_label(COL_TEXT_DIM, vm.tagline);

        if vm.is_loading {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.ui_add(egui::Spinner::new());
                tui.colored_label(COL_TEXT_DIM, "Loading book details");
            });
        }

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(8.0),
            padding: length(20.0),
            max_size: taffy::Size {
                width: length(640.0),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_SURFACE)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0),
            |tui| {
                tui.ui(|ui| section_label(ui, "FEATURED"));
                tui.label(
                    egui::RichText::new(vm.featured_title)
                        .size(20.0)
                        .strong()
                        .color(COL_TEXT),
                );
                tui.colored_label(COL_TEXT_DIM, vm.featured_authors);
                tui.label(
                    egui::RichText::new(vm.price_label)
                        .size(16.0)
                        .strong()
                        .color(COL_PRICE),
                );
                tui.ui(|ui| ui.add(egui::Label::new(vm.pitch).wrap()));
            },
        );
    });
}
