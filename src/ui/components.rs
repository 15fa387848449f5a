//! Reusable UI components
//!
//! Standalone widgets shared by the menu strip and the list presenters.

use crate::theme;
use crate::types::ItemColor;
use eframe::egui;

/// Colored circle marker followed by the item title
pub fn item_row(ui: &mut egui::Ui, title: &str, color: ItemColor) -> egui::Response {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(theme::MARKER_SIZE, theme::MARKER_SIZE),
            egui::Sense::hover(),
        );
        if ui.is_rect_visible(rect) {
            ui.painter()
                .circle_filled(rect.center(), theme::MARKER_SIZE / 2.0, theme::item_color(color));
        }
        ui.add(
            egui::Label::new(
                egui::RichText::new(title)
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
    })
    .response
}

/// Full-width horizontal rule, inset on the leading edge
pub fn divider(ui: &mut egui::Ui, color: egui::Color32, inset: f32) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(width, theme::DIVIDER_HEIGHT),
        egui::Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        let rule = egui::Rect::from_min_max(egui::pos2(rect.min.x + inset, rect.min.y), rect.max);
        ui.painter().rect_filled(rule, 0.0, color);
    }
}

/// Outlined pill used in the menu strip. Returns the click response.
pub fn menu_entry(ui: &mut egui::Ui, title: &str, selected: bool) -> egui::Response {
    let font = egui::FontId::proportional(theme::FONT_BODY);
    let galley = ui.fonts(|f| f.layout_no_wrap(title.to_owned(), font.clone(), theme::TEXT_PRIMARY));
    let size = galley.size() + theme::MENU_PADDING * 2.0;

    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let (stroke, fill) = theme::menu_entry_colors(selected, response.hovered());
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_MENU, fill);
        painter.rect_stroke(
            rect,
            theme::RADIUS_MENU,
            egui::Stroke::new(theme::STROKE_DEFAULT, stroke),
            egui::StrokeKind::Inside,
        );
        painter.text(rect.center(), egui::Align2::CENTER_CENTER, title, font, stroke);
    }

    response
}
