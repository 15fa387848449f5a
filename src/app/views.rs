//! View rendering (standard list, list without separators, manual stack)

use super::refresh::{PullPhase, PullToRefresh};
use crate::theme;
use crate::types::{Action, Item, Presenter};
use crate::ui::components::{divider, item_row};
use eframe::egui;
use tracing::debug;

/// What a presenter drew this frame, plus any action it wants applied
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ListOutput {
    pub rows: usize,
    pub dividers: usize,
    pub action: Option<Action>,
}

/// Per-view interaction state kept across frames
pub struct ListViewState {
    pub pull: PullToRefresh,
    pub scroll_offset: f32,
}

impl ListViewState {
    pub fn new(pull_threshold: f32) -> Self {
        Self {
            pull: PullToRefresh::new(pull_threshold),
            scroll_offset: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.pull.reset();
        self.scroll_offset = 0.0;
    }
}

pub fn render_presenter(
    ui: &mut egui::Ui,
    presenter: Presenter,
    items: &[Item],
    view: &mut ListViewState,
) -> ListOutput {
    match presenter {
        Presenter::Standard | Presenter::NoSeparator => {
            render_list(ui, items, view, presenter.shows_dividers())
        }
        Presenter::ManualStack => render_stack(ui, items),
    }
}

/// Table-backed list with pull-to-refresh. Dividers sit between rows only.
fn render_list(
    ui: &mut egui::Ui,
    items: &[Item],
    view: &mut ListViewState,
    show_dividers: bool,
) -> ListOutput {
    use egui_extras::{Column, TableBuilder};

    let full_rect = ui.available_rect_before_wrap();

    let pulled = view.pull.track(ui, full_rect, view.scroll_offset);
    let f5 = !ui.ctx().wants_keyboard_input() && ui.input(|i| i.key_pressed(egui::Key::F5));
    let action = if pulled || f5 {
        debug!(pulled, f5, "Refresh requested");
        Some(Action::Refresh)
    } else {
        None
    };

    let pull_space = match view.pull.phase() {
        PullPhase::Idle => 0.0,
        PullPhase::Pulling(progress) => progress * theme::PULL_HINT_HEIGHT,
        PullPhase::Armed => theme::PULL_HINT_HEIGHT,
    };
    if pull_space > 0.0 {
        ui.add_space(pull_space);
    }

    let divider_x = theme::SPACING_LG + theme::MARKER_SIZE + theme::SPACING_MD;
    let mut rows = 0;
    let mut dividers = 0;

    let scroll_output = ui
        .push_id(if show_dividers { "list" } else { "list_plain" }, |ui| {
            TableBuilder::new(ui)
                .striped(false)
                .resizable(false)
                .auto_shrink([false; 2])
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::remainder())
                .min_scrolled_height(0.0)
                .body(|body| {
                    body.rows(theme::ROW_HEIGHT, items.len(), |mut row| {
                        let idx = row.index();
                        let item = &items[idx];
                        row.col(|ui| {
                            ui.add_space(theme::SPACING_LG);
                            item_row(ui, &item.title, item.color);

                            if show_dividers && idx + 1 < items.len() {
                                let rect = ui.max_rect();
                                ui.painter().hline(
                                    (rect.left() + divider_x)..=rect.right(),
                                    rect.bottom(),
                                    egui::Stroke::new(theme::STROKE_DEFAULT, theme::LIST_DIVIDER),
                                );
                                dividers += 1;
                            }
                        });
                        rows += 1;
                    });
                })
        })
        .inner;

    view.scroll_offset = scroll_output.state.offset.y;
    view.pull.paint_hint(ui, full_rect);

    ListOutput { rows, dividers, action }
}

/// Rows stacked by hand in a scroll area with painted dividers. No refresh.
fn render_stack(ui: &mut egui::Ui, items: &[Item]) -> ListOutput {
    let mut output = ListOutput::default();

    egui::ScrollArea::vertical()
        .id_salt("stack")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;
            for (idx, item) in items.iter().enumerate() {
                ui.push_id(item.id, |ui| {
                    ui.allocate_ui_with_layout(
                        egui::vec2(ui.available_width(), theme::STACK_ROW_MIN_HEIGHT),
                        egui::Layout::left_to_right(egui::Align::Center),
                        |ui| {
                            ui.set_min_size(egui::vec2(
                                ui.available_width(),
                                theme::STACK_ROW_MIN_HEIGHT,
                            ));
                            ui.add_space(theme::MENU_STRIP_PADDING);
                            item_row(ui, &item.title, item.color);
                        },
                    );
                });
                output.rows += 1;

                if idx + 1 < items.len() {
                    divider(ui, theme::STACK_DIVIDER, theme::DIVIDER_INSET);
                    output.dividers += 1;
                }
            }
        });

    output
}
