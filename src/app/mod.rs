//! App module - contains the main application state and logic

mod menu;
mod refresh;
pub(crate) mod state;
mod views;

use crate::constants::MENU_ENTRIES;
use crate::settings::Settings;
use crate::theme;
use crate::types::Action;
use eframe::egui;
use state::ListState;
use tracing::{debug, warn};
use views::{ListOutput, ListViewState};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) state: ListState,
    pub(crate) list_view: ListViewState,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::with_settings(settings)
    }

    pub fn with_settings(settings: &Settings) -> Self {
        let known = MENU_ENTRIES.iter().any(|&(_, tag)| tag == settings.initial_tag);
        let initial_tag = if known {
            settings.initial_tag
        } else {
            warn!(tag = settings.initial_tag, "Unknown initial tag in settings, using first list");
            MENU_ENTRIES.first().map_or(0, |&(_, tag)| tag)
        };

        Self {
            state: ListState::with_selected_tag(initial_tag),
            list_view: ListViewState::new(settings.pull_threshold),
        }
    }

    pub fn apply(&mut self, action: Action) {
        if let Action::Select(tag) = action {
            if tag != self.state.selected_tag {
                self.list_view.reset();
            }
        }
        self.state.apply(action);
    }

    /// Menu strip followed by whichever presenter the selected tag names.
    pub fn render(&mut self, ui: &mut egui::Ui) -> ListOutput {
        ui.horizontal(|ui| {
            ui.add_space(theme::MENU_STRIP_PADDING);
            ui.label(
                egui::RichText::new(crate::constants::APP_NAME)
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
        });
        ui.add_space(theme::SPACING_SM);

        if let Some(action) = menu::render_menu(ui, &self.state.menu_items, self.state.selected_tag) {
            self.apply(action);
        }
        ui.add_space(theme::SPACING_MD);

        let output = match self.state.presenter() {
            Some(presenter) => {
                views::render_presenter(ui, presenter, &self.state.items, &mut self.list_view)
            }
            None => ListOutput::default(),
        };

        if let Some(action) = output.action {
            self.apply(action);
        }
        if output.action.is_some() {
            debug!(rows = output.rows, dividers = output.dividers, "List re-rendered");
        }
        output
    }
}
