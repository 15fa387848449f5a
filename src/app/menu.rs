//! Horizontal menu strip selecting the list style

use crate::theme;
use crate::types::{Action, MenuItem};
use crate::ui::components::menu_entry;
use eframe::egui;

/// Render one pill per menu entry. Returns a selection when an entry was activated.
pub fn render_menu(ui: &mut egui::Ui, menu_items: &[MenuItem], selected_tag: i32) -> Option<Action> {
    let mut action = None;

    egui::ScrollArea::horizontal()
        .id_salt("menu_strip")
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(theme::MENU_STRIP_PADDING);
                for item in menu_items {
                    let response = ui
                        .push_id(item.id, |ui| menu_entry(ui, &item.title, item.tag == selected_tag))
                        .inner;
                    if response.clicked() {
                        action = Some(Action::Select(item.tag));
                    }
                }
                ui.add_space(theme::MENU_STRIP_PADDING);
            });
        });

    action.or_else(|| shortcut_selection(ui, menu_items))
}

/// Number keys 1..=9 pick the matching menu entry
fn shortcut_selection(ui: &egui::Ui, menu_items: &[MenuItem]) -> Option<Action> {
    const KEYS: [egui::Key; 9] = [
        egui::Key::Num1,
        egui::Key::Num2,
        egui::Key::Num3,
        egui::Key::Num4,
        egui::Key::Num5,
        egui::Key::Num6,
        egui::Key::Num7,
        egui::Key::Num8,
        egui::Key::Num9,
    ];

    if ui.ctx().wants_keyboard_input() {
        return None;
    }
    ui.input(|i| {
        KEYS.iter()
            .zip(menu_items)
            .find(|(key, _)| i.key_pressed(**key))
            .map(|(_, item)| Action::Select(item.tag))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ListState;

    fn run_menu(state: &ListState, events: Vec<egui::Event>) -> Option<Action> {
        menu_frame(&egui::Context::default(), state, events).0
    }

    fn menu_frame(
        ctx: &egui::Context,
        state: &ListState,
        events: Vec<egui::Event>,
    ) -> (Option<Action>, egui::FullOutput) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            events,
            ..Default::default()
        };
        let mut action = None;
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(a) = render_menu(ui, &state.menu_items, state.selected_tag) {
                    action = Some(a);
                }
            });
        });
        (action, output)
    }

    /// Centre of the painted title of the entry labelled `title`
    fn entry_center(output: &egui::FullOutput, title: &str) -> Option<egui::Pos2> {
        output.shapes.iter().find_map(|clipped| match &clipped.shape {
            egui::Shape::Text(text) if text.galley.text() == title => {
                Some(text.visual_bounding_rect().center())
            }
            _ => None,
        })
    }

    fn pointer_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn key_press(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn no_input_selects_nothing() {
        let state = ListState::default();
        assert_eq!(run_menu(&state, Vec::new()), None);
    }

    #[test]
    fn number_keys_select_entries_by_position() {
        let state = ListState::default();
        assert_eq!(
            run_menu(&state, vec![key_press(egui::Key::Num3)]),
            Some(Action::Select(2))
        );
        assert_eq!(
            run_menu(&state, vec![key_press(egui::Key::Num2)]),
            Some(Action::Select(1))
        );
    }

    #[test]
    fn keys_past_last_entry_are_ignored() {
        let state = ListState::default();
        assert_eq!(run_menu(&state, vec![key_press(egui::Key::Num4)]), None);
    }

    #[test]
    fn activated_entry_becomes_selected() {
        let mut state = ListState::default();
        if let Some(action) = run_menu(&state, vec![key_press(egui::Key::Num2)]) {
            state.apply(action);
        }
        assert_eq!(state.selected_tag, 1);
    }

    #[test]
    fn clicking_an_entry_selects_its_tag() {
        let mut state = ListState::default();
        let ctx = egui::Context::default();

        let (_, first) = menu_frame(&ctx, &state, Vec::new());
        let center = entry_center(&first, "List without separator").expect("entry painted");

        let mut actions = Vec::new();
        for events in [
            vec![egui::Event::PointerMoved(center)],
            vec![pointer_button(center, true)],
            vec![pointer_button(center, false)],
        ] {
            if let Some(action) = menu_frame(&ctx, &state, events).0 {
                actions.push(action);
            }
        }

        assert_eq!(actions, [Action::Select(1)]);
        state.apply(actions[0]);
        assert_eq!(state.selected_tag, 1);
    }

    #[test]
    fn hovering_an_entry_without_clicking_selects_nothing() {
        let state = ListState::default();
        let ctx = egui::Context::default();

        let (_, first) = menu_frame(&ctx, &state, Vec::new());
        let center = entry_center(&first, "ScrollView + VStack").expect("entry painted");

        let (action, _) = menu_frame(&ctx, &state, vec![egui::Event::PointerMoved(center)]);
        assert_eq!(action, None);
    }
}
