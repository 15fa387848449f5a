//! Root-owned list state and the single place it is mutated

use crate::constants::{MENU_ENTRIES, REFRESH_ITEM, SEED_ITEMS};
use crate::types::{Action, Item, MenuItem, Presenter};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ListState {
    pub items: Vec<Item>,
    pub menu_items: Vec<MenuItem>,
    pub selected_tag: i32,
}

impl Default for ListState {
    fn default() -> Self {
        Self::with_selected_tag(0)
    }
}

impl ListState {
    pub fn with_selected_tag(selected_tag: i32) -> Self {
        Self {
            items: SEED_ITEMS
                .iter()
                .map(|&(title, color)| Item::new(title, color))
                .collect(),
            menu_items: MENU_ENTRIES
                .iter()
                .map(|&(title, tag)| MenuItem::new(title, tag))
                .collect(),
            selected_tag,
        }
    }

    pub fn presenter(&self) -> Option<Presenter> {
        Presenter::from_tag(self.selected_tag)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Select(tag) => {
                if tag != self.selected_tag {
                    info!(from = self.selected_tag, to = tag, "Selection changed");
                }
                self.selected_tag = tag;
            }
            Action::Refresh => {
                let (title, color) = REFRESH_ITEM;
                self.items.push(Item::new(title, color));
                info!(count = self.items.len(), "Refreshed list");
            }
        }
    }
}
