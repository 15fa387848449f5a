//! Application constants and seed data

use crate::types::ItemColor;

pub const APP_NAME: &str = "Color List";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DATA_DIR_NAME: &str = "Color List";

/// Items shown on launch, in display order
pub const SEED_ITEMS: &[(&str, ItemColor)] = &[
    ("Blue", ItemColor::Blue),
    ("Yellow", ItemColor::Yellow),
    ("Red", ItemColor::Red),
    ("Gray", ItemColor::Gray),
];

/// Menu entries as (title, tag)
pub const MENU_ENTRIES: &[(&str, i32)] = &[
    ("List", 0),
    ("List without separator", 1),
    ("ScrollView + VStack", 2),
];

/// Item appended by every refresh
pub const REFRESH_ITEM: (&str, ItemColor) = ("Purple", ItemColor::Purple);
