//! Centralized theme constants for Color List
//! All colors, sizes, and styling should reference these constants

use crate::types::ItemColor;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x1f, 0x1f, 0x22);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Menu
// =============================================================================
pub const MENU_SELECTED: Color32 = Color32::from_rgb(0xff, 0x95, 0x00); // orange
pub const MENU_UNSELECTED: Color32 = Color32::from_rgb(0x8e, 0x8e, 0x93); // gray

// =============================================================================
// COLORS - Dividers
// =============================================================================
pub const LIST_DIVIDER: Color32 = BORDER_DEFAULT;
// gray @ 70%
pub const STACK_DIVIDER: Color32 = Color32::from_rgba_premultiplied(0x63, 0x63, 0x66, 0xb3);

// =============================================================================
// COLORS - Items
// =============================================================================
pub fn item_color(color: ItemColor) -> Color32 {
    match color {
        ItemColor::Blue => Color32::from_rgb(0x00, 0x7a, 0xff),
        ItemColor::Yellow => Color32::from_rgb(0xff, 0xcc, 0x00),
        ItemColor::Red => Color32::from_rgb(0xff, 0x3b, 0x30),
        ItemColor::Gray => Color32::from_rgb(0x8e, 0x8e, 0x93),
        ItemColor::Purple => Color32::from_rgb(0xaf, 0x52, 0xde),
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const ROW_HEIGHT: f32 = 44.0;
pub const STACK_ROW_MIN_HEIGHT: f32 = 44.0;
pub const PULL_HINT_HEIGHT: f32 = 28.0;

// =============================================================================
// DIMENSIONS - Components
// =============================================================================
pub const MARKER_SIZE: f32 = 20.0;
pub const DIVIDER_HEIGHT: f32 = 0.5;
pub const DIVIDER_INSET: f32 = 16.0;
pub const MENU_PADDING: egui::Vec2 = egui::vec2(12.0, 10.0);
pub const MENU_STRIP_PADDING: f32 = 10.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MENU: f32 = 10.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: BG_HOVER,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Menu entry visuals
// =============================================================================

/// (text/border color, fill) for a menu entry
pub fn menu_entry_colors(selected: bool, hovered: bool) -> (Color32, Color32) {
    let stroke = if selected { MENU_SELECTED } else { MENU_UNSELECTED };
    let fill = if hovered {
        lighten(BG_BASE, 0.06)
    } else {
        Color32::TRANSPARENT
    };
    (stroke, fill)
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}
