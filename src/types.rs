//! Common types and data structures

use uuid::Uuid;

/// Display color of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemColor {
    Blue,
    Yellow,
    Red,
    Gray,
    Purple,
}

/// A colored list entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub color: ItemColor,
}

impl Item {
    pub fn new(title: impl Into<String>, color: ItemColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            color,
        }
    }
}

/// An entry in the top menu strip
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: Uuid,
    pub title: String,
    pub tag: i32,
}

impl MenuItem {
    pub fn new(title: impl Into<String>, tag: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            tag,
        }
    }
}

/// Which list style is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presenter {
    Standard,
    NoSeparator,
    ManualStack,
}

impl Presenter {
    /// Resolve the presenter for a menu tag. Unknown tags render nothing.
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(Self::Standard),
            1 => Some(Self::NoSeparator),
            2 => Some(Self::ManualStack),
            _ => None,
        }
    }

    /// Whether the presenter offers pull-to-refresh
    pub fn refreshable(self) -> bool {
        matches!(self, Self::Standard | Self::NoSeparator)
    }

    pub fn shows_dividers(self) -> bool {
        !matches!(self, Self::NoSeparator)
    }
}

/// User intent reported by child views, applied by the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select(i32),
    Refresh,
}
