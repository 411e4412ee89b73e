//! Border styles

use ratatui::symbols::border;

/// Rounded for chrome, thick for the focused swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderStyle;

impl BorderStyle {
    pub fn to_border_set() -> border::Set<'static> {
        border::ROUNDED
    }

    pub fn focused_border_set() -> border::Set<'static> {
        border::THICK
    }
}
