//! Interface colors - dark neutral chrome so the swatches carry the color

use crate::palette::Rgb;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct UiColors {
    pub bg_primary: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focus: Color,
    /// Label drawn on light swatches.
    pub label_dark: Color,
    /// Label drawn on dark swatches.
    pub label_light: Color,
}

impl UiColors {
    pub const NEUTRAL: Self = Self {
        bg_primary: Color::Rgb(17, 24, 39),     // #111827
        fg_primary: Color::Rgb(243, 244, 246),  // #f3f4f6
        fg_secondary: Color::Rgb(156, 163, 175), // #9ca3af
        accent: to_color(Rgb::WHITE),
        border: Color::Rgb(75, 85, 99),         // #4b5563
        border_focus: to_color(Rgb::WHITE),
        label_dark: Color::Rgb(31, 41, 55),     // #1f2937
        label_light: to_color(Rgb::WHITE),
    };

    /// Label color readable on top of `rgb`.
    pub fn label_for(&self, rgb: Rgb) -> Color {
        if rgb.is_light() {
            self.label_dark
        } else {
            self.label_light
        }
    }
}

impl Default for UiColors {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

pub const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
