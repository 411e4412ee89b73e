//! Tone categories and their base colors

use super::color::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

/// Base color of every tone, indexed by `Tone as usize`.
const BASE_COLORS: [Rgb; 7] = [
    Rgb::new(255, 0, 0),     // red
    Rgb::new(255, 165, 0),   // orange
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(0, 255, 0),     // green
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(128, 0, 128),   // purple
    Rgb::new(255, 192, 203), // pink
];

impl Tone {
    pub const ALL: [Tone; 7] = [
        Tone::Red,
        Tone::Orange,
        Tone::Yellow,
        Tone::Green,
        Tone::Blue,
        Tone::Purple,
        Tone::Pink,
    ];

    pub const fn base(self) -> Rgb {
        BASE_COLORS[self as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Tone::Red => "red",
            Tone::Orange => "orange",
            Tone::Yellow => "yellow",
            Tone::Green => "green",
            Tone::Blue => "blue",
            Tone::Purple => "purple",
            Tone::Pink => "pink",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Tone::Red => "Red",
            Tone::Orange => "Orange",
            Tone::Yellow => "Yellow",
            Tone::Green => "Green",
            Tone::Blue => "Blue",
            Tone::Purple => "Purple",
            Tone::Pink => "Pink",
        }
    }

    /// Number key bound to this tone in the TUI (1-based).
    pub const fn key(self) -> char {
        match self {
            Tone::Red => '1',
            Tone::Orange => '2',
            Tone::Yellow => '3',
            Tone::Green => '4',
            Tone::Blue => '5',
            Tone::Purple => '6',
            Tone::Pink => '7',
        }
    }

    pub fn from_key(c: char) -> Option<Tone> {
        Tone::ALL.into_iter().find(|t| t.key() == c)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tone `{0}` (expected one of: red, orange, yellow, green, blue, purple, pink)")]
pub struct ParseToneError(pub String);

impl FromStr for Tone {
    type Err = ParseToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tone::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseToneError(s.to_string()))
    }
}
