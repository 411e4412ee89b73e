//! RGB color value and its `#RRGGBB` representation

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from floating channels: clamped to [0, 255], then truncated.
    pub fn from_channels(channels: [f64; 3]) -> Self {
        let [r, g, b] = channels.map(clamp_channel);
        Self { r, g, b }
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Perceived brightness `0.299R + 0.587G + 0.114B`.
    pub fn luminance(self) -> f64 {
        self.luminance_milli() as f64 / 1000.0
    }

    /// Whether a dark label reads better on this color (`Y >= 128`).
    pub fn is_light(self) -> bool {
        // Integer weights keep the Y == 128 boundary exact.
        self.luminance_milli() >= 128_000
    }

    fn luminance_milli(self) -> u32 {
        u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode_upper(self.channels()))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

fn clamp_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("expected 6 hex digits, got {0} characters")]
    Length(usize),
    #[error("invalid hex digit in `{0}`")]
    Digit(String),
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Accepts `#RRGGBB` or `RRGGBB` in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 {
            return Err(ParseColorError::Length(digits.chars().count()));
        }
        let mut out = [0u8; 3];
        hex::decode_to_slice(digits, &mut out).map_err(|_| ParseColorError::Digit(s.to_string()))?;
        let [r, g, b] = out;
        Ok(Self { r, g, b })
    }
}
