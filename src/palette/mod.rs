//! Palette core: tones, colors, selection, and the generator

pub mod color;
pub mod generate;
pub mod selection;
pub mod tone;

pub use color::Rgb;
pub use generate::{Generator, Mode, PALETTE_SIZE, Palette, RngSource};
pub use selection::Selection;
pub use tone::Tone;
