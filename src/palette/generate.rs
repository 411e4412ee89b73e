//! Palette generation: random, single-tone jitter, and multi-tone gradient modes

use super::color::Rgb;
use super::selection::Selection;
use super::tone::Tone;
use rand::Rng;
use serde::Serialize;

pub const PALETTE_SIZE: usize = 5;

pub const DEFAULT_TONE_SPREAD: f64 = 50.0;
pub const DEFAULT_GRADIENT_SPREAD: f64 = 20.0;

/// Source of the random draws used during generation.
pub trait RandomSource {
    /// Uniform integer channel in [0, 255].
    fn channel(&mut self) -> u8;
    /// Uniform offset in [-spread, +spread].
    fn offset(&mut self, spread: f64) -> f64;
}

/// Adapts any `rand::Rng` into a [`RandomSource`].
#[derive(Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn channel(&mut self) -> u8 {
        self.0.random::<u8>()
    }

    fn offset(&mut self, spread: f64) -> f64 {
        (self.0.random::<f64>() * 2.0 - 1.0) * spread
    }
}

/// Five colors produced by one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette([Rgb; PALETTE_SIZE]);

impl Palette {
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.0.iter().copied()
    }

    pub fn hex_codes(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_hex()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Random,
    Tone(Tone),
    Gradient(usize),
}

impl Mode {
    pub fn of(selection: &Selection) -> Self {
        match selection.tones() {
            [] => Mode::Random,
            [tone] => Mode::Tone(*tone),
            tones => Mode::Gradient(tones.len()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Generator {
    /// Jitter applied around a single tone's base color.
    pub tone_spread: f64,
    /// Jitter applied on top of gradient interpolation.
    pub gradient_spread: f64,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            tone_spread: DEFAULT_TONE_SPREAD,
            gradient_spread: DEFAULT_GRADIENT_SPREAD,
        }
    }
}

impl Generator {
    pub fn new(tone_spread: f64, gradient_spread: f64) -> Self {
        Self {
            tone_spread: sanitize_spread(tone_spread, DEFAULT_TONE_SPREAD),
            gradient_spread: sanitize_spread(gradient_spread, DEFAULT_GRADIENT_SPREAD),
        }
    }

    pub fn generate(&self, selection: &Selection, rng: &mut impl RandomSource) -> Palette {
        let colors = match selection.tones() {
            [] => std::array::from_fn(|_| random_color(rng)),
            [tone] => std::array::from_fn(|_| self.jittered(tone.base(), rng)),
            tones => {
                let stops: Vec<Rgb> = tones.iter().map(|t| t.base()).collect();
                std::array::from_fn(|i| {
                    let t = i as f64 / (PALETTE_SIZE - 1) as f64;
                    self.gradient_sample(&stops, t, rng)
                })
            }
        };
        Palette(colors)
    }

    fn jittered(&self, base: Rgb, rng: &mut impl RandomSource) -> Rgb {
        let channels = base
            .channels()
            .map(|c| f64::from(c) + rng.offset(self.tone_spread));
        Rgb::from_channels(channels)
    }

    fn gradient_sample(&self, stops: &[Rgb], t: f64, rng: &mut impl RandomSource) -> Rgb {
        let base = interpolate(stops, t);
        let channels = base.map(|c| (c + rng.offset(self.gradient_spread)).clamp(0.0, 255.0).round());
        Rgb::from_channels(channels)
    }
}

fn random_color(rng: &mut impl RandomSource) -> Rgb {
    Rgb::new(rng.channel(), rng.channel(), rng.channel())
}

/// Point at `t` in [0, 1] along the piecewise-linear path through `stops`.
///
/// `stops` must hold at least two colors. The path is split into
/// `stops.len() - 1` equal segments; `t == 1` lands on the last stop.
pub fn interpolate(stops: &[Rgb], t: f64) -> [f64; 3] {
    debug_assert!(stops.len() >= 2);
    let segments = stops.len() - 1;
    let scaled = t.clamp(0.0, 1.0) * segments as f64;
    let seg = (scaled.floor() as usize).min(segments - 1);
    let seg_t = scaled - seg as f64;

    let from = stops[seg].channels();
    let to = stops[seg + 1].channels();
    std::array::from_fn(|i| lerp(f64::from(from[i]), f64::from(to[i]), seg_t))
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

fn sanitize_spread(spread: f64, fallback: f64) -> f64 {
    if spread.is_finite() { spread.abs() } else { fallback }
}
