use crate::palette::{Mode, PALETTE_SIZE, Palette, Selection, Tone};
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// Screen regions recorded during the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub tones: Vec<(Tone, Rect)>,
    pub swatches: Vec<Rect>,
}

impl HitAreas {
    pub fn tone_at(&self, column: u16, row: u16) -> Option<Tone> {
        let pos = Position::new(column, row);
        self.tones
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|(tone, _)| *tone)
    }

    pub fn swatch_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.swatches.iter().position(|area| area.contains(pos))
    }
}

#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub show_help: bool,

    pub selection: Selection,
    pub palette: Palette,
    /// Bumped on every regeneration.
    pub generation: u64,

    /// Swatch under the keyboard cursor.
    pub focused: usize,

    pub toast: Option<Toast>,
    pub hit_areas: HitAreas,
}

impl AppState {
    pub fn new(selection: Selection, palette: Palette) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            selection,
            palette,
            generation: 1,
            focused: 0,
            toast: None,
            hit_areas: HitAreas::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        Mode::of(&self.selection)
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1).min(PALETTE_SIZE - 1);
    }

    pub fn focus(&mut self, index: usize) {
        if index < PALETTE_SIZE {
            self.focused = index;
        }
    }

    pub fn clear_expired_toast(&mut self) {
        if let Some(toast) = &self.toast
            && toast.is_expired()
        {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Generator, RngSource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn make_state() -> AppState {
        let selection = Selection::new();
        let palette = Generator::default().generate(&selection, &mut RngSource(StdRng::seed_from_u64(1)));
        AppState::new(selection, palette)
    }

    #[test]
    fn test_focus_bounds() {
        let mut state = make_state();
        state.focus_prev();
        assert_eq!(state.focused, 0);
        for _ in 0..10 {
            state.focus_next();
        }
        assert_eq!(state.focused, PALETTE_SIZE - 1);
        state.focus(2);
        assert_eq!(state.focused, 2);
        state.focus(PALETTE_SIZE);
        assert_eq!(state.focused, 2);
    }

    #[test]
    fn test_debug_output() {
        let state = make_state();
        let dump = format!("{state:?}");
        assert!(dump.starts_with("AppState {"), "{dump}");
        assert!(dump.contains("generation: 1"), "{dump}");
        assert!(dump.contains("focused: 0"), "{dump}");
    }

    #[test]
    fn test_toast_expiry() {
        let mut state = make_state();
        state.toast = Some(Toast::new("Copied!", Duration::ZERO));
        std::thread::sleep(Duration::from_millis(2));
        state.clear_expired_toast();
        assert!(state.toast.is_none());

        state.toast = Some(Toast::new("Copied!", Duration::from_secs(60)));
        state.clear_expired_toast();
        assert!(state.toast.is_some());
    }

    #[test]
    fn test_hit_areas() {
        let areas = HitAreas {
            tones: vec![(Tone::Red, Rect::new(0, 0, 10, 3)), (Tone::Blue, Rect::new(10, 0, 10, 3))],
            swatches: vec![Rect::new(0, 5, 8, 6), Rect::new(8, 5, 8, 6)],
        };
        assert_eq!(areas.tone_at(12, 1), Some(Tone::Blue));
        assert_eq!(areas.tone_at(3, 4), None);
        assert_eq!(areas.swatch_at(9, 7), Some(1));
        assert_eq!(areas.swatch_at(30, 7), None);
    }
}
