//! Ordered tone selection with toggle semantics

use super::tone::Tone;

/// Ordered, duplicate-free set of active tones (insertion order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    tones: Vec<Tone>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the tone if absent, removes it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, tone: Tone) -> bool {
        if let Some(pos) = self.tones.iter().position(|&t| t == tone) {
            self.tones.remove(pos);
            false
        } else {
            self.tones.push(tone);
            true
        }
    }

    /// Adds the tone unless it is already selected.
    pub fn insert(&mut self, tone: Tone) {
        if !self.contains(tone) {
            self.tones.push(tone);
        }
    }

    pub fn contains(&self, tone: Tone) -> bool {
        self.tones.contains(&tone)
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    pub fn clear(&mut self) {
        self.tones.clear();
    }
}

impl FromIterator<Tone> for Selection {
    fn from_iter<I: IntoIterator<Item = Tone>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for tone in iter {
            selection.insert(tone);
        }
        selection
    }
}
