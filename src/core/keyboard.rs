//! Cumulative per-letter feedback for the on-screen keyboard

use super::{Color, ColorCode, Word};
use rustc_hash::FxHashMap;

/// Strongest color ever observed for each letter
///
/// Entries only move up the `Gray < Yellow < Green` scale: once a letter is
/// green it stays green for the rest of the round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardColors(FxHashMap<char, Color>);

impl KeyboardColors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded color of a letter, if it has been guessed at all
    #[inline]
    #[must_use]
    pub fn get(&self, rune: char) -> Option<Color> {
        self.0.get(&rune).copied()
    }

    /// Raise the recorded color of `rune` to `color` if that is stronger
    ///
    /// Returns `true` if the entry changed.
    pub fn upgrade(&mut self, rune: char, color: Color) -> bool {
        match self.0.get_mut(&rune) {
            Some(current) if *current >= color => false,
            Some(current) => {
                *current = color;
                true
            }
            None => {
                self.0.insert(rune, color);
                true
            }
        }
    }

    /// Fold the feedback of one guess into the keyboard
    ///
    /// A letter appearing several times in the guess ends up at the best
    /// color it received.
    pub fn record(&mut self, guess: &Word, code: &ColorCode) {
        for (&rune, &color) in guess.runes().iter().zip(code.colors()) {
            self.upgrade(rune, color);
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all recorded letters in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (char, Color)> + '_ {
        self.0.iter().map(|(&rune, &color)| (rune, color))
    }
}

impl FromIterator<(char, Color)> for KeyboardColors {
    fn from_iter<I: IntoIterator<Item = (char, Color)>>(iter: I) -> Self {
        let mut keyboard = Self::new();
        for (rune, color) in iter {
            keyboard.upgrade(rune, color);
        }
        keyboard
    }
}
