//! Guess feedback calculation and representation
//!
//! Every position of a guess is marked with one of three colors:
//! - Gray (letter not in word, or all its occurrences already credited)
//! - Yellow (letter in word, wrong position)
//! - Green (letter in correct position)
//!
//! Colors are totally ordered `Gray < Yellow < Green`, which the keyboard
//! summary relies on when it upgrades a letter.

use super::Word;
use std::fmt;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    Gray = 0,
    Yellow = 1,
    Green = 2,
}

impl Color {
    /// Numeric level of the color (0-2)
    #[inline]
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Gray => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }

    const fn to_letter(self) -> char {
        match self {
            Self::Gray => '-',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '⬜' => Some(Self::Gray),
            _ => None,
        }
    }
}

/// Per-position feedback for one guess
///
/// Has exactly one entry per rune of the guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ColorCode(Vec<Color>);

impl ColorCode {
    /// Wrap an explicit color sequence
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Get the colors in position order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
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

    /// Check if every position is green
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&c| c == Color::Green)
    }

    /// Calculate the feedback when `guess` is compared to `answer`
    ///
    /// This implements the exact feedback rules for duplicate letters: a
    /// letter is credited green or yellow at most as often as it occurs in the
    /// answer, greens are claimed before any yellow, and yellows are handed
    /// out left to right.
    ///
    /// Returns `None` if the two words differ in rune count.
    ///
    /// # Algorithm
    /// 1. Count every rune of the answer
    /// 2. First pass: mark exact matches green and remove them from the pool
    /// 3. Second pass: mark remaining letters yellow while the pool still has them
    ///
    /// # Examples
    /// ```
    /// use wortklauberei::core::{Color, ColorCode, Word};
    ///
    /// let guess = Word::new("whizz").unwrap();
    /// let answer = Word::new("dizzy").unwrap();
    /// let code = ColorCode::calculate(&guess, &answer).unwrap();
    ///
    /// use Color::{Gray, Green, Yellow};
    /// assert_eq!(code.colors(), &[Gray, Gray, Yellow, Green, Yellow]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Option<Self> {
        if guess.len() != answer.len() {
            return None;
        }

        let mut result = vec![Color::Gray; guess.len()];
        let mut answer_available = answer.rune_histogram();

        // First pass: Mark greens (exact position matches)
        for ((color, &g), &a) in result.iter_mut().zip(guess.runes()).zip(answer.runes()) {
            if g == a {
                *color = Color::Green;

                // Remove from available pool
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Mark yellows (wrong position, but letter still available)
        for (color, &g) in result.iter_mut().zip(guess.runes()) {
            if *color == Color::Gray
                && let Some(count) = answer_available.get_mut(&g)
                && *count > 0
            {
                *color = Color::Yellow;
                *count -= 1;
            }
        }

        Some(Self(result))
    }

    /// Count the number of green positions
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&c| c == Color::Green).count()
    }

    /// Count the number of yellow positions
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&c| c == Color::Yellow).count()
    }

    /// Parse a color code from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wortklauberei::core::ColorCode;
    ///
    /// let c1 = ColorCode::from_str("GY-GY").unwrap();
    /// let c2 = ColorCode::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(c1, c2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.chars().map(Color::from_char).collect::<Option<Vec<_>>>().map(Self)
    }

    /// Convert the color code to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.to_emoji()).collect()
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.to_letter())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ColorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid color code string: {s}"))
    }
}

impl From<Vec<Color>> for ColorCode {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}
