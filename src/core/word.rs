//! Word representation and letter helpers
//!
//! A Word stores its text together with the Unicode scalar values ("runes") it
//! is made of. Any codepoint in one of the Unicode letter categories (Lu, Ll,
//! Lt, Lm, Lo) is accepted, so umlauts and `ß` work the same as ASCII letters.

use rustc_hash::FxHashMap;
use std::fmt;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Occurrence count of every rune in a word
pub type RuneHistogram = FxHashMap<char, u32>;

/// A word made of letters only
///
/// Comparison is exact: no case folding or Unicode normalization happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    runes: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The word contains a codepoint that is not a letter
    NonLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonLetter(c) => write!(f, "Word contains non-letter character {c:?}"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::NonLetter` with the first offending codepoint if the
    /// text contains anything that is not a Unicode letter.
    ///
    /// # Examples
    /// ```
    /// use wortklauberei::core::Word;
    ///
    /// let word = Word::new("hellö").unwrap();
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("he llo").is_err());
    /// assert!(Word::new("hell6").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if let Some(bad) = text.chars().find(|&c| !is_letter(c)) {
            return Err(WordError::NonLetter(bad));
        }

        let runes = text.chars().collect();
        Ok(Self { text, runes })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the runes of the word in order
    #[inline]
    #[must_use]
    pub fn runes(&self) -> &[char] {
        &self.runes
    }

    /// Number of runes (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// Check if the word contains a specific rune
    #[inline]
    #[must_use]
    pub fn contains(&self, rune: char) -> bool {
        self.runes.contains(&rune)
    }

    /// Count of each rune in the word
    ///
    /// Used by feedback calculation to credit duplicate letters.
    #[must_use]
    pub fn rune_histogram(&self) -> RuneHistogram {
        rune_histogram(&self.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Check whether every codepoint in `s` is a Unicode letter
///
/// The empty string counts as all letters.
#[must_use]
pub fn is_all_letters(s: &str) -> bool {
    s.chars().all(is_letter)
}

/// Letter numbers, symbols and combining marks are not letters
fn is_letter(c: char) -> bool {
    matches!(c.general_category_group(), GeneralCategoryGroup::Letter)
}

/// Exact, case-sensitive membership test
#[must_use]
pub fn is_in_word_list<S: AsRef<str>>(word: &str, word_list: &[S]) -> bool {
    word_list.iter().any(|candidate| candidate.as_ref() == word)
}

/// Count how often each rune occurs in `s`
#[must_use]
pub fn rune_histogram(s: &str) -> RuneHistogram {
    let mut counts = RuneHistogram::default();
    for rune in s.chars() {
        *counts.entry(rune).or_insert(0) += 1;
    }
    counts
}
