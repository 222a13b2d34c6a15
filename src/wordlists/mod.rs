//! Word lists for secret words and accepted guesses
//!
//! The default lists are compiled in by `build.rs` from `data/answers.txt`
//! and `data/allowed.txt`; [`loader`] reads replacements from disk.

pub mod loader;

use crate::core::is_all_letters;
use rustc_hash::FxHashSet;

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

/// Secret-word candidates plus everything accepted as a guess
///
/// Every answer is also an allowed word, so a secret can always be guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    answers: Vec<String>,
    allowed: Vec<String>,
}

impl WordLists {
    /// Build lists from answers and extra allowed words
    ///
    /// Answers missing from `allowed` are appended to it. Duplicates are
    /// dropped from both lists, keeping the first occurrence.
    #[must_use]
    pub fn new(answers: Vec<String>, allowed: Vec<String>) -> Self {
        let answers = dedup(answers);
        let mut allowed = dedup(allowed);

        let known: FxHashSet<String> = allowed.iter().cloned().collect();
        allowed.extend(answers.iter().filter(|w| !known.contains(*w)).cloned());

        Self { answers, allowed }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ALLOWED),
        )
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

fn dedup(words: Vec<String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Upper-case the way the keyboard does: `ß` has no single upper-case rune
/// and stays as it is
#[must_use]
pub fn normalize(word: &str) -> String {
    word.chars()
        .flat_map(|c| -> Vec<char> {
            if c == 'ß' {
                vec![c]
            } else {
                c.to_uppercase().collect()
            }
        })
        .collect()
}

/// True if `word` is letters only and already in [`normalize`]d form
#[must_use]
pub fn is_normalized(word: &str) -> bool {
    is_all_letters(word) && normalize(word) == word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_normalized() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert!(!word.is_empty());
            assert!(is_normalized(word), "Word '{word}' is not upper-case letters");
        }
    }

    #[test]
    fn embedded_answers_subset_of_allowed() {
        let lists = WordLists::embedded();
        for answer in lists.answers() {
            assert!(
                lists.allowed().contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn embedded_has_default_length() {
        let lists = WordLists::embedded();
        let has_length = |n: usize| lists.answers().iter().any(|w| w.chars().count() == n);
        assert!(has_length(5));
        assert!(has_length(4));
        assert!(!has_length(12));
    }

    #[test]
    fn embedded_matches_built_in_slices() {
        let lists = WordLists::embedded();
        let rebuilt = WordLists::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ALLOWED),
        );
        assert_eq!(lists, rebuilt);
        assert_eq!(lists.answers().len(), ANSWERS_COUNT);
    }

    #[test]
    fn new_merges_answers_into_allowed() {
        let lists = WordLists::new(
            vec!["JUPP".into(), "ZAHL".into(), "JUPP".into()],
            vec!["ZAHL".into(), "COKE".into()],
        );

        assert_eq!(lists.answers(), &["JUPP", "ZAHL"]);
        assert_eq!(lists.allowed(), &["ZAHL", "COKE", "JUPP"]);
    }

    #[test]
    fn normalize_keeps_sharp_s() {
        assert_eq!(normalize("straße"), "STRAßE");
        assert_eq!(normalize("köNig"), "KÖNIG");
        assert!(is_normalized("GRÜßE"));
        assert!(!is_normalized("Grüße"));
        assert!(!is_normalized("GR ÜßE"));
    }
}
