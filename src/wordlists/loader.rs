//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::normalize;
use crate::core::is_all_letters;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Lines are trimmed and upper-cased with [`normalize`];
/// blank lines, `#` comments and entries containing non-letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wortklauberei::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());

    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to a word vector
///
/// # Examples
/// ```
/// use wortklauberei::wordlists::loader::words_from_slice;
/// use wortklauberei::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut skipped = 0usize;
    let words: Vec<String> = lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else if is_all_letters(trimmed) {
                Some(normalize(trimmed))
            } else {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::debug!("Skipped {skipped} entries with non-letter characters");
    }
    words
}
