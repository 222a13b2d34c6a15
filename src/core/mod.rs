//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no I/O and no logging.
//! Everything here is pure: words, feedback colors and the keyboard summary.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Color, ColorCode};
pub use keyboard::KeyboardColors;
pub use word::{RuneHistogram, Word, WordError, is_all_letters, is_in_word_list, rune_histogram};
