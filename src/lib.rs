//! Wortklauberei
//!
//! Rules engine for a Wordle-style word guessing game: validates guesses,
//! decides win and loss, and computes per-letter and per-key feedback with
//! exact duplicate-letter handling. Letters from any script are accepted.
//!
//! # Quick Start
//!
//! ```rust
//! use wortklauberei::core::Color::{Gray, Green, Yellow};
//! use wortklauberei::game::GameSession;
//!
//! let words = ["hello", "whizz", "pozzy", "dizzy"].map(String::from).to_vec();
//! let mut session = GameSession::new("dizzy", words, 6).unwrap();
//!
//! let outcome = session.check_solution("whizz").unwrap();
//! assert_eq!(outcome.color_code.colors(), &[Gray, Gray, Yellow, Green, Yellow]);
//! assert_eq!(outcome.keyboard_colors.get('z'), Some(Green));
//!
//! let outcome = session.check_solution("dizzy").unwrap();
//! assert!(outcome.correct && outcome.game_over);
//! ```

// Core domain types
pub mod core;

// Round state machine and the presentation-facing interface
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
