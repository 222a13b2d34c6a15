//! Terminal output formatting
//!
//! Display utilities for the command-line front end. The game core never
//! calls into this module.

pub mod display;
pub mod formatters;

pub use display::{print_feedback_result, write_board, write_outcome_message};
