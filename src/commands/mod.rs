//! Command implementations

pub mod feedback;
pub mod play;

pub use feedback::{FeedbackResult, compute_feedback};
pub use play::{PlayConfig, run_play};
