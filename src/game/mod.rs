//! Game rules: one round of guessing against a secret word
//!
//! [`GameSession`] is the state machine for a single round. [`GameController`]
//! owns the word lists, starts rounds and exposes both operations through the
//! [`GameHandler`] trait that presentation layers talk to.

mod controller;
mod error;
mod session;

pub use controller::{GameController, GameHandler};
pub use error::GameError;
pub use session::{GameSession, GuessOutcome};
