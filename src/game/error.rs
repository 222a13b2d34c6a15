//! Error type for starting rounds and submitting guesses

use std::fmt;

/// Everything that can reject a round or a guess
///
/// None of these are fatal to the process; the caller shows the message and
/// asks for new input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Secret word contains a non-letter codepoint
    InvalidWord(String),
    /// Secret word is missing from the accepted words
    WordNotInList(String),
    /// Attempt ceiling is zero or negative
    InvalidAttempts(i32),
    /// A guess arrived after the round ended
    GameAlreadyOver,
    /// Guess rune count differs from the secret's
    WrongLength { expected: usize, actual: usize },
    /// Guess contains a non-letter codepoint
    InvalidCharacters,
    /// Guess is not an accepted word
    NotInWordList,
    /// No secret word of the requested length is available
    NoWordOfLength(usize),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(word) => write!(
                f,
                "game initialization failed: word {word} must consist of letters only"
            ),
            Self::WordNotInList(word) => write!(
                f,
                "game initialization failed: word {word} not in list of valid words"
            ),
            Self::InvalidAttempts(n) => write!(
                f,
                "game initialization failed: number of maximum attempts must be greater than 0 but is {n}"
            ),
            Self::GameAlreadyOver => write!(f, "game is already over"),
            Self::WrongLength { expected, actual } => {
                write!(f, "length of solution must be {expected} but is {actual}")
            }
            Self::InvalidCharacters => write!(f, "solution must consist of letters only"),
            Self::NotInWordList => write!(f, "suggested solution is not in list of valid words"),
            Self::NoWordOfLength(n) => write!(f, "no word with {n} letters available"),
        }
    }
}

impl std::error::Error for GameError {}
