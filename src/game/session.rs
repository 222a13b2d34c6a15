//! A single round: secret word, accepted words, attempts and keyboard state

use super::GameError;
use crate::core::{ColorCode, KeyboardColors, Word, is_in_word_list};

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The guess equals the secret word
    pub correct: bool,
    /// The round has ended, either won or out of attempts
    pub game_over: bool,
    /// Feedback for each position of the guess
    pub color_code: ColorCode,
    /// Keyboard state after folding in this guess
    pub keyboard_colors: KeyboardColors,
}

/// State of one round
///
/// A session is never reset. Starting a new round means building a new
/// session and dropping the old one.
#[derive(Debug, Clone)]
pub struct GameSession {
    word: Word,
    valid_words: Vec<String>,
    game_over: bool,
    cur_attempt: u32,
    max_attempts: u32,
    keyboard_colors: KeyboardColors,
}

impl GameSession {
    /// Start a round with `word` as the secret
    ///
    /// # Errors
    /// Checked in this order:
    /// - `InvalidWord` if `word` contains anything but letters
    /// - `WordNotInList` if `word` is not exactly one of `valid_words`
    /// - `InvalidAttempts` if `max_attempts <= 0`
    ///
    /// # Examples
    /// ```
    /// use wortklauberei::game::GameSession;
    ///
    /// let words = vec!["hellö".to_string(), "funny".to_string()];
    /// let session = GameSession::new("hellö", words, 6).unwrap();
    /// assert_eq!(session.word_length(), 5);
    /// assert!(!session.is_game_over());
    /// ```
    pub fn new(word: &str, valid_words: Vec<String>, max_attempts: i32) -> Result<Self, GameError> {
        let word = Word::new(word).map_err(|_| GameError::InvalidWord(word.to_string()))?;

        if !is_in_word_list(word.text(), &valid_words) {
            return Err(GameError::WordNotInList(word.text().to_string()));
        }

        let max_attempts = u32::try_from(max_attempts)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(GameError::InvalidAttempts(max_attempts))?;

        Ok(Self {
            word,
            valid_words,
            game_over: false,
            cur_attempt: 0,
            max_attempts,
            keyboard_colors: KeyboardColors::new(),
        })
    }

    /// Submit a guess
    ///
    /// Validation short-circuits in this order and leaves the session untouched
    /// on failure: round already over, wrong rune count, non-letter
    /// characters, not an accepted word.
    ///
    /// An accepted guess ends the round if it is correct or used the last
    /// attempt. Its feedback is folded into the keyboard and the attempt
    /// counter moves on, also for a winning guess.
    ///
    /// # Errors
    /// `GameAlreadyOver`, `WrongLength`, `InvalidCharacters` or
    /// `NotInWordList`.
    ///
    /// # Examples
    /// ```
    /// use wortklauberei::core::Color::{Gray, Green, Yellow};
    /// use wortklauberei::game::GameSession;
    ///
    /// let words = ["hello", "whizz", "pozzy", "dizzy"].map(String::from).to_vec();
    /// let mut session = GameSession::new("dizzy", words, 6).unwrap();
    ///
    /// let outcome = session.check_solution("whizz").unwrap();
    /// assert!(!outcome.correct);
    /// assert_eq!(outcome.color_code.colors(), &[Gray, Gray, Yellow, Green, Yellow]);
    /// ```
    pub fn check_solution(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }

        let actual = guess.chars().count();
        if actual != self.word.len() {
            return Err(GameError::WrongLength {
                expected: self.word.len(),
                actual,
            });
        }

        let guess = Word::new(guess).map_err(|_| GameError::InvalidCharacters)?;

        if !is_in_word_list(guess.text(), &self.valid_words) {
            return Err(GameError::NotInWordList);
        }

        let correct = guess == self.word;
        if correct || self.cur_attempt + 1 >= self.max_attempts {
            self.game_over = true;
        }

        // Lengths already match, so the code always has one entry per rune
        let color_code = ColorCode::calculate(&guess, &self.word).unwrap_or_default();
        self.keyboard_colors.record(&guess, &color_code);
        self.cur_attempt += 1;

        Ok(GuessOutcome {
            correct,
            game_over: self.game_over,
            color_code,
            keyboard_colors: self.keyboard_colors.clone(),
        })
    }

    /// Rune count of the secret word
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Number of accepted guesses so far
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.cur_attempt
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    #[must_use]
    pub const fn keyboard_colors(&self) -> &KeyboardColors {
        &self.keyboard_colors
    }
}
