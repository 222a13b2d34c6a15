//! Round management behind the presentation-facing interface

use super::{GameError, GameSession, GuessOutcome};
use crate::wordlists::WordLists;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// What a presentation layer may ask of the game
pub trait GameHandler {
    /// Discard the current round and start a fresh one
    ///
    /// # Errors
    /// Returns an error if no round with these parameters can be built. The
    /// current round is kept in that case.
    fn create_new_game(&mut self, word_length: usize, max_attempts: i32) -> Result<(), GameError>;

    /// Submit a guess to the current round
    ///
    /// # Errors
    /// Returns the rejection reason; the round is unchanged.
    fn check_solution(&mut self, solution: &str) -> Result<GuessOutcome, GameError>;
}

/// Owns the word lists and the current round
///
/// Secret words are drawn at random from the answers; every allowed word and
/// every answer is accepted as a guess.
pub struct GameController<R = StdRng> {
    word_lists: WordLists,
    rng: R,
    session: GameSession,
}

impl<R: Rng> GameController<R> {
    /// Create a controller and start the first round
    ///
    /// # Errors
    /// Same as [`GameHandler::create_new_game`].
    pub fn new(
        word_lists: WordLists,
        mut rng: R,
        word_length: usize,
        max_attempts: i32,
    ) -> Result<Self, GameError> {
        let session = start_session(&word_lists, &mut rng, word_length, max_attempts)?;
        log::info!("New game: {word_length} letters, {max_attempts} attempts");

        Ok(Self {
            word_lists,
            rng,
            session,
        })
    }

    /// Rune count of the current secret word
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.session.word_length()
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.session.max_attempts()
    }

    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.session.attempts_used()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }
}

impl<R: Rng> GameHandler for GameController<R> {
    fn create_new_game(&mut self, word_length: usize, max_attempts: i32) -> Result<(), GameError> {
        let session = start_session(&self.word_lists, &mut self.rng, word_length, max_attempts)
            .inspect_err(|e| log::warn!("Could not start new game: {e}"))?;

        log::info!("New game: {word_length} letters, {max_attempts} attempts");
        self.session = session;
        Ok(())
    }

    fn check_solution(&mut self, solution: &str) -> Result<GuessOutcome, GameError> {
        let outcome = self
            .session
            .check_solution(solution)
            .inspect_err(|e| log::debug!("Rejected guess {solution:?}: {e}"))?;

        log::debug!(
            "Attempt {}/{}: {}",
            self.session.attempts_used(),
            self.session.max_attempts(),
            outcome.color_code
        );
        if outcome.game_over {
            log::info!(
                "Game over after {} attempts ({})",
                self.session.attempts_used(),
                if outcome.correct { "won" } else { "lost" }
            );
        }

        Ok(outcome)
    }
}

/// Draw a secret of `word_length` runes and build a session around it
fn start_session<R: Rng + ?Sized>(
    word_lists: &WordLists,
    rng: &mut R,
    word_length: usize,
    max_attempts: i32,
) -> Result<GameSession, GameError> {
    let candidates: Vec<&String> = word_lists
        .answers()
        .iter()
        .filter(|w| w.chars().count() == word_length)
        .collect();

    let secret = candidates
        .choose(rng)
        .ok_or(GameError::NoWordOfLength(word_length))?;

    GameSession::new(secret, word_lists.allowed().to_vec(), max_attempts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::Green;
    use rand::SeedableRng;

    fn lists() -> WordLists {
        WordLists::new(
            vec!["JUPP".into(), "DIZZY".into()],
            vec!["ATHI".into(), "ZAHL".into(), "WHIZZ".into()],
        )
    }

    fn controller(word_length: usize, max_attempts: i32) -> GameController {
        GameController::new(lists(), StdRng::seed_from_u64(7), word_length, max_attempts).unwrap()
    }

    #[test]
    fn new_starts_first_round() {
        let gc = controller(4, 3);
        assert_eq!(gc.word_length(), 4);
        assert_eq!(gc.max_attempts(), 3);
        assert_eq!(gc.attempts_used(), 0);
        assert!(!gc.is_game_over());
    }

    #[test]
    fn only_secret_of_length_is_picked() {
        let mut gc = controller(5, 6);

        let outcome = gc.check_solution("DIZZY").unwrap();
        assert!(outcome.correct);
        assert!(outcome.game_over);
        assert_eq!(outcome.keyboard_colors.get('Z'), Some(Green));
    }

    #[test]
    fn allowed_words_are_accepted_guesses() {
        let mut gc = controller(4, 6);

        let outcome = gc.check_solution("ZAHL").unwrap();
        assert!(!outcome.correct);
        assert_eq!(gc.attempts_used(), 1);

        assert_eq!(gc.check_solution("ABCD"), Err(GameError::NotInWordList));
        assert_eq!(gc.attempts_used(), 1);
    }

    #[test]
    fn create_new_game_replaces_round() {
        let mut gc = controller(4, 3);
        assert!(gc.check_solution("JUPP").unwrap().game_over);
        assert_eq!(gc.check_solution("JUPP"), Err(GameError::GameAlreadyOver));

        gc.create_new_game(5, 2).unwrap();
        assert_eq!(gc.word_length(), 5);
        assert_eq!(gc.max_attempts(), 2);
        assert_eq!(gc.attempts_used(), 0);
        assert!(!gc.is_game_over());

        let outcome = gc.check_solution("WHIZZ").unwrap();
        assert_eq!(outcome.color_code.len(), 5);
        assert!(outcome.keyboard_colors.get('J').is_none());
    }

    #[test]
    fn failed_new_game_keeps_current_round() {
        let mut gc = controller(4, 3);
        gc.check_solution("ZAHL").unwrap();

        assert_eq!(gc.create_new_game(7, 3), Err(GameError::NoWordOfLength(7)));
        assert_eq!(gc.create_new_game(4, 0), Err(GameError::InvalidAttempts(0)));

        assert_eq!(gc.word_length(), 4);
        assert_eq!(gc.attempts_used(), 1);
    }

    #[test]
    fn new_fails_without_matching_word() {
        let result = GameController::new(lists(), StdRng::seed_from_u64(1), 3, 6);
        assert!(matches!(result, Err(GameError::NoWordOfLength(3))));
    }

    #[test]
    fn handler_is_object_safe() {
        let mut gc = controller(4, 3);
        let handler: &mut dyn GameHandler = &mut gc;
        assert!(handler.check_solution("JUPP").unwrap().correct);
    }
}
