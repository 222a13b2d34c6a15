//! Feedback command
//!
//! Shows the color code of one guess against a given solution, without
//! starting a round.

use crate::core::{ColorCode, Word};

/// Result of comparing a guess with a solution
pub struct FeedbackResult {
    pub guess: String,
    pub solution: String,
    pub color_code: ColorCode,
}

/// Compare `guess` with `solution`
///
/// # Errors
///
/// Returns an error if:
/// - Either word contains non-letter characters
/// - The words differ in length
pub fn compute_feedback(guess: &str, solution: &str) -> Result<FeedbackResult, String> {
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let solution_word = Word::new(solution).map_err(|e| format!("Invalid solution: {e}"))?;

    let color_code = ColorCode::calculate(&guess_word, &solution_word).ok_or_else(|| {
        format!(
            "length of solution must be {} but is {}",
            solution_word.len(),
            guess_word.len()
        )
    })?;

    Ok(FeedbackResult {
        guess: guess.to_string(),
        solution: solution.to_string(),
        color_code,
    })
}
