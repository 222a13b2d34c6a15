//! Display functions for command results

use super::formatters::{color_code_to_emoji, format_guess_row, format_keyboard};
use crate::commands::FeedbackResult;
use crate::core::KeyboardColors;
use crate::game::GuessOutcome;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of the feedback command
pub fn print_feedback_result(result: &FeedbackResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.bright_white().bold(),
        result.solution.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", format_guess_row(&result.guess, &result.color_code));
    println!("  {}", color_code_to_emoji(&result.color_code));
    println!(
        "\n  {} green, {} yellow",
        result.color_code.count_greens(),
        result.color_code.count_yellows()
    );
}

/// Write the guessed row followed by the keyboard
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(
    out: &mut W,
    attempt: i32,
    max_attempts: i32,
    guess: &str,
    outcome: &GuessOutcome,
) -> io::Result<()> {
    writeln!(
        out,
        "\n {} {}",
        format!("{attempt}/{max_attempts}").bright_black(),
        format_guess_row(guess, &outcome.color_code)
    )?;
    write_keyboard(out, &outcome.keyboard_colors)
}

fn write_keyboard<W: Write>(out: &mut W, keyboard: &KeyboardColors) -> io::Result<()> {
    writeln!(out)?;
    for row in format_keyboard(keyboard) {
        writeln!(out, "   {row}")?;
    }
    Ok(())
}

/// Write the win or loss banner, nothing while the round is still running
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_outcome_message<W: Write>(out: &mut W, outcome: &GuessOutcome) -> io::Result<()> {
    if outcome.correct {
        writeln!(out, "\n{}", "CONGRATULATIONS! YOU WON :)".green().bold())?;
    } else if outcome.game_over {
        writeln!(out, "\n{}", "GAME OVER. YOU LOST :(".red().bold())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorCode;

    fn outcome(correct: bool, game_over: bool) -> GuessOutcome {
        GuessOutcome {
            correct,
            game_over,
            color_code: ColorCode::default(),
            keyboard_colors: KeyboardColors::new(),
        }
    }

    fn message(outcome: &GuessOutcome) -> String {
        let mut out = Vec::new();
        write_outcome_message(&mut out, outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn outcome_messages() {
        assert!(message(&outcome(true, true)).contains("CONGRATULATIONS! YOU WON :)"));
        assert!(message(&outcome(false, true)).contains("GAME OVER. YOU LOST :("));
        assert!(message(&outcome(false, false)).is_empty());
    }

    #[test]
    fn board_shows_attempt_and_keyboard() {
        let mut out = Vec::new();
        write_board(&mut out, 2, 6, "", &outcome(false, false)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("2/6"));
        assert!(text.contains(" Q "));
        assert!(text.contains(" ß "));
    }
}
