//! Interactive play mode
//!
//! Line-based front end: reads guesses, hands them to a [`GameHandler`] and
//! renders the feedback. Knows nothing about the rules itself.

use crate::game::GameHandler;
use crate::output::{write_board, write_outcome_message};
use crate::wordlists::normalize;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Accepted range for word length and attempts in the new-game dialog
pub const SETTING_RANGE: RangeInclusive<u8> = 2..=9;

/// Round parameters the front end sizes its display by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    pub word_length: usize,
    pub max_attempts: i32,
}

/// Run the interactive loop until `/quit` or end of input
///
/// The handler must already hold a round started with `config`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Rejected
/// guesses and failed new games are reported to the player, not returned.
pub fn run_play<H, R, W>(
    handler: &mut H,
    mut config: PlayConfig,
    mut input: R,
    mut out: W,
) -> io::Result<()>
where
    H: GameHandler + ?Sized,
    R: BufRead,
    W: Write,
{
    print_banner(&mut out, config)?;

    let mut attempt = 0i32;
    let mut game_over = false;

    loop {
        let prompt_text = if game_over {
            "Command".to_string()
        } else {
            format!("Guess {}/{}", attempt + 1, config.max_attempts)
        };

        let Some(line) = prompt(&mut input, &mut out, &prompt_text)? else {
            writeln!(out)?;
            return Ok(());
        };

        match line.as_str() {
            "" => {}
            "/quit" | "/q" | "/exit" => {
                writeln!(out, "\nThanks for playing!")?;
                return Ok(());
            }
            "/help" | "/h" => print_help(&mut out)?,
            "/new" | "/n" => {
                if let Some(new_config) = new_game(handler, config, &mut input, &mut out)? {
                    config = new_config;
                    attempt = 0;
                    game_over = false;
                }
            }
            _ => {
                let guess = normalize(&line);
                match handler.check_solution(&guess) {
                    Ok(outcome) => {
                        attempt += 1;
                        write_board(&mut out, attempt, config.max_attempts, &guess, &outcome)?;
                        write_outcome_message(&mut out, &outcome)?;
                        if outcome.game_over {
                            game_over = true;
                            writeln!(out, "Type /new to play again or /quit to exit.")?;
                        }
                    }
                    Err(e) => writeln!(out, "{}", e.to_string().red())?,
                }
            }
        }
    }
}

fn print_banner<W: Write>(out: &mut W, config: PlayConfig) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(44).bright_cyan())?;
    writeln!(out, "{}", "             W O R T K L A U B E R E I".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(44).bright_cyan())?;
    writeln!(
        out,
        "\nGuess the {}-letter word in {} attempts.",
        config.word_length, config.max_attempts
    )?;
    print_help(out)
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands: /new for a new game, /quit to exit, /help for this text\n")
}

/// Ask for new settings and start a round with them
///
/// Returns the new config, or `None` if the handler refused the round.
fn new_game<H, R, W>(
    handler: &mut H,
    current: PlayConfig,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<PlayConfig>>
where
    H: GameHandler + ?Sized,
    R: BufRead,
    W: Write,
{
    let word_length = ask_setting(input, out, "Word length", current.word_length)?;
    let max_attempts = ask_setting(input, out, "Number of attempts", current.max_attempts)?;

    match handler.create_new_game(word_length, max_attempts) {
        Ok(()) => {
            writeln!(
                out,
                "\n{}",
                format!("New game: {word_length} letters, {max_attempts} attempts").bright_cyan()
            )?;
            Ok(Some(PlayConfig {
                word_length,
                max_attempts,
            }))
        }
        Err(e) => {
            writeln!(out, "{}", e.to_string().red())?;
            Ok(None)
        }
    }
}

/// Read a setting; empty or out-of-range input keeps `default`
fn ask_setting<T, R, W>(input: &mut R, out: &mut W, label: &str, default: T) -> io::Result<T>
where
    T: Setting,
    R: BufRead,
    W: Write,
{
    let text = format!(
        "{label} ({}-{}) [{default}]",
        SETTING_RANGE.start(),
        SETTING_RANGE.end()
    );
    let answer = prompt(input, out, &text)?.unwrap_or_default();

    if answer.is_empty() {
        return Ok(default);
    }

    match parse_setting(&answer) {
        Some(value) => Ok(value),
        None => {
            writeln!(
                out,
                "{}",
                format!(
                    "{label} must be a number from {} to {}, keeping {default}",
                    SETTING_RANGE.start(),
                    SETTING_RANGE.end()
                )
                .yellow()
            )?;
            Ok(default)
        }
    }
}

/// Integer types a setting can be read as
trait Setting: Copy + Display + FromStr + PartialOrd + From<u8> {}

impl<T: Copy + Display + FromStr + PartialOrd + From<u8>> Setting for T {}

fn parse_setting<T: Setting>(text: &str) -> Option<T> {
    let range = T::from(*SETTING_RANGE.start())..=T::from(*SETTING_RANGE.end());
    text.parse::<T>().ok().filter(|n| range.contains(n))
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameController;
    use crate::wordlists::WordLists;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn controller(word_length: usize, max_attempts: i32) -> GameController {
        let lists = WordLists::new(
            vec!["JUPP".into(), "DIZZY".into()],
            vec!["ATHI".into(), "ZAHL".into(), "WHIZZ".into()],
        );
        GameController::new(lists, StdRng::seed_from_u64(3), word_length, max_attempts).unwrap()
    }

    fn play(gc: &mut GameController, config: PlayConfig, input: &str) -> String {
        let mut out = Vec::new();
        run_play(gc, config, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    const FOUR_BY_THREE: PlayConfig = PlayConfig {
        word_length: 4,
        max_attempts: 3,
    };

    #[test]
    fn quit_immediately() {
        let mut gc = controller(4, 3);
        let text = play(&mut gc, FOUR_BY_THREE, "/quit\n");

        assert!(text.contains("Thanks for playing!"));
        assert_eq!(gc.attempts_used(), 0);
    }

    #[test]
    fn end_of_input_stops() {
        let mut gc = controller(4, 3);
        let text = play(&mut gc, FOUR_BY_THREE, "");
        assert!(text.contains("Guess 1/3"));
    }

    #[test]
    fn lowercase_guess_wins() {
        let mut gc = controller(4, 3);
        let text = play(&mut gc, FOUR_BY_THREE, "zahl\njupp\n/quit\n");

        assert!(text.contains("CONGRATULATIONS! YOU WON :)"));
        assert!(text.contains("2/3"));
        assert!(gc.is_game_over());
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let mut gc = controller(4, 2);
        let config = PlayConfig {
            word_length: 4,
            max_attempts: 2,
        };
        let text = play(&mut gc, config, "ZAHL\nATHI\nJUPP\n");

        assert!(text.contains("GAME OVER. YOU LOST :("));
        assert!(text.contains("game is already over"));
        assert_eq!(gc.attempts_used(), 2);
    }

    #[test]
    fn rejected_guesses_show_error_text() {
        let mut gc = controller(4, 3);
        let text = play(&mut gc, FOUR_BY_THREE, "ABC\nAB1D\nABCD\n/quit\n");

        assert!(text.contains("length of solution must be 4 but is 3"));
        assert!(text.contains("solution must consist of letters only"));
        assert!(text.contains("suggested solution is not in list of valid words"));
        assert_eq!(gc.attempts_used(), 0);
    }

    #[test]
    fn new_game_with_other_length() {
        let mut gc = controller(4, 3);
        let text = play(&mut gc, FOUR_BY_THREE, "/new\n5\n2\ndizzy\n/quit\n");

        assert!(text.contains("New game: 5 letters, 2 attempts"));
        assert!(text.contains("CONGRATULATIONS! YOU WON :)"));
        assert_eq!(gc.word_length(), 5);
    }

    #[test]
    fn new_game_without_words_keeps_round() {
        let mut gc = controller(4, 3);
        let text = play(&mut gc, FOUR_BY_THREE, "/new\n7\n\n/quit\n");

        assert!(text.contains("no word with 7 letters available"));
        assert_eq!(gc.word_length(), 4);
    }

    #[test]
    fn new_game_out_of_range_keeps_default() {
        let mut gc = controller(4, 3);
        let text = play(&mut gc, FOUR_BY_THREE, "/new\n12\nx\n/quit\n");

        assert!(text.contains("Word length must be a number from 2 to 9, keeping 4"));
        assert!(text.contains("New game: 4 letters, 3 attempts"));
    }

    #[test]
    fn setting_parser() {
        assert_eq!(parse_setting::<usize>("2"), Some(2));
        assert_eq!(parse_setting::<usize>("9"), Some(9));
        assert_eq!(parse_setting::<usize>("1"), None);
        assert_eq!(parse_setting::<usize>("10"), None);
        assert_eq!(parse_setting::<usize>("five"), None);

        assert_eq!(parse_setting::<i32>("7"), Some(7));
        assert_eq!(parse_setting::<i32>("-3"), None);
        assert_eq!(parse_setting::<i32>("99999999999"), None);
    }

    #[test]
    fn new_game_passes_attempts_through() {
        let mut gc = controller(4, 3);
        let text = play(&mut gc, FOUR_BY_THREE, "/new
4
9
ZAHL
/quit
");

        assert!(text.contains("New game: 4 letters, 9 attempts"));
        assert!(text.contains("Guess 2/9"));
        assert_eq!(gc.max_attempts(), 9);
    }
}
