//! Formatting utilities for terminal output

use crate::core::{Color, ColorCode, KeyboardColors};
use colored::{ColoredString, Colorize};

/// On-screen keyboard, German layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTZUIOPÜ", "ASDFGHJKLÖÄ", "YXCVBNMß"];

/// Render one letter as a colored cell
///
/// Letters without feedback are printed plain.
#[must_use]
pub fn paint_letter(letter: char, color: Option<Color>) -> ColoredString {
    let cell = format!(" {letter} ");
    match color {
        Some(Color::Green) => cell.black().on_green().bold(),
        Some(Color::Yellow) => cell.black().on_yellow().bold(),
        Some(Color::Gray) => cell.white().on_bright_black(),
        None => cell.normal(),
    }
}

/// Render a guess with its feedback, one cell per rune
#[must_use]
pub fn format_guess_row(guess: &str, code: &ColorCode) -> String {
    guess
        .chars()
        .zip(code.colors())
        .map(|(letter, &color)| paint_letter(letter, Some(color)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the keyboard rows, each key colored by what is known about it
#[must_use]
pub fn format_keyboard(keyboard: &KeyboardColors) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|key| paint_letter(key, keyboard.get(key)).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent * 2), keys.join(""))
        })
        .collect()
}

/// Format a color code as emoji string
#[must_use]
pub fn color_code_to_emoji(code: &ColorCode) -> String {
    code.to_emoji()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Gray, Green, Yellow};

    #[test]
    fn keyboard_rows_are_letters() {
        for row in KEYBOARD_ROWS {
            assert!(crate::core::is_all_letters(row));
        }
    }

    #[test]
    fn guess_row_has_one_cell_per_rune() {
        let code = ColorCode::new(vec![Gray, Green, Gray, Green]);
        let row = format_guess_row("BÄRE", &code);

        for cell in [" B ", " Ä ", " R ", " E "] {
            assert!(row.contains(cell), "{row:?} misses {cell:?}");
        }
    }

    #[test]
    fn keyboard_lists_every_key() {
        let keyboard: KeyboardColors = [('Q', Green), ('ß', Yellow)].into_iter().collect();
        let rows = format_keyboard(&keyboard);

        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains(" Q "));
        assert!(rows[1].contains(" Ö "));
        assert!(rows[2].contains(" ß "));
    }

    #[test]
    fn emoji_rendering() {
        let code = ColorCode::new(vec![Green, Yellow, Gray]);
        assert_eq!(color_code_to_emoji(&code), "🟩🟨⬜");
    }
}
