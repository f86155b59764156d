//! Formatting utilities for terminal output

use crate::core::{FeedbackVector, Mark};
use colored::Colorize;

/// Format a feedback vector as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: FeedbackVector) -> String {
    let mut result = String::with_capacity(5);
    for mark in feedback.marks() {
        result.push(match mark {
            Mark::Absent => '⬜',
            Mark::Present => '🟨',
            Mark::Correct => '🟩',
        });
    }
    result
}

/// Format a guess as a row of colored letter tiles
///
/// Each letter is rendered on the background color of its mark, the way the
/// solved board looks in the original game.
#[must_use]
pub fn guess_tiles(word: &str, feedback: FeedbackVector) -> String {
    let mut row = String::new();
    for (i, mark) in feedback.marks().iter().enumerate() {
        let letter = word.chars().nth(i).unwrap_or(' ').to_ascii_uppercase();
        let cell = format!(" {letter} ");
        let tile = match mark {
            Mark::Correct => cell.black().on_green(),
            Mark::Present => cell.black().on_yellow(),
            Mark::Absent => cell.white().on_bright_black(),
        };
        row.push_str(&tile.to_string());
        row.push(' ');
    }
    row
}
