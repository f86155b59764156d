//! Display utilities for the line-based mode

use crate::output::formatters::guess_tiles;
use crate::session::{GuessEntry, StatsSummary};
use colored::Colorize;

/// How many candidate words the line mode prints before summarizing
const MAX_CANDIDATES_SHOWN: usize = 10;

/// Print the remaining candidate words, best-first as the service ranks them
pub fn print_candidates(candidates: &[String]) {
    println!("Possible candidates ({}):", candidates.len());
    for (i, word) in candidates.iter().take(MAX_CANDIDATES_SHOWN).enumerate() {
        if i == 0 {
            println!("  {}", word.to_uppercase().bright_green().bold());
        } else {
            println!("  {}", word.to_uppercase());
        }
    }
    if candidates.len() > MAX_CANDIDATES_SHOWN {
        println!("  ... and {} more", candidates.len() - MAX_CANDIDATES_SHOWN);
    }
}

/// Print the numbered guess history with colored tiles
pub fn print_history(history: &[GuessEntry]) {
    for (i, entry) in history.iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            guess_tiles(entry.word(), entry.feedback())
        );
    }
}

/// Print the cross-session solver statistics
pub fn print_stats(stats: &StatsSummary) {
    println!("\nSolver stats");
    println!("  Games played:    {}", stats.games_played);
    match stats.average_attempts {
        Some(avg) => println!("  Average guesses: {avg:.2}"),
        None => println!("  Average guesses: N/A"),
    }
}
