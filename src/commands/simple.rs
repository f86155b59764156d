//! Simple interactive CLI mode
//!
//! Text-based interactive client without TUI. Reads a guess and a feedback
//! line per turn and drives the session machine; all filtering happens on
//! the server.

use crate::core::FeedbackVector;
use crate::output::{print_candidates, print_history, print_stats};
use crate::service::FilterService;
use crate::session::{MAX_ATTEMPTS, Session, SessionStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: FilterService>(session: &mut Session<S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Wordle Companion - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess you played, then the coloring the game gave you:");
    println!("  - g = green (correct position)");
    println!("  - y = yellow (wrong position)");
    println!("  - b = gray (not in word)");
    println!("  - Or type 'win' if every letter came back green!\n");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'stats' for statistics\n");

    loop {
        match session.status() {
            SessionStatus::Solved => {
                print_celebration(session.attempts_used(), session);
                if !prompt_play_again(session)? {
                    return Ok(());
                }
                continue;
            }
            SessionStatus::Exhausted => {
                println!(
                    "\n{}",
                    "❌ Out of guesses - puzzle not solved.".bright_red().bold()
                );
                if !prompt_play_again(session)? {
                    return Ok(());
                }
                continue;
            }
            SessionStatus::InProgress => {}
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Guess {} of {MAX_ATTEMPTS}",
            session.attempts_used() + 1
        );

        // Read the guess
        let guess = match read_guess(session)? {
            Command::Text(word) => word,
            Command::Quit => return Ok(()),
            Command::Continue => continue,
        };
        session.set_pending_guess(&guess);

        // Read the feedback
        let feedback = match read_feedback(session)? {
            Command::Text(fb) => match fb.parse::<FeedbackVector>() {
                Ok(v) => v,
                Err(_) => {
                    println!("{}", "Invalid feedback! Use five of g/y/b, e.g. bbgyb\n".red());
                    continue;
                }
            },
            Command::Quit => return Ok(()),
            Command::Continue => continue,
        };
        session.set_pending_feedback(feedback);

        // Submit to the filtering service
        if let Err(e) = session.submit_guess() {
            println!("\n{} {e}", "✗".bright_red());
            println!("Nothing was recorded - try the same guess again.\n");
            continue;
        }

        println!();
        print_history(session.history());
        println!();
        print_candidates(session.candidates());
        println!();
    }
}

enum Command {
    Text(String),
    Quit,
    Continue,
}

fn read_guess<S: FilterService>(session: &mut Session<S>) -> Result<Command, String> {
    loop {
        let input = get_user_input("Your guess")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(Command::Quit);
            }
            "new" | "n" => {
                if start_new_game(session) {
                    return Ok(Command::Continue);
                }
            }
            "stats" => {
                print_stats(&session.stats());
                println!();
            }
            word if word.len() == 5 && word.chars().all(|c| c.is_ascii_alphabetic()) => {
                return Ok(Command::Text(input));
            }
            _ => {
                println!("{}", "Please enter exactly 5 letters.\n".red());
            }
        }
    }
}

fn read_feedback<S: FilterService>(session: &mut Session<S>) -> Result<Command, String> {
    loop {
        let input = get_user_input("Feedback (g/y/b, or 'win')")?.to_lowercase();
        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(Command::Quit);
            }
            "new" | "n" => {
                if start_new_game(session) {
                    return Ok(Command::Continue);
                }
            }
            "win" | "correct" | "solved" => {
                return Ok(Command::Text("ggggg".to_string()));
            }
            _ => return Ok(Command::Text(input)),
        }
    }
}

/// Reset through the service; reports failure and keeps the session if the
/// reset call doesn't go through.
fn start_new_game<S: FilterService>(session: &mut Session<S>) -> bool {
    match session.reset_session() {
        Ok(()) => {
            println!("\n🔄 New game started!\n");
            true
        }
        Err(e) => {
            println!("\n{} {e}", "✗".bright_red());
            println!("The session is unchanged - try again.\n");
            false
        }
    }
}

fn print_celebration<S: FilterService>(attempts: usize, session: &Session<S>) {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "        🎉  S O L V E D !  🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    println!(
        "\n  Solved in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    print_history(session.history());
    print_stats(&session.stats());
    println!();
}

fn prompt_play_again<S: FilterService>(session: &mut Session<S>) -> Result<bool, String> {
    loop {
        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => {
                if start_new_game(session) {
                    return Ok(true);
                }
                // Reset failed; offer the choice again
            }
            "no" | "n" | "quit" | "q" => {
                print_stats(&session.stats());
                println!("\n👋 Thanks for playing!\n");
                return Ok(false);
            }
            _ => {}
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
