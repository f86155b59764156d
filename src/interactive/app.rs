//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::service::FilterService;
use crate::session::{Session, SessionStatus};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S> {
    pub session: Session<S>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: FilterService> App<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            messages: vec![
                Message {
                    text: "Type your guess, then color it the way the game did.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Keys 1-5 cycle each letter: gray → yellow → green.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Append a letter to the pending guess
    pub fn push_letter(&mut self, c: char) {
        let mut guess = self.session.pending_guess().to_string();
        if guess.len() < WORD_LENGTH {
            guess.push(c.to_ascii_uppercase());
            self.session.set_pending_guess(&guess);
        }
    }

    /// Remove the last letter of the pending guess
    pub fn pop_letter(&mut self) {
        let mut guess = self.session.pending_guess().to_string();
        if guess.pop().is_some() {
            self.session.set_pending_guess(&guess);
        }
    }

    /// Cycle the feedback mark under the given letter position
    pub fn toggle_position(&mut self, position: usize) {
        self.session.toggle_mark(position);
    }

    /// Submit the pending guess and feedback to the filtering service
    pub fn submit(&mut self) {
        if self.session.pending_guess().len() != WORD_LENGTH {
            self.add_message("Guess must be exactly 5 letters!", MessageStyle::Error);
            return;
        }

        if let Err(e) = self.session.submit_guess() {
            self.add_message(&e.to_string(), MessageStyle::Error);
            self.add_message(
                "Nothing was recorded - press ENTER to retry.",
                MessageStyle::Info,
            );
            return;
        }

        match self.session.status() {
            SessionStatus::Solved => {
                let attempts = self.session.attempts_used();
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SessionStatus::Exhausted => {
                self.add_message("❌ Out of guesses - puzzle not solved.", MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SessionStatus::InProgress => {
                let remaining = self.session.candidates().len();
                if remaining == 0 {
                    self.add_message(
                        "No candidates remain - a coloring may be wrong.",
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!("{remaining} candidates remaining"),
                        MessageStyle::Info,
                    );
                }
            }
        }
    }

    /// Start a new game, recording the finished one in the stats
    pub fn new_game(&mut self) {
        if let Err(e) = self.session.reset_session() {
            self.add_message(&e.to_string(), MessageStyle::Error);
            self.add_message("The session is unchanged - try again.", MessageStyle::Info);
            return;
        }
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: FilterService>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: FilterService>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.session.status().is_terminal() {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // In a finished game, ignore other keys
                    }
                }
            } else {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
                    KeyCode::Backspace => {
                        app.pop_letter();
                    }
                    KeyCode::Char(c @ '1'..='5') => {
                        app.toggle_position(c as usize - '1' as usize);
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        app.push_letter(c);
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackVector, Mark};
    use crate::service::FilterError;

    /// Service stub that always returns the same candidate list
    struct FixedService(Vec<String>);

    impl FilterService for FixedService {
        fn filter(
            &self,
            _guess: &str,
            _feedback: FeedbackVector,
        ) -> Result<Vec<String>, FilterError> {
            Ok(self.0.clone())
        }

        fn reset(&self) -> Result<(), FilterError> {
            Ok(())
        }
    }

    fn test_app() -> App<FixedService> {
        App::new(Session::new(FixedService(vec!["slate".to_string()])))
    }

    #[test]
    fn letters_accumulate_up_to_five() {
        let mut app = test_app();
        for c in "cranes".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.session.pending_guess(), "CRANE");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut app = test_app();
        app.push_letter('c');
        app.push_letter('r');
        app.pop_letter();
        assert_eq!(app.session.pending_guess(), "C");
    }

    #[test]
    fn short_guess_is_not_submitted() {
        let mut app = test_app();
        app.push_letter('c');
        app.submit();

        assert_eq!(app.session.attempts_used(), 0);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn full_guess_submits_and_clears_input() {
        let mut app = test_app();
        for c in "crane".chars() {
            app.push_letter(c);
        }
        app.toggle_position(0);
        assert_eq!(app.session.pending_feedback().mark_at(0), Mark::Present);

        app.submit();

        assert_eq!(app.session.attempts_used(), 1);
        assert_eq!(app.session.pending_guess(), "");
        assert_eq!(app.session.candidates(), ["slate".to_string()]);
    }
}
