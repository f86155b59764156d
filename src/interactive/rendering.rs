//! TUI rendering with ratatui
//!
//! Board, candidate, and statistics panels for the interactive client.

use super::app::{App, MessageStyle};
use crate::core::{FeedbackVector, Mark, WORD_LENGTH};
use crate::service::FilterService;
use crate::session::{MAX_ATTEMPTS, SessionStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// How many candidate words the panel lists before summarizing
const MAX_CANDIDATES_SHOWN: usize = 12;

/// Main UI rendering function
pub fn ui<S: FilterService>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Status bar
            Constraint::Length(3), // Instructions
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
    render_instructions(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE COMPANION")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background/foreground colors for a feedback mark tile
const fn mark_colors(mark: Mark) -> (Color, Color) {
    match mark {
        Mark::Correct => (Color::Green, Color::Black),
        Mark::Present => (Color::Yellow, Color::Black),
        Mark::Absent => (Color::DarkGray, Color::White),
    }
}

fn tile_spans(word: &str, feedback: FeedbackVector) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw("  ")];
    for (i, &mark) in feedback.marks().iter().enumerate() {
        let letter = word.chars().nth(i).unwrap_or(' ').to_ascii_uppercase();
        let (bg, fg) = mark_colors(mark);
        spans.push(Span::styled(
            format!(" {letter} "),
            Style::default().fg(fg).bg(bg),
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

fn render_board<S: FilterService>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut lines = vec![Line::from("")];

    for entry in app.session.history() {
        lines.push(Line::from(tile_spans(entry.word(), entry.feedback())));
        lines.push(Line::from(""));
    }

    if app.session.status() == SessionStatus::InProgress {
        // The pending row previews the feedback being edited
        lines.push(Line::from(tile_spans(
            app.session.pending_guess(),
            app.session.pending_feedback(),
        )));
        lines.push(Line::from(Span::styled(
            "   1   2   3   4   5",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel<S: FilterService>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Candidates
            Constraint::Length(5), // Stats
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_candidates<S: FilterService>(f: &mut Frame, app: &App<S>, area: Rect) {
    let candidates = app.session.candidates();

    let content = if candidates.is_empty() {
        vec![Line::from("No filter results yet - submit a guess.")]
    } else {
        let mut lines = Vec::new();
        for (i, word) in candidates.iter().take(MAX_CANDIDATES_SHOWN).enumerate() {
            let style = if i == 0 {
                // The service ranks best-first
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("  {}", word.to_uppercase()),
                style,
            )));
        }
        if candidates.len() > MAX_CANDIDATES_SHOWN {
            lines.push(Line::from(format!(
                "  ... and {} more",
                candidates.len() - MAX_CANDIDATES_SHOWN
            )));
        }
        lines
    };

    let title = format!(" Candidates ({}) ", candidates.len());
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_stats<S: FilterService>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = app.session.stats();
    let average = stats
        .average_attempts
        .map_or_else(|| "N/A".to_string(), |avg| format!("{avg:.2}"));

    let content = vec![
        Line::from(format!("Games played:    {}", stats.games_played)),
        Line::from(format!("Average guesses: {average}")),
        Line::from(format!(
            "This game:       {}/{MAX_ATTEMPTS} attempts",
            app.session.attempts_used()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S: FilterService>(f: &mut Frame, app: &App<S>, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|m| {
            let style = match m.style {
                MessageStyle::Info => Style::default().fg(Color::Cyan),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(m.text.clone(), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Messages ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status<S: FilterService>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (text, color) = match app.session.status() {
        SessionStatus::InProgress => {
            let typed = app.session.pending_guess().len();
            (
                format!(
                    "In progress - attempt {} of {MAX_ATTEMPTS} ({typed}/{WORD_LENGTH} letters typed)",
                    app.session.attempts_used() + 1
                ),
                Color::Cyan,
            )
        }
        SessionStatus::Solved => (
            format!("Solved in {} guesses! 🎉", app.session.attempts_used()),
            Color::Green,
        ),
        SessionStatus::Exhausted => ("Out of guesses - puzzle not solved.".to_string(), Color::Red),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(paragraph, area);
}

fn render_instructions<S: FilterService>(f: &mut Frame, app: &App<S>, area: Rect) {
    let text = if app.session.status().is_terminal() {
        "N: New game | Q/ESC: Quit"
    } else {
        "Type letters | 1-5: cycle color | ENTER: Submit | Ctrl-N: New game | ESC: Quit"
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
