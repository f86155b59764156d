//! Wordle Companion
//!
//! An interactive client for solving Wordle puzzles against a remote
//! filtering service: you enter each guess and the coloring the game gave
//! you, and the service reports which words are still possible.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use wordle_companion::service::HttpFilterService;
//! use wordle_companion::session::Session;
//!
//! let service =
//!     HttpFilterService::new("http://localhost:8000", Duration::from_secs(10)).unwrap();
//! let mut session = Session::new(service);
//!
//! session.set_pending_guess("CRANE");
//! session.toggle_mark(2); // third letter present
//! session.submit_guess().unwrap();
//! println!("{} candidates remain", session.candidates().len());
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod session;

// Filtering service contract and HTTP client
pub mod service;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
