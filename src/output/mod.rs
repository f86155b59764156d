//! Terminal output formatting
//!
//! Display utilities for the line-based mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_candidates, print_history, print_stats};
