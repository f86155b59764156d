//! Core domain types for Wordle feedback
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod feedback;

pub use feedback::{FeedbackVector, Mark, WORD_LENGTH};
