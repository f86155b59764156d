//! Puzzle session state machine
//!
//! One session is one complete attempt at solving a single puzzle, from
//! reset to solved or exhausted. [`Session`] owns all mutable session state
//! and is the only mutator the presentation layers may use; candidate
//! filtering itself is delegated to a [`FilterService`](crate::service::FilterService).

mod machine;
mod stats;

use crate::core::FeedbackVector;
use crate::service::FilterError;

pub use machine::Session;
pub use stats::{StatsLog, StatsSummary};

/// Maximum guesses per session
pub const MAX_ATTEMPTS: usize = 6;

/// Where a session stands
///
/// `Solved` and `Exhausted` are terminal: no further submissions are
/// accepted until the session is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Accepting guesses
    InProgress,
    /// A submitted feedback vector was all-correct
    Solved,
    /// All six attempts used without solving
    Exhausted,
}

impl SessionStatus {
    /// True for `Solved` and `Exhausted`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// One submitted attempt: the guessed word and the feedback it received
///
/// Entries are appended to the session history and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEntry {
    word: String,
    feedback: FeedbackVector,
}

impl GuessEntry {
    pub(crate) fn new(word: String, feedback: FeedbackVector) -> Self {
        Self { word, feedback }
    }

    /// The guessed word, exactly as submitted
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The feedback the user asserted for this guess
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> FeedbackVector {
        self.feedback
    }
}

/// Recoverable session operation failures
///
/// The machine leaves all session state untouched when either variant is
/// returned; the user re-invokes the action, nothing retries automatically.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The filtering service was unreachable or errored during submit
    #[error("guess submission failed: {0}")]
    SubmissionFailed(#[source] FilterError),
    /// The filtering service was unreachable or errored during reset
    #[error("session reset failed: {0}")]
    ResetFailed(#[source] FilterError),
}
