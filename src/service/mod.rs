//! Filtering service contract
//!
//! Candidate-word filtering lives in an external service; this module
//! defines the seam the session state machine talks through and the error
//! type both calls share. The production implementation is
//! [`http::HttpFilterService`].

pub mod http;

use crate::core::FeedbackVector;

pub use http::HttpFilterService;

/// Errors from a filtering service call
///
/// Both the transport layer and a non-success HTTP status count as a failed
/// call; the session machine leaves its state untouched either way.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The request could not be sent or the response could not be read
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status
    #[error("service responded with status {0}")]
    Status(reqwest::StatusCode),
}

/// The external collaborator that filters candidate words
///
/// The service keeps cumulative filter state across `filter` calls until
/// `reset` is invoked. Implementations are synchronous; the caller holds
/// exclusive access for the duration of a call, so at most one request is
/// ever in flight.
pub trait FilterService {
    /// Submit a guess with its feedback; returns the remaining candidates
    /// consistent with all feedback given since the last reset.
    fn filter(&self, guess: &str, feedback: FeedbackVector) -> Result<Vec<String>, FilterError>;

    /// Clear the service's cumulative filter state.
    fn reset(&self) -> Result<(), FilterError>;
}
