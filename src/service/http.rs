//! HTTP implementation of the filtering service contract
//!
//! Wire format (fixed protocol detail):
//! - `POST {base}/filter` with `{"guess": "...", "feedback": ["b","y","g","b","b"]}`,
//!   answered by `{"remaining": ["slate", ...]}`
//! - `POST {base}/reset` with no body

use super::{FilterError, FilterService};
use crate::core::{FeedbackVector, WORD_LENGTH};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Blocking HTTP client for the filtering service
pub struct HttpFilterService {
    client: reqwest::blocking::Client,
    base_url: String,
}

/// Request body for `POST /filter`
#[derive(Debug, Serialize)]
struct FilterRequest<'a> {
    guess: &'a str,
    feedback: [char; WORD_LENGTH],
}

/// Response body from `POST /filter`
#[derive(Debug, Deserialize)]
struct FilterResponse {
    remaining: Vec<String>,
}

impl HttpFilterService {
    /// Create a client for the service at `base_url`
    ///
    /// Trailing slashes on the base URL are tolerated. Every request is
    /// capped by `timeout`.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FilterError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

impl FilterService for HttpFilterService {
    fn filter(&self, guess: &str, feedback: FeedbackVector) -> Result<Vec<String>, FilterError> {
        let url = self.endpoint("filter");
        log::debug!("POST {url} guess={guess} feedback={feedback}");

        let request = FilterRequest {
            guess,
            feedback: feedback.wire_chars(),
        };

        let response = self.client.post(&url).json(&request).send()?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("filter rejected: {status}");
            return Err(FilterError::Status(status));
        }

        let body: FilterResponse = response.json()?;
        log::debug!("filter ok: {} candidates remain", body.remaining.len());
        Ok(body.remaining)
    }

    fn reset(&self) -> Result<(), FilterError> {
        let url = self.endpoint("reset");
        log::debug!("POST {url}");

        let response = self.client.post(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("reset rejected: {status}");
            return Err(FilterError::Status(status));
        }

        Ok(())
    }
}
