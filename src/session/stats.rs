//! Cross-session solve statistics
//!
//! The log outlives individual sessions: resetting a solved session appends
//! its attempt count here, and the log is never truncated within a run.
//! Exhausted sessions are not recorded.

/// Append-only record of attempts-per-solve
#[derive(Debug, Default, Clone)]
pub struct StatsLog {
    solves: Vec<usize>,
}

/// Derived statistics snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    /// Number of solved sessions recorded
    pub games_played: usize,
    /// Arithmetic mean of attempts across solved sessions; `None` until the
    /// first solve is recorded
    pub average_attempts: Option<f64>,
}

impl StatsLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a solved session's attempt count
    pub fn record(&mut self, attempts: usize) {
        self.solves.push(attempts);
    }

    /// The recorded attempt counts, in solve order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[usize] {
        &self.solves
    }

    /// Compute the derived summary
    #[must_use]
    pub fn summary(&self) -> StatsSummary {
        let games_played = self.solves.len();
        let average_attempts = if games_played == 0 {
            None
        } else {
            let total: usize = self.solves.iter().sum();
            Some(total as f64 / games_played as f64)
        };

        StatsSummary {
            games_played,
            average_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_has_no_average() {
        let log = StatsLog::new();
        let summary = log.summary();

        assert_eq!(summary.games_played, 0);
        assert_eq!(summary.average_attempts, None);
    }

    #[test]
    fn single_solve() {
        let mut log = StatsLog::new();
        log.record(3);

        let summary = log.summary();
        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.average_attempts, Some(3.0));
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let mut log = StatsLog::new();
        log.record(2);
        log.record(4);
        log.record(6);

        let summary = log.summary();
        assert_eq!(summary.games_played, 3);
        assert_eq!(summary.average_attempts, Some(4.0));
    }

    #[test]
    fn non_integer_average() {
        let mut log = StatsLog::new();
        log.record(3);
        log.record(4);

        assert_eq!(log.summary().average_attempts, Some(3.5));
    }

    #[test]
    fn entries_preserve_solve_order() {
        let mut log = StatsLog::new();
        log.record(6);
        log.record(1);
        log.record(4);

        assert_eq!(log.entries(), &[6, 1, 4]);
    }
}
