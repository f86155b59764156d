//! The session state machine
//!
//! All transitions are triggered synchronously by discrete user actions.
//! `submit_guess` and `reset_session` block on the filtering service; the
//! exclusive borrow they take guarantees at most one call is ever in
//! flight, and each call either applies its mutations as one unit or leaves
//! the session exactly as it was.

use super::{GuessEntry, MAX_ATTEMPTS, SessionError, SessionStatus, StatsLog, StatsSummary};
use crate::core::{FeedbackVector, WORD_LENGTH};
use crate::service::FilterService;

/// A single puzzle-solving session plus the stats log that outlives it
///
/// Generic over the filtering service so the transition rules are testable
/// without a network.
pub struct Session<S> {
    service: S,
    status: SessionStatus,
    attempts_used: usize,
    history: Vec<GuessEntry>,
    candidates: Vec<String>,
    pending_guess: String,
    pending_feedback: FeedbackVector,
    stats: StatsLog,
}

impl<S: FilterService> Session<S> {
    /// Start a fresh in-progress session backed by `service`
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            status: SessionStatus::InProgress,
            attempts_used: 0,
            history: Vec::new(),
            candidates: Vec::new(),
            pending_guess: String::new(),
            pending_feedback: FeedbackVector::default(),
            stats: StatsLog::new(),
        }
    }

    /// Current status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Guesses submitted so far this session
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    /// Submitted attempts in order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessEntry] {
        &self.history
    }

    /// Remaining candidate words as last reported by the service
    ///
    /// Empty until the first successful submission.
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The in-progress, not-yet-submitted guess text
    #[inline]
    #[must_use]
    pub fn pending_guess(&self) -> &str {
        &self.pending_guess
    }

    /// The in-progress feedback vector being edited before submission
    #[inline]
    #[must_use]
    pub const fn pending_feedback(&self) -> FeedbackVector {
        self.pending_feedback
    }

    /// Derived cross-session statistics
    #[must_use]
    pub fn stats(&self) -> StatsSummary {
        self.stats.summary()
    }

    /// Cycle the pending feedback mark at `position` (0-4)
    ///
    /// No-op once the session is terminal.
    pub fn toggle_mark(&mut self, position: usize) {
        if self.status.is_terminal() {
            return;
        }
        self.pending_feedback.cycle(position);
    }

    /// Store the pending guess text, truncated to five characters
    ///
    /// The text is kept verbatim otherwise; validity is the filtering
    /// service's concern, not this machine's. The UI may call this on
    /// every keystroke.
    pub fn set_pending_guess(&mut self, text: &str) {
        self.pending_guess = text.chars().take(WORD_LENGTH).collect();
    }

    /// Replace the whole pending feedback vector
    ///
    /// Line-based front ends parse a full vector at once instead of cycling
    /// marks; the terminal-state rule matches [`Self::toggle_mark`].
    pub fn set_pending_feedback(&mut self, feedback: FeedbackVector) {
        if self.status.is_terminal() {
            return;
        }
        self.pending_feedback = feedback;
    }

    /// Submit the pending guess and feedback to the filtering service
    ///
    /// A defensive no-op (no service call, no state change) unless the
    /// session is in progress with attempts remaining. On success the
    /// submission is applied as one unit: candidates replaced, history
    /// extended, attempt counted, pending state cleared, and the win/loss
    /// checks run against the vector that was just submitted.
    ///
    /// # Errors
    /// [`SessionError::SubmissionFailed`] if the service call fails; the
    /// session is left exactly as it was before the call.
    pub fn submit_guess(&mut self) -> Result<(), SessionError> {
        if self.status.is_terminal() || self.attempts_used >= MAX_ATTEMPTS {
            log::debug!("submit ignored: session no longer accepts guesses");
            return Ok(());
        }

        let submitted = self.pending_feedback;
        let remaining = self
            .service
            .filter(&self.pending_guess, submitted)
            .map_err(SessionError::SubmissionFailed)?;

        // The service accepted the submission; apply everything as one unit.
        let word = std::mem::take(&mut self.pending_guess);
        log::debug!(
            "attempt {}: {word} {submitted} -> {} candidates",
            self.attempts_used + 1,
            remaining.len()
        );

        self.candidates = remaining;
        self.history.push(GuessEntry::new(word, submitted));
        self.attempts_used += 1;
        self.pending_feedback = FeedbackVector::default();

        // The win check trusts the user-asserted vector; there is no known
        // solution on this side of the wire.
        if submitted.is_all_correct() {
            self.status = SessionStatus::Solved;
            log::debug!("solved in {} attempts", self.attempts_used);
        } else if self.attempts_used == MAX_ATTEMPTS {
            self.status = SessionStatus::Exhausted;
            log::debug!("exhausted after {MAX_ATTEMPTS} attempts");
        }

        Ok(())
    }

    /// Reset to a fresh in-progress session
    ///
    /// The filtering service is told to clear its cumulative state first;
    /// only once that succeeds is the solved session recorded in the stats
    /// log and the local state discarded.
    ///
    /// # Errors
    /// [`SessionError::ResetFailed`] if the service call fails; the session
    /// remains in its prior state, terminal or not.
    pub fn reset_session(&mut self) -> Result<(), SessionError> {
        self.service.reset().map_err(SessionError::ResetFailed)?;

        if self.status == SessionStatus::Solved {
            self.stats.record(self.attempts_used);
        }

        self.history.clear();
        self.candidates.clear();
        self.status = SessionStatus::InProgress;
        self.attempts_used = 0;
        self.pending_guess.clear();
        self.pending_feedback = FeedbackVector::default();

        log::debug!("session reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::service::FilterError;
    use reqwest::StatusCode;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Scripted stand-in for the remote service
    ///
    /// Each `filter` call pops the next scripted response; `fail_next_reset`
    /// makes the following reset call fail once.
    #[derive(Default)]
    struct ScriptedService {
        responses: RefCell<VecDeque<Result<Vec<String>, ()>>>,
        filter_calls: Cell<usize>,
        reset_calls: Cell<usize>,
        fail_next_reset: Cell<bool>,
    }

    impl ScriptedService {
        fn with_responses(responses: Vec<Result<Vec<String>, ()>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                ..Self::default()
            }
        }

        fn service_error() -> FilterError {
            FilterError::Status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }

    impl FilterService for &ScriptedService {
        fn filter(
            &self,
            _guess: &str,
            _feedback: FeedbackVector,
        ) -> Result<Vec<String>, FilterError> {
            self.filter_calls.set(self.filter_calls.get() + 1);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or(Ok(Vec::new()))
                .map_err(|()| ScriptedService::service_error())
        }

        fn reset(&self) -> Result<(), FilterError> {
            self.reset_calls.set(self.reset_calls.get() + 1);
            if self.fail_next_reset.take() {
                return Err(ScriptedService::service_error());
            }
            Ok(())
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    /// Submit one non-winning guess through the machine
    fn submit_miss(session: &mut Session<&ScriptedService>, guess: &str) {
        session.set_pending_guess(guess);
        session.set_pending_feedback(FeedbackVector::from_str("bbbbb").unwrap());
        session.submit_guess().unwrap();
    }

    #[test]
    fn fresh_session_state() {
        let service = ScriptedService::default();
        let session = Session::new(&service);

        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.attempts_used(), 0);
        assert!(session.history().is_empty());
        assert!(session.candidates().is_empty());
        assert_eq!(session.pending_guess(), "");
        assert_eq!(session.pending_feedback(), FeedbackVector::default());
    }

    #[test]
    fn toggle_cycles_pending_mark() {
        let service = ScriptedService::default();
        let mut session = Session::new(&service);

        session.toggle_mark(0);
        assert_eq!(session.pending_feedback().mark_at(0), Mark::Present);
        session.toggle_mark(0);
        assert_eq!(session.pending_feedback().mark_at(0), Mark::Correct);
        session.toggle_mark(0);
        assert_eq!(session.pending_feedback().mark_at(0), Mark::Absent);
    }

    #[test]
    fn pending_guess_truncated_to_five_chars() {
        let service = ScriptedService::default();
        let mut session = Session::new(&service);

        session.set_pending_guess("CRANES");
        assert_eq!(session.pending_guess(), "CRANE");

        // Shorter and mixed-case text is stored verbatim
        session.set_pending_guess("cRa");
        assert_eq!(session.pending_guess(), "cRa");
    }

    #[test]
    fn successful_submit_applies_one_attempt() {
        // Scenario 1: fresh session, CRANE with bbbbg, 42 candidates
        let remaining = (0..42).map(|i| format!("word{i}")).collect();
        let service = ScriptedService::with_responses(vec![Ok(remaining)]);
        let mut session = Session::new(&service);

        session.set_pending_guess("CRANE");
        let feedback = FeedbackVector::from_str("bbbbg").unwrap();
        session.set_pending_feedback(feedback);
        session.submit_guess().unwrap();

        assert_eq!(session.attempts_used(), 1);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.candidates().len(), 42);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].word(), "CRANE");
        assert_eq!(session.history()[0].feedback(), feedback);

        // Pending state cleared for the next guess
        assert_eq!(session.pending_guess(), "");
        assert_eq!(session.pending_feedback(), FeedbackVector::default());
    }

    #[test]
    fn all_correct_feedback_solves() {
        // Scenario 2: second guess submitted as all-correct
        let service = ScriptedService::with_responses(vec![
            Ok(words(&["slate", "stale"])),
            Ok(words(&["slate"])),
        ]);
        let mut session = Session::new(&service);

        submit_miss(&mut session, "CRANE");
        assert_eq!(session.status(), SessionStatus::InProgress);

        session.set_pending_guess("SLATE");
        session.set_pending_feedback(FeedbackVector::ALL_CORRECT);
        session.submit_guess().unwrap();

        assert_eq!(session.status(), SessionStatus::Solved);
        assert_eq!(session.attempts_used(), 2);
    }

    #[test]
    fn solve_on_final_attempt_wins_not_exhausts() {
        let service = ScriptedService::default();
        let mut session = Session::new(&service);

        for n in 0..5 {
            submit_miss(&mut session, &format!("gues{n}"));
        }
        assert_eq!(session.attempts_used(), 5);

        session.set_pending_guess("SLATE");
        session.set_pending_feedback(FeedbackVector::ALL_CORRECT);
        session.submit_guess().unwrap();

        // The win check runs before the attempt-limit check
        assert_eq!(session.status(), SessionStatus::Solved);
        assert_eq!(session.attempts_used(), 6);
    }

    #[test]
    fn six_misses_exhaust_the_session() {
        // Scenario 4
        let service = ScriptedService::default();
        let mut session = Session::new(&service);

        for n in 0..6 {
            submit_miss(&mut session, &format!("gues{n}"));
        }

        assert_eq!(session.status(), SessionStatus::Exhausted);
        assert_eq!(session.attempts_used(), 6);

        // A seventh submit is a no-op: no state change, no service call
        let calls_before = service.filter_calls.get();
        session.set_pending_guess("extra");
        session.submit_guess().unwrap();

        assert_eq!(service.filter_calls.get(), calls_before);
        assert_eq!(session.attempts_used(), 6);
        assert_eq!(session.history().len(), 6);
    }

    #[test]
    fn submit_after_solve_is_a_no_op() {
        let service = ScriptedService::default();
        let mut session = Session::new(&service);

        session.set_pending_guess("SLATE");
        session.set_pending_feedback(FeedbackVector::ALL_CORRECT);
        session.submit_guess().unwrap();
        assert_eq!(session.status(), SessionStatus::Solved);

        let calls_before = service.filter_calls.get();
        session.submit_guess().unwrap();

        assert_eq!(service.filter_calls.get(), calls_before);
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn failed_submit_leaves_session_untouched() {
        // Scenario 5
        let service =
            ScriptedService::with_responses(vec![Ok(words(&["slate", "crane"])), Err(())]);
        let mut session = Session::new(&service);

        submit_miss(&mut session, "CRANE");

        session.set_pending_guess("SLATE");
        let feedback = FeedbackVector::from_str("gybbg").unwrap();
        session.set_pending_feedback(feedback);

        let err = session.submit_guess().unwrap_err();
        assert!(matches!(err, SessionError::SubmissionFailed(_)));

        // Everything exactly as before the call, pending state included
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.attempts_used(), 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.candidates(), words(&["slate", "crane"]));
        assert_eq!(session.pending_guess(), "SLATE");
        assert_eq!(session.pending_feedback(), feedback);
    }

    #[test]
    fn terminal_state_freezes_pending_feedback_edits() {
        let service = ScriptedService::default();
        let mut session = Session::new(&service);

        session.set_pending_guess("SLATE");
        session.set_pending_feedback(FeedbackVector::ALL_CORRECT);
        session.submit_guess().unwrap();
        assert!(session.status().is_terminal());

        session.toggle_mark(0);
        session.set_pending_feedback(FeedbackVector::from_str("ybbby").unwrap());
        assert_eq!(session.pending_feedback(), FeedbackVector::default());
    }

    #[test]
    fn reset_after_solve_records_stats() {
        // Scenario 3: reset after solving in two
        let service = ScriptedService::default();
        let mut session = Session::new(&service);

        submit_miss(&mut session, "CRANE");
        session.set_pending_guess("SLATE");
        session.set_pending_feedback(FeedbackVector::ALL_CORRECT);
        session.submit_guess().unwrap();

        session.reset_session().unwrap();

        assert_eq!(service.reset_calls.get(), 1);
        assert_eq!(session.stats().games_played, 1);
        assert_eq!(session.stats().average_attempts, Some(2.0));

        // Fresh session state
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.attempts_used(), 0);
        assert!(session.history().is_empty());
        assert!(session.candidates().is_empty());
        assert_eq!(session.pending_guess(), "");
    }

    #[test]
    fn reset_after_exhaustion_records_nothing() {
        let service = ScriptedService::default();
        let mut session = Session::new(&service);

        for n in 0..6 {
            submit_miss(&mut session, &format!("gues{n}"));
        }
        assert_eq!(session.status(), SessionStatus::Exhausted);

        session.reset_session().unwrap();
        assert_eq!(session.stats().games_played, 0);
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn reset_mid_session_records_nothing() {
        let service = ScriptedService::default();
        let mut session = Session::new(&service);

        submit_miss(&mut session, "CRANE");
        session.reset_session().unwrap();

        assert_eq!(session.stats().games_played, 0);
        assert_eq!(session.attempts_used(), 0);
    }

    #[test]
    fn failed_reset_leaves_session_untouched() {
        let service = ScriptedService::default();
        let mut session = Session::new(&service);

        session.set_pending_guess("SLATE");
        session.set_pending_feedback(FeedbackVector::ALL_CORRECT);
        session.submit_guess().unwrap();

        service.fail_next_reset.set(true);
        let err = session.reset_session().unwrap_err();
        assert!(matches!(err, SessionError::ResetFailed(_)));

        // Still solved, stats not recorded
        assert_eq!(session.status(), SessionStatus::Solved);
        assert_eq!(session.attempts_used(), 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.stats().games_played, 0);

        // A later successful reset records the solve exactly once
        session.reset_session().unwrap();
        assert_eq!(session.stats().games_played, 1);
    }

    #[test]
    fn stats_accumulate_across_sessions() {
        let service = ScriptedService::default();
        let mut session = Session::new(&service);

        for attempts in [2, 4] {
            for n in 0..attempts - 1 {
                submit_miss(&mut session, &format!("gues{n}"));
            }
            session.set_pending_guess("SLATE");
            session.set_pending_feedback(FeedbackVector::ALL_CORRECT);
            session.submit_guess().unwrap();
            session.reset_session().unwrap();
        }

        let stats = session.stats();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.average_attempts, Some(3.0));
    }
}
