//! Filter input debouncing
//!
//! Keystrokes update a pending value immediately; the value is committed to
//! the projection only after a quiet period with no new input. A new
//! keystroke inside the window cancels the prior timer and restarts it, so
//! a burst of typing produces exactly one recomputation with the final text.
//!
//! Single-threaded: the caller polls on its event tick with an explicit
//! `Instant`, which also keeps tests deterministic.

use std::time::{Duration, Instant};

/// Quiet period before a pending value commits
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Pending-value debouncer with timer cancellation
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace the pending value and restart the quiet period
    pub fn submit(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some((value.into(), now));
    }

    /// Commit the pending value if its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, since)) if now.duration_since(*since) >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Commit the pending value immediately, skipping the quiet period
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Drop the pending value without committing
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The pending value waiting on its quiet period, if any
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_ref().map(|(value, _)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_commits_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.submit("a", start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(100)), None);
        assert_eq!(
            debouncer.poll(start + DELAY),
            Some("a".to_string())
        );
    }

    #[test]
    fn test_burst_commits_only_final_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        // "a", "al", "ali" typed within the window
        debouncer.submit("a", start);
        debouncer.submit("al", start + Duration::from_millis(100));
        debouncer.submit("ali", start + Duration::from_millis(200));

        // 300ms after the first keystroke only 100ms have passed since the last
        assert_eq!(debouncer.poll(start + DELAY), None);

        // One commit, with the final value
        let committed = debouncer.poll(start + Duration::from_millis(200) + DELAY);
        assert_eq!(committed, Some("ali".to_string()));

        // Nothing left to commit
        assert_eq!(debouncer.poll(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_flush_commits_immediately() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.submit("query", start);
        assert_eq!(debouncer.flush(), Some("query".to_string()));
        assert_eq!(debouncer.flush(), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.submit("query", start);
        debouncer.cancel();
        assert_eq!(debouncer.pending(), None);
        assert_eq!(debouncer.poll(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_pending_exposes_latest_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        assert_eq!(debouncer.pending(), None);
        debouncer.submit("a", start);
        debouncer.submit("ab", start);
        assert_eq!(debouncer.pending(), Some("ab"));
    }
}
