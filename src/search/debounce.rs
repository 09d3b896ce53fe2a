//! Trailing-edge debounce for the typed search query.
//!
//! Zellij timers carry no identifier, so the debouncer counts outstanding
//! timers instead: every keystroke schedules one, and the pending value is
//! committed only when the last of them fires.

use std::time::Duration;

/// Default delay between the last keystroke and committing the query.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<String>,
    outstanding_timers: usize,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            outstanding_timers: 0,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Records a new input value and returns the timer to schedule.
    pub fn input(&mut self, value: String) -> Duration {
        self.pending = Some(value);
        self.outstanding_timers += 1;
        self.delay
    }

    /// Handles a fired timer; returns the value to commit if this was the last
    /// outstanding timer.
    pub fn on_timer(&mut self) -> Option<String> {
        if self.outstanding_timers == 0 {
            return None;
        }
        self.outstanding_timers -= 1;
        if self.outstanding_timers == 0 {
            self.pending.take()
        } else {
            None
        }
    }

    /// Commits the pending value immediately.
    ///
    /// Timers already scheduled still fire but find nothing to commit.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// Drops the pending value without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commits_only_after_last_timer() {
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.input("r".to_string()), DEFAULT_DEBOUNCE);
        debouncer.input("ru".to_string());
        debouncer.input("rus".to_string());

        assert_eq!(debouncer.on_timer(), None);
        assert_eq!(debouncer.on_timer(), None);
        assert_eq!(debouncer.on_timer(), Some("rus".to_string()));
        assert_eq!(debouncer.on_timer(), None);
    }

    #[test]
    fn flush_commits_immediately_and_late_timers_are_ignored() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        debouncer.input("go".to_string());

        assert_eq!(debouncer.flush(), Some("go".to_string()));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.on_timer(), None);
    }

    #[test]
    fn cancel_drops_pending_value() {
        let mut debouncer = Debouncer::default();
        debouncer.input("py".to_string());
        debouncer.cancel();
        assert_eq!(debouncer.on_timer(), None);
    }
}
