//! Poll retry policy

use std::time::Duration;

use tokio::time::Instant;

/// Bounded retry policy for status polling
///
/// Fixed interval between calls, fixed overall budget. Failed calls are
/// retried on the next tick; nothing is retried past the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    interval: Duration,
    max_wait: Duration,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_wait: Duration) -> Self {
        Self { interval, max_wait }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_wait(&self) -> Duration {
        self.max_wait
    }

    /// Absolute deadline for a loop started at `start`
    pub fn deadline_from(&self, start: Instant) -> Instant {
        start + self.max_wait
    }

    /// How long to wait before the next call
    ///
    /// Never sleeps past the deadline, so a loop wakes exactly in time to
    /// notice it has run out of budget.
    pub fn next_delay(&self, now: Instant, deadline: Instant) -> Duration {
        self.interval.min(deadline.saturating_duration_since(now))
    }

    /// Upper bound on status calls a loop under this policy can issue
    pub fn max_calls(&self) -> u64 {
        if self.interval.is_zero() {
            return u64::MAX;
        }
        let full_intervals = self.max_wait.as_nanos() / self.interval.as_nanos();
        u64::try_from(full_intervals).unwrap_or(u64::MAX).saturating_add(1)
    }
}
