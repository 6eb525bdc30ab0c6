//! Absolute deadlines threaded through every suspension point of a check.
//!
//! A check composes three budgets: the global ceiling, the linked-content
//! batch ceiling, and the per-fetch bound. Rather than racing independent
//! timers, each operation receives a [`Deadline`] and narrows it with
//! [`Deadline::tighten`] before awaiting. Work awaited under
//! `tokio::time::timeout_at(deadline.instant(), ..)` is dropped when the
//! deadline passes, which aborts the in-flight request.

use std::time::Duration;
use tokio::time::Instant;

/// Horizon used when a budget is too large to represent as an instant.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// A point in time after which an operation must stop waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// A deadline `budget` from now.
    ///
    /// Budgets past the representable range are capped at roughly 30 years.
    pub fn after(budget: Duration) -> Self {
        let now = Instant::now();
        let at = now
            .checked_add(budget)
            .unwrap_or_else(|| now + FAR_FUTURE);
        Self { at }
    }

    /// A deadline at an explicit instant.
    pub const fn at(instant: Instant) -> Self {
        Self { at: instant }
    }

    /// The earlier of this deadline and `budget` from now.
    #[must_use]
    pub fn tighten(self, budget: Duration) -> Self {
        self.min(Self::after(budget))
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    /// Whether the deadline has passed.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.at
    }

    /// The underlying instant, for `tokio::time::timeout_at`.
    pub const fn instant(&self) -> Instant {
        self.at
    }
}
