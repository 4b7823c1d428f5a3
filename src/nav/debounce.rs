//! Cancellable deferred execution for search input.
//!
//! [`Debouncer`] holds at most one pending value with a deadline. Scheduling
//! again cancels the pending timer and starts a new one, so a burst of
//! keystrokes closer together than the delay yields a single firing carrying
//! the last value. Time is passed in by the event loop, which keeps the
//! primitive deterministic and free of threads.

use std::time::{Duration, Instant};

/// Default quiescence delay for search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Identifies one scheduled timer.
///
/// A handle goes stale as soon as the timer fires, is cancelled, or is
/// superseded by a later schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    handle: TimerHandle,
    deadline: Instant,
    value: T,
}

/// Single-slot debounce timer.
///
/// # Examples
///
/// ```
/// use docnav::nav::Debouncer;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut debouncer = Debouncer::new(Duration::from_millis(250));
///
/// debouncer.schedule("q", start);
/// debouncer.schedule("qu", start + Duration::from_millis(50));
///
/// assert_eq!(debouncer.poll(start + Duration::from_millis(200)), None);
/// assert_eq!(debouncer.poll(start + Duration::from_millis(300)), Some("qu"));
/// assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    next_handle: u64,
    pending: Option<Pending<T>>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_handle: 0,
            pending: None,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value` to fire `delay` after `now`, replacing any pending value.
    pub fn schedule(&mut self, value: T, now: Instant) -> TimerHandle {
        if let Some(previous) = self.pending.take() {
            tracing::trace!(handle = previous.handle.0, "superseding pending timer");
        }

        let handle = TimerHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        self.pending = Some(Pending {
            handle,
            deadline: now + self.delay,
            value,
        });
        handle
    }

    /// Drops the pending timer, returning its value.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Whether `handle` is the timer currently pending.
    #[must_use]
    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.pending.as_ref().is_some_and(|p| p.handle == handle)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending timer, for hosts that arm a real timer.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Fires the pending timer if its deadline is at or before `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_fires_once_with_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();

        let mut fired = Vec::new();
        for (i, text) in ["q", "qu", "qui", "quic", "quick"].into_iter().enumerate() {
            let now = start + ms(50 * i as u64);
            if let Some(v) = debouncer.poll(now) {
                fired.push(v);
            }
            debouncer.schedule(text, now);
        }

        let last = start + ms(200);
        assert_eq!(debouncer.poll(last + ms(249)), None);
        if let Some(v) = debouncer.poll(last + ms(250)) {
            fired.push(v);
        }
        assert_eq!(fired, vec!["quick"]);
    }

    #[test]
    fn reschedule_invalidates_old_handle() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(ms(10));
        let first = debouncer.schedule(1, now);
        let second = debouncer.schedule(2, now);

        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
        assert_eq!(debouncer.deadline(), Some(now + ms(10)));
    }

    #[test]
    fn cancel_clears_pending() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(ms(10));
        debouncer.schedule("x", now);
        assert_eq!(debouncer.cancel(), Some("x"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(now + ms(100)), None);
    }

    #[test]
    fn separate_pauses_fire_separately() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(250));
        debouncer.schedule("a", start);
        assert_eq!(debouncer.poll(start + ms(260)), Some("a"));
        debouncer.schedule("ab", start + ms(300));
        assert_eq!(debouncer.poll(start + ms(560)), Some("ab"));
    }
}
