//! Single-slot, last-write-wins debounce.
//!
//! The slot holds the deadline and the payload captured when it was
//! scheduled. Nothing runs in the background: the owner's loop calls
//! [`Debounce::fire`] with the current time, so a dropped slot can never
//! fire.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    payload: T,
}

#[derive(Debug)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `payload` to fire `delay` after `now`.
    ///
    /// Returns the payload that was pending before, if any.
    pub fn schedule(&mut self, now: Instant, payload: T) -> Option<T> {
        let replaced = self.cancel();
        self.pending = Some(Pending {
            deadline: now + self.delay,
            payload,
        });
        replaced
    }

    /// Drop the pending payload without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.payload)
    }

    /// Take the payload if its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> Option<T> {
        if self.deadline().is_some_and(|deadline| deadline <= now) {
            self.cancel()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Time left until the pending payload is due, zero if overdue.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(600);

    #[test]
    fn fires_only_after_delay() {
        let start = Instant::now();
        let mut debounce = Debounce::new(WAIT);
        assert_eq!(debounce.delay(), WAIT);
        debounce.schedule(start, "a");

        assert_eq!(debounce.fire(start + Duration::from_millis(599)), None);
        assert!(debounce.is_pending());
        assert_eq!(debounce.fire(start + WAIT), Some("a"));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn fires_once() {
        let start = Instant::now();
        let mut debounce = Debounce::new(WAIT);
        debounce.schedule(start, 1);

        assert_eq!(debounce.fire(start + WAIT * 2), Some(1));
        assert_eq!(debounce.fire(start + WAIT * 3), None);
    }

    #[test]
    fn reschedule_replaces_and_pushes_deadline() {
        let start = Instant::now();
        let mut debounce = Debounce::new(WAIT);
        debounce.schedule(start, "first");

        let later = start + Duration::from_millis(400);
        assert_eq!(debounce.schedule(later, "second"), Some("first"));

        assert_eq!(debounce.fire(start + WAIT), None);
        assert_eq!(debounce.fire(later + WAIT), Some("second"));
    }

    #[test]
    fn cancel_clears_slot() {
        let start = Instant::now();
        let mut debounce = Debounce::new(WAIT);
        debounce.schedule(start, ());
        assert_eq!(debounce.cancel(), Some(()));
        assert_eq!(debounce.fire(start + WAIT), None);
        assert_eq!(debounce.deadline(), None);
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let start = Instant::now();
        let mut debounce = Debounce::new(WAIT);
        assert_eq!(debounce.remaining(start), None);

        debounce.schedule(start, ());
        assert_eq!(debounce.remaining(start), Some(WAIT));
        assert_eq!(debounce.remaining(start + WAIT * 2), Some(Duration::ZERO));
    }
}
