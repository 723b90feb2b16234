//! Trailing-edge debouncer
//!
//! The host schedules a wake-up after the quiet window for every recorded
//! value and hands the returned ticket back when it fires. Only the ticket
//! of the most recent value settles; earlier wake-ups find a newer ticket
//! and are dropped.

use std::time::Duration;

/// Handle for one scheduled settle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(Ticket, T)>,
    next_ticket: u64,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a new value, superseding any pending one.
    pub fn record(&mut self, value: T) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.pending = Some((ticket, value));
        ticket
    }

    /// Take the pending value if `ticket` is still the latest.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        match self.pending.take() {
            Some((latest, value)) if latest == ticket => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_value_in_burst_settles() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let a = debouncer.record(800.0_f32);
        let b = debouncer.record(900.0);
        let c = debouncer.record(1200.0);

        assert_eq!(debouncer.settle(a), None);
        assert_eq!(debouncer.settle(b), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.settle(c), Some(1200.0));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn settling_twice_yields_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let t = debouncer.record(1);
        assert_eq!(debouncer.settle(t), Some(1));
        assert_eq!(debouncer.settle(t), None);
    }
}
