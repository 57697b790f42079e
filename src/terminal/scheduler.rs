//! Cancellable delayed tasks driven by the UI loop's clock
//!
//! Nothing here sleeps or spawns. The event loop calls
//! [`Scheduler::take_due`] on every iteration with the current instant and
//! applies whatever payloads have come due. Cancelled tasks are dropped
//! without ever being returned.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Task<T> {
    seq: u64,
    due: Instant,
    payload: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    tasks: Vec<Task<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Scheduler {
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to come due `after` the given instant
    pub fn schedule(&mut self, now: Instant, after: Duration, payload: T) {
        let seq = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            seq,
            due: now + after,
            payload,
        });
    }

    /// Drop every pending task; returns how many were dropped
    pub fn cancel_all(&mut self) -> usize {
        let n = self.tasks.len();
        self.tasks.clear();
        n
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Earliest deadline still pending
    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.iter().map(|t| t.due).min()
    }

    /// Remove and return the payloads of every task due at or before
    /// `now`, earliest first. Tasks due at the same instant keep
    /// scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].due <= now {
                due.push(self.tasks.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|t| (t.due, t.seq));
        due.into_iter().map(|t| t.payload).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due_respects_deadline() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(start, Duration::from_millis(500), "late");
        sched.schedule(start, Duration::from_millis(100), "early");

        assert!(sched.take_due(start).is_empty());
        assert_eq!(sched.take_due(start + Duration::from_millis(200)), vec!["early"]);
        assert_eq!(sched.pending(), 1);
        assert_eq!(sched.take_due(start + Duration::from_secs(1)), vec!["late"]);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_same_deadline_keeps_order() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(start, Duration::from_millis(10), 1);
        sched.schedule(start, Duration::from_millis(10), 2);
        sched.schedule(start, Duration::ZERO, 0);
        assert_eq!(sched.take_due(start + Duration::from_millis(10)), vec![0, 1, 2]);
    }

    #[test]
    fn test_cancelled_tasks_never_fire() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(start, Duration::from_millis(30), 'a');
        sched.schedule(start, Duration::from_millis(10), 'b');

        assert_eq!(sched.next_due(), Some(start + Duration::from_millis(10)));
        assert_eq!(sched.cancel_all(), 2);
        assert!(sched.take_due(start + Duration::from_secs(5)).is_empty());
        assert_eq!(sched.next_due(), None);
    }
}
