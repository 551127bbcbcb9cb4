//! Deadline-ordered timer queue
//!
//! Single-threaded: the owner asks for due timers with the current instant
//! and handles them one at a time. Timers with equal deadlines fire in the
//! order they were scheduled.

use std::time::Instant;

#[derive(Debug)]
struct Timer<T> {
    deadline: Instant,
    payload: T,
}

#[derive(Debug)]
pub struct TimerQueue<T> {
    /// Sorted by deadline, then by scheduling order
    timers: Vec<Timer<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self { timers: Vec::new() }
    }

    /// Schedule `payload` to fire at `deadline`.
    pub fn schedule_at(&mut self, deadline: Instant, payload: T) {
        // Insert after every timer with a deadline <= ours to keep FIFO order.
        let index = self.timers.partition_point(|t| t.deadline <= deadline);
        self.timers.insert(
            index,
            Timer {
                deadline,
                payload,
            },
        );
    }

    /// Cancel every pending timer. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.timers.len();
        self.timers.clear();
        count
    }

    /// Remove and return the earliest timer due at `now`, with its deadline.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        if self.timers.first()?.deadline > now {
            return None;
        }
        let timer = self.timers.remove(0);
        Some((timer.deadline, timer.payload))
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.first().map(|t| t.deadline)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
