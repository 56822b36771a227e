//! Cooperative delayed tasks for a single-threaded event loop.
//!
//! Nothing here sleeps or spawns. The host loop passes the current
//! `Instant` to `poll`, which hands back whatever has come due. Two flavours:
//!
//! - [`SupersedingTimer`]: at most one pending task; scheduling a new one
//!   cancels the previous, so a late completion can never deliver stale work.
//! - [`TimerQueue`]: fire-and-forget timers that are never cancelled.

use std::time::{Duration, Instant};

/// Identifier of a scheduled task, unique per timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    id: TaskId,
    due: Instant,
    payload: T,
}

/// A single-slot cancellable delay.
#[derive(Debug, Clone)]
pub struct SupersedingTimer<T> {
    next_id: u64,
    pending: Option<Pending<T>>,
}

impl<T> SupersedingTimer<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: None,
        }
    }

    /// Schedule `payload` to come due at `now + delay`, cancelling any task
    /// still pending. Returns the new task's id and the cancelled one's, if any.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> (TaskId, Option<TaskId>) {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let superseded = self.pending.take().map(|p| p.id);
        if let Some(old) = superseded {
            tracing::debug!(old = old.0, new = id.0, "superseded pending task");
        }
        self.pending = Some(Pending {
            id,
            due: now + delay,
            payload,
        });
        (id, superseded)
    }

    /// Deliver the pending task if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<(TaskId, T)> {
        let due = self.pending.as_ref().is_some_and(|p| p.due <= now);
        if !due {
            return None;
        }
        self.pending.take().map(|p| (p.id, p.payload))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for SupersedingTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fire-and-forget timers. Every started timer fires exactly once.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    next_id: u64,
    // Sorted by due time; ties keep start order.
    timers: Vec<(Instant, TaskId)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Instant, delay: Duration) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = now + delay;
        let at = self.timers.partition_point(|(d, _)| *d <= due);
        self.timers.insert(at, (due, id));
        id
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn poll(&mut self, now: Instant) -> Vec<TaskId> {
        let due = self.timers.partition_point(|(d, _)| *d <= now);
        self.timers.drain(..due).map(|(_, id)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
