//! # Cancellable scheduled tasks
//!
//! The round controller owns one [`Scheduler`]. Delayed effects (advancing to
//! the next round after a win, hiding a message) are entered here with a
//! deadline and fired when the controller is polled at or after that
//! deadline. Tasks can be cancelled individually or all at once; a cancelled
//! task never fires.
//!
//! Pending tasks live inside the scheduler, so dropping the controller drops
//! them with it: nothing can fire against a round that no longer exists.

use std::time::Duration;

/// Identifies one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// What to do when a task fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Replace the won round with a freshly dealt one.
    AdvanceRound,
    /// Hide the current message.
    ClearMessage,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: TaskId,
    due: Duration,
    task: Task,
}

/// A deadline-ordered set of pending tasks.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<Entry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to fire at `due`.
    pub fn schedule(&mut self, due: Duration, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Entry { id, due, task });
        log::debug!("scheduled {task:?} as {id:?} at {due:?}");
        id
    }

    /// Cancels a pending task. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.id != id);
        let cancelled = self.pending.len() != before;
        if cancelled {
            log::debug!("cancelled {id:?}");
        }
        cancelled
    }

    /// Cancels every pending task.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("cancelled {} pending task(s)", self.pending.len());
        }
        self.pending.clear();
    }

    /// Removes and returns the tasks due at `now`, earliest deadline first
    /// (ties in scheduling order).
    pub fn take_due(&mut self, now: Duration) -> Vec<(TaskId, Task)> {
        let (mut due, rest): (Vec<Entry>, Vec<Entry>) =
            self.pending.drain(..).partition(|e| e.due <= now);
        self.pending = rest;
        due.sort_by_key(|e| (e.due, e.id));
        due.into_iter().map(|e| (e.id, e.task)).collect()
    }

    /// Deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|e| e.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
