// Copyright 2025 the Covergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred work for later turns of the host event loop.
//!
//! The overlay never blocks. Work that must happen "later" is recorded here
//! with a due time, and the host drains it by calling `advance` with the
//! current time. Entries cannot be cancelled; tasks that may be outdated
//! when they fire check their own guard at fire time.
//!
//! ```
//! use std::time::Duration;
//! use covergrid_overlay::schedule::Timeline;
//!
//! let mut t = Timeline::new();
//! t.schedule(Duration::ZERO, Duration::from_millis(100), "restore");
//! t.schedule(Duration::ZERO, Duration::from_millis(1), "reveal");
//! assert_eq!(t.drain_due(Duration::from_millis(1)), vec!["reveal"]);
//! assert_eq!(t.next_due(), Some(Duration::from_millis(100)));
//! ```

use std::time::Duration;

/// A queue of tasks ordered by due time, then by scheduling order.
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    pending: Vec<Scheduled<T>>,
    seq: u64,
}

#[derive(Clone, Debug)]
struct Scheduled<T> {
    due: Duration,
    seq: u64,
    task: T,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            seq: 0,
        }
    }

    /// Schedule `task` to run `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, task: T) {
        self.pending.push(Scheduled {
            due: now + delay,
            seq: self.seq,
            task,
        });
        self.seq += 1;
    }

    /// Remove and return every task due at or before `now`, earliest first.
    ///
    /// Tasks with the same due time come out in the order they were scheduled.
    pub fn drain_due(&mut self, now: Duration) -> Vec<T> {
        let (mut due, rest): (Vec<_>, Vec<_>) = core::mem::take(&mut self.pending)
            .into_iter()
            .partition(|s| s.due <= now);
        self.pending = rest;
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|s| s.task).collect()
    }

    /// Earliest due time among pending tasks.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
