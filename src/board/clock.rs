//! Time source for note ids.

use crate::domain::{Note, NoteId};
use chrono::Utc;
use std::cell::Cell;

/// Supplies the current time in epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// A clock that advances by one step every time it is read.
#[derive(Debug)]
pub struct SteppingClock {
    next: Cell<i64>,
    step: i64,
}

impl SteppingClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> i64 {
        let now = self.next.get();
        self.next.set(now.saturating_add(self.step));
        now
    }
}

/// Picks an id for a new note: the current time, bumped forward one
/// millisecond at a time past any id already in `notes`.
pub(crate) fn allocate_id(clock: &impl Clock, notes: &[Note]) -> NoteId {
    let mut id = NoteId::from_millis(clock.now_millis());
    while notes.iter().any(|n| n.id() == id) {
        id = id.next();
    }
    id
}
