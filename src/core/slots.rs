//! Worker slot set: a fixed number of tokens bounding concurrent executions.
//!
//! The set is a bounded channel pre-loaded with one numbered token per slot.
//! Acquiring receives a token (blocking while none are free) and the returned
//! [`SlotToken`] sends it back when dropped, so tokens in the channel plus
//! tokens held always equal the capacity.

use std::fmt;

use crossbeam_channel::{bounded, select, Receiver, Sender};

/// Numeric slot identifier, `1..=capacity`.
pub type SlotId = usize;

/// Fixed-capacity set of interchangeable execution slots.
#[derive(Clone)]
pub struct WorkerSlots {
    tx: Sender<SlotId>,
    rx: Receiver<SlotId>,
    capacity: usize,
}

impl WorkerSlots {
    /// Create a set holding `capacity` free slots numbered from 1.
    ///
    /// A zero capacity yields a set whose acquire never completes; pool
    /// configuration rejects it before this point.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        for id in 1..=capacity {
            // Cannot fail: the channel has room for every token and `rx` is alive.
            let _ = tx.try_send(id);
        }
        Self { tx, rx, capacity }
    }

    /// Block until a slot is free and take it.
    ///
    /// Returns `None` only if the channel is disconnected, which cannot happen
    /// while this set is alive.
    #[must_use]
    pub fn acquire(&self) -> Option<SlotToken> {
        self.rx.recv().ok().map(|id| self.token(id))
    }

    /// Block until a slot is free or `cancel` fires, whichever comes first.
    ///
    /// Returns `None` when cancelled (a message arrived or every sender of
    /// `cancel` was dropped).
    #[must_use]
    pub fn acquire_or_cancel(&self, cancel: &Receiver<()>) -> Option<SlotToken> {
        select! {
            recv(self.rx) -> id => id.ok().map(|id| self.token(id)),
            recv(cancel) -> _ => None,
        }
    }

    /// Take a free slot without blocking.
    #[must_use]
    pub fn try_acquire(&self) -> Option<SlotToken> {
        self.rx.try_recv().ok().map(|id| self.token(id))
    }

    /// Number of slots currently free.
    #[must_use]
    pub fn available(&self) -> usize {
        self.rx.len()
    }

    /// Total number of slots.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    fn token(&self, id: SlotId) -> SlotToken {
        SlotToken {
            id,
            tx: self.tx.clone(),
        }
    }
}

impl fmt::Debug for WorkerSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerSlots")
            .field("capacity", &self.capacity)
            .field("available", &self.available())
            .finish()
    }
}

/// Permission to run one job; the slot is released when the token is dropped.
#[derive(Debug)]
pub struct SlotToken {
    id: SlotId,
    tx: Sender<SlotId>,
}

impl SlotToken {
    /// The slot this token occupies.
    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }
}

impl Drop for SlotToken {
    fn drop(&mut self) {
        // Never full: at most `capacity` tokens exist.
        let _ = self.tx.try_send(self.id);
    }
}
