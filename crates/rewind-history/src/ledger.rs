//! The history ledger: ordered snapshots plus a cursor.
//!
//! The [`Ledger`] stores *pre-move* snapshots. `entries[cursor - 1]` is
//! always the state one undo away, so an undo never needs extra
//! bookkeeping, at the cost of one lazy append: the first undo after a
//! commit archives the live state so a later redo can reach it.
//!
//! # Invariants
//!
//! - `cursor <= entries.len()`.
//! - `cursor == entries.len()` means no undo has happened since the last
//!   commit, and the live state is not stored in the ledger.
//! - After an undo, `cursor < entries.len()` and `entries[cursor]` is the
//!   state that was just loaded; `entries.last()` is the state that was
//!   live before the first undo.
//! - A commit truncates to `entries[..cursor]`, appends, and moves the
//!   cursor to the end. Whatever was redoable is gone.

use tracing::debug;

use crate::snapshot::Snapshot;

/// Linear undo/redo history over snapshots of `S`.
#[derive(Debug)]
pub struct Ledger<S> {
    /// Archived snapshots, oldest first.
    entries: Vec<Snapshot<S>>,
    /// Boundary between undo-reachable and redo-reachable entries.
    cursor: usize,
    /// Maximum number of committed checkpoints kept, if bounded.
    max_checkpoints: Option<usize>,
}

impl<S> Default for Ledger<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Ledger<S> {
    /// Create an empty, unbounded ledger.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_checkpoints: None,
        }
    }

    /// Create an empty ledger keeping at most `limit` committed checkpoints.
    pub const fn with_capacity_limit(limit: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_checkpoints: limit,
        }
    }

    /// Number of archived snapshots, including a lazily archived live state.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been archived.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor position.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether a snapshot is reachable by one undo.
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a snapshot is reachable by one redo.
    pub const fn can_redo(&self) -> bool {
        self.cursor.saturating_add(1) < self.entries.len()
    }

    /// Commit `pre`, the snapshot taken just before a move that changed
    /// the player's position.
    ///
    /// Discards every entry at or after the cursor (the abandoned redo
    /// branch), appends `pre`, and moves the cursor to the end.
    pub fn record_checkpoint(&mut self, pre: Snapshot<S>) {
        let abandoned = self.entries.len().saturating_sub(self.cursor);
        self.entries.truncate(self.cursor);
        self.entries.push(pre);

        let mut evicted = 0;
        if let Some(limit) = self.max_checkpoints {
            evicted = self.entries.len().saturating_sub(limit);
            if evicted > 0 {
                self.entries.drain(..evicted);
            }
        }

        self.cursor = self.entries.len();
        debug!(
            abandoned,
            evicted,
            cursor = self.cursor,
            entries = self.entries.len(),
            "checkpoint recorded"
        );
    }

    /// Step back one snapshot.
    ///
    /// If no undo has happened since the last commit, `live` is called
    /// first and its snapshot appended so the current state stays
    /// reachable by redo. Returns the snapshot to load, or `None` (with
    /// the ledger untouched) when there is nothing to undo.
    pub fn undo<F>(&mut self, live: F) -> Option<&Snapshot<S>>
    where
        F: FnOnce() -> Snapshot<S>,
    {
        if !self.can_undo() {
            debug!(cursor = self.cursor, "undo ignored, nothing to undo");
            return None;
        }

        if self.cursor == self.entries.len() {
            self.entries.push(live());
            debug!(entries = self.entries.len(), "live state archived for redo");
        }

        self.cursor = self.cursor.saturating_sub(1);
        let snapshot = self.entries.get(self.cursor)?;
        debug!(
            cursor = self.cursor,
            entries = self.entries.len(),
            taken_at = %snapshot.taken_at(),
            "undo"
        );
        Some(snapshot)
    }

    /// Step forward one snapshot.
    ///
    /// Returns the snapshot to load, or `None` (with the ledger untouched)
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&Snapshot<S>> {
        if !self.can_redo() {
            debug!(cursor = self.cursor, "redo ignored, nothing to redo");
            return None;
        }

        self.cursor = self.cursor.saturating_add(1);
        let snapshot = self.entries.get(self.cursor)?;
        debug!(
            cursor = self.cursor,
            entries = self.entries.len(),
            taken_at = %snapshot.taken_at(),
            "redo"
        );
        Some(snapshot)
    }
}
