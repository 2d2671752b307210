//! Owned deep copies of simulation state.
//!
//! A [`Snapshot`] is taken by cloning the live state, so it shares no
//! mutable substructure with it. Restoring uses [`Clone::clone_from`],
//! which overwrites every field of the live value: positions, scores,
//! alive flags, and remaining food all come back together.

use chrono::{DateTime, Utc};

/// An immutable copy of the complete simulation state at one instant.
///
/// Snapshots are never compared and never mutated after capture; they
/// are only replayed into the live state.
#[derive(Debug, Clone)]
pub struct Snapshot<S> {
    /// The copied state.
    state: S,
    /// Wall-clock time of capture, logged when the snapshot is loaded.
    taken_at: DateTime<Utc>,
}

impl<S: Clone> Snapshot<S> {
    /// Capture a deep copy of `live`.
    pub fn capture(live: &S) -> Self {
        Self {
            state: live.clone(),
            taken_at: Utc::now(),
        }
    }

    /// Overwrite `live` in place with this snapshot's contents.
    pub fn restore(&self, live: &mut S) {
        live.clone_from(&self.state);
    }
}

impl<S> Snapshot<S> {
    /// Read-only access to the captured state.
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// When the snapshot was captured.
    pub const fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }
}
