//! Configuration for the history engine.

use serde::Deserialize;

/// Tunables for an [`Undoable`](crate::Undoable) history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of committed checkpoints to keep (default: unbounded).
    ///
    /// When a commit pushes the ledger past this limit, the oldest
    /// checkpoints are dropped. `Some(0)` disables history altogether.
    #[serde(default)]
    pub max_checkpoints: Option<usize>,
}

impl HistoryConfig {
    /// A configuration keeping at most `limit` checkpoints.
    pub const fn bounded(limit: usize) -> Self {
        Self {
            max_checkpoints: Some(limit),
        }
    }
}
