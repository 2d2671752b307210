//! Error types for the `rewind-board` crate.
//!
//! Map parsing and ghost lookup are the only fallible operations. A move
//! that the rules reject is not an error; it is reported as
//! [`MoveOutcome::Blocked`](crate::MoveOutcome::Blocked).

use rewind_types::{ActorId, Position};

/// Errors from building a board or addressing its actors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The map has no rows, or its first row is empty.
    #[error("map is empty")]
    EmptyMap,

    /// A row's width differs from the first row's.
    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },

    /// A character that is not one of `#`, `.`, `P`, `G`, or space.
    #[error("unknown map character {glyph:?} at {position}")]
    UnknownGlyph {
        /// The character found.
        glyph: char,
        /// Where it was found.
        position: Position,
    },

    /// The map has no `P`.
    #[error("map has no player")]
    MissingPlayer,

    /// The map has more than one `P`.
    #[error("map has a second player at {second}, first at {first}")]
    MultiplePlayers {
        /// The first player found.
        first: Position,
        /// The duplicate.
        second: Position,
    },

    /// No ghost with this id is on the board.
    #[error("unknown ghost: {0}")]
    UnknownGhost(ActorId),
}
