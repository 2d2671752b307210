//! Grid coordinates.
//!
//! Boards wrap around at their edges, so stepping off the right-hand side
//! lands on column 0 of the same row. [`Position::step`] does that wrapping
//! given the board dimensions.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// A tile coordinate: `x` is the column, `y` the row, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// Create a position from a column and a row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one step in `direction` on a board of
    /// `width` by `height` tiles, wrapping around the edges.
    ///
    /// Returns `None` for a zero-sized board or a position outside it.
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Option<Self> {
        if self.x >= width || self.y >= height {
            return None;
        }
        let (dx, dy) = direction.delta();
        Some(Self {
            x: wrap(self.x, dx, width)?,
            y: wrap(self.y, dy, height)?,
        })
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Offset `coord` by `delta` modulo `extent`.
fn wrap(coord: usize, delta: i64, extent: usize) -> Option<usize> {
    let extent = i64::try_from(extent).ok()?;
    if extent == 0 {
        return None;
    }
    let moved = i64::try_from(coord).ok()?.checked_add(delta)?;
    usize::try_from(moved.rem_euclid(extent)).ok()
}
