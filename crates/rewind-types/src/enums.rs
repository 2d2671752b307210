//! Enumeration types shared across the workspace.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four grid directions an actor can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Column and row delta for one step in this direction.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sprite kinds
// ---------------------------------------------------------------------------

/// The kind of sprite visible on top of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteKind {
    /// An impassable wall.
    Wall,
    /// A food pellet worth points to the player.
    Food,
    /// The player-controlled actor.
    Player,
    /// An autonomous, lethal actor.
    Ghost,
}

impl SpriteKind {
    /// The map character used for this sprite kind.
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Food => '.',
            Self::Player => 'P',
            Self::Ghost => 'G',
        }
    }
}
