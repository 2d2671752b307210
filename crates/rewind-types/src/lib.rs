//! Shared value types for the Rewind grid chase game.
//!
//! Every crate in the workspace speaks in these types: the board simulation
//! uses them to place sprites, the history engine uses them to decide
//! whether a player move changed anything, and the play binary parses them
//! out of its script.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for actor identifiers
//! - [`enums`] -- Movement directions and sprite kinds
//! - [`position`] -- Grid coordinates with wrap-around neighbour lookup

pub mod enums;
pub mod ids;
pub mod position;

// Re-export all public types at crate root for convenience.
pub use enums::{Direction, SpriteKind};
pub use ids::ActorId;
pub use position::Position;
