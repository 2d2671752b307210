//! Reference grid chase simulation for the Rewind history engine.
//!
//! A board is a rectangle of tiles. Each tile holds a small stack of
//! sprites: walls, food pellets, the player, and ghosts. The player eats
//! food for points and dies on contact with a ghost; ghosts wander over
//! food without eating it.
//!
//! # Modules
//!
//! - [`board`] -- [`Board`], [`Tile`], [`Sprite`], and [`Player`] state.
//! - [`config`] -- [`RulesConfig`] tunables (food value).
//! - [`error`] -- [`BoardError`] for map parsing and actor lookup.
//! - [`game`] -- [`Game`]: move rules for the player and ghosts, and the
//!   [`Simulation`](rewind_history::Simulation) implementation.
//! - [`parser`] -- Text maps (`#`, `.`, `P`, `G`, space) to boards.
//!
//! # Usage
//!
//! ```
//! use rewind_board::{Game, RulesConfig, UndoableGame};
//! use rewind_history::HistoryConfig;
//! use rewind_types::{Direction, Position};
//!
//! let Ok(game) = Game::from_map(&["P.#"], &RulesConfig::default()) else {
//!     return;
//! };
//! let mut game = UndoableGame::new(game, &HistoryConfig::default());
//!
//! game.move_player(Direction::Right);
//! assert_eq!(game.simulation().player().points, 10);
//!
//! game.undo();
//! assert_eq!(game.simulation().player().position, Position::new(0, 0));
//! assert_eq!(game.simulation().player().points, 0);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod parser;

// Re-export primary types at crate root.
pub use board::{Board, Player, Sprite, Tile};
pub use config::RulesConfig;
pub use error::BoardError;
pub use game::{Game, MoveOutcome};
pub use parser::parse_map;

/// A [`Game`] wrapped with undo/redo history.
pub type UndoableGame = rewind_history::Undoable<Game>;
