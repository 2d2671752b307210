//! Snapshot-based undo/redo history for the Rewind grid chase game.
//!
//! The history engine sits between a mutable simulation and whatever
//! presents it. Before every player move it captures a full copy of the
//! live state; if the move actually relocated the player, that copy is
//! committed as a checkpoint. Undo and redo then walk a cursor over the
//! committed copies and restore them into the live simulation.
//!
//! # Modules
//!
//! - [`snapshot`] -- [`Snapshot`]: an owned deep copy of simulation state.
//! - [`ledger`] -- [`Ledger`]: ordered snapshots plus a cursor, with branch
//!   truncation and lazy capture of the live state on first undo.
//! - [`presentation`] -- Hook traits for timers, undo/redo controls, and
//!   viewers that redraw after every state change.
//! - [`undoable`] -- [`Undoable`]: the facade wrapping any [`Simulation`].
//! - [`config`] -- [`HistoryConfig`] tunables.
//!
//! # Usage
//!
//! ```
//! use rewind_history::{HistoryConfig, Simulation, Undoable};
//! use rewind_types::{Direction, Position};
//!
//! /// A one-dimensional world: the player walks along a line.
//! #[derive(Clone)]
//! struct Line {
//!     player: usize,
//! }
//!
//! impl Simulation for Line {
//!     type State = Self;
//!     type Actor = ();
//!     type Outcome = ();
//!
//!     fn move_player(&mut self, direction: Direction) {
//!         if direction == Direction::Right {
//!             self.player = self.player.saturating_add(1);
//!         }
//!     }
//!
//!     fn move_actor(&mut self, _actor: (), _direction: Direction) {}
//!
//!     fn player_position(&self) -> Position {
//!         Position::new(self.player, 0)
//!     }
//!
//!     fn state(&self) -> &Self {
//!         self
//!     }
//!
//!     fn state_mut(&mut self) -> &mut Self {
//!         self
//!     }
//! }
//!
//! let mut game = Undoable::new(Line { player: 0 }, &HistoryConfig::default());
//! game.move_player(Direction::Right);
//! assert!(game.can_undo());
//!
//! game.undo();
//! assert_eq!(game.simulation().player, 0);
//!
//! game.redo();
//! assert_eq!(game.simulation().player, 1);
//! ```

pub mod config;
pub mod ledger;
pub mod presentation;
pub mod snapshot;
pub mod undoable;

// Re-export primary types at crate root.
pub use config::HistoryConfig;
pub use ledger::Ledger;
pub use presentation::{ActorTimer, Presentation, UndoControls, Viewer};
pub use snapshot::Snapshot;
pub use undoable::{Simulation, Undoable};
