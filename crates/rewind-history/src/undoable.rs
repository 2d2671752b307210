//! The history-aware facade over a simulation.
//!
//! [`Undoable`] owns a [`Simulation`], a [`Ledger`] of its states, and the
//! [`Presentation`] hooks. Player moves go through [`Undoable::move_player`],
//! which checkpoints the pre-move state whenever the player actually ends
//! up somewhere else. Moves by other actors go through
//! [`Undoable::move_unrecorded`] and are never checkpointed on their own;
//! they are rolled back together with the next player move's undo.
//!
//! The facade never hands out `&mut` access to the simulation, so a player
//! move cannot bypass the ledger.

use tracing::debug;

use rewind_types::{Direction, Position};

use crate::config::HistoryConfig;
use crate::ledger::Ledger;
use crate::presentation::{ActorTimer, Presentation, UndoControls, Viewer};
use crate::snapshot::Snapshot;

/// The surface of a base simulation that the history engine needs.
///
/// The engine never asks why a move was accepted or rejected. It only
/// compares the player's position before and after.
pub trait Simulation {
    /// Everything a move can change. Cloning it must produce a fully
    /// independent copy.
    type State: Clone;

    /// Identifies a non-player actor.
    type Actor;

    /// What a non-player move reports back.
    type Outcome;

    /// Attempt to move the player one step. Blocked moves are no-ops.
    fn move_player(&mut self, direction: Direction);

    /// Attempt to move the non-player `actor` one step.
    fn move_actor(&mut self, actor: Self::Actor, direction: Direction) -> Self::Outcome;

    /// Current position of the player.
    fn player_position(&self) -> Position;

    /// Read access to the live state.
    fn state(&self) -> &Self::State;

    /// Write access to the live state, used to restore snapshots.
    fn state_mut(&mut self) -> &mut Self::State;
}

/// A simulation wrapped with linear undo/redo history.
pub struct Undoable<S: Simulation> {
    simulation: S,
    ledger: Ledger<S::State>,
    presentation: Presentation<S::State>,
}

impl<S: Simulation> Undoable<S> {
    /// Wrap `simulation` with an empty history.
    pub fn new(simulation: S, config: &HistoryConfig) -> Self {
        Self {
            simulation,
            ledger: Ledger::with_capacity_limit(config.max_checkpoints),
            presentation: Presentation::new(),
        }
    }

    /// Attach the timer that drives autonomous actors.
    #[must_use]
    pub fn with_timer(mut self, timer: Box<dyn ActorTimer>) -> Self {
        self.presentation.set_timer(timer);
        self
    }

    /// Attach undo/redo controls and publish the current availability.
    #[must_use]
    pub fn with_controls(mut self, controls: Box<dyn UndoControls>) -> Self {
        self.presentation.set_controls(controls);
        self.publish();
        self
    }

    /// Register a viewer to be refreshed after every state change.
    pub fn add_viewer(&mut self, viewer: Box<dyn Viewer<S::State>>) {
        self.presentation.add_viewer(viewer);
    }

    /// Read access to the wrapped simulation.
    pub const fn simulation(&self) -> &S {
        &self.simulation
    }

    /// Number of archived snapshots.
    pub const fn history_len(&self) -> usize {
        self.ledger.len()
    }

    /// Whether an undo would do anything.
    pub const fn can_undo(&self) -> bool {
        self.ledger.can_undo()
    }

    /// Whether a redo would do anything.
    pub const fn can_redo(&self) -> bool {
        self.ledger.can_redo()
    }

    /// Move the player, checkpointing the previous state if the player's
    /// position changed.
    ///
    /// A rejected move leaves the history untouched. Either way, undo/redo
    /// availability is re-published and viewers are refreshed.
    pub fn move_player(&mut self, direction: Direction) {
        let before = self.simulation.player_position();
        let pre = Snapshot::capture(self.simulation.state());

        self.simulation.move_player(direction);

        let after = self.simulation.player_position();
        if after == before {
            debug!(%direction, position = %before, "player did not move, no checkpoint");
        } else {
            debug!(%direction, from = %before, to = %after, "player moved");
            self.ledger.record_checkpoint(pre);
        }

        self.publish();
        self.presentation.notify(self.simulation.state());
    }

    /// Move a non-player actor without creating a checkpoint, then refresh
    /// viewers.
    pub fn move_unrecorded(&mut self, actor: S::Actor, direction: Direction) -> S::Outcome {
        let outcome = self.simulation.move_actor(actor, direction);
        self.presentation.notify(self.simulation.state());
        outcome
    }

    /// Number of registered viewers.
    pub fn viewer_count(&self) -> usize {
        self.presentation.viewer_count()
    }

    /// Restore the state before the most recent player move.
    ///
    /// Returns `false`, changing nothing, when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let simulation = &mut self.simulation;
        let presentation = &mut self.presentation;
        let Some(snapshot) = self
            .ledger
            .undo(|| Snapshot::capture(simulation.state()))
        else {
            return false;
        };

        presentation.stop_timer();
        snapshot.restore(simulation.state_mut());
        self.after_restore();
        true
    }

    /// Re-apply the most recently undone player move.
    ///
    /// Returns `false`, changing nothing, when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.ledger.redo() else {
            return false;
        };

        self.presentation.stop_timer();
        snapshot.restore(self.simulation.state_mut());
        self.after_restore();
        true
    }

    /// Consume the wrapper and return the simulation.
    pub fn into_inner(self) -> S {
        self.simulation
    }

    fn after_restore(&mut self) {
        self.publish();
        self.presentation.notify(self.simulation.state());
    }

    fn publish(&mut self) {
        let (can_undo, can_redo) = (self.ledger.can_undo(), self.ledger.can_redo());
        self.presentation.publish(can_undo, can_redo);
    }
}
