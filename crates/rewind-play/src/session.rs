//! Runs a script of commands against a game with history.

use tracing::{info, warn};

use rewind_board::{MoveOutcome, UndoableGame};

use crate::config::Command;
use crate::error::PlayError;
use crate::ghosts::GhostClock;

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Player move commands issued, including blocked ones.
    pub moves: u64,
    /// Undos that loaded a snapshot.
    pub undos: u64,
    /// Redos that loaded a snapshot.
    pub redos: u64,
    /// Undo or redo commands with nothing to load.
    pub noops: u64,
}

/// Run `commands` in order.
///
/// # Errors
///
/// Returns [`PlayError::Board`] if a ghost tick fails.
pub fn run(
    game: &mut UndoableGame,
    clock: &mut GhostClock,
    commands: &[Command],
) -> Result<SessionSummary, PlayError> {
    let mut summary = SessionSummary::default();

    for (step, command) in commands.iter().enumerate() {
        match *command {
            Command::Move(direction) => {
                game.move_player(direction);
                summary.moves = summary.moves.saturating_add(1);
            }
            Command::Undo => {
                if game.undo() {
                    summary.undos = summary.undos.saturating_add(1);
                } else {
                    warn!(step, "Nothing to undo");
                    summary.noops = summary.noops.saturating_add(1);
                }
            }
            Command::Redo => {
                if game.redo() {
                    summary.redos = summary.redos.saturating_add(1);
                } else {
                    warn!(step, "Nothing to redo");
                    summary.noops = summary.noops.saturating_add(1);
                }
            }
            Command::Tick => {
                let outcomes = clock.tick(game)?;
                if outcomes
                    .iter()
                    .any(|(_, outcome)| *outcome == MoveOutcome::Killed)
                {
                    info!(step, "A ghost caught the player");
                }
            }
            Command::Start => clock.start(),
            Command::Stop => clock.stop(),
        }
    }

    Ok(summary)
}
