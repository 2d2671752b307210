//! Presentation hooks that render to the log.
//!
//! A terminal session has no buttons or canvas, so the undo/redo controls
//! and the board viewer write structured log lines instead.

use tracing::{debug, info};

use rewind_board::Board;
use rewind_history::{UndoControls, Viewer};

/// Undo/redo controls that log every availability change.
#[derive(Debug, Default)]
pub struct LoggedControls {
    undo: bool,
    redo: bool,
}

impl LoggedControls {
    /// Both affordances start disabled.
    pub const fn new() -> Self {
        Self {
            undo: false,
            redo: false,
        }
    }
}

impl UndoControls for LoggedControls {
    fn set_undo_enabled(&mut self, enabled: bool) {
        if self.undo != enabled {
            debug!(enabled, "Undo control toggled");
        }
        self.undo = enabled;
    }

    fn set_redo_enabled(&mut self, enabled: bool) {
        if self.redo != enabled {
            debug!(enabled, "Redo control toggled");
        }
        self.redo = enabled;
    }
}

/// Viewer that logs the rendered board after every change.
#[derive(Debug, Default)]
pub struct BoardLogger {
    frames: u64,
}

impl BoardLogger {
    /// A viewer that has drawn nothing yet.
    pub const fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Viewer<Board> for BoardLogger {
    fn refresh(&mut self, board: &Board) {
        self.frames = self.frames.saturating_add(1);
        let player = board.player();
        info!(
            frame = self.frames,
            position = %player.position,
            points = player.points,
            alive = player.alive,
            food_left = board.remaining_food(),
            "\n{}",
            board.render()
        );
    }
}

#[cfg(test)]
mod tests {
    use rewind_board::{Game, RulesConfig};

    use super::*;

    #[test]
    fn controls_track_latest_values() {
        let mut controls = LoggedControls::new();
        controls.set_undo_enabled(true);
        controls.set_redo_enabled(false);
        controls.set_undo_enabled(true);
        assert!(controls.undo);
        assert!(!controls.redo);
    }

    #[test]
    fn logger_counts_frames() {
        let game = Game::from_map(&["P."], &RulesConfig::default());
        assert!(game.is_ok());
        let Ok(game) = game else { return };

        let mut logger = BoardLogger::new();
        logger.refresh(game.board());
        logger.refresh(game.board());
        assert_eq!(logger.frames, 2);
    }
}
