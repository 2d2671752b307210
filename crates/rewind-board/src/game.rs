//! Move rules for the player and ghosts.
//!
//! # Player
//!
//! A dead player cannot move. Otherwise the player steps onto the target
//! tile unless it holds a wall. Food on the target tile is eaten. A ghost on
//! the target tile kills the player, who still ends up on that tile.
//!
//! # Ghosts
//!
//! Ghosts are blocked by walls and by other ghosts. A ghost on a food tile
//! sits on top of the food without eating it. A ghost entering the player's
//! tile kills the player.
//!
//! Coordinates wrap around the board edges in both cases.

use tracing::{debug, trace};

use rewind_history::Simulation;
use rewind_types::{ActorId, Direction, Position};

use crate::board::{Board, Player, Sprite};
use crate::config::RulesConfig;
use crate::error::BoardError;
use crate::parser::parse_map;

/// What a single move attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The actor moved onto an empty tile (or, for a ghost, onto food).
    Moved,
    /// The player moved and ate food worth `points`.
    Ate {
        /// Points gained.
        points: u32,
    },
    /// The move brought the player and a ghost together; the player died.
    Killed,
    /// The target tile was not enterable.
    Blocked,
    /// The player is dead and cannot move.
    Inactive,
}

/// A running game: the board plus the rules that mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Start a game on `board`.
    pub const fn new(board: Board) -> Self {
        Self { board }
    }

    /// Parse `rows` and start a game on the result.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the map is invalid.
    pub fn from_map<S: AsRef<str>>(rows: &[S], rules: &RulesConfig) -> Result<Self, BoardError> {
        parse_map(rows, rules).map(Self::new)
    }

    /// The live board.
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The player.
    pub const fn player(&self) -> &Player {
        self.board.player()
    }

    /// Whether all food has been eaten.
    pub fn is_won(&self) -> bool {
        self.board.remaining_food() == 0
    }

    /// Whether the game has ended, by death or by eating everything.
    pub fn is_over(&self) -> bool {
        !self.board.player().alive || self.is_won()
    }

    /// Try to move the player one step.
    pub fn try_move_player(&mut self, direction: Direction) -> MoveOutcome {
        let player = *self.board.player();
        if !player.alive {
            return MoveOutcome::Inactive;
        }

        let Some(target) = self.enterable(player.position, direction) else {
            return MoveOutcome::Blocked;
        };
        let Some(target_tile) = self.board.tile(target) else {
            return MoveOutcome::Blocked;
        };
        let meets_ghost = target_tile.ghost().is_some();

        self.relocate(Sprite::Player, player.position, target);
        self.board.player_mut().position = target;

        let outcome = if meets_ghost {
            self.board.player_mut().alive = false;
            MoveOutcome::Killed
        } else if let Some(points) = self.board.tile_mut(target).and_then(|t| t.take_food()) {
            let player = self.board.player_mut();
            player.points = player.points.saturating_add(points);
            MoveOutcome::Ate { points }
        } else {
            MoveOutcome::Moved
        };

        debug!(%direction, from = %player.position, to = %target, ?outcome, "player move");
        outcome
    }

    /// Try to move the ghost `id` one step.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownGhost`] if no such ghost is on the board.
    pub fn try_move_ghost(
        &mut self,
        id: ActorId,
        direction: Direction,
    ) -> Result<MoveOutcome, BoardError> {
        let from = self
            .board
            .ghost_position(id)
            .ok_or(BoardError::UnknownGhost(id))?;

        let Some(target) = self.enterable(from, direction) else {
            return Ok(MoveOutcome::Blocked);
        };
        let Some(target_tile) = self.board.tile(target) else {
            return Ok(MoveOutcome::Blocked);
        };
        if target_tile.ghost().is_some() {
            return Ok(MoveOutcome::Blocked);
        }
        let meets_player = target_tile.contains(&Sprite::Player);

        self.relocate(Sprite::Ghost(id), from, target);
        self.board.set_ghost_position(id, target);

        let outcome = if meets_player && self.board.player().alive {
            self.board.player_mut().alive = false;
            MoveOutcome::Killed
        } else {
            MoveOutcome::Moved
        };

        trace!(ghost = %id, %direction, %from, to = %target, ?outcome, "ghost move");
        Ok(outcome)
    }

    /// The neighbour of `from` in `direction`, if it is a different tile
    /// without a wall.
    fn enterable(&self, from: Position, direction: Direction) -> Option<Position> {
        let target = from.step(direction, self.board.width(), self.board.height())?;
        if target == from {
            return None;
        }
        let tile = self.board.tile(target)?;
        (!tile.has_wall()).then_some(target)
    }

    fn relocate(&mut self, sprite: Sprite, from: Position, to: Position) {
        if let Some(tile) = self.board.tile_mut(from) {
            tile.remove(&sprite);
        }
        if let Some(tile) = self.board.tile_mut(to) {
            tile.push(sprite);
        }
    }
}

impl Simulation for Game {
    type State = Board;
    type Actor = ActorId;
    type Outcome = Result<MoveOutcome, BoardError>;

    fn move_player(&mut self, direction: Direction) {
        let _ = self.try_move_player(direction);
    }

    fn move_actor(&mut self, ghost: ActorId, direction: Direction) -> Self::Outcome {
        self.try_move_ghost(ghost, direction)
    }

    fn player_position(&self) -> Position {
        self.board.player().position
    }

    fn state(&self) -> &Board {
        &self.board
    }

    fn state_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
