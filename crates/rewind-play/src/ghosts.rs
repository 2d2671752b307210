//! The ghost clock: a seeded random walk for every ghost on the board.
//!
//! The clock's running flag is shared with a [`TimerHandle`] that the
//! history engine holds as its [`ActorTimer`]. Loading a snapshot stops the
//! handle, which stops the clock until the script starts it again.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use rewind_board::{BoardError, MoveOutcome, UndoableGame};
use rewind_history::ActorTimer;
use rewind_types::{ActorId, Direction};

/// Drives ghost moves one tick at a time.
#[derive(Debug)]
pub struct GhostClock {
    running: Arc<AtomicBool>,
    rng: StdRng,
    ticks: u64,
}

impl GhostClock {
    /// A clock seeded with `seed`, running if `autostart` is set.
    pub fn new(seed: u64, autostart: bool) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(autostart)),
            rng: StdRng::seed_from_u64(seed),
            ticks: 0,
        }
    }

    /// A handle that can stop this clock.
    pub fn handle(&self) -> TimerHandle {
        TimerHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Whether ticks currently move ghosts.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Start the clock.
    pub fn start(&self) {
        self.running.store(true, Ordering::Release);
        info!("Ghost clock started");
    }

    /// Stop the clock.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
        info!("Ghost clock stopped");
    }

    /// Number of ticks that moved ghosts so far.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Move every ghost one step in a random direction.
    ///
    /// Ghost moves are applied without a checkpoint, so the next undo of a
    /// player move also rolls them back. A stopped clock does nothing and
    /// returns no outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if a ghost disappears from the board mid-tick.
    pub fn tick(
        &mut self,
        game: &mut UndoableGame,
    ) -> Result<Vec<(ActorId, MoveOutcome)>, BoardError> {
        if !self.is_running() {
            debug!("Ghost clock stopped, tick skipped");
            return Ok(Vec::new());
        }

        let ghosts = game.simulation().board().ghost_ids();
        let outcomes = ghosts
            .into_iter()
            .map(|id| {
                let direction = random_direction(&mut self.rng);
                game.move_unrecorded(id, direction).map(|outcome| (id, outcome))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.ticks = self.ticks.saturating_add(1);
        debug!(tick = self.ticks, ghosts = outcomes.len(), "Ghost tick");
        Ok(outcomes)
    }
}

fn random_direction(rng: &mut StdRng) -> Direction {
    match rng.random_range(0..4_u8) {
        0 => Direction::Up,
        1 => Direction::Down,
        2 => Direction::Left,
        _ => Direction::Right,
    }
}

/// The [`ActorTimer`] side of a [`GhostClock`].
#[derive(Debug, Clone)]
pub struct TimerHandle {
    running: Arc<AtomicBool>,
}

impl ActorTimer for TimerHandle {
    fn stop(&mut self) {
        if self.running.swap(false, Ordering::AcqRel) {
            debug!("Ghost clock stopped by history restore");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rewind_board::{Game, RulesConfig};
    use rewind_history::HistoryConfig;
    use rewind_types::Position;

    use super::*;

    fn session(rows: &[&str]) -> UndoableGame {
        let game = Game::from_map(rows, &RulesConfig::default()).unwrap();
        UndoableGame::new(game, &HistoryConfig::default())
    }

    #[test]
    fn stopped_clock_moves_nothing() {
        let mut game = session(&["P  G"]);
        let before = game.simulation().clone();
        let mut clock = GhostClock::new(1, false);

        assert!(clock.tick(&mut game).unwrap().is_empty());
        assert_eq!(game.simulation(), &before);
        assert_eq!(clock.ticks(), 0);
    }

    #[test]
    fn running_clock_moves_every_ghost() {
        let mut game = session(&["   ", " P ", "G G"]);
        let mut clock = GhostClock::new(3, true);

        let outcomes = clock.tick(&mut game).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(clock.ticks(), 1);
        assert!(!game.can_undo());
    }

    #[test]
    fn same_seed_same_walk() {
        let walk = |seed| {
            let mut game = session(&["#####", "#G P#", "#   #", "#####"]);
            let ghost = *game.simulation().board().ghost_ids().first().unwrap();
            let mut clock = GhostClock::new(seed, true);
            (0..8)
                .map(|_| {
                    clock.tick(&mut game).unwrap();
                    game.simulation().board().ghost_position(ghost)
                })
                .collect::<Vec<Option<Position>>>()
        };
        assert_eq!(walk(11), walk(11));
    }

    #[test]
    fn handle_stops_the_clock() {
        let clock = GhostClock::new(0, true);
        let mut handle = clock.handle();
        handle.stop();
        assert!(!clock.is_running());

        clock.start();
        assert!(clock.is_running());
        clock.stop();
        assert!(!clock.is_running());
    }

    #[test]
    fn undo_stops_clock_and_rolls_back_ghosts() {
        let mut clock = GhostClock::new(5, true);
        let rows = ["#######", "#P   G#", "#     #", "#######"];
        let game = Game::from_map(&rows, &RulesConfig::default()).unwrap();
        let mut game = UndoableGame::new(game, &HistoryConfig::default())
            .with_timer(Box::new(clock.handle()));
        let ghost = *game.simulation().board().ghost_ids().first().unwrap();
        let ghost_start = game.simulation().board().ghost_position(ghost);

        game.move_player(Direction::Right);
        for _ in 0..3 {
            clock.tick(&mut game).unwrap();
        }

        assert!(game.undo());
        assert!(!clock.is_running());
        assert_eq!(game.simulation().board().ghost_position(ghost), ghost_start);
        assert_eq!(game.simulation().player().position, Position::new(1, 1));
    }
}
