//! Scripted session runner for the Rewind grid chase game.
//!
//! Loads a map and a command script from YAML, wraps the game in undo/redo
//! history, and plays the script with randomly wandering ghosts. Every
//! state change is rendered to the log.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `REWIND_CONFIG` or `rewind-config.yaml`
//! 3. Parse the map into a game
//! 4. Attach the ghost clock, undo/redo controls, and board viewer
//! 5. Run the script
//! 6. Log the result

mod config;
mod error;
mod ghosts;
mod hooks;
mod session;

use rewind_board::{Game, UndoableGame};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::PlayConfig;
use crate::error::PlayError;
use crate::ghosts::GhostClock;
use crate::hooks::{BoardLogger, LoggedControls};

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration or map is invalid, or if a ghost
/// tick fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("rewind-play starting");

    // 2. Load configuration.
    let config = load_config()?;
    let commands = config.commands()?;
    info!(
        rows = config.board.rows.len(),
        food_points = config.board.food_points,
        max_checkpoints = ?config.history.max_checkpoints,
        ghost_seed = config.ghosts.seed,
        autostart = config.ghosts.autostart,
        steps = commands.len(),
        "Configuration loaded"
    );

    // 3. Build the game.
    let game = Game::from_map(&config.board.rows, &config.board.rules())?;
    info!(
        width = game.board().width(),
        height = game.board().height(),
        ghosts = game.board().ghost_ids().len(),
        food = game.board().remaining_food(),
        "Map loaded"
    );

    // 4. Wire the presentation hooks.
    let mut clock = GhostClock::new(config.ghosts.seed, config.ghosts.autostart);
    let mut session = UndoableGame::new(game, &config.history)
        .with_timer(Box::new(clock.handle()))
        .with_controls(Box::new(LoggedControls::new()));
    session.add_viewer(Box::new(BoardLogger::new()));
    info!(viewers = session.viewer_count(), "Presentation hooks attached");

    // 5. Run the script.
    let summary = session::run(&mut session, &mut clock, &commands)?;

    // 6. Log the result.
    let game = session.into_inner();
    let player = game.player();
    info!(
        moves = summary.moves,
        undos = summary.undos,
        redos = summary.redos,
        noops = summary.noops,
        ghost_ticks = clock.ticks(),
        points = player.points,
        alive = player.alive,
        won = game.is_won(),
        over = game.is_over(),
        "Session complete"
    );

    Ok(())
}

/// Load the session config, falling back to defaults if the file is absent.
fn load_config() -> Result<PlayConfig, PlayError> {
    let path = config::resolve_path(std::env::var(config::CONFIG_ENV).ok());
    Ok(PlayConfig::load(&path)?)
}
