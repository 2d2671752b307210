//! Error types for the `rewind-play` binary.
//!
//! [`PlayError`] wraps every failure a scripted session can hit, so `main`
//! can propagate with `?`.

use rewind_board::BoardError;

use crate::config::ConfigError;

/// Top-level error for the session runner.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The map could not be built or a ghost could not be moved.
    #[error("board error: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },
}
