//! Configuration loading for a scripted session.
//!
//! The session is described by `rewind-config.yaml` (or the file named by
//! `REWIND_CONFIG`). Every section is optional and falls back to built-in
//! defaults:
//!
//! ```yaml
//! board:
//!   rows:
//!     - "#######"
//!     - "#P. .G#"
//!     - "#######"
//!   food_points: 10
//! history:
//!   max_checkpoints: 100
//! ghosts:
//!   seed: 7
//!   autostart: true
//! script: [right, right, tick, undo, redo]
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::info;

use rewind_board::RulesConfig;
use rewind_history::HistoryConfig;
use rewind_types::Direction;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "REWIND_CONFIG";

/// Config file used when [`CONFIG_ENV`] is unset or empty.
pub const DEFAULT_CONFIG_PATH: &str = "rewind-config.yaml";

/// The config file to read, given the value of [`CONFIG_ENV`].
pub fn resolve_path(env_value: Option<String>) -> PathBuf {
    env_value
        .filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A script entry is not a known command.
    #[error("unknown script command {command:?} at step {step}")]
    InvalidCommand {
        /// Zero-based index in the script.
        step: usize,
        /// The text that failed to parse.
        command: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

// ---------------------------------------------------------------------------
// Script commands
// ---------------------------------------------------------------------------

/// One step of a scripted session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the player.
    Move(Direction),
    /// Undo the last player move.
    Undo,
    /// Redo the last undone move.
    Redo,
    /// Advance the ghost clock by one tick.
    Tick,
    /// Start the ghost clock.
    Start,
    /// Stop the ghost clock.
    Stop,
}

/// The text was not a command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand;

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Move(Direction::Up)),
            "down" => Ok(Self::Move(Direction::Down)),
            "left" => Ok(Self::Move(Direction::Left)),
            "right" => Ok(Self::Move(Direction::Right)),
            "undo" => Ok(Self::Undo),
            "redo" => Ok(Self::Redo),
            "tick" => Ok(Self::Tick),
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            _ => Err(UnknownCommand),
        }
    }
}

// ---------------------------------------------------------------------------
// Config sections
// ---------------------------------------------------------------------------

/// Top-level session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayConfig {
    /// The map and its rules.
    #[serde(default)]
    pub board: BoardConfig,

    /// History limits.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Ghost clock settings.
    #[serde(default)]
    pub ghosts: GhostConfig,

    /// Commands to run, in order.
    #[serde(default = "default_script")]
    pub script: Vec<String>,
}

impl PlayConfig {
    /// Load configuration from `path`, or use defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`PlayConfig::from_file`] for a file that exists.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            info!(path = %path.display(), "Reading config file");
            Self::from_file(path)
        } else {
            info!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidCommand`] if the script has an unknown entry.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidCommand`] if the script has an unknown entry.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.commands()?;
        Ok(config)
    }

    /// The script as typed commands.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCommand`] for the first unknown entry.
    pub fn commands(&self) -> Result<Vec<Command>, ConfigError> {
        self.script
            .iter()
            .enumerate()
            .map(|(step, text)| {
                text.parse().map_err(|UnknownCommand| ConfigError::InvalidCommand {
                    step,
                    command: text.clone(),
                })
            })
            .collect()
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            history: HistoryConfig::default(),
            ghosts: GhostConfig::default(),
            script: default_script(),
        }
    }
}

fn default_script() -> Vec<String> {
    ["right", "right", "tick", "undo", "redo", "down"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// The map to play on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    /// Map rows, top to bottom.
    #[serde(default = "default_rows")]
    pub rows: Vec<String>,

    /// Points per food pellet.
    #[serde(default = "default_food_points")]
    pub food_points: u32,
}

impl BoardConfig {
    /// The rule parameters for the map parser.
    pub const fn rules(&self) -> RulesConfig {
        RulesConfig {
            food_points: self.food_points,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            food_points: default_food_points(),
        }
    }
}

fn default_rows() -> Vec<String> {
    ["#########", "#P. . .G#", "# ##.## #", "#. . . .#", "#########"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn default_food_points() -> u32 {
    RulesConfig::default().food_points
}

/// Ghost clock settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GhostConfig {
    /// Seed for the ghosts' random walk.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Whether the clock runs from the start.
    #[serde(default = "default_autostart")]
    pub autostart: bool,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            autostart: default_autostart(),
        }
    }
}

const fn default_seed() -> u64 {
    42
}

const fn default_autostart() -> bool {
    true
}
