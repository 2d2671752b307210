//! Tunable game rules.

use serde::Deserialize;

/// Rule parameters applied when a map is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RulesConfig {
    /// Points awarded for each food pellet (default: 10).
    #[serde(default = "default_food_points")]
    pub food_points: u32,
}

const fn default_food_points() -> u32 {
    10
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            food_points: default_food_points(),
        }
    }
}
