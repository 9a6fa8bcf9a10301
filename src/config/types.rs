//! Configuration type definitions.

use crate::gesture::Mode;
use serde::{Deserialize, Serialize};

/// Gesture interpretation settings.
///
/// Controls how pointer movement is translated into ink/erase commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Movement slop threshold in surface units (valid range: 0.0 - 512.0).
    /// Displacement from the press position below this value is treated as
    /// jitter; 0.0 commits a gesture on any movement.
    #[serde(default = "default_slop")]
    pub slop: f64,

    /// Interaction mode used before the caller selects one ("draw" or "erase")
    #[serde(default)]
    pub default_mode: Mode,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            slop: default_slop(),
            default_mode: Mode::default(),
        }
    }
}

/// Trace replay settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Print every emitted command while replaying (`--quiet` overrides)
    #[serde(default = "default_print_commands")]
    pub print_commands: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            print_commands: default_print_commands(),
        }
    }
}

fn default_slop() -> f64 {
    8.0
}

fn default_print_commands() -> bool {
    true
}
