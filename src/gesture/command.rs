//! Semantic output commands produced by the gesture router.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One semantic command for the ink/erase model.
///
/// Commands from a single [`process`](super::GestureRouter::process) call
/// must be applied strictly in the order returned. The consumer interprets
/// `Begin*` as "open a new path anchored at (x, y)", `Append*` as "extend
/// the open path to (x, y)", `End*` as "finalize and commit the open path",
/// and `Cancel` as "discard the open path without committing".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Open a new ink stroke anchored at (x, y)
    BeginStroke { x: f64, y: f64 },
    /// Extend the open ink stroke to (x, y)
    AppendPoint { x: f64, y: f64 },
    /// Finalize and commit the open ink stroke
    EndStroke { x: f64, y: f64 },
    /// Open a new erase path anchored at (x, y)
    BeginErase { x: f64, y: f64 },
    /// Extend the open erase path to (x, y)
    AppendErasePoint { x: f64, y: f64 },
    /// Finalize and commit the open erase path
    EndErase { x: f64, y: f64 },
    /// Discard the open path without committing
    Cancel { x: f64, y: f64 },
}

impl Command {
    /// Position the command applies at.
    pub fn position(&self) -> (f64, f64) {
        match *self {
            Command::BeginStroke { x, y }
            | Command::AppendPoint { x, y }
            | Command::EndStroke { x, y }
            | Command::BeginErase { x, y }
            | Command::AppendErasePoint { x, y }
            | Command::EndErase { x, y }
            | Command::Cancel { x, y } => (x, y),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::BeginStroke { .. } => "begin_stroke",
            Command::AppendPoint { .. } => "append_point",
            Command::EndStroke { .. } => "end_stroke",
            Command::BeginErase { .. } => "begin_erase",
            Command::AppendErasePoint { .. } => "append_erase_point",
            Command::EndErase { .. } => "end_erase",
            Command::Cancel { .. } => "cancel",
        };
        let (x, y) = self.position();
        write!(f, "{name} ({x:.1}, {y:.1})")
    }
}
