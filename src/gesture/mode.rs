//! Interaction mode selection.

use super::command::Command;
use serde::{Deserialize, Serialize};

/// Interaction mode selecting which command family a gesture produces.
///
/// The slop threshold and state machine shape are identical in both modes;
/// only the emitted command family differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Gestures lay down ink strokes (default)
    Draw,
    /// Gestures trace erase paths over existing ink
    Erase,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Draw
    }
}

impl Mode {
    /// Command opening a new path of this mode's family at `(x, y)`.
    pub(crate) fn begin(self, x: f64, y: f64) -> Command {
        match self {
            Mode::Draw => Command::BeginStroke { x, y },
            Mode::Erase => Command::BeginErase { x, y },
        }
    }

    /// Command extending the open path of this mode's family to `(x, y)`.
    pub(crate) fn append(self, x: f64, y: f64) -> Command {
        match self {
            Mode::Draw => Command::AppendPoint { x, y },
            Mode::Erase => Command::AppendErasePoint { x, y },
        }
    }

    /// Command committing the open path of this mode's family at `(x, y)`.
    pub(crate) fn end(self, x: f64, y: f64) -> Command {
        match self {
            Mode::Draw => Command::EndStroke { x, y },
            Mode::Erase => Command::EndErase { x, y },
        }
    }
}
