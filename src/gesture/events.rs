//! Generic pointer event types, free of any platform input dependency.

use serde::{Deserialize, Serialize};

/// Phase of a sampled pointer position.
///
/// Backends map their native touch/mouse callbacks to these generic
/// phases. A well-formed gesture is `Down, Move*, (Up | Cancel)` with one
/// live gesture at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// Pointer made contact (press)
    Down,
    /// Pointer moved while in contact (drag)
    Move,
    /// Pointer lifted (release)
    Up,
    /// Gesture aborted externally (focus loss, palm rejection)
    Cancel,
}

/// One sampled pointer position with its phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Event phase within the gesture
    pub phase: PointerPhase,
    /// Pointer X coordinate (caller-owned coordinate space)
    pub x: f64,
    /// Pointer Y coordinate (caller-owned coordinate space)
    pub y: f64,
}

impl PointerEvent {
    /// Creates a press event at the given position.
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Down,
            x,
            y,
        }
    }

    /// Creates a drag event at the given position.
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Move,
            x,
            y,
        }
    }

    /// Creates a release event at the given position.
    pub fn up(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Up,
            x,
            y,
        }
    }

    /// Creates an abort event at the given position.
    pub fn cancel(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Cancel,
            x,
            y,
        }
    }
}
