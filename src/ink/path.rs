//! Path definitions for ink and erase gestures.

use serde::{Deserialize, Serialize};

/// Which command family produced a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathKind {
    /// Freehand ink laid down in draw mode
    Ink,
    /// Erase trace removing existing ink along its points
    Erase,
}

/// One continuous freehand path traced by a single gesture.
///
/// Points are stored in append order, starting at the gesture's press
/// position. A committed path always contains at least the anchor point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InkPath {
    /// Ink or erase family
    pub kind: PathKind,
    /// Sequence of (x, y) coordinates traced by the pointer
    pub points: Vec<(f64, f64)>,
}

impl InkPath {
    /// Creates a path of the given kind anchored at `(x, y)`.
    pub fn anchored(kind: PathKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            points: vec![(x, y)],
        }
    }

    /// Extends the path to `(x, y)`.
    pub fn push(&mut self, x: f64, y: f64) {
        self.points.push((x, y));
    }
}
