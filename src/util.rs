//! Utility functions for geometry and name mapping.

use crate::gesture::Mode;

/// Euclidean distance between two points.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

/// Maps a user-facing mode name to a [`Mode`].
///
/// Accepts `"draw"` and `"erase"` (case-insensitive). Returns `None` for
/// anything else so callers can warn and fall back.
pub fn mode_from_name(name: &str) -> Option<Mode> {
    match name.to_lowercase().as_str() {
        "draw" => Some(Mode::Draw),
        "erase" => Some(Mode::Erase),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(1.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn mode_names_are_case_insensitive() {
        assert_eq!(mode_from_name("draw"), Some(Mode::Draw));
        assert_eq!(mode_from_name("ERASE"), Some(Mode::Erase));
        assert_eq!(mode_from_name("highlight"), None);
    }
}
