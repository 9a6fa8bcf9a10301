//! Gesture interpretation for pointer-driven ink annotation.
//!
//! This module translates raw pointer events (down, move, up, cancel) into
//! semantic ink/erase commands. It maintains the slop threshold used to
//! separate deliberate drags from sensor jitter, the current interaction
//! mode, and the state machine for in-flight gestures.

pub mod command;
pub mod events;
pub mod mode;
pub mod router;


// Re-export commonly used types at module level
pub use command::Command;
pub use events::{PointerEvent, PointerPhase};
pub use mode::Mode;
pub use router::GestureRouter;
