//! Ink/erase path model consuming gesture router commands.
//!
//! This module owns the committed paths produced by gesture commands. It
//! does not render, persist, or undo anything; it is the reference
//! implementation of the command contract documented on
//! [`Command`](crate::gesture::Command).

pub mod canvas;
pub mod path;

// Re-export commonly used types at module level
pub use canvas::{ApplyError, InkCanvas};
pub use path::{InkPath, PathKind};
