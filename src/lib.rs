//! Library exports for reusing inkroute subsystems.
//!
//! Exposes the gesture router alongside the supporting modules it relies on
//! so that host applications (drawing surfaces, event-source adapters) can
//! embed the router, share its configuration handling, and replay recorded
//! traces.

pub mod config;
pub mod gesture;
pub mod ink;
pub mod trace;
pub mod util;

pub use config::Config;
pub use gesture::{Command, GestureRouter, Mode, PointerEvent, PointerPhase};
pub use ink::InkCanvas;
