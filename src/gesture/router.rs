//! Slop-gated gesture state machine.

use super::command::Command;
use super::events::{PointerEvent, PointerPhase};
use super::mode::Mode;
use crate::util;
use log::debug;

/// In-flight gesture phase.
///
/// A down point exists exactly while a gesture is armed; an active gesture
/// always has an open path and a last appended point.
#[derive(Debug, Clone, Copy, PartialEq)]
enum GesturePhase {
    /// No gesture in progress - waiting for a press
    Idle,
    /// Press observed, slop threshold not yet exceeded
    Armed {
        /// X coordinate of the press
        down_x: f64,
        /// Y coordinate of the press
        down_y: f64,
    },
    /// Slop exceeded; a begin command has been emitted and a path is open
    Active {
        /// X coordinate of the most recent appended point
        last_x: f64,
        /// Y coordinate of the most recent appended point
        last_y: f64,
    },
}

/// Stateful translator from pointer events to ink/erase commands.
///
/// One router instance persists for the lifetime of the drawing surface and
/// handles one gesture at a time. Movement below the slop threshold is
/// treated as jitter and suppressed; once a gesture crosses the threshold
/// every subsequent move is appended to the open path. A press resolved by
/// a release without qualifying movement is interpreted as a tap and
/// produces a minimal begin/append/end sequence.
///
/// The router holds no platform or rendering state and must be driven from
/// a single logical thread. Callers are expected to deliver events in
/// `Down, Move*, (Up | Cancel)` order per gesture; stray events outside
/// that shape are ignored (see [`process`](Self::process)).
#[derive(Debug)]
pub struct GestureRouter {
    /// Minimum Euclidean displacement from the press before a drag commits
    slop: f64,
    /// Current interaction mode
    mode: Mode,
    /// Current gesture phase
    phase: GesturePhase,
}

impl GestureRouter {
    /// Creates a router with the given slop threshold.
    ///
    /// The threshold is in the caller's coordinate space and is fixed for
    /// the router's lifetime. Negative values are clamped to zero.
    pub fn new(slop: f64) -> Self {
        Self {
            slop: slop.max(0.0),
            mode: Mode::default(),
            phase: GesturePhase::Idle,
        }
    }

    /// Returns the current interaction mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the configured slop threshold.
    pub fn slop(&self) -> f64 {
        self.slop
    }

    /// Returns true while a gesture is armed or active.
    pub fn gesture_in_progress(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    /// Switches the interaction mode, finalizing any in-flight gesture.
    ///
    /// Switching while a gesture is active force-emits the `End*` command
    /// of the old family so begin/end pairs stay consistent; switching
    /// while merely armed discards the pending press. The returned
    /// commands must be applied exactly like [`process`](Self::process)
    /// output before any further events are delivered.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Command> {
        let mut out = Vec::new();
        if mode != self.mode {
            match self.phase {
                GesturePhase::Active { last_x, last_y } => {
                    debug!(
                        "Mode switch during active gesture; finalizing {:?}",
                        self.mode
                    );
                    out.push(self.mode.end(last_x, last_y));
                }
                GesturePhase::Armed { .. } => {
                    debug!("Mode switch during armed gesture; discarding press");
                }
                GesturePhase::Idle => {}
            }
            self.phase = GesturePhase::Idle;
            self.mode = mode;
        }
        out
    }

    /// Processes one pointer event.
    ///
    /// Returns the commands to apply immediately, in order, to the
    /// ink/erase model. The list is often empty: a press only arms the
    /// router, and sub-slop movement is suppressed as jitter.
    ///
    /// # Behavior
    /// - `Down` while idle: arm at the event position, emit nothing
    /// - `Down` during a live gesture: finalize it first (misuse recovery)
    /// - `Move` while armed: emit `Begin*` + `Append*` once the slop
    ///   threshold is crossed, nothing before that
    /// - `Move` while active: emit one `Append*`
    /// - `Up` while armed: tap - emit `Begin*`, `Append*`, `End*`
    /// - `Up` while active: emit `End*`
    /// - `Cancel`: emit `Cancel` if a path is open, then return to idle
    /// - `Move`/`Up`/`Cancel` while idle: emit nothing
    pub fn process(&mut self, event: PointerEvent) -> Vec<Command> {
        let mut out = Vec::new();

        match event.phase {
            PointerPhase::Down => {
                // A second press before the prior gesture resolved means the
                // event source dropped an up; close the old path first.
                if let GesturePhase::Active { last_x, last_y } = self.phase {
                    debug!("Down during active gesture; finalizing previous path");
                    out.push(self.mode.end(last_x, last_y));
                }
                self.phase = GesturePhase::Armed {
                    down_x: event.x,
                    down_y: event.y,
                };
            }
            PointerPhase::Move => match self.phase {
                GesturePhase::Armed { down_x, down_y } => {
                    let d = util::distance(down_x, down_y, event.x, event.y);
                    // A zero threshold still requires actual movement.
                    let crossed = if self.slop > 0.0 {
                        d >= self.slop
                    } else {
                        d > 0.0
                    };
                    if crossed {
                        self.phase = GesturePhase::Active {
                            last_x: event.x,
                            last_y: event.y,
                        };
                        // The path starts at the press position, not where
                        // the slop was finally exceeded.
                        out.push(self.mode.begin(down_x, down_y));
                        out.push(self.mode.append(event.x, event.y));
                    }
                }
                GesturePhase::Active { .. } => {
                    self.phase = GesturePhase::Active {
                        last_x: event.x,
                        last_y: event.y,
                    };
                    out.push(self.mode.append(event.x, event.y));
                }
                GesturePhase::Idle => {}
            },
            PointerPhase::Up => {
                match self.phase {
                    GesturePhase::Armed { down_x, down_y } => {
                        // Tap: synthesize a minimal path at the tap location.
                        out.push(self.mode.begin(down_x, down_y));
                        out.push(self.mode.append(event.x, event.y));
                        out.push(self.mode.end(event.x, event.y));
                    }
                    GesturePhase::Active { .. } => {
                        out.push(self.mode.end(event.x, event.y));
                    }
                    GesturePhase::Idle => {}
                }
                self.phase = GesturePhase::Idle;
            }
            PointerPhase::Cancel => {
                if matches!(self.phase, GesturePhase::Active { .. }) {
                    out.push(Command::Cancel {
                        x: event.x,
                        y: event.y,
                    });
                }
                self.phase = GesturePhase::Idle;
            }
        }

        out
    }
}
