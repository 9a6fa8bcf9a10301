//! Pointer-event trace files and replay.
//!
//! Traces are JSON lines, one record per line: either a pointer event or a
//! mode switch. They are the offline stand-in for a live event source,
//! letting gesture interpretation be exercised and inspected without a
//! display server:
//!
//! ```text
//! {"kind":"pointer","phase":"down","x":10.0,"y":10.0}
//! {"kind":"pointer","phase":"up","x":10.0,"y":10.0}
//! {"kind":"mode","mode":"erase"}
//! ```

use crate::gesture::{Command, GestureRouter, Mode, PointerEvent, PointerPhase};
use crate::ink::InkCanvas;
use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One line of a trace file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceRecord {
    /// A sampled pointer event
    Pointer {
        /// Event phase within the gesture
        phase: PointerPhase,
        /// Pointer X coordinate
        x: f64,
        /// Pointer Y coordinate
        y: f64,
    },
    /// Switch the interaction mode before the next event
    Mode {
        /// Mode to switch to
        mode: Mode,
    },
}

/// Result of replaying a trace through a router and canvas.
#[derive(Debug)]
pub struct ReplaySummary {
    /// Every command emitted, in emission order
    pub commands: Vec<Command>,
    /// Final canvas state after applying all commands
    pub canvas: InkCanvas,
}

/// Reads a JSON-lines trace file.
///
/// Blank lines are skipped.
///
/// # Errors
/// Returns an error if the file cannot be read or any line fails to parse;
/// parse errors name the offending line number.
pub fn read_trace(path: &Path) -> Result<Vec<TraceRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read trace from {}", path.display()))?;

    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: TraceRecord = serde_json::from_str(line).with_context(|| {
            format!("Invalid trace record at {}:{}", path.display(), index + 1)
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Replays trace records through a fresh router into a fresh canvas.
///
/// Mode records switch the router's mode; any commands forced out by a
/// mid-gesture switch are applied like ordinary router output. A trace
/// that ends with a gesture still in progress is replayed as-is with a
/// warning (the pending path is left uncommitted).
///
/// # Errors
/// Returns an error if a command fails to apply to the canvas. The router
/// never emits out-of-order commands, so this only fires on internal bugs.
pub fn replay(records: &[TraceRecord], slop: f64, initial_mode: Mode) -> Result<ReplaySummary> {
    let mut router = GestureRouter::new(slop);
    let mut canvas = InkCanvas::new();
    let mut commands = Vec::new();

    // Idle router: switching the initial mode emits nothing.
    router.set_mode(initial_mode);

    for record in records {
        let emitted = match *record {
            TraceRecord::Pointer { phase, x, y } => router.process(PointerEvent { phase, x, y }),
            TraceRecord::Mode { mode } => router.set_mode(mode),
        };
        for command in emitted {
            canvas
                .apply(command)
                .with_context(|| format!("Failed to apply {command}"))?;
            commands.push(command);
        }
    }

    if router.gesture_in_progress() {
        warn!("Trace ended with a gesture in progress; pending path not committed");
    }

    Ok(ReplaySummary { commands, canvas })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ink::PathKind;
    use std::io::Write;

    #[test]
    fn parses_pointer_and_mode_records() {
        let record: TraceRecord =
            serde_json::from_str(r#"{"kind":"pointer","phase":"down","x":1.0,"y":2.0}"#).unwrap();
        assert_eq!(
            record,
            TraceRecord::Pointer {
                phase: PointerPhase::Down,
                x: 1.0,
                y: 2.0,
            }
        );

        let record: TraceRecord = serde_json::from_str(r#"{"kind":"mode","mode":"erase"}"#).unwrap();
        assert_eq!(record, TraceRecord::Mode { mode: Mode::Erase });
    }

    #[test]
    fn read_trace_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"kind":"pointer","phase":"down","x":0.0,"y":0.0}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"kind":"pointer","phase":"up","x":0.0,"y":0.0}}"#).unwrap();

        let records = read_trace(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn read_trace_reports_offending_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"kind":"pointer","phase":"down","x":0.0,"y":0.0}}"#).unwrap();
        writeln!(file, "not json").unwrap();

        let err = read_trace(file.path()).unwrap_err();
        assert!(format!("{err}").contains(":2"));
    }

    #[test]
    fn replay_commits_paths_across_mode_switches() {
        let records = [
            TraceRecord::Pointer {
                phase: PointerPhase::Down,
                x: 0.0,
                y: 0.0,
            },
            TraceRecord::Pointer {
                phase: PointerPhase::Move,
                x: 6.0,
                y: 0.0,
            },
            TraceRecord::Pointer {
                phase: PointerPhase::Up,
                x: 6.0,
                y: 0.0,
            },
            TraceRecord::Mode { mode: Mode::Erase },
            TraceRecord::Pointer {
                phase: PointerPhase::Down,
                x: 3.0,
                y: 3.0,
            },
            TraceRecord::Pointer {
                phase: PointerPhase::Up,
                x: 3.0,
                y: 3.0,
            },
        ];

        let summary = replay(&records, 4.0, Mode::Draw).unwrap();
        assert_eq!(summary.canvas.paths().len(), 2);
        assert_eq!(summary.canvas.paths()[0].kind, PathKind::Ink);
        assert_eq!(summary.canvas.paths()[1].kind, PathKind::Erase);
        // drag: begin+append, end; tap: begin+append+end
        assert_eq!(summary.commands.len(), 6);
    }

    #[test]
    fn replay_applies_forced_end_on_mid_gesture_mode_switch() {
        let records = [
            TraceRecord::Pointer {
                phase: PointerPhase::Down,
                x: 0.0,
                y: 0.0,
            },
            TraceRecord::Pointer {
                phase: PointerPhase::Move,
                x: 6.0,
                y: 0.0,
            },
            TraceRecord::Mode { mode: Mode::Erase },
        ];

        let summary = replay(&records, 4.0, Mode::Draw).unwrap();
        assert_eq!(
            summary.commands.last(),
            Some(&Command::EndStroke { x: 6.0, y: 0.0 })
        );
        assert_eq!(summary.canvas.paths().len(), 1);
    }
}
