//! Canvas state applying gesture commands into committed paths.

use super::path::{InkPath, PathKind};
use crate::gesture::Command;
use thiserror::Error;

/// Contract violation raised when commands arrive out of order.
///
/// The gesture router never produces such sequences; these errors surface
/// caller bugs (reordered application, commands from multiple routers
/// interleaved into one canvas).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    /// Append/end/cancel arrived with no path open
    #[error("no path in progress for {0}")]
    NoOpenPath(&'static str),
    /// Begin arrived while a path was still open
    #[error("begin received while a {0:?} path is in progress")]
    PathAlreadyOpen(PathKind),
    /// Append/end family does not match the open path's family
    #[error("{command} does not match the open {open:?} path")]
    KindMismatch {
        /// Name of the offending command
        command: &'static str,
        /// Family of the currently open path
        open: PathKind,
    },
}

/// Accumulates committed ink/erase paths from an ordered command stream.
///
/// Commands must be applied in the exact order the router returned them.
/// `Begin*` opens a pending path, `Append*` extends it, `End*` moves it to
/// the committed list, and `Cancel` discards it.
#[derive(Debug, Default)]
pub struct InkCanvas {
    /// Committed paths in commit order (first = oldest)
    committed: Vec<InkPath>,
    /// Path currently being traced, if any
    pending: Option<InkPath>,
}

impl InkCanvas {
    /// Creates an empty canvas with no paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed paths in commit order.
    pub fn paths(&self) -> &[InkPath] {
        &self.committed
    }

    /// The in-flight path, if a gesture is currently active.
    pub fn pending(&self) -> Option<&InkPath> {
        self.pending.as_ref()
    }

    /// Removes all committed paths and any pending path.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.pending = None;
    }

    /// Applies one command.
    ///
    /// # Errors
    /// Returns [`ApplyError`] when the command violates the open/closed
    /// path protocol. The canvas is left unchanged on error.
    pub fn apply(&mut self, command: Command) -> Result<(), ApplyError> {
        match command {
            Command::BeginStroke { x, y } => self.begin(PathKind::Ink, x, y),
            Command::BeginErase { x, y } => self.begin(PathKind::Erase, x, y),
            Command::AppendPoint { x, y } => self.append(PathKind::Ink, "append_point", x, y),
            Command::AppendErasePoint { x, y } => {
                self.append(PathKind::Erase, "append_erase_point", x, y)
            }
            Command::EndStroke { .. } => self.end(PathKind::Ink, "end_stroke"),
            Command::EndErase { .. } => self.end(PathKind::Erase, "end_erase"),
            Command::Cancel { .. } => {
                if self.pending.take().is_none() {
                    return Err(ApplyError::NoOpenPath("cancel"));
                }
                Ok(())
            }
        }
    }

    /// Applies a batch of commands in order, stopping at the first error.
    pub fn apply_all(
        &mut self,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<(), ApplyError> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    fn begin(&mut self, kind: PathKind, x: f64, y: f64) -> Result<(), ApplyError> {
        if let Some(open) = &self.pending {
            return Err(ApplyError::PathAlreadyOpen(open.kind));
        }
        self.pending = Some(InkPath::anchored(kind, x, y));
        Ok(())
    }

    fn append(
        &mut self,
        kind: PathKind,
        command: &'static str,
        x: f64,
        y: f64,
    ) -> Result<(), ApplyError> {
        match &mut self.pending {
            Some(path) if path.kind == kind => {
                path.push(x, y);
                Ok(())
            }
            Some(path) => Err(ApplyError::KindMismatch {
                command,
                open: path.kind,
            }),
            None => Err(ApplyError::NoOpenPath(command)),
        }
    }

    fn end(&mut self, kind: PathKind, command: &'static str) -> Result<(), ApplyError> {
        match self.pending.take() {
            Some(path) if path.kind == kind => {
                self.committed.push(path);
                Ok(())
            }
            Some(path) => {
                let open = path.kind;
                self.pending = Some(path);
                Err(ApplyError::KindMismatch { command, open })
            }
            None => Err(ApplyError::NoOpenPath(command)),
        }
    }
}
