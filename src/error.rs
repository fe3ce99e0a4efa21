//! Crate-wide error type.
//!
//! Every fallible operation in the engine returns [`PaintResult`]. The
//! variants map one-to-one onto the failure classes of the public API:
//! bad caller-supplied dimensions, coordinates outside a buffer, stroke
//! continuation without a stroke start, a render target that cannot be
//! read or written, and I/O during export.

use std::fmt;

pub type PaintResult<T> = Result<T, PaintError>;

#[derive(Debug)]
pub enum PaintError {
    /// Non-positive dimensions, negative radius, malformed hex string, etc.
    InvalidArgument(String),
    /// A coordinate missed the buffer extent. Only reachable when a caller
    /// skips the pointer clamp policy.
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
    /// Operation called in the wrong order (e.g. `continue_stroke` before
    /// `begin_stroke`).
    InvalidState(&'static str),
    /// The authoritative render target could not be read back or flushed.
    /// The stroke is aborted; the CPU mirror keeps its last consistent state.
    RenderTargetUnavailable(String),
    /// Filesystem error while exporting a capture.
    Io(std::io::Error),
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            PaintError::OutOfBounds { x, y, width, height } => {
                write!(f, "Coordinate ({}, {}) outside {}×{} buffer", x, y, width, height)
            }
            PaintError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            PaintError::RenderTargetUnavailable(msg) => {
                write!(f, "Render target unavailable: {}", msg)
            }
            PaintError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for PaintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaintError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PaintError {
    fn from(e: std::io::Error) -> Self {
        PaintError::Io(e)
    }
}

impl From<image::ImageError> for PaintError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => PaintError::Io(io),
            other => PaintError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                other.to_string(),
            )),
        }
    }
}
