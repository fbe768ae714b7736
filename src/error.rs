//! Error types for raster-kit operations.

use crate::graphic::{GraphicKind, PointCount};
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in raster-kit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A graphic was constructed with the wrong number of control points.
    #[error("{kind} requires {expected} points, got {actual}")]
    InvalidPointCount {
        /// Kind of graphic being constructed.
        kind: GraphicKind,
        /// Point count the kind (and algorithm) accepts.
        expected: PointCount,
        /// Number of points supplied.
        actual: usize,
    },

    /// The operation is not a capability of this kind of graphic.
    #[error("{operation} is not supported for {kind}")]
    UnsupportedOperation {
        /// Operation name (`rotate`, `clip`).
        operation: &'static str,
        /// Kind the operation was invoked on.
        kind: GraphicKind,
    },

    /// The algorithm tag is not recognized for this kind of graphic.
    #[error("unknown algorithm '{algorithm}' for {kind}")]
    UnknownAlgorithm {
        /// Kind the algorithm was requested for.
        kind: GraphicKind,
        /// The unrecognized algorithm tag.
        algorithm: String,
    },

    /// A command referenced a graphic id the canvas does not hold.
    #[error("no graphic with id {0}")]
    UnknownGraphic(i64),

    /// A textual command could not be parsed.
    #[error("command error at line {line}: {message}")]
    Command {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// A script line parsed but failed to execute.
    #[error("script error at line {line}: {source}")]
    Script {
        /// Line number of the failing command (1-indexed).
        line: usize,
        /// The execution error.
        #[source]
        source: Box<Error>,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid dimensions for a framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

impl Error {
    /// Build a [`Error::Command`] without a known line number.
    pub(crate) fn command(message: impl Into<String>) -> Self {
        Self::Command { line: 0, message: message.into() }
    }

    /// Attach a script line number.
    ///
    /// Parse errors carry the line directly; anything else is wrapped in
    /// [`Error::Script`].
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::Command { message, .. } => Self::Command { line, message },
            other => Self::Script { line, source: Box::new(other) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_point_count_display() {
        let err = Error::InvalidPointCount {
            kind: GraphicKind::Curve,
            expected: PointCount::AtLeast(4),
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("curve"));
        assert!(msg.contains("at least 4"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_unsupported_operation_display() {
        let err = Error::UnsupportedOperation { operation: "rotate", kind: GraphicKind::Ellipse };
        assert_eq!(err.to_string(), "rotate is not supported for ellipse");
    }

    #[test]
    fn test_at_line() {
        let err = Error::command("bad token").at_line(7);
        assert!(matches!(err, Error::Command { line: 7, .. }));
        assert!(err.to_string().contains("line 7"));

        let err = Error::UnknownGraphic(3).at_line(9);
        assert_eq!(err.to_string(), "script error at line 9: no graphic with id 3");
        match err {
            Error::Script { line, source } => {
                assert_eq!(line, 9);
                assert!(matches!(*source, Error::UnknownGraphic(3)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
