//! # Extrusion Errors
//!
//! Error types for mesh generation operations.
//!
//! ## Error Policy
//!
//! - Recoverable geometry failures (degenerate path, open cap outline)
//!   surface as error values and never panic.
//! - Out-of-range point/edge indices are programmer errors and panic
//!   fail-fast; the panicking operations document this under `# Panics`.

use thiserror::Error;

/// Errors that can occur during profile extrusion.
#[derive(Debug, Error)]
pub enum ExtrudeError {
    /// The path has too few control points to sweep along.
    #[error("degenerate path: {control_points} control points, at least 2 needed")]
    DegeneratePath {
        /// Number of control points supplied.
        control_points: usize,
    },

    /// The cap outline could not be triangulated, so the end caps were
    /// omitted.
    #[error("cap outline is not a simple closed polygon: {message}")]
    CapNotClosed {
        /// Description of the triangulation failure.
        message: String,
    },

    /// Ear clipping failed on a polygon outline.
    #[error("triangulation failed: {message}")]
    TriangulationFailed {
        /// Description of what went wrong.
        message: String,
    },
}

impl ExtrudeError {
    /// Creates a degenerate path error.
    pub fn degenerate_path(control_points: usize) -> Self {
        Self::DegeneratePath { control_points }
    }

    /// Creates an open cap error.
    pub fn cap_not_closed(message: impl Into<String>) -> Self {
        Self::CapNotClosed {
            message: message.into(),
        }
    }

    /// Creates a triangulation failure error.
    pub fn triangulation_failed(message: impl Into<String>) -> Self {
        Self::TriangulationFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for extrusion operations.
pub type ExtrudeResult<T> = Result<T, ExtrudeError>;
