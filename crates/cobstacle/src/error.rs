//! Error type shared by every pipeline stage.
//!
//! Failures are deterministic: they indicate an invalid configuration, so
//! callers abort the run instead of retrying.

use std::fmt;

/// Errors surfaced by the geometric pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// Hull construction impossible: fewer than 3 distinct points, all points
    /// collinear, or a vertical separating line.
    DegenerateGeometry { reason: String },
    /// Empty or malformed polygon handed to a stage that needs vertices.
    InvalidPolygon { reason: String },
    /// Out-of-range configuration value (e.g. `step_size == 0`).
    InvalidArgument { reason: String },
}

impl GeomError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// True for the `DegenerateGeometry` kind.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateGeometry { .. })
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGeometry { reason } => write!(f, "degenerate geometry: {reason}"),
            Self::InvalidPolygon { reason } => write!(f, "invalid polygon: {reason}"),
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}
