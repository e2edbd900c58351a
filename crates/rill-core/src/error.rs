//! Error types for the Rill fluid solver.
//!
//! Two families, matching the failure taxonomy of the pipeline:
//! [`SetupError`] for construction-time validation (the sole failure
//! gate — a built pipeline does not fail per frame), and
//! [`OperatorError`] for grid-operator execution, so substituted
//! operators can report malformed passes.

use std::error::Error;
use std::fmt;

/// Construction-time failures. Fatal; never produced per frame.
#[derive(Clone, Debug, PartialEq)]
pub enum SetupError {
    /// A grid axis has zero cells.
    EmptyGrid,
    /// A grid axis exceeds the addressable maximum.
    DimensionTooLarge {
        /// Which axis, by display name.
        axis: &'static str,
        /// The offending extent.
        value: u32,
        /// The maximum supported extent.
        max: u32,
    },
    /// Grid dimensionality other than 2 or 3.
    UnsupportedDimensionality {
        /// The requested dimensionality.
        ndim: usize,
    },
    /// The physical cell size is not finite and positive.
    InvalidCellSize {
        /// The offending value.
        value: f32,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid axis has zero cells"),
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "grid axis {axis} has {value} cells, max is {max}")
            }
            Self::UnsupportedDimensionality { ndim } => {
                write!(f, "grid dimensionality must be 2 or 3, got {ndim}")
            }
            Self::InvalidCellSize { value } => {
                write!(f, "cell size must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for SetupError {}

/// Errors from executing a grid operator over one pass.
///
/// The reference operators never fail on a well-formed pass; these
/// surface mis-bound passes from substituted operators and from tests.
#[derive(Clone, Debug, PartialEq)]
pub enum OperatorError {
    /// A uniform the operator requires was not set on the pass.
    MissingUniform {
        /// Name of the missing uniform.
        name: &'static str,
    },
    /// A uniform was set with an unexpected type.
    UniformTypeMismatch {
        /// Name of the offending uniform.
        name: &'static str,
    },
    /// A read or write binding slot the operator requires is absent.
    MissingBinding {
        /// The absent slot index.
        slot: usize,
        /// Whether a write binding (as opposed to a read) was expected.
        writable: bool,
    },
    /// A bound buffer's length does not match the pass extents.
    BindingSizeMismatch {
        /// The offending slot index.
        slot: usize,
        /// Length of the bound buffer.
        len: usize,
        /// Cell count implied by the pass extents.
        expected: usize,
    },
    /// The operator failed for an operator-specific reason.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for OperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUniform { name } => write!(f, "uniform '{name}' not set"),
            Self::UniformTypeMismatch { name } => {
                write!(f, "uniform '{name}' has the wrong type")
            }
            Self::MissingBinding { slot, writable } => {
                let kind = if *writable { "write" } else { "read" };
                write!(f, "{kind} binding slot {slot} not bound")
            }
            Self::BindingSizeMismatch {
                slot,
                len,
                expected,
            } => {
                write!(
                    f,
                    "binding slot {slot} has {len} cells, pass covers {expected}"
                )
            }
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
        }
    }
}

impl Error for OperatorError {}
