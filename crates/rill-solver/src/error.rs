//! Error type for pipeline execution.

use rill_core::OperatorError;
use std::error::Error;
use std::fmt;

/// A pipeline stage's operator dispatch failed.
///
/// The reference operators never fail once built; this surfaces
/// mis-bound passes from substituted operators. There is no per-frame
/// recovery: callers treat a stage failure like a construction
/// failure.
#[derive(Clone, Debug, PartialEq)]
pub struct StageError {
    /// Name of the failing stage.
    pub stage: &'static str,
    /// The underlying operator error.
    pub reason: OperatorError,
}

impl StageError {
    pub(crate) fn new(stage: &'static str, reason: OperatorError) -> Self {
        Self { stage, reason }
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stage '{}' failed: {}", self.stage, self.reason)
    }
}

impl Error for StageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}
