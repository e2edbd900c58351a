//! The explicit compute context: dispatch, barriers, and counters.

use crate::operator::GridOperator;
use crate::pass::GridPass;
use rill_core::OperatorError;

/// Record of one dispatch, kept when tracing is enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchRecord {
    /// Name of the dispatched operator.
    pub operator: String,
    /// Value of the barrier counter when the dispatch ran. Two
    /// dispatches with the same value ran inside the same barrier
    /// interval.
    pub barrier_epoch: u64,
}

/// Explicit handle to the compute substrate.
///
/// One context drives one simulation; it is passed by reference into
/// every stage constructor and `compute()` call rather than living in
/// a global. [`ComputeContext::barrier`] is the ordering point between
/// any two passes with a read-after-write or write-after-write
/// dependency, and between successive relaxation sweeps; on the CPU
/// reference substrate passes already run to completion, so the
/// barrier's observable effect is the epoch counter recorded in the
/// dispatch trace.
#[derive(Debug, Default)]
pub struct ComputeContext {
    dispatches: u64,
    barriers: u64,
    trace: Option<Vec<DispatchRecord>>,
}

impl ComputeContext {
    /// Context with counters only (the per-frame configuration).
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that additionally records every dispatch, for tests
    /// asserting pass ordering and barrier cadence.
    pub fn with_trace() -> Self {
        Self {
            trace: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Issue a visibility barrier between dependent passes.
    pub fn barrier(&mut self) {
        self.barriers += 1;
    }

    /// Execute an operator over a pass.
    pub fn dispatch(
        &mut self,
        operator: &dyn GridOperator,
        pass: &mut GridPass<'_>,
    ) -> Result<(), OperatorError> {
        self.dispatches += 1;
        if let Some(trace) = &mut self.trace {
            trace.push(DispatchRecord {
                operator: operator.name().to_string(),
                barrier_epoch: self.barriers,
            });
        }
        operator.execute(pass)
    }

    /// Total dispatches issued.
    pub fn dispatches(&self) -> u64 {
        self.dispatches
    }

    /// Total barriers issued.
    pub fn barriers(&self) -> u64 {
        self.barriers
    }

    /// The dispatch trace, when tracing is enabled.
    pub fn trace(&self) -> Option<&[DispatchRecord]> {
        self.trace.as_deref()
    }

    /// Drop any recorded trace entries (between frames in tests).
    pub fn clear_trace(&mut self) {
        if let Some(trace) = &mut self.trace {
            trace.clear();
        }
    }
}
