//! The [`GridOperator`] capability.

use crate::pass::GridPass;
use rill_core::OperatorError;

/// An elementwise operator executed over every cell of a pass.
///
/// This is the seam the pipeline stages are polymorphic over: each
/// stage owns a boxed operator and is agnostic to whether it is the
/// CPU reference kernel, a counting mock, or an alternative
/// discretization. Operators are stateless with respect to the
/// simulation — all inputs arrive through the pass.
///
/// # Contract
///
/// - `execute()` must fully overwrite every cell of each write binding
///   it takes, or leave the binding untouched; partial writes would
///   leak stale data across the ping-pong swap.
/// - `execute()` must be deterministic for a given pass.
pub trait GridOperator: Send {
    /// Operator name, for error reporting and dispatch traces.
    fn name(&self) -> &str;

    /// Execute the operator over all cells of the pass.
    fn execute(&self, pass: &mut GridPass<'_>) -> Result<(), OperatorError>;
}
