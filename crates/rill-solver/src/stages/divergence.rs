//! Velocity divergence stage.

use rill_compute::{ComputeContext, GridOperator, GridPass, Uniforms};
use rill_core::{GridLayout, OperatorError};
use rill_field::{DivergenceTarget, FluidState};
use rill_kernels::DivergenceKernel;

/// Writes `div(v)` into one of the unbuffered divergence fields.
///
/// Read-only with respect to velocity. The same stage computes both
/// the pressure forcing term ([`DivergenceTarget::Main`]) and the
/// post-projection verification pass ([`DivergenceTarget::Check`]).
pub struct DivergenceStage {
    operator: Box<dyn GridOperator>,
}

impl DivergenceStage {
    /// Stage with the CPU reference kernel.
    pub fn new() -> Self {
        Self {
            operator: Box::new(DivergenceKernel),
        }
    }

    /// Stage with a substituted operator.
    pub fn with_operator(operator: Box<dyn GridOperator>) -> Self {
        Self { operator }
    }

    /// Compute divergence into the requested field.
    pub fn compute(
        &self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
        target: DivergenceTarget,
    ) -> Result<(), OperatorError> {
        let extents = *state.extents();
        let staggered = state.layout() == GridLayout::Staggered;

        let mut uniforms = Uniforms::new();
        uniforms
            .set_f32("one_over_dx", 1.0 / state.params.cell_size)
            .set_i32("staggered", staggered as i32);

        let (velocity, out) = state.divergence_views(target);
        let reads: Vec<&[f32]> = velocity.iter().map(|grid| grid.as_slice()).collect();

        let mut pass = GridPass::new(extents, &uniforms, reads, vec![out.as_mut_slice()])?;
        ctx.dispatch(self.operator.as_ref(), &mut pass)
    }
}

impl Default for DivergenceStage {
    fn default() -> Self {
        Self::new()
    }
}
