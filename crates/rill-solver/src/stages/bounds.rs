//! Boundary synthesis stage.

use rill_compute::{ComputeContext, GridOperator, GridPass, Uniforms};
use rill_core::OperatorError;
use rill_field::FluidState;
use rill_kernels::SynthesizeBoundsKernel;

/// (Re)classifies boundary cells into the dedicated classification
/// field and stamps the state's exterior velocity into wall cells.
///
/// The classification is derived from the grid rim each time this
/// runs; it is independent of the static per-field boundary tags the
/// advection and relaxation stencils use.
pub struct BoundarySynthesisStage {
    operator: Box<dyn GridOperator>,
}

impl BoundarySynthesisStage {
    /// Stage with the CPU reference kernel.
    pub fn new() -> Self {
        Self {
            operator: Box::new(SynthesizeBoundsKernel),
        }
    }

    /// Stage with a substituted operator.
    pub fn with_operator(operator: Box<dyn GridOperator>) -> Self {
        Self { operator }
    }

    /// Classify boundary cells and impose the exterior velocity.
    pub fn compute(
        &self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
    ) -> Result<(), OperatorError> {
        let extents = *state.extents();

        let mut uniforms = Uniforms::new();
        uniforms.set_vec3("exterior_velocity", state.exterior_velocity);

        let (bounds, velocity) = state.boundary_views();
        let mut writes: Vec<&mut [f32]> = vec![bounds.as_mut_slice()];
        writes.extend(velocity.into_iter().map(|grid| grid.as_mut_slice()));

        let mut pass = GridPass::new(extents, &uniforms, vec![], writes)?;
        ctx.dispatch(self.operator.as_ref(), &mut pass)
    }
}

impl Default for BoundarySynthesisStage {
    fn default() -> Self {
        Self::new()
    }
}
