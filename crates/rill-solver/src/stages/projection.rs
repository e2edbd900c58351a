//! Pressure projection stage.

use rill_compute::{ComputeContext, GridOperator, GridPass, Uniforms};
use rill_core::{GridLayout, OperatorError};
use rill_field::FluidState;
use rill_kernels::ProjectKernel;

/// Subtracts the pressure gradient from every velocity component in
/// place, enforcing approximate incompressibility.
///
/// One dispatch per axis; the per-axis passes are independent (each
/// writes only its own component and reads only pressure), so no
/// barrier separates them. No swap — the update is elementwise in the
/// component being written.
pub struct ProjectionStage {
    operator: Box<dyn GridOperator>,
}

impl ProjectionStage {
    /// Stage with the CPU reference kernel.
    pub fn new() -> Self {
        Self {
            operator: Box::new(ProjectKernel),
        }
    }

    /// Stage with a substituted operator.
    pub fn with_operator(operator: Box<dyn GridOperator>) -> Self {
        Self { operator }
    }

    /// Project the velocity field against the current pressure.
    pub fn compute(
        &self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
    ) -> Result<(), OperatorError> {
        let extents = *state.extents();
        let one_over_dx = 1.0 / state.params.cell_size;
        let staggered = state.layout() == GridLayout::Staggered;

        let (mut velocity, pressure) = state.projection_views();
        for (k, component) in velocity.iter_mut().enumerate() {
            let mut uniforms = Uniforms::new();
            uniforms
                .set_f32("one_over_dx", one_over_dx)
                .set_i32("staggered", staggered as i32)
                .set_i32("axis", k as i32);

            let mut pass = GridPass::new(
                extents,
                &uniforms,
                vec![pressure.as_slice()],
                vec![component.as_mut_slice()],
            )?;
            ctx.dispatch(self.operator.as_ref(), &mut pass)?;
        }
        Ok(())
    }
}

impl Default for ProjectionStage {
    fn default() -> Self {
        Self::new()
    }
}
