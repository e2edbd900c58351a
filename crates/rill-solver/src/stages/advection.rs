//! Semi-Lagrangian advection stage.

use rill_compute::{ComputeContext, GridOperator, GridPass, Uniforms};
use rill_core::{GridLayout, OperatorError};
use rill_field::{AdvectedField, FluidState};
use rill_kernels::AdvectKernel;

/// Transports every advected field — each velocity component and the
/// ink density — along the current velocity over one timestep.
///
/// All advections read the same pre-stage velocity inputs, so the
/// per-field dispatches carry no hazards among themselves; every
/// advected buffer swaps only after the last dispatch. Velocity
/// components advect as no-slip quantities and ink as zero-Dirichlet;
/// at the domain edge both resolve to clamped resampling of the edge
/// cell.
pub struct AdvectionStage {
    operator: Box<dyn GridOperator>,
}

impl AdvectionStage {
    /// Stage with the CPU reference kernel.
    pub fn new() -> Self {
        Self {
            operator: Box::new(AdvectKernel),
        }
    }

    /// Stage with a substituted operator.
    pub fn with_operator(operator: Box<dyn GridOperator>) -> Self {
        Self { operator }
    }

    /// Advect all fields, then swap each advected buffer.
    pub fn compute(
        &self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
        dt: f32,
    ) -> Result<(), OperatorError> {
        let extents = *state.extents();
        let one_over_dx = 1.0 / state.params.cell_size;
        let staggered = state.layout() == GridLayout::Staggered;
        let axes = extents.axes();

        let targets = axes
            .iter()
            .map(|&axis| AdvectedField::Velocity(axis))
            .chain([AdvectedField::Ink]);

        for target in targets {
            let field_offset = match target {
                AdvectedField::Velocity(axis) if staggered => {
                    let mut offset = [0.0f32; 3];
                    offset[axis.index()] = -0.5;
                    offset
                }
                _ => [0.0f32; 3],
            };

            let mut uniforms = Uniforms::new();
            uniforms
                .set_f32("dt", dt)
                .set_f32("one_over_dx", one_over_dx)
                .set_i32("staggered", staggered as i32)
                .set_vec3("field_offset", field_offset);

            let (velocity_inputs, source, output) = state.advection_views(target);
            let mut reads: Vec<&[f32]> =
                velocity_inputs.iter().map(|grid| grid.as_slice()).collect();
            reads.push(source.as_slice());

            let mut pass =
                GridPass::new(extents, &uniforms, reads, vec![output.as_mut_slice()])?;
            ctx.dispatch(self.operator.as_ref(), &mut pass)?;
        }

        for &axis in axes {
            state.velocity_mut(axis).swap();
        }
        state.ink_mut().swap();
        Ok(())
    }
}

impl Default for AdvectionStage {
    fn default() -> Self {
        Self::new()
    }
}
