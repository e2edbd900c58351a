//! External impulse application stage.

use rill_compute::{ComputeContext, GridOperator, GridPass, Uniforms};
use rill_core::{GridLayout, Impulse, OperatorError};
use rill_field::FluidState;
use rill_kernels::ImpulseSplatKernel;

/// Adds an impulse's force and ink around its position with a smooth
/// Gaussian falloff.
///
/// Operates in place on each field's current input buffer and performs
/// no swap: the update is purely additive, so reading and writing the
/// same storage carries no stencil hazard. With `velocity_only` the
/// ink contribution is suppressed (the impulse stirs without dyeing).
pub struct ForcesStage {
    operator: Box<dyn GridOperator>,
}

impl ForcesStage {
    /// Stage with the CPU reference splat kernel.
    pub fn new() -> Self {
        Self {
            operator: Box::new(ImpulseSplatKernel),
        }
    }

    /// Stage with a substituted operator.
    pub fn with_operator(operator: Box<dyn GridOperator>) -> Self {
        Self { operator }
    }

    /// Apply one impulse.
    pub fn compute(
        &self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
        impulse: &Impulse,
        velocity_only: bool,
        dt: f32,
    ) -> Result<(), OperatorError> {
        let extents = *state.extents();
        let staggered = state.layout() == GridLayout::Staggered;

        let mut uniforms = Uniforms::new();
        uniforms
            .set_f32("dt", dt)
            .set_vec3("position", impulse.position)
            .set_vec3("magnitude", impulse.magnitude)
            .set_f32("one_over_radius", impulse.radius.recip())
            .set_f32(
                "ink_amount",
                if velocity_only { 0.0 } else { impulse.ink_amount },
            )
            .set_i32("staggered", staggered as i32);

        let (velocity, ink) = state.force_views();
        let mut writes: Vec<&mut [f32]> = velocity
            .into_iter()
            .map(|grid| grid.as_mut_slice())
            .collect();
        writes.push(ink.as_mut_slice());

        let mut pass = GridPass::new(extents, &uniforms, vec![], writes)?;
        ctx.dispatch(self.operator.as_ref(), &mut pass)
    }
}

impl Default for ForcesStage {
    fn default() -> Self {
        Self::new()
    }
}
