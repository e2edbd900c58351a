//! Grid scrolling stage.

use rill_compute::{ComputeContext, GridOperator, GridPass, Uniforms};
use rill_core::OperatorError;
use rill_field::FluidState;
use rill_kernels::ScrollKernel;

/// Circularly shifts every owned field by an integer cell offset per
/// axis, re-centring the fixed-size grid around a moving frame of
/// reference without reallocation.
///
/// Buffered fields read their input and write the shifted result to
/// their output, then swap. Unbuffered fields rotate through the
/// stage's scratch copy, since the shift kernel must not read the
/// storage it writes.
pub struct ScrollStage {
    operator: Box<dyn GridOperator>,
    scratch: Vec<f32>,
}

impl ScrollStage {
    /// Stage with the CPU reference kernel.
    pub fn new() -> Self {
        Self::with_operator(Box::new(ScrollKernel))
    }

    /// Stage with a substituted operator.
    pub fn with_operator(operator: Box<dyn GridOperator>) -> Self {
        Self {
            operator,
            scratch: Vec::new(),
        }
    }

    /// Shift every field by `offset` cells per axis.
    pub fn compute(
        &mut self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
        offset: [i32; 3],
    ) -> Result<(), OperatorError> {
        let extents = *state.extents();

        let mut uniforms = Uniforms::new();
        uniforms
            .set_i32("offset_x", offset[0])
            .set_i32("offset_y", offset[1])
            .set_i32("offset_z", offset[2]);

        for buffer in state.buffers_mut() {
            let (input, output) = buffer.split_mut();
            let mut pass = GridPass::new(
                extents,
                &uniforms,
                vec![input.as_slice()],
                vec![output.as_mut_slice()],
            )?;
            ctx.dispatch(self.operator.as_ref(), &mut pass)?;
            buffer.swap();
        }

        for grid in state.unbuffered_mut() {
            self.scratch.clear();
            self.scratch.extend_from_slice(grid.as_slice());
            let mut pass = GridPass::new(
                extents,
                &uniforms,
                vec![self.scratch.as_slice()],
                vec![grid.as_mut_slice()],
            )?;
            ctx.dispatch(self.operator.as_ref(), &mut pass)?;
        }
        Ok(())
    }
}

impl Default for ScrollStage {
    fn default() -> Self {
        Self::new()
    }
}
