//! Circular grid shift.

use rill_compute::{GridOperator, GridPass};
use rill_core::OperatorError;
use rill_grid::scroll_source;

/// Shift a field's contents by an integer cell offset per axis,
/// wrapping around the domain.
///
/// Re-centres a fixed-size grid around a moving frame of reference
/// without reallocating. The pass reads the old buffer and writes the
/// shifted result into the new one; the stage swaps afterwards.
/// Offsets equal to a full grid extent are the identity.
///
/// Uniforms: `offset_x`, `offset_y`, `offset_z` (i32, cells).
/// Reads: slot 0 = source buffer.
/// Writes: slot 0 = destination buffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollKernel;

impl GridOperator for ScrollKernel {
    fn name(&self) -> &str {
        "scroll"
    }

    fn execute(&self, pass: &mut GridPass<'_>) -> Result<(), OperatorError> {
        let offset = [
            pass.uniforms().i32("offset_x")?,
            pass.uniforms().i32("offset_y")?,
            pass.uniforms().i32("offset_z")?,
        ];

        let extents = *pass.extents();
        let source = pass.read(0)?;
        let out = pass.take_write(0)?;

        for (index, cell) in extents.iter_cells().enumerate() {
            out[index] = source[scroll_source(&extents, cell, offset)];
        }
        Ok(())
    }
}
