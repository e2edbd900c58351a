//! Semi-Lagrangian advection of one scalar field.

use rill_compute::{GridOperator, GridPass};
use rill_core::OperatorError;
use rill_grid::sample_clamped;
use smallvec::SmallVec;

/// Transport one field along the velocity field by backtracing.
///
/// For each cell, the upstream sample position is the cell's position
/// minus `dt × velocity / dx` (velocity sampled at the cell's own
/// stagger position), and the output is the *previous* field value
/// resampled there with clamped multilinear interpolation — never
/// nearest-neighbour, so the scheme stays unconditionally stable and
/// visually smooth.
///
/// Uniforms: `dt` (f32), `one_over_dx` (f32), `staggered` (i32,
/// 0 or 1, layout of the velocity fields), `field_offset` (vec3,
/// sample-position offset of the advected field in cells).
/// Reads: slots `0..ndim` = velocity components, slot `ndim` = the
/// advected field's previous values.
/// Writes: slot 0 = the advected field's output buffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdvectKernel;

impl GridOperator for AdvectKernel {
    fn name(&self) -> &str {
        "advect"
    }

    fn execute(&self, pass: &mut GridPass<'_>) -> Result<(), OperatorError> {
        let dt = pass.uniforms().f32("dt")?;
        let one_over_dx = pass.uniforms().f32("one_over_dx")?;
        let staggered = pass.uniforms().i32("staggered")? != 0;
        let field_offset = pass.uniforms().vec3("field_offset")?;

        let extents = *pass.extents();
        let ndim = extents.ndim();
        let velocity: SmallVec<[&[f32]; 3]> =
            (0..ndim).map(|slot| pass.read(slot)).collect::<Result<_, _>>()?;
        let source = pass.read(ndim)?;
        let out = pass.take_write(0)?;

        for (index, cell) in extents.iter_cells().enumerate() {
            // Sample position of this cell in the shared cell-centre frame.
            let pos = [
                cell[0] as f32 + field_offset[0],
                cell[1] as f32 + field_offset[1],
                cell[2] as f32 + field_offset[2],
            ];

            // Velocity at that position; each component lives in its
            // own (possibly staggered) index frame.
            let mut displacement = [0.0f32; 3];
            for &axis in extents.axes() {
                let k = axis.index();
                let mut query = pos;
                if staggered {
                    // Face value at index i sits at position i - 1/2.
                    query[k] += 0.5;
                }
                displacement[k] = sample_clamped(velocity[k], &extents, query) * dt * one_over_dx;
            }

            // Backtrace in the advected field's own index frame.
            let upstream = [
                cell[0] as f32 - displacement[0],
                cell[1] as f32 - displacement[1],
                cell[2] as f32 - displacement[2],
            ];
            out[index] = sample_clamped(source, &extents, upstream);
        }
        Ok(())
    }
}
