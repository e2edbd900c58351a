//! Velocity divergence.

use crate::stencil::{axis_neighbour, axis_neighbour_clamped};
use rill_compute::{GridOperator, GridPass};
use rill_core::OperatorError;
use smallvec::SmallVec;

/// Compute `div(v)` into an unbuffered scalar field.
///
/// Collocated layout: central differences,
/// `Σ (v[+1] − v[−1]) / (2·dx)` with clamped edge reads.
/// Staggered layout: compact face differences,
/// `Σ (v[+1] − v[0]) / dx`, where the face beyond the far wall is
/// zero (no penetration).
///
/// Read-only with respect to velocity; the write fully overwrites
/// every divergence cell, which is why the divergence field needs no
/// double buffer.
///
/// Uniforms: `one_over_dx` (f32), `staggered` (i32).
/// Reads: slots `0..ndim` = velocity components.
/// Writes: slot 0 = divergence.
#[derive(Clone, Copy, Debug, Default)]
pub struct DivergenceKernel;

impl GridOperator for DivergenceKernel {
    fn name(&self) -> &str {
        "divergence"
    }

    fn execute(&self, pass: &mut GridPass<'_>) -> Result<(), OperatorError> {
        let one_over_dx = pass.uniforms().f32("one_over_dx")?;
        let staggered = pass.uniforms().i32("staggered")? != 0;

        let extents = *pass.extents();
        let ndim = extents.ndim();
        let velocity: SmallVec<[&[f32]; 3]> =
            (0..ndim).map(|slot| pass.read(slot)).collect::<Result<_, _>>()?;
        let out = pass.take_write(0)?;

        for (index, cell) in extents.iter_cells().enumerate() {
            let mut div = 0.0f32;
            for &axis in extents.axes() {
                let v = velocity[axis.index()];
                if staggered {
                    let far = axis_neighbour(&extents, cell, axis, 1)
                        .map(|n| v[n])
                        .unwrap_or(0.0);
                    div += (far - v[index]) * one_over_dx;
                } else {
                    let fwd = v[axis_neighbour_clamped(&extents, cell, axis, 1)];
                    let bwd = v[axis_neighbour_clamped(&extents, cell, axis, -1)];
                    div += (fwd - bwd) * 0.5 * one_over_dx;
                }
            }
            out[index] = div;
        }
        Ok(())
    }
}
