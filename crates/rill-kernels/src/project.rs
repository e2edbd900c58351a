//! Pressure-gradient subtraction (projection).

use crate::stencil::axis_neighbour_clamped;
use rill_compute::{GridOperator, GridPass};
use rill_core::{Axis, OperatorError};

/// Subtract the pressure gradient from one velocity component in place.
///
/// Collocated layout: `v −= (p[+1] − p[−1]) / (2·dx)` with clamped
/// edge reads (clamping makes the edge gradient vanish, which is the
/// Neumann condition the pressure solve assumed).
/// Staggered layout: `v[i] −= (p[i] − p[i−1]) / dx` on interior faces;
/// the wall face at index 0 is left untouched, because the Neumann
/// ghost value equals the adjacent cell and the gradient across the
/// wall is zero.
///
/// In place, no swap — the update is elementwise in the component
/// being written (the stencil only reads pressure).
///
/// Uniforms: `one_over_dx` (f32), `staggered` (i32), `axis` (i32,
/// component index of the velocity field bound for writing).
/// Reads: slot 0 = pressure.
/// Writes: slot 0 = the velocity component (in place).
#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectKernel;

impl GridOperator for ProjectKernel {
    fn name(&self) -> &str {
        "project"
    }

    fn execute(&self, pass: &mut GridPass<'_>) -> Result<(), OperatorError> {
        let one_over_dx = pass.uniforms().f32("one_over_dx")?;
        let staggered = pass.uniforms().i32("staggered")? != 0;
        let axis = match pass.uniforms().i32("axis")? {
            0 => Axis::X,
            1 => Axis::Y,
            2 => Axis::Z,
            other => {
                return Err(OperatorError::ExecutionFailed {
                    reason: format!("axis uniform out of range: {other}"),
                })
            }
        };

        let extents = *pass.extents();
        let pressure = pass.read(0)?;
        let velocity = pass.take_write(0)?;

        for (index, cell) in extents.iter_cells().enumerate() {
            if staggered {
                if cell[axis.index()] == 0 {
                    continue;
                }
                let behind = axis_neighbour_clamped(&extents, cell, axis, -1);
                velocity[index] -= (pressure[index] - pressure[behind]) * one_over_dx;
            } else {
                let fwd = pressure[axis_neighbour_clamped(&extents, cell, axis, 1)];
                let bwd = pressure[axis_neighbour_clamped(&extents, cell, axis, -1)];
                velocity[index] -= (fwd - bwd) * 0.5 * one_over_dx;
            }
        }
        Ok(())
    }
}
