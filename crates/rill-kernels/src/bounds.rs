//! Boundary-cell classification and exterior velocity stamping.

use rill_compute::{GridOperator, GridPass};
use rill_core::{CellClass, OperatorError};
use smallvec::SmallVec;

/// (Re)classify boundary cells and impose the exterior velocity.
///
/// The outermost cell ring along each logical axis becomes
/// [`CellClass::Wall`]; everything else is [`CellClass::Fluid`]. Wall
/// cells additionally have the configured exterior/ambient velocity
/// stamped into every velocity component, so a moving frame of
/// reference drags the fluid at its rim. The classification is
/// independent of the static per-field boundary tags used by the
/// relaxation and advection stencils.
///
/// Uniforms: `exterior_velocity` (vec3).
/// Writes: slot 0 = classification field, slots `1..=ndim` = velocity
/// components (in place).
#[derive(Clone, Copy, Debug, Default)]
pub struct SynthesizeBoundsKernel;

impl GridOperator for SynthesizeBoundsKernel {
    fn name(&self) -> &str {
        "synthesize_bounds"
    }

    fn execute(&self, pass: &mut GridPass<'_>) -> Result<(), OperatorError> {
        let exterior = pass.uniforms().vec3("exterior_velocity")?;

        let extents = *pass.extents();
        let ndim = extents.ndim();
        let classes = pass.take_write(0)?;
        let mut velocity: SmallVec<[&mut [f32]; 3]> = (1..=ndim)
            .map(|slot| pass.take_write(slot))
            .collect::<Result<_, _>>()?;

        for (index, cell) in extents.iter_cells().enumerate() {
            let on_rim = extents.axes().iter().any(|&axis| {
                let coord = cell[axis.index()];
                coord == 0 || coord == extents.len(axis) - 1
            });
            if on_rim {
                classes[index] = CellClass::Wall.code();
                for (k, axis_field) in velocity.iter_mut().enumerate() {
                    axis_field[index] = exterior[k];
                }
            } else {
                classes[index] = CellClass::Fluid.code();
            }
        }
        Ok(())
    }
}
