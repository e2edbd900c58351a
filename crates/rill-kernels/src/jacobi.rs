//! One Jacobi relaxation sweep.

use crate::stencil::axis_neighbour;
use rill_compute::{GridOperator, GridPass};
use rill_core::OperatorError;

/// One sweep of `x_out[c] = (Σ axis-neighbours x_in + α·src[c]) / β`.
///
/// The neighbour sum visits ±1 along each grid axis. An out-of-domain
/// neighbour resolves to `boundary_coeff × x_in[c]` — the coefficient
/// form of the no-slip (−1), Neumann (+1), and zero-Dirichlet (0)
/// boundary conditions.
///
/// Uniforms: `alpha` (f32), `one_over_beta` (f32),
/// `boundary_coeff` (f32).
/// Reads: slot 0 = source term, slot 1 = current iterate.
/// Writes: slot 0 = next iterate. Never aliases slot 1; the relaxation
/// driver guarantees the sweep reads and writes distinct storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct JacobiSweepKernel;

impl GridOperator for JacobiSweepKernel {
    fn name(&self) -> &str {
        "jacobi_sweep"
    }

    fn execute(&self, pass: &mut GridPass<'_>) -> Result<(), OperatorError> {
        let alpha = pass.uniforms().f32("alpha")?;
        let one_over_beta = pass.uniforms().f32("one_over_beta")?;
        let boundary_coeff = pass.uniforms().f32("boundary_coeff")?;

        let extents = *pass.extents();
        let source = pass.read(0)?;
        let field_in = pass.read(1)?;
        let field_out = pass.take_write(0)?;

        for (index, cell) in extents.iter_cells().enumerate() {
            let centre = field_in[index];
            let mut sum = 0.0f32;
            for &axis in extents.axes() {
                for delta in [-1, 1] {
                    sum += match axis_neighbour(&extents, cell, axis, delta) {
                        Some(n) => field_in[n],
                        None => boundary_coeff * centre,
                    };
                }
            }
            field_out[index] = (sum + alpha * source[index]) * one_over_beta;
        }
        Ok(())
    }
}
