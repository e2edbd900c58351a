//! Gaussian impulse splat: external forces and ink injection.

use rill_compute::{GridOperator, GridPass};
use rill_core::OperatorError;
use smallvec::SmallVec;

/// Add an impulse's force and ink around a point with smooth falloff.
///
/// Each affected cell gains `magnitude × exp(−d²/r)` on every velocity
/// axis and `ink_amount × dt × exp(−d²/r)` of ink, where `d` is the
/// distance from the sample position to the impulse centre. The smooth
/// falloff avoids the hard-edged ring a cutoff radius would leave.
/// This is a pure additive in-place update: the write bindings are the
/// fields' *input* buffers and nothing swaps afterwards.
///
/// Uniforms: `dt` (f32), `position` (vec3, grid cells, may be
/// fractional), `magnitude` (vec3), `one_over_radius` (f32),
/// `ink_amount` (f32, already zeroed by the stage for velocity-only
/// impulses), `staggered` (i32).
/// Writes: slots `0..ndim` = velocity components (in place), slot
/// `ndim` = ink density (in place).
#[derive(Clone, Copy, Debug, Default)]
pub struct ImpulseSplatKernel;

impl GridOperator for ImpulseSplatKernel {
    fn name(&self) -> &str {
        "impulse_splat"
    }

    fn execute(&self, pass: &mut GridPass<'_>) -> Result<(), OperatorError> {
        let dt = pass.uniforms().f32("dt")?;
        let position = pass.uniforms().vec3("position")?;
        let magnitude = pass.uniforms().vec3("magnitude")?;
        let one_over_radius = pass.uniforms().f32("one_over_radius")?;
        let ink_amount = pass.uniforms().f32("ink_amount")?;
        let staggered = pass.uniforms().i32("staggered")? != 0;

        let extents = *pass.extents();
        let ndim = extents.ndim();
        let mut velocity: SmallVec<[&mut [f32]; 3]> = (0..ndim)
            .map(|slot| pass.take_write(slot))
            .collect::<Result<_, _>>()?;
        let ink = pass.take_write(ndim)?;

        let falloff = |pos: [f32; 3]| {
            let dx = pos[0] - position[0];
            let dy = pos[1] - position[1];
            let dz = pos[2] - position[2];
            (-(dx * dx + dy * dy + dz * dz) * one_over_radius).exp()
        };

        for (index, cell) in extents.iter_cells().enumerate() {
            let centre = [cell[0] as f32, cell[1] as f32, cell[2] as f32];
            for (k, axis_field) in velocity.iter_mut().enumerate() {
                let mut pos = centre;
                if staggered {
                    pos[k] -= 0.5;
                }
                axis_field[index] += magnitude[k] * falloff(pos);
            }
            ink[index] += ink_amount * dt * falloff(centre);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_compute::{ComputeContext, Uniforms};
    use rill_grid::GridExtents;

    fn splat(
        extents: GridExtents,
        position: [f32; 3],
        magnitude: [f32; 3],
        radius: f32,
        ink_amount: f32,
        dt: f32,
    ) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
        let mut uniforms = Uniforms::new();
        uniforms
            .set_f32("dt", dt)
            .set_vec3("position", position)
            .set_vec3("magnitude", magnitude)
            .set_f32("one_over_radius", 1.0 / radius)
            .set_f32("ink_amount", ink_amount)
            .set_i32("staggered", 0);
        let n = extents.cell_count();
        let (mut vx, mut vy, mut ink) = (vec![0.0f32; n], vec![0.0f32; n], vec![0.0f32; n]);
        let mut pass = GridPass::new(
            extents,
            &uniforms,
            vec![],
            vec![vx.as_mut_slice(), vy.as_mut_slice(), ink.as_mut_slice()],
        )
        .unwrap();
        ComputeContext::new()
            .dispatch(&ImpulseSplatKernel, &mut pass)
            .unwrap();
        drop(pass);
        (vx, vy, ink)
    }

    #[test]
    fn splat_peaks_at_the_centre() {
        let e = GridExtents::new_2d(9, 9).unwrap();
        let (vx, _, ink) = splat(e, [4.0, 4.0, 0.0], [2.0, 0.0, 0.0], 2.0, 3.0, 0.5);

        let centre = e.linear(4, 4, 0);
        assert!((vx[centre] - 2.0).abs() < 1e-6);
        assert!((ink[centre] - 3.0 * 0.5).abs() < 1e-6);
        // Monotonically weaker away from the centre.
        assert!(vx[e.linear(5, 4, 0)] < vx[centre]);
        assert!(vx[e.linear(6, 4, 0)] < vx[e.linear(5, 4, 0)]);
    }

    #[test]
    fn far_cells_are_unchanged_to_tolerance() {
        let e = GridExtents::new_2d(33, 33).unwrap();
        let (vx, vy, ink) = splat(e, [16.0, 16.0, 0.0], [5.0, -5.0, 0.0], 2.0, 10.0, 1.0);

        // d² = 256 at 16 cells out, falloff = exp(−128) ≈ 0.
        for field in [&vx, &vy, &ink] {
            assert!(field[e.linear(0, 16, 0)].abs() < 1e-12);
            assert!(field[e.linear(32, 32, 0)].abs() < 1e-12);
        }
    }

    #[test]
    fn splat_is_additive() {
        let e = GridExtents::new_2d(5, 5).unwrap();
        let mut uniforms = Uniforms::new();
        uniforms
            .set_f32("dt", 1.0)
            .set_vec3("position", [2.0, 2.0, 0.0])
            .set_vec3("magnitude", [1.0, 0.0, 0.0])
            .set_f32("one_over_radius", 1.0)
            .set_f32("ink_amount", 0.0)
            .set_i32("staggered", 0);
        let n = e.cell_count();
        let mut vx = vec![10.0f32; n];
        let (mut vy, mut ink) = (vec![0.0f32; n], vec![0.0f32; n]);
        let mut pass = GridPass::new(
            e,
            &uniforms,
            vec![],
            vec![vx.as_mut_slice(), vy.as_mut_slice(), ink.as_mut_slice()],
        )
        .unwrap();
        ComputeContext::new()
            .dispatch(&ImpulseSplatKernel, &mut pass)
            .unwrap();
        drop(pass);

        assert!((vx[e.linear(2, 2, 0)] - 11.0).abs() < 1e-6);
        // Existing values elsewhere are preserved plus the tail.
        assert!(vx[e.linear(0, 0, 0)] >= 10.0);
    }
}
