//! Implicit viscous diffusion stage.

use crate::jacobi::{JacobiIterator, JacobiSource};
use rill_compute::{ComputeContext, GridOperator, Uniforms};
use rill_core::{BoundaryTag, OperatorError};
use rill_field::FluidState;
use rill_grid::GridExtents;
use rill_kernels::JacobiSweepKernel;

/// Diffuses each velocity component independently through the
/// relaxation solver, with `α = dx²/(ν·dt)` and `β = 2·ndim + α`
/// under the no-slip boundary condition.
///
/// Each axis has its own [`JacobiIterator`] so the axes interleave
/// sweep by sweep: one shared barrier per iteration serves every axis,
/// instead of each axis paying its own full barrier cadence.
///
/// A non-positive viscosity (or timestep) makes the implicit solve the
/// identity, so the stage returns without touching the buffers.
pub struct DiffusionStage {
    operator: Box<dyn GridOperator>,
    iterators: Vec<JacobiIterator>,
}

impl DiffusionStage {
    /// Stage with the CPU reference sweep kernel and one iterator per
    /// grid axis.
    pub fn new(extents: GridExtents) -> Self {
        Self::with_operator(extents, Box::new(JacobiSweepKernel))
    }

    /// Stage with a substituted sweep operator.
    pub fn with_operator(extents: GridExtents, operator: Box<dyn GridOperator>) -> Self {
        let iterators = extents
            .axes()
            .iter()
            .map(|_| JacobiIterator::new(extents))
            .collect();
        Self { operator, iterators }
    }

    /// Run `iterations` interleaved sweeps per axis, then swap each
    /// velocity buffer.
    pub fn compute(
        &mut self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
        dt: f32,
        iterations: u32,
    ) -> Result<(), OperatorError> {
        let viscosity = state.physics.viscosity;
        if viscosity <= 0.0 || dt <= 0.0 {
            return Ok(());
        }

        let extents = *state.extents();
        let dx = state.params.cell_size;
        let alpha = dx * dx / (viscosity * dt);
        let beta = 2.0 * extents.ndim() as f32 + alpha;

        let mut uniforms = Uniforms::new();
        uniforms
            .set_f32("alpha", alpha)
            .set_f32("one_over_beta", 1.0 / beta)
            .set_f32("boundary_coeff", BoundaryTag::NoSlip.coefficient());

        for iterator in &mut self.iterators {
            iterator.init(iterations);
        }

        for _ in 0..iterations {
            ctx.barrier();
            for (k, &axis) in extents.axes().iter().enumerate() {
                self.iterators[k].step(
                    ctx,
                    self.operator.as_ref(),
                    &uniforms,
                    JacobiSource::FieldInput,
                    state.velocity_mut(axis),
                )?;
            }
        }

        for iterator in &mut self.iterators {
            iterator.reset();
        }
        for &axis in extents.axes() {
            state.velocity_mut(axis).swap();
        }
        Ok(())
    }
}
