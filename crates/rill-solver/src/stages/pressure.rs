//! Pressure Poisson solve stage.

use crate::jacobi::{JacobiIterator, JacobiSource};
use rill_compute::{ComputeContext, GridOperator, Uniforms};
use rill_core::{BoundaryTag, OperatorError};
use rill_field::FluidState;
use rill_grid::GridExtents;
use rill_kernels::JacobiSweepKernel;

/// Solves the discrete Poisson equation for pressure from the
/// divergence field, with `α = −dx²·ρ` and `β = 2·ndim` under the
/// Neumann boundary condition.
///
/// Cold start (the reference behaviour) zeroes the pressure buffer
/// before iterating; warm start reuses the previous frame's converged
/// pressure as the initial guess, trading first-iteration staleness
/// for faster convergence. The pressure buffer swaps after the solve.
pub struct PressureStage {
    operator: Box<dyn GridOperator>,
    iterator: JacobiIterator,
}

impl PressureStage {
    /// Stage with the CPU reference sweep kernel.
    pub fn new(extents: GridExtents) -> Self {
        Self::with_operator(extents, Box::new(JacobiSweepKernel))
    }

    /// Stage with a substituted sweep operator.
    pub fn with_operator(extents: GridExtents, operator: Box<dyn GridOperator>) -> Self {
        Self {
            operator,
            iterator: JacobiIterator::new(extents),
        }
    }

    /// Run the solve and swap the pressure buffer.
    pub fn compute(
        &mut self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
        iterations: u32,
        warm_start: bool,
    ) -> Result<(), OperatorError> {
        let extents = *state.extents();
        let dx = state.params.cell_size;
        let alpha = -dx * dx * state.physics.density;
        let beta = 2.0 * extents.ndim() as f32;

        let mut uniforms = Uniforms::new();
        uniforms
            .set_f32("alpha", alpha)
            .set_f32("one_over_beta", 1.0 / beta)
            .set_f32("boundary_coeff", BoundaryTag::Neumann.coefficient());

        if !warm_start {
            state.pressure_mut().clear();
        }

        let (pressure, divergence) = state.pressure_solve_views();
        self.iterator.init(iterations);
        for _ in 0..iterations {
            ctx.barrier();
            self.iterator.step(
                ctx,
                self.operator.as_ref(),
                &uniforms,
                JacobiSource::External(divergence.as_slice()),
                pressure,
            )?;
        }
        self.iterator.reset();
        pressure.swap();
        Ok(())
    }
}
