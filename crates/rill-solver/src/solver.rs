//! The pipeline driver.

use crate::error::StageError;
use crate::hooks::{HookFn, HookRegistry, HookStage};
use crate::stages::{
    AdvectionStage, BoundarySynthesisStage, DiffusionStage, DivergenceStage, ForcesStage,
    PressureStage, ProjectionStage, ScrollStage,
};
use rill_compute::ComputeContext;
use rill_core::{HookId, Impulse};
use rill_field::{DivergenceTarget, FluidState};
use rill_grid::GridExtents;

/// Orchestrates the staged sequence of grid operators that advances a
/// [`FluidState`] one frame.
///
/// `advance()` executes the enabled stages in the fixed order
/// advection → diffusion → divergence → pressure → projection,
/// issuing a visibility barrier before each stage and firing checkpoint
/// hooks between them. The order is part of the numerical
/// operator-splitting scheme, not just a data-hazard constraint.
/// Impulse application, grid scrolling, and boundary synthesis are
/// caller-invoked between frames (or between diffusion and divergence,
/// as the interactive front end does for impulses).
///
/// A disabled stage is skipped, but its checkpoint hooks still fire in
/// sequence, so observers keep a stable view of the frame. Tunables
/// are plain public fields, set directly at runtime.
///
/// One solver drives states of the grid shape it was built for; the
/// relaxation scratch grids are allocated once at construction.
pub struct FluidSolver {
    /// Sweep count for the viscous diffusion solve.
    pub diffusion_iterations: u32,
    /// Sweep count for the pressure Poisson solve.
    pub pressure_iterations: u32,
    /// Seed the pressure solve from the previous frame instead of
    /// zero. Off by default, matching the reference behaviour.
    pub warm_start_pressure: bool,
    /// Recompute divergence into the check field after projection.
    pub verify_divergence: bool,
    /// Enable the advection stage.
    pub run_advection: bool,
    /// Enable the diffusion stage.
    pub run_diffusion: bool,
    /// Enable the divergence stage.
    pub run_divergence: bool,
    /// Enable the pressure stage.
    pub run_pressure: bool,
    /// Enable the projection stage.
    pub run_projection: bool,
    hooks: HookRegistry,
    advection: AdvectionStage,
    diffusion: DiffusionStage,
    forces: ForcesStage,
    divergence: DivergenceStage,
    pressure: PressureStage,
    projection: ProjectionStage,
    scroll: ScrollStage,
    boundary_synthesis: BoundarySynthesisStage,
}

impl FluidSolver {
    /// Build a solver (and its stages) for one grid shape.
    pub fn new(extents: GridExtents) -> Self {
        Self {
            diffusion_iterations: 100,
            pressure_iterations: 100,
            warm_start_pressure: false,
            verify_divergence: false,
            run_advection: true,
            run_diffusion: true,
            run_divergence: true,
            run_pressure: true,
            run_projection: true,
            hooks: HookRegistry::new(),
            advection: AdvectionStage::new(),
            diffusion: DiffusionStage::new(extents),
            forces: ForcesStage::new(),
            divergence: DivergenceStage::new(),
            pressure: PressureStage::new(extents),
            projection: ProjectionStage::new(),
            scroll: ScrollStage::new(),
            boundary_synthesis: BoundarySynthesisStage::new(),
        }
    }

    // ── Hooks ──────────────────────────────────────────────────────

    /// Register an observer callback at a checkpoint stage.
    pub fn register_hook(&mut self, hook: HookFn, stage: HookStage) -> HookId {
        self.hooks.register(hook, stage)
    }

    /// Reassign a hook to a different checkpoint. `false` for an
    /// unknown identifier.
    pub fn set_hook_stage(&mut self, id: HookId, stage: HookStage) -> bool {
        self.hooks.set_stage(id, stage)
    }

    /// Remove a hook. Idempotent.
    pub fn remove_hook(&mut self, id: HookId) {
        self.hooks.remove(id)
    }

    // ── Caller-invoked operations ──────────────────────────────────

    /// Apply an impulse to the velocity (and, unless `velocity_only`,
    /// ink) fields in place.
    pub fn apply_forces(
        &mut self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
        impulse: &Impulse,
        velocity_only: bool,
        dt: f32,
    ) -> Result<(), StageError> {
        ctx.barrier();
        self.forces
            .compute(ctx, state, impulse, velocity_only, dt)
            .map_err(|e| StageError::new("forces", e))
    }

    /// Circularly shift every field by `offset` cells per axis.
    pub fn scroll_grid(
        &mut self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
        offset: [i32; 3],
    ) -> Result<(), StageError> {
        ctx.barrier();
        self.scroll
            .compute(ctx, state, offset)
            .map_err(|e| StageError::new("scroll", e))
    }

    /// Reclassify boundary cells and stamp the exterior velocity.
    pub fn synthesize_boundaries(
        &mut self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
    ) -> Result<(), StageError> {
        ctx.barrier();
        self.boundary_synthesis
            .compute(ctx, state)
            .map_err(|e| StageError::new("boundary_synthesis", e))
    }

    // ── The frame ──────────────────────────────────────────────────

    /// Advance the simulation one frame.
    pub fn advance(
        &mut self,
        ctx: &mut ComputeContext,
        state: &mut FluidState,
        dt: f32,
    ) -> Result<(), StageError> {
        self.hooks.fire(HookStage::Start, state, dt);

        if self.run_advection {
            ctx.barrier();
            self.advection
                .compute(ctx, state, dt)
                .map_err(|e| StageError::new("advection", e))?;
        }
        self.hooks.fire(HookStage::AfterAdvection, state, dt);

        if self.run_diffusion {
            ctx.barrier();
            self.diffusion
                .compute(ctx, state, dt, self.diffusion_iterations)
                .map_err(|e| StageError::new("diffusion", e))?;
        }
        self.hooks.fire(HookStage::AfterDiffusion, state, dt);

        if self.run_divergence {
            ctx.barrier();
            self.divergence
                .compute(ctx, state, DivergenceTarget::Main)
                .map_err(|e| StageError::new("divergence", e))?;
        }
        self.hooks.fire(HookStage::AfterDivergence, state, dt);

        if self.run_pressure {
            ctx.barrier();
            self.pressure
                .compute(ctx, state, self.pressure_iterations, self.warm_start_pressure)
                .map_err(|e| StageError::new("pressure", e))?;
        }
        self.hooks.fire(HookStage::AfterPressure, state, dt);

        if self.run_projection {
            ctx.barrier();
            self.projection
                .compute(ctx, state)
                .map_err(|e| StageError::new("projection", e))?;
        }
        if self.verify_divergence {
            ctx.barrier();
            self.divergence
                .compute(ctx, state, DivergenceTarget::Check)
                .map_err(|e| StageError::new("divergence_check", e))?;
        }
        self.hooks.fire(HookStage::AfterProjection, state, dt);
        Ok(())
    }
}
