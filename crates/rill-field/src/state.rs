//! The full set of named fields one simulation advances each frame.

use crate::buffer::FieldBuffer;
use crate::grid::ScalarGrid;
use crate::physics::PhysicalProperties;
use rill_core::{Axis, FieldSelector, GridLayout, Stagger};
use rill_grid::{GridExtents, GridParameters};
use smallvec::SmallVec;

/// A field transported by the advection stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvectedField {
    /// The velocity component along an axis.
    Velocity(Axis),
    /// The passively advected ink density.
    Ink,
}

/// Which unbuffered divergence field a divergence pass writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivergenceTarget {
    /// The forcing term for the pressure solve.
    Main,
    /// The post-projection verification recomputation.
    Check,
}

/// Everything a simulation owns: per-axis velocity, pressure, ink,
/// divergence scratch fields, and the boundary classification.
///
/// Velocity, pressure, and ink are double-buffered because the stages
/// that write them are stencil passes over their previous values. The
/// divergence fields are unbuffered: every stage that writes them
/// fully overwrites every cell, so there is no read/write hazard to
/// protect against.
///
/// Exactly one stage holds write access to a field at a time, enforced
/// by program order; callers must not mutate the state while
/// `advance()` is executing.
pub struct FluidState {
    /// Grid extents and physical cell size.
    pub params: GridParameters,
    /// Fluid density and viscosity.
    pub physics: PhysicalProperties,
    /// Ambient velocity stamped into wall cells by boundary synthesis.
    pub exterior_velocity: [f32; 3],
    layout: GridLayout,
    velocity: Vec<FieldBuffer>,
    pressure: FieldBuffer,
    ink: FieldBuffer,
    divergence: ScalarGrid,
    divergence_check: ScalarGrid,
    boundaries: ScalarGrid,
}

impl FluidState {
    /// Allocate all fields for a simulation with the given grid,
    /// physical properties, and velocity layout.
    pub fn new(params: GridParameters, physics: PhysicalProperties, layout: GridLayout) -> Self {
        let extents = params.extents;
        let velocity = extents
            .axes()
            .iter()
            .map(|_| FieldBuffer::new(extents))
            .collect();
        Self {
            params,
            physics,
            exterior_velocity: [0.0; 3],
            layout,
            velocity,
            pressure: FieldBuffer::new(extents),
            ink: FieldBuffer::new(extents),
            divergence: ScalarGrid::new(extents),
            divergence_check: ScalarGrid::new(extents),
            boundaries: ScalarGrid::new(extents),
        }
    }

    /// Grid extents.
    pub fn extents(&self) -> &GridExtents {
        &self.params.extents
    }

    /// Logical dimensionality: 2 or 3.
    pub fn ndim(&self) -> usize {
        self.params.extents.ndim()
    }

    /// Velocity layout of this simulation.
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Stagger pattern of the velocity component along `axis`.
    pub fn velocity_stagger(&self, axis: Axis) -> Stagger {
        self.layout.velocity_stagger(axis)
    }

    /// Velocity component along `axis`.
    ///
    /// Panics if `axis` is Z on a 2D state; the set of velocity
    /// components is fixed by the grid dimensionality.
    pub fn velocity(&self, axis: Axis) -> &FieldBuffer {
        self.velocity
            .get(axis.index())
            .unwrap_or_else(|| panic!("no velocity {axis} on a {}d grid", self.ndim()))
    }

    /// Mutable velocity component along `axis`. Panics like
    /// [`FluidState::velocity`].
    pub fn velocity_mut(&mut self, axis: Axis) -> &mut FieldBuffer {
        let ndim = self.ndim();
        self.velocity
            .get_mut(axis.index())
            .unwrap_or_else(|| panic!("no velocity {axis} on a {ndim}d grid"))
    }

    /// Pressure field.
    pub fn pressure(&self) -> &FieldBuffer {
        &self.pressure
    }

    /// Mutable pressure field.
    pub fn pressure_mut(&mut self) -> &mut FieldBuffer {
        &mut self.pressure
    }

    /// Ink density field.
    pub fn ink(&self) -> &FieldBuffer {
        &self.ink
    }

    /// Mutable ink density field.
    pub fn ink_mut(&mut self) -> &mut FieldBuffer {
        &mut self.ink
    }

    /// Unbuffered divergence field.
    pub fn divergence(&self) -> &ScalarGrid {
        &self.divergence
    }

    /// Mutable divergence field.
    pub fn divergence_mut(&mut self) -> &mut ScalarGrid {
        &mut self.divergence
    }

    /// Unbuffered post-projection divergence recomputation.
    pub fn divergence_check(&self) -> &ScalarGrid {
        &self.divergence_check
    }

    /// Mutable divergence-check field.
    pub fn divergence_check_mut(&mut self) -> &mut ScalarGrid {
        &mut self.divergence_check
    }

    /// Boundary classification codes (see [`rill_core::CellClass`]).
    pub fn boundaries(&self) -> &ScalarGrid {
        &self.boundaries
    }

    /// Mutable boundary classification.
    pub fn boundaries_mut(&mut self) -> &mut ScalarGrid {
        &mut self.boundaries
    }

    // ── Stage views ────────────────────────────────────────────────
    //
    // Split borrows over disjoint fields, so each stage can hold its
    // read and write bindings simultaneously. Exactly one stage uses
    // each view at a time, enforced by program order in the driver.

    /// Advection bindings for one target field: every velocity input
    /// (in axis order), the target's previous values, and the target's
    /// output buffer.
    pub fn advection_views(
        &mut self,
        target: AdvectedField,
    ) -> (SmallVec<[&ScalarGrid; 3]>, &ScalarGrid, &mut ScalarGrid) {
        match target {
            AdvectedField::Velocity(axis) => {
                let ndim = self.ndim();
                if axis.index() >= ndim {
                    panic!("no velocity {axis} on a {ndim}d grid");
                }
                let (before, rest) = self.velocity.split_at_mut(axis.index());
                let (target_buffer, after) = rest.split_first_mut().expect("axis in range");
                let (source, output) = target_buffer.split_mut();
                let mut inputs: SmallVec<[&ScalarGrid; 3]> =
                    before.iter().map(|b| b.input()).collect();
                inputs.push(source);
                inputs.extend(after.iter().map(|b| b.input()));
                (inputs, source, output)
            }
            AdvectedField::Ink => {
                let inputs = self.velocity.iter().map(|b| b.input()).collect();
                let (source, output) = self.ink.split_mut();
                (inputs, source, output)
            }
        }
    }

    /// Force-application bindings: every velocity input grid mutably
    /// (the splat updates them in place), plus the ink input grid.
    pub fn force_views(&mut self) -> (SmallVec<[&mut ScalarGrid; 3]>, &mut ScalarGrid) {
        let velocity = self.velocity.iter_mut().map(|b| b.input_mut()).collect();
        (velocity, self.ink.input_mut())
    }

    /// Divergence bindings: every velocity input, plus the requested
    /// unbuffered divergence field for writing.
    pub fn divergence_views(
        &mut self,
        target: DivergenceTarget,
    ) -> (SmallVec<[&ScalarGrid; 3]>, &mut ScalarGrid) {
        let velocity = self.velocity.iter().map(|b| b.input()).collect();
        let out = match target {
            DivergenceTarget::Main => &mut self.divergence,
            DivergenceTarget::Check => &mut self.divergence_check,
        };
        (velocity, out)
    }

    /// Pressure-solve bindings: the pressure double buffer mutably,
    /// plus the divergence source term.
    pub fn pressure_solve_views(&mut self) -> (&mut FieldBuffer, &ScalarGrid) {
        (&mut self.pressure, &self.divergence)
    }

    /// Projection bindings: every velocity input grid mutably, plus
    /// the pressure input.
    pub fn projection_views(&mut self) -> (SmallVec<[&mut ScalarGrid; 3]>, &ScalarGrid) {
        let velocity = self.velocity.iter_mut().map(|b| b.input_mut()).collect();
        (velocity, self.pressure.input())
    }

    /// Boundary-synthesis bindings: the classification grid, plus
    /// every velocity input grid mutably.
    pub fn boundary_views(&mut self) -> (&mut ScalarGrid, SmallVec<[&mut ScalarGrid; 3]>) {
        let velocity = self.velocity.iter_mut().map(|b| b.input_mut()).collect();
        (&mut self.boundaries, velocity)
    }

    /// Current input view of a field, by name. The render/debug layer
    /// reads fields through this.
    ///
    /// Panics when selecting a velocity axis the state does not carry;
    /// the selectable set is fixed, so that is a programmer error.
    pub fn field(&self, selector: FieldSelector) -> &ScalarGrid {
        match selector {
            FieldSelector::Velocity(axis) => self.velocity(axis).input(),
            FieldSelector::Pressure => self.pressure.input(),
            FieldSelector::Ink => self.ink.input(),
            FieldSelector::Divergence => &self.divergence,
            FieldSelector::DivergenceCheck => &self.divergence_check,
            FieldSelector::Boundaries => &self.boundaries,
        }
    }

    /// All double-buffered fields, for whole-state passes (grid
    /// scrolling). Velocity axes first, then pressure, then ink.
    pub fn buffers_mut(&mut self) -> impl Iterator<Item = &mut FieldBuffer> {
        self.velocity
            .iter_mut()
            .chain([&mut self.pressure, &mut self.ink])
    }

    /// All unbuffered fields, in a fixed order.
    pub fn unbuffered_mut(&mut self) -> impl Iterator<Item = &mut ScalarGrid> {
        [
            &mut self.divergence,
            &mut self.divergence_check,
            &mut self.boundaries,
        ]
        .into_iter()
    }

    /// Clear every owned field and restore default buffer orientation.
    pub fn reset(&mut self) {
        for buffer in self.velocity.iter_mut() {
            buffer.clear();
        }
        self.pressure.clear();
        self.ink.clear();
        self.divergence.clear();
        self.divergence_check.clear();
        self.boundaries.clear();
    }
}
