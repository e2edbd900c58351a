//! Rill: a real-time grid-based incompressible fluid solver.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Rill sub-crates. For most users, adding `rill` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rill::prelude::*;
//!
//! // A 16×16 staggered grid of 1 m cells with water-like physics.
//! let extents = GridExtents::new_2d(16, 16).unwrap();
//! let params = GridParameters::new(extents, 1.0).unwrap();
//! let mut state = FluidState::new(
//!     params,
//!     PhysicalProperties::default(),
//!     GridLayout::Staggered,
//! );
//! let mut solver = FluidSolver::new(extents);
//! solver.diffusion_iterations = 20;
//! solver.pressure_iterations = 20;
//!
//! // Stir the fluid and advance one frame.
//! let mut ctx = ComputeContext::new();
//! let impulse = Impulse::at_2d(8.0, 8.0)
//!     .with_magnitude([2.0, 0.0, 0.0])
//!     .with_radius(3.0)
//!     .with_ink(4.0);
//! solver
//!     .apply_forces(&mut ctx, &mut state, &impulse, false, 0.016)
//!     .unwrap();
//! solver.advance(&mut ctx, &mut state, 0.016).unwrap();
//!
//! // The render layer reads fields by name.
//! let ink = state.field(FieldSelector::Ink);
//! assert!(ink.as_slice().iter().any(|&v| v > 0.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rill-core` | Axes, tags, impulses, IDs, errors |
//! | [`grid`] | `rill-grid` | Extents, indexing, interpolation |
//! | [`field`] | `rill-field` | Scalar grids, double buffers, state |
//! | [`compute`] | `rill-compute` | Context, passes, `GridOperator` |
//! | [`kernels`] | `rill-kernels` | CPU reference kernels |
//! | [`solver`] | `rill-solver` | Stages, relaxation driver, hooks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use rill_compute as compute;
pub use rill_core as types;
pub use rill_field as field;
pub use rill_grid as grid;
pub use rill_kernels as kernels;
pub use rill_solver as solver;

/// The common imports for driving a simulation.
pub mod prelude {
    pub use rill_compute::ComputeContext;
    pub use rill_core::{
        Axis, BoundaryTag, CellClass, FieldSelector, GridLayout, HookId, Impulse, Stagger,
    };
    pub use rill_field::{FieldBuffer, FluidState, PhysicalProperties, ScalarGrid};
    pub use rill_grid::{GridExtents, GridParameters};
    pub use rill_solver::{FluidSolver, HookStage};
}
