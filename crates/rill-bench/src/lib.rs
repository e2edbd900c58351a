//! Benchmark profiles for the Rill fluid solver.
//!
//! Provides pre-built state/solver pairs so benchmarks and examples
//! share one configuration:
//!
//! - [`reference_profile`]: 64×64 staggered grid with the interactive
//!   front end's iteration counts scaled down for per-frame timing
//! - [`stress_profile`]: 256×256 grid at the same settings

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rill_core::GridLayout;
use rill_field::{FluidState, PhysicalProperties};
use rill_grid::{GridExtents, GridParameters};
use rill_solver::FluidSolver;

/// Build a reference profile: 64×64 grid (4K cells), 20 sweeps per
/// solve.
pub fn reference_profile() -> (FluidState, FluidSolver) {
    profile(64, 20)
}

/// Build a stress profile: 256×256 grid (64K cells), 20 sweeps per
/// solve.
pub fn stress_profile() -> (FluidState, FluidSolver) {
    profile(256, 20)
}

fn profile(n: u32, sweeps: u32) -> (FluidState, FluidSolver) {
    let extents = GridExtents::new_2d(n, n).unwrap();
    let params = GridParameters::new(extents, 0.8).unwrap();
    let state = FluidState::new(
        params,
        PhysicalProperties::default(),
        GridLayout::Staggered,
    );
    let mut solver = FluidSolver::new(extents);
    solver.diffusion_iterations = sweeps;
    solver.pressure_iterations = sweeps;
    (state, solver)
}
