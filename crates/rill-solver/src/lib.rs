//! The Rill solver pipeline.
//!
//! [`FluidSolver`] orchestrates the staged sequence of grid operators
//! that advances a [`FluidState`](rill_field::FluidState) one frame:
//! advection, viscous diffusion, divergence, the pressure Poisson
//! solve, and pressure projection, with impulse application, grid
//! scrolling, and boundary synthesis available as caller-invoked
//! operations. External observers attach through the stage-indexed
//! [`HookRegistry`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hooks;
pub mod jacobi;
pub mod solver;
pub mod stages;

pub use error::StageError;
pub use hooks::{HookFn, HookRegistry, HookStage};
pub use jacobi::{JacobiIterator, JacobiSource};
pub use solver::FluidSolver;
