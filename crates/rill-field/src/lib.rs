//! Field storage for the Rill fluid solver.
//!
//! [`ScalarGrid`] is one flat f32 value per cell. [`FieldBuffer`] pairs
//! two same-shaped grids into a ping-pong double buffer. [`FluidState`]
//! owns the full set of named fields a simulation advances each frame.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod grid;
pub mod physics;
pub mod state;

pub use buffer::FieldBuffer;
pub use grid::ScalarGrid;
pub use physics::PhysicalProperties;
pub use state::{AdvectedField, DivergenceTarget, FluidState};
