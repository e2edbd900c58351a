//! CPU reference kernels for the Rill fluid solver.
//!
//! Each kernel is a [`GridOperator`](rill_compute::GridOperator)
//! implementing the per-cell arithmetic of one pipeline operator. The
//! stages in `rill-solver` construct these by default and remain
//! polymorphic over the trait, so alternative substrates (or counting
//! mocks) can be swapped in without touching stage code.
//!
//! Binding conventions are documented per kernel; every kernel indexes
//! buffers through the pass, which has already validated sizes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advect;
pub mod bounds;
pub mod divergence;
pub mod impulse;
pub mod jacobi;
pub mod project;
pub mod scroll;
mod stencil;

pub use advect::AdvectKernel;
pub use bounds::SynthesizeBoundsKernel;
pub use divergence::DivergenceKernel;
pub use impulse::ImpulseSplatKernel;
pub use jacobi::JacobiSweepKernel;
pub use project::ProjectKernel;
pub use scroll::ScrollKernel;
