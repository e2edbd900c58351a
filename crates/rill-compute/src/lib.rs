//! Compute dispatch abstraction for the Rill fluid solver.
//!
//! Stages do not run per-cell arithmetic themselves; they bind buffers
//! and uniforms into a [`GridPass`] and hand it to a [`GridOperator`]
//! through an explicit [`ComputeContext`]. The context is passed by
//! reference into every stage — there is no process-wide singleton —
//! and it owns the ordering barriers between dependent passes plus the
//! dispatch/barrier counters tests and telemetry read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod operator;
pub mod pass;
pub mod uniforms;

pub use context::{ComputeContext, DispatchRecord};
pub use operator::GridOperator;
pub use pass::GridPass;
pub use uniforms::{UniformValue, Uniforms};
