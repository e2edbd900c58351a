//! The pipeline stages.
//!
//! Each stage is a self-contained operator over the simulation state:
//! it binds the fields it needs into a pass, sets uniforms, dispatches
//! its grid operator through the compute context, and performs the
//! buffer swaps its contract requires. Stages own their operator boxed
//! behind [`GridOperator`](rill_compute::GridOperator), so tests and
//! alternative substrates can substitute the per-cell arithmetic.

mod advection;
mod bounds;
mod diffusion;
mod divergence;
mod forces;
mod pressure;
mod projection;
mod scroll;

pub use advection::AdvectionStage;
pub use bounds::BoundarySynthesisStage;
pub use diffusion::DiffusionStage;
pub use divergence::DivergenceStage;
pub use forces::ForcesStage;
pub use pressure::PressureStage;
pub use projection::ProjectionStage;
pub use scroll::ScrollStage;
