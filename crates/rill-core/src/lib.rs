//! Core types for the Rill fluid solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace:
//! axes, boundary and stagger tags, field selectors, hook identifiers,
//! impulses, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod impulse;
pub mod tags;

pub use error::{OperatorError, SetupError};
pub use id::{Axis, FieldSelector, HookId};
pub use impulse::Impulse;
pub use tags::{BoundaryTag, CellClass, GridLayout, Stagger};
