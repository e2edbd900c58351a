//! Test utilities and mock operators for Rill development.
//!
//! Provides a counting [`GridOperator`] for asserting dispatch
//! behaviour, and fixtures for building small simulation states.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rill_compute::{GridOperator, GridPass};
use rill_core::{GridLayout, OperatorError};
use rill_field::{FluidState, PhysicalProperties};
use rill_grid::{GridExtents, GridParameters};

/// An operator that counts executions, optionally delegating to an
/// inner operator for the actual arithmetic.
///
/// Constructed with [`CountingOperator::new`], which hands back a
/// shared counter the test keeps after the operator is boxed into a
/// stage.
pub struct CountingOperator {
    name: String,
    count: Arc<AtomicU64>,
    inner: Option<Box<dyn GridOperator>>,
}

impl CountingOperator {
    /// A counting no-op operator.
    pub fn new(name: impl Into<String>) -> (Self, Arc<AtomicU64>) {
        let count = Arc::new(AtomicU64::new(0));
        (
            Self {
                name: name.into(),
                count: Arc::clone(&count),
                inner: None,
            },
            count,
        )
    }

    /// A counting operator that forwards each pass to `inner`.
    pub fn wrapping(
        name: impl Into<String>,
        inner: Box<dyn GridOperator>,
    ) -> (Self, Arc<AtomicU64>) {
        let count = Arc::new(AtomicU64::new(0));
        (
            Self {
                name: name.into(),
                count: Arc::clone(&count),
                inner: Some(inner),
            },
            count,
        )
    }
}

impl GridOperator for CountingOperator {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, pass: &mut GridPass<'_>) -> Result<(), OperatorError> {
        self.count.fetch_add(1, Ordering::Relaxed);
        match &self.inner {
            Some(inner) => inner.execute(pass),
            None => Ok(()),
        }
    }
}

/// A square 2D state with unit cell size and default physics.
pub fn make_state_2d(n: u32, layout: GridLayout) -> FluidState {
    let extents = GridExtents::new_2d(n, n).unwrap();
    let params = GridParameters::new(extents, 1.0).unwrap();
    FluidState::new(params, PhysicalProperties::default(), layout)
}

/// A cubic 3D state with unit cell size and default physics.
pub fn make_state_3d(n: u32, layout: GridLayout) -> FluidState {
    let extents = GridExtents::new_3d(n, n, n).unwrap();
    let params = GridParameters::new(extents, 1.0).unwrap();
    FluidState::new(params, PhysicalProperties::default(), layout)
}

/// Largest absolute value in a slice.
pub fn max_abs(values: &[f32]) -> f32 {
    values.iter().fold(0.0f32, |acc, v| acc.max(v.abs()))
}
