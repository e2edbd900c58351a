//! Grid parameters: extents plus physical cell size.

use crate::extents::GridExtents;
use rill_core::SetupError;

/// Extents plus the physical size of one cell, in metres.
///
/// The cell size is runtime-mutable (the control layer exposes it as a
/// slider); extents are fixed for the lifetime of a simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParameters {
    /// Per-axis cell counts.
    pub extents: GridExtents,
    /// Physical edge length of one cell, in metres.
    pub cell_size: f32,
}

impl GridParameters {
    /// Create grid parameters, validating the cell size.
    pub fn new(extents: GridExtents, cell_size: f32) -> Result<Self, SetupError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(SetupError::InvalidCellSize { value: cell_size });
        }
        Ok(Self { extents, cell_size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_cell_sizes() {
        let e = GridExtents::new_2d(8, 8).unwrap();
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                GridParameters::new(e, bad),
                Err(SetupError::InvalidCellSize { .. })
            ));
        }
    }

    #[test]
    fn accepts_positive_cell_size() {
        let e = GridExtents::new_2d(8, 8).unwrap();
        let p = GridParameters::new(e, 0.8).unwrap();
        assert_eq!(p.cell_size, 0.8);
    }
}
