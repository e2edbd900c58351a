//! Grid extents and flat row-major cell indexing.

use rill_core::{Axis, SetupError};

/// Per-axis cell counts of a uniform simulation grid.
///
/// A 2D grid is stored as a 3D grid whose third axis has exactly one
/// cell, so index arithmetic, sampling, and kernels are written once.
/// [`GridExtents::ndim`] still reports the logical dimensionality.
///
/// Cells are indexed row-major with X fastest:
/// `linear(x, y, z) = (z * ny + y) * nx + x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridExtents {
    nx: u32,
    ny: u32,
    nz: u32,
    ndim: usize,
}

impl GridExtents {
    /// Maximum cells per axis. Keeps linear indices and signed cell
    /// coordinates comfortably inside `i32`/`usize` arithmetic.
    pub const MAX_DIM: u32 = 1 << 16;

    /// Create 2D extents (`nz` fixed to 1).
    pub fn new_2d(nx: u32, ny: u32) -> Result<Self, SetupError> {
        Self::validated(nx, ny, 1, 2)
    }

    /// Create 3D extents.
    pub fn new_3d(nx: u32, ny: u32, nz: u32) -> Result<Self, SetupError> {
        Self::validated(nx, ny, nz, 3)
    }

    fn validated(nx: u32, ny: u32, nz: u32, ndim: usize) -> Result<Self, SetupError> {
        for (name, value) in [("x", nx), ("y", ny), ("z", nz)] {
            if value == 0 {
                return Err(SetupError::EmptyGrid);
            }
            if value > Self::MAX_DIM {
                return Err(SetupError::DimensionTooLarge {
                    axis: name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        Ok(Self { nx, ny, nz, ndim })
    }

    /// Logical dimensionality: 2 or 3.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Cell count along `axis` (1 for Z on a 2D grid).
    pub fn len(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
            Axis::Z => self.nz,
        }
    }

    /// Always false — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The axes of this grid, in order.
    pub fn axes(&self) -> &'static [Axis] {
        Axis::for_ndim(self.ndim)
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.nx as usize * self.ny as usize * self.nz as usize
    }

    /// Flat index of cell `(x, y, z)`. Coordinates must be in range.
    pub fn linear(&self, x: u32, y: u32, z: u32) -> usize {
        debug_assert!(x < self.nx && y < self.ny && z < self.nz);
        (z as usize * self.ny as usize + y as usize) * self.nx as usize + x as usize
    }

    /// Cell coordinates of a flat index.
    pub fn coords(&self, index: usize) -> [u32; 3] {
        debug_assert!(index < self.cell_count());
        let nx = self.nx as usize;
        let ny = self.ny as usize;
        let x = index % nx;
        let y = (index / nx) % ny;
        let z = index / (nx * ny);
        [x as u32, y as u32, z as u32]
    }

    /// Whether signed coordinates fall inside the grid.
    pub fn contains(&self, x: i64, y: i64, z: i64) -> bool {
        (0..self.nx as i64).contains(&x)
            && (0..self.ny as i64).contains(&y)
            && (0..self.nz as i64).contains(&z)
    }

    /// Iterate all cell coordinates in flat-index order.
    pub fn iter_cells(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        let (nx, ny, nz) = (self.nx, self.ny, self.nz);
        (0..nz).flat_map(move |z| (0..ny).flat_map(move |y| (0..nx).map(move |x| [x, y, z])))
    }
}
