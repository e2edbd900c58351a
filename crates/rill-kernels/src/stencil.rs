//! Shared stencil helpers for the reference kernels.

use rill_core::Axis;
use rill_grid::{resolve_interior, GridExtents};

/// Flat index of the cell `delta` steps along `axis` from `cell`, or
/// `None` when it falls outside the grid. Callers substitute the
/// boundary-condition value for `None`.
pub(crate) fn axis_neighbour(
    extents: &GridExtents,
    cell: [u32; 3],
    axis: Axis,
    delta: i32,
) -> Option<usize> {
    let mut coords = [cell[0] as i32, cell[1] as i32, cell[2] as i32];
    coords[axis.index()] += delta;
    let x = resolve_interior(coords[0], extents.len(Axis::X))?;
    let y = resolve_interior(coords[1], extents.len(Axis::Y))?;
    let z = resolve_interior(coords[2], extents.len(Axis::Z))?;
    Some(extents.linear(x, y, z))
}

/// Like [`axis_neighbour`], but clamps to the edge instead of leaving
/// the grid (Neumann-style reads, matching clamp-to-edge sampling).
pub(crate) fn axis_neighbour_clamped(
    extents: &GridExtents,
    cell: [u32; 3],
    axis: Axis,
    delta: i32,
) -> usize {
    let mut coords = [cell[0] as i32, cell[1] as i32, cell[2] as i32];
    let idx = axis.index();
    coords[idx] += delta;
    let lens = [
        extents.len(Axis::X),
        extents.len(Axis::Y),
        extents.len(Axis::Z),
    ];
    coords[idx] = coords[idx].clamp(0, lens[idx] as i32 - 1);
    extents.linear(coords[0] as u32, coords[1] as u32, coords[2] as u32)
}
