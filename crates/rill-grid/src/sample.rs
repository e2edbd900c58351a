//! Clamped multilinear resampling of flat field data.

use crate::edge::resolve_clamped;
use crate::extents::GridExtents;

/// Sample `data` at a fractional index-space position with trilinear
/// (bilinear on 2D grids) interpolation, clamping to the domain edge.
///
/// Positions are in the field's own index frame: the value at flat
/// cell `(x, y, z)` sits at position `[x, y, z]`. Callers sampling a
/// staggered field first shift the query by the field's stagger offset.
/// Out-of-domain positions read the nearest edge cell, matching
/// clamp-to-edge texture semantics.
pub fn sample_clamped(data: &[f32], extents: &GridExtents, pos: [f32; 3]) -> f32 {
    debug_assert_eq!(data.len(), extents.cell_count());

    let mut corner = [0u32; 6]; // lo/hi per axis
    let mut t = [0.0f32; 3];
    for axis in 0..3 {
        let len = match axis {
            0 => extents.len(rill_core::Axis::X),
            1 => extents.len(rill_core::Axis::Y),
            _ => extents.len(rill_core::Axis::Z),
        };
        let lo = pos[axis].floor();
        t[axis] = pos[axis] - lo;
        let lo = lo as i32;
        corner[axis * 2] = resolve_clamped(lo, len);
        corner[axis * 2 + 1] = resolve_clamped(lo + 1, len);
    }

    let at = |x: u32, y: u32, z: u32| data[extents.linear(x, y, z)];

    let c000 = at(corner[0], corner[2], corner[4]);
    let c100 = at(corner[1], corner[2], corner[4]);
    let c010 = at(corner[0], corner[3], corner[4]);
    let c110 = at(corner[1], corner[3], corner[4]);
    let c001 = at(corner[0], corner[2], corner[5]);
    let c101 = at(corner[1], corner[2], corner[5]);
    let c011 = at(corner[0], corner[3], corner[5]);
    let c111 = at(corner[1], corner[3], corner[5]);

    let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;

    let x00 = lerp(c000, c100, t[0]);
    let x10 = lerp(c010, c110, t[0]);
    let x01 = lerp(c001, c101, t[0]);
    let x11 = lerp(c011, c111, t[0]);
    let y0 = lerp(x00, x10, t[1]);
    let y1 = lerp(x01, x11, t[1]);
    lerp(y0, y1, t[2])
}
