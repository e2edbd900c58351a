//! Wrap arithmetic for circular grid shifts.

use crate::edge::resolve_wrapped;
use crate::extents::GridExtents;

/// Flat index of the cell that lands at `dst` after a circular shift
/// by `offset` cells per axis.
///
/// A shift of `+k` along an axis moves every cell `k` cells forward;
/// the cell written at `dst` therefore comes from `dst - offset`,
/// wrapped onto the grid. Offsets of any magnitude and sign are valid;
/// full-extent offsets are the identity.
pub fn scroll_source(extents: &GridExtents, dst: [u32; 3], offset: [i32; 3]) -> usize {
    let sx = resolve_wrapped(
        dst[0] as i64 - offset[0] as i64,
        extents.len(rill_core::Axis::X),
    );
    let sy = resolve_wrapped(
        dst[1] as i64 - offset[1] as i64,
        extents.len(rill_core::Axis::Y),
    );
    let sz = resolve_wrapped(
        dst[2] as i64 - offset[2] as i64,
        extents.len(rill_core::Axis::Z),
    );
    extents.linear(sx, sy, sz)
}
