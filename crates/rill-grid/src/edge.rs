//! Axis resolution at the domain edge.
//!
//! Stencils reach one cell past the grid; these helpers decide what an
//! out-of-range coordinate resolves to. Boundary-condition coefficients
//! (no-slip / Neumann / zero-Dirichlet) are applied by the caller on
//! top of [`resolve_interior`].

/// Clamp a coordinate to `[0, len)`.
pub fn resolve_clamped(value: i32, len: u32) -> u32 {
    value.clamp(0, len as i32 - 1) as u32
}

/// In-range coordinate, or `None` when the sample falls outside.
///
/// Callers substitute `coefficient × centre` for `None`, which is how
/// the boundary-condition model replaces out-of-domain neighbours.
pub fn resolve_interior(value: i32, len: u32) -> Option<u32> {
    if value >= 0 && (value as u32) < len {
        Some(value as u32)
    } else {
        None
    }
}

/// Wrap a coordinate onto `[0, len)` (periodic).
pub fn resolve_wrapped(value: i64, len: u32) -> u32 {
    let len = len as i64;
    (((value % len) + len) % len) as u32
}
