//! Strongly-typed identifiers shared across the workspace.

use std::fmt;

/// A spatial axis of the simulation grid.
///
/// 2D simulations use [`Axis::X`] and [`Axis::Y`]; 3D simulations add
/// [`Axis::Z`]. The axis doubles as the component index into per-axis
/// field collections and vector quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// First grid axis.
    X,
    /// Second grid axis.
    Y,
    /// Third grid axis (3D only).
    Z,
}

impl Axis {
    /// The axes of an `ndim`-dimensional grid, in order.
    ///
    /// Panics if `ndim` is not 2 or 3 — grid construction rejects any
    /// other dimensionality before this can be reached.
    pub fn for_ndim(ndim: usize) -> &'static [Axis] {
        match ndim {
            2 => &[Axis::X, Axis::Y],
            3 => &[Axis::X, Axis::Y, Axis::Z],
            _ => panic!("unsupported grid dimensionality {ndim}"),
        }
    }

    /// Component index of this axis (X = 0, Y = 1, Z = 2).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Names a field owned by the simulation state, for introspection.
///
/// The render/debug layer selects fields by this enum and receives the
/// current input view. The set of selectable fields is fixed;
/// requesting a velocity axis the state does not carry (Z on a 2D
/// state) is a programmer error and panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldSelector {
    /// Velocity component along the given axis.
    Velocity(Axis),
    /// Pressure field.
    Pressure,
    /// Passively advected ink density.
    Ink,
    /// Unbuffered velocity divergence.
    Divergence,
    /// Unbuffered post-projection divergence recomputation.
    DivergenceCheck,
    /// Boundary classification codes.
    Boundaries,
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSelector::Velocity(axis) => write!(f, "velocity {axis}"),
            FieldSelector::Pressure => write!(f, "pressure"),
            FieldSelector::Ink => write!(f, "ink"),
            FieldSelector::Divergence => write!(f, "divergence"),
            FieldSelector::DivergenceCheck => write!(f, "divergence check"),
            FieldSelector::Boundaries => write!(f, "boundaries"),
        }
    }
}

/// Handle to a registered pipeline hook.
///
/// Allocated from a monotonically increasing counter by the hook
/// registry; never reused within one registry's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HookId(pub u64);

impl fmt::Display for HookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
