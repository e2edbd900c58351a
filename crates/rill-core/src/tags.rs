//! Boundary-condition and grid-layout tags attached to fields.

use crate::id::Axis;

/// Boundary condition a field obeys at the domain edge.
///
/// Encoded as the coefficient `c` in `f(boundary) = c · f(neighbour)`,
/// applied whenever a stencil samples past the domain edge:
///
/// - no-slip: `f(boundary) + f(neighbour) = 0`, so `c = -1`
/// - Neumann (zero normal gradient): `f(boundary) - f(neighbour) = 0`,
///   so `c = +1`
/// - zero-Dirichlet: `f(boundary) = 0`, so `c = 0`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryTag {
    /// Velocity components: the field vanishes halfway to the wall.
    NoSlip,
    /// Pressure: zero gradient normal to the wall.
    Neumann,
    /// Ink and other dyes: zero outside the domain.
    ZeroDirichlet,
}

impl BoundaryTag {
    /// Coefficient applied to the nearest in-domain sample when a
    /// stencil reaches past the edge.
    pub fn coefficient(self) -> f32 {
        match self {
            BoundaryTag::NoSlip => -1.0,
            BoundaryTag::Neumann => 1.0,
            BoundaryTag::ZeroDirichlet => 0.0,
        }
    }
}

/// Sub-cell sample position of a field on a staggered (MAC) grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stagger {
    /// Sampled at the cell centre.
    Cell,
    /// Sampled on the face half a cell back along the given axis:
    /// index `i` holds the value at position `i - 1/2` on that axis.
    Face(Axis),
}

impl Stagger {
    /// Offset of the sample position from the cell centre, in cells.
    pub fn offset(self, axis: Axis) -> f32 {
        match self {
            Stagger::Cell => 0.0,
            Stagger::Face(a) if a == axis => -0.5,
            Stagger::Face(_) => 0.0,
        }
    }
}

/// Classification of one cell by the boundary-synthesis stage.
///
/// Stored in the boundary classification field as an f32 class code,
/// the same representation every other categorical quantity uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellClass {
    /// Interior fluid cell.
    Fluid,
    /// Exterior wall cell.
    Wall,
}

impl CellClass {
    /// The f32 class code written into the classification field.
    pub fn code(self) -> f32 {
        match self {
            CellClass::Fluid => 0.0,
            CellClass::Wall => 1.0,
        }
    }

    /// Decode a class code read back from the field.
    pub fn from_code(code: f32) -> Option<Self> {
        if code == 0.0 {
            Some(CellClass::Fluid)
        } else if code == 1.0 {
            Some(CellClass::Wall)
        } else {
            None
        }
    }
}

/// Velocity layout of the simulation grid.
///
/// The staggered layout samples each velocity axis on the faces normal
/// to it, which makes the divergence/pressure/projection stencils
/// compact and mutually consistent. The collocated layout samples
/// everything at cell centres and uses central differences throughout.
/// Both run the same pipeline; only the stencil arithmetic differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GridLayout {
    /// All fields sampled at cell centres; central 2·dx differences.
    Collocated,
    /// Velocity on faces (MAC); compact 1·dx face differences.
    #[default]
    Staggered,
}

impl GridLayout {
    /// Stagger pattern of the velocity component along `axis` under
    /// this layout.
    pub fn velocity_stagger(self, axis: Axis) -> Stagger {
        match self {
            GridLayout::Collocated => Stagger::Cell,
            GridLayout::Staggered => Stagger::Face(axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_coefficients() {
        assert_eq!(BoundaryTag::NoSlip.coefficient(), -1.0);
        assert_eq!(BoundaryTag::Neumann.coefficient(), 1.0);
        assert_eq!(BoundaryTag::ZeroDirichlet.coefficient(), 0.0);
    }

    #[test]
    fn stagger_offsets() {
        assert_eq!(Stagger::Cell.offset(Axis::X), 0.0);
        assert_eq!(Stagger::Face(Axis::X).offset(Axis::X), -0.5);
        assert_eq!(Stagger::Face(Axis::X).offset(Axis::Y), 0.0);
    }

    #[test]
    fn cell_class_codes_round_trip() {
        for class in [CellClass::Fluid, CellClass::Wall] {
            assert_eq!(CellClass::from_code(class.code()), Some(class));
        }
        assert_eq!(CellClass::from_code(7.5), None);
    }

    #[test]
    fn layout_assigns_velocity_stagger() {
        assert_eq!(
            GridLayout::Collocated.velocity_stagger(Axis::Y),
            Stagger::Cell
        );
        assert_eq!(
            GridLayout::Staggered.velocity_stagger(Axis::Y),
            Stagger::Face(Axis::Y)
        );
    }
}
