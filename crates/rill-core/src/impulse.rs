//! Instantaneous external stimuli applied to the fluid.

/// An instantaneous force and ink injection at a point.
///
/// Created fresh per user interaction (or programmatic call) and
/// consumed by the forces stage; never persisted. Positions are in
/// grid space and may be fractional. 2D simulations leave the third
/// component of `position` and `magnitude` at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Impulse {
    /// Centre of the impulse, in (possibly fractional) grid cells.
    pub position: [f32; 3],
    /// Force magnitude added per axis.
    pub magnitude: [f32; 3],
    /// Effect radius, in grid cells. Must be positive.
    pub radius: f32,
    /// Ink density injected at the centre, scaled by the timestep.
    pub ink_amount: f32,
}

impl Impulse {
    /// Impulse at a 2D grid position.
    pub fn at_2d(x: f32, y: f32) -> Self {
        Self {
            position: [x, y, 0.0],
            magnitude: [0.0; 3],
            radius: 1.0,
            ink_amount: 0.0,
        }
    }

    /// Impulse at a 3D grid position.
    pub fn at_3d(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
            magnitude: [0.0; 3],
            radius: 1.0,
            ink_amount: 0.0,
        }
    }

    /// Set the per-axis force magnitude.
    pub fn with_magnitude(mut self, magnitude: [f32; 3]) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// Set the effect radius in grid cells.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the injected ink amount.
    pub fn with_ink(mut self, ink_amount: f32) -> Self {
        self.ink_amount = ink_amount;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_composes() {
        let imp = Impulse::at_2d(8.0, 9.5)
            .with_magnitude([1.0, -2.0, 0.0])
            .with_radius(3.0)
            .with_ink(7.0);
        assert_eq!(imp.position, [8.0, 9.5, 0.0]);
        assert_eq!(imp.magnitude, [1.0, -2.0, 0.0]);
        assert_eq!(imp.radius, 3.0);
        assert_eq!(imp.ink_amount, 7.0);
    }
}
