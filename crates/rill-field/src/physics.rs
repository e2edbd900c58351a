//! Physical properties of the simulated fluid.

/// Density and kinematic viscosity. Both runtime-mutable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalProperties {
    /// Fluid density, kg·m⁻³-equivalent.
    pub density: f32,
    /// Kinematic viscosity, m²·s⁻¹-equivalent.
    pub viscosity: f32,
}

impl PhysicalProperties {
    /// Properties from explicit density and viscosity values.
    pub fn new(density: f32, viscosity: f32) -> Self {
        Self { density, viscosity }
    }
}

/// Water-like values matching the interactive front end's defaults.
impl Default for PhysicalProperties {
    fn default() -> Self {
        Self {
            density: 1.0,
            viscosity: 0.0025,
        }
    }
}
