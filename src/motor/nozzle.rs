use std::f64::consts::PI;

#[derive(Debug, Clone, PartialEq)]
pub struct NozzleGeometry {
    pub throat_diameter: f64,
    /// Convergent half-angle [rad]
    pub convergent_angle: f64,
    /// Divergent half-angle [rad]
    pub divergent_angle: f64,
    /// Throat diameter growth over the whole burn [mm]
    pub erosion: f64,
}

impl NozzleGeometry {
    pub fn new(
        throat_diameter: f64,
        convergent_angle: f64,
        divergent_angle: f64,
        erosion: f64,
    ) -> Self {
        NozzleGeometry {
            throat_diameter,
            convergent_angle,
            divergent_angle,
            erosion,
        }
    }

    /// Nominal throat area [mm²]
    pub fn throat_area(&self) -> f64 {
        PI / 4.0 * self.throat_diameter.powi(2)
    }

    /// Throat area [mm²] once `burned_fraction` of the web is gone, with the
    /// erosion allowance applied linearly.
    pub fn eroded_throat_area(&self, burned_fraction: f64) -> f64 {
        PI / 4.0 * (self.throat_diameter + self.erosion * burned_fraction).powi(2)
    }
}
