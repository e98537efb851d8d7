use serde::{Deserialize, Serialize};

use super::propellant::Propellant;
use crate::constants::{DENSITY_RATIO, GRAIN_VOLUME_MULTIPLIER};
use crate::utils::cylinder::Cylinder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrainSurface {
    Outer,
    Core,
    Ends,
}

impl GrainSurface {
    fn bit(self) -> u8 {
        match self {
            GrainSurface::Outer => 1 << 0,
            GrainSurface::Core => 1 << 1,
            GrainSurface::Ends => 1 << 2,
        }
    }
}

/// Set of grain surfaces coated against burning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<GrainSurface>", into = "Vec<GrainSurface>")]
pub struct InhibitedSurfaces {
    bits: u8,
}

impl InhibitedSurfaces {
    pub const NONE: InhibitedSurfaces = InhibitedSurfaces { bits: 0 };
    pub const ALL: InhibitedSurfaces = InhibitedSurfaces { bits: 0b111 };

    pub fn contains(&self, surface: GrainSurface) -> bool {
        self.bits & surface.bit() != 0
    }

    pub fn insert(&mut self, surface: GrainSurface) {
        self.bits |= surface.bit();
    }

    pub fn with(mut self, surface: GrainSurface) -> Self {
        self.insert(surface);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn surfaces(&self) -> Vec<GrainSurface> {
        [GrainSurface::Outer, GrainSurface::Core, GrainSurface::Ends]
            .into_iter()
            .filter(|surface| self.contains(*surface))
            .collect()
    }
}

impl FromIterator<GrainSurface> for InhibitedSurfaces {
    fn from_iter<I: IntoIterator<Item = GrainSurface>>(iter: I) -> Self {
        iter.into_iter()
            .fold(InhibitedSurfaces::NONE, InhibitedSurfaces::with)
    }
}

impl From<Vec<GrainSurface>> for InhibitedSurfaces {
    fn from(surfaces: Vec<GrainSurface>) -> Self {
        surfaces.into_iter().collect()
    }
}

impl From<InhibitedSurfaces> for Vec<GrainSurface> {
    fn from(inhibited: InhibitedSurfaces) -> Self {
        inhibited.surfaces()
    }
}

/// Stack of identical cylindrical core-burning (BATES) grains.
#[derive(Debug, Clone, PartialEq)]
pub struct GrainGeometry {
    pub propellant: Propellant,
    pub inhibited: InhibitedSurfaces,
    pub core_diameter: f64,
    /// Length of a single grain [mm]
    pub length: f64,
    /// Outer diameter [mm]
    pub diameter: f64,
    pub grain_count: u32,
    /// Actual / ideal density
    pub density_ratio: f64,
}

impl GrainGeometry {
    pub fn new(
        propellant: Propellant,
        inhibited: InhibitedSurfaces,
        core_diameter: f64,
        length: f64,
        diameter: f64,
        grain_count: u32,
    ) -> Self {
        GrainGeometry {
            propellant,
            inhibited,
            core_diameter,
            length,
            diameter,
            grain_count,
            density_ratio: DENSITY_RATIO,
        }
    }

    pub fn outer_cylinder(&self) -> Cylinder {
        Cylinder::new(self.length, self.diameter)
    }

    pub fn core_cylinder(&self) -> Cylinder {
        Cylinder::new(self.length, self.core_diameter)
    }

    /// Length of the whole stack [mm]
    pub fn total_length(&self) -> f64 {
        self.length * f64::from(self.grain_count)
    }

    /// Propellant volume of the stack [mm³].
    ///
    /// Always four grains' worth, independent of `grain_count`.
    pub fn total_volume(&self) -> f64 {
        (self.outer_cylinder().volume() - self.core_cylinder().volume()) * GRAIN_VOLUME_MULTIPLIER
    }

    /// [g/cm³]
    pub fn actual_density(&self) -> f64 {
        self.density_ratio * self.propellant.density()
    }

    /// Exposed burning area of one unburned grain [mm²].
    pub fn surface_burn_area(&self) -> f64 {
        let outer = self.outer_cylinder();
        let core = self.core_cylinder();
        let mut area = 0.0;

        if !self.inhibited.contains(GrainSurface::Outer) {
            area += outer.wall_area();
        }
        if !self.inhibited.contains(GrainSurface::Core) {
            area += core.wall_area();
        }
        if !self.inhibited.contains(GrainSurface::Ends) {
            area += 2.0 * (outer.face_area() - core.face_area());
        }

        area
    }
}
