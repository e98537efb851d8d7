use super::grain::GrainGeometry;
use crate::utils::cylinder::Cylinder;

#[derive(Debug, Clone, PartialEq)]
pub struct ChamberGeometry {
    pub length: f64,
    /// Bore diameter [mm]
    pub diameter: f64,
    pub grain: GrainGeometry,
}

impl ChamberGeometry {
    pub fn new(length: f64, diameter: f64, grain: GrainGeometry) -> Self {
        ChamberGeometry {
            length,
            diameter,
            grain,
        }
    }

    pub fn cylinder(&self) -> Cylinder {
        Cylinder::new(self.length, self.diameter)
    }

    /// Empty chamber volume [mm³]
    pub fn volume(&self) -> f64 {
        self.cylinder().volume()
    }

    /// Bore cross-section [mm²]
    pub fn bore_area(&self) -> f64 {
        self.cylinder().face_area()
    }
}
