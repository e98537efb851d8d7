//! TOML motor description files.

use std::path::Path;

use serde::Deserialize;

use crate::constants::{DENSITY_RATIO, SIMULATION_STEP, SIMULATION_STEPS};
use crate::errors::SimulationError;
use crate::motor::chamber::ChamberGeometry;
use crate::motor::configuration::MotorConfiguration;
use crate::motor::environment::Environment;
use crate::motor::grain::{GrainGeometry, InhibitedSurfaces};
use crate::motor::nozzle::NozzleGeometry;
use crate::motor::propellant::Propellant;

#[derive(Debug, Deserialize, Clone)]
pub struct MotorFile {
    pub propellant: Propellant,
    #[serde(default)]
    pub inhibited: InhibitedSurfaces,
    pub grain: GrainSection,
    pub chamber: ChamberSection,
    pub nozzle: NozzleSection,
    #[serde(default)]
    pub simulation: SimulationSection,
    #[serde(default)]
    pub environment: Environment,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GrainSection {
    pub core_diameter_mm: f64,
    pub length_mm: f64,
    pub diameter_mm: f64,
    pub count: u32,
    #[serde(default = "default_density_ratio")]
    pub density_ratio: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChamberSection {
    pub length_mm: f64,
    pub diameter_mm: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NozzleSection {
    pub throat_diameter_mm: f64,
    pub convergent_angle_deg: f64,
    pub divergent_angle_deg: f64,
    #[serde(default)]
    pub erosion_mm: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SimulationSection {
    /// Regression per step [mm]
    pub step_mm: f64,
    pub steps: usize,
    pub until_burnout: bool,
}

impl Default for SimulationSection {
    fn default() -> Self {
        SimulationSection {
            step_mm: SIMULATION_STEP,
            steps: SIMULATION_STEPS,
            until_burnout: false,
        }
    }
}

fn default_density_ratio() -> f64 {
    DENSITY_RATIO
}

/// A parsed and validated motor file.
#[derive(Debug, Clone)]
pub struct SimulationSetup {
    pub motor: MotorConfiguration,
    pub environment: Environment,
    pub simulation: SimulationSection,
}

impl MotorFile {
    pub fn into_setup(self) -> Result<SimulationSetup, SimulationError> {
        let mut grain = GrainGeometry::new(
            self.propellant,
            self.inhibited,
            self.grain.core_diameter_mm,
            self.grain.length_mm,
            self.grain.diameter_mm,
            self.grain.count,
        );
        grain.density_ratio = self.grain.density_ratio;

        let chamber = ChamberGeometry::new(self.chamber.length_mm, self.chamber.diameter_mm, grain);
        let nozzle = NozzleGeometry::new(
            self.nozzle.throat_diameter_mm,
            self.nozzle.convergent_angle_deg.to_radians(),
            self.nozzle.divergent_angle_deg.to_radians(),
            self.nozzle.erosion_mm,
        );

        self.environment.validate()?;
        Ok(SimulationSetup {
            motor: MotorConfiguration::new(chamber, nozzle)?,
            environment: self.environment,
            simulation: self.simulation,
        })
    }
}

pub fn parse_motor_file(contents: &str) -> Result<SimulationSetup, SimulationError> {
    let file: MotorFile = toml::from_str(contents)?;
    file.into_setup()
}

pub fn load_motor_file<P: AsRef<Path>>(path: P) -> Result<SimulationSetup, SimulationError> {
    let contents = std::fs::read_to_string(path)?;
    parse_motor_file(&contents)
}
