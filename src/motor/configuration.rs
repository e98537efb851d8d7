use std::f64::consts::FRAC_PI_2;

use super::chamber::ChamberGeometry;
use super::grain::GrainGeometry;
use super::nozzle::NozzleGeometry;
use crate::errors::SimulationError;

/// Complete, validated description of a motor.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorConfiguration {
    chamber: ChamberGeometry,
    nozzle: NozzleGeometry,
}

impl MotorConfiguration {
    pub fn new(chamber: ChamberGeometry, nozzle: NozzleGeometry) -> Result<Self, SimulationError> {
        validate_chamber(&chamber)?;
        validate_nozzle(&nozzle)?;
        Ok(MotorConfiguration { chamber, nozzle })
    }

    pub fn chamber(&self) -> &ChamberGeometry {
        &self.chamber
    }

    pub fn grain(&self) -> &GrainGeometry {
        &self.chamber.grain
    }

    pub fn nozzle(&self) -> &NozzleGeometry {
        &self.nozzle
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::ConfigurationError(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

fn require_angle(name: &str, value: f64) -> Result<(), SimulationError> {
    if (0.0..FRAC_PI_2).contains(&value) {
        Ok(())
    } else {
        Err(SimulationError::ConfigurationError(format!(
            "{} must lie in [0, π/2) radians, got {}",
            name, value
        )))
    }
}

fn validate_chamber(chamber: &ChamberGeometry) -> Result<(), SimulationError> {
    let grain = &chamber.grain;

    require_positive("Chamber length", chamber.length)?;
    require_positive("Chamber diameter", chamber.diameter)?;
    require_positive("Grain core diameter", grain.core_diameter)?;
    require_positive("Grain length", grain.length)?;
    require_positive("Grain diameter", grain.diameter)?;
    require_positive("Grain density ratio", grain.density_ratio)?;

    if grain.grain_count == 0 {
        return Err(SimulationError::ConfigurationError(
            "Motor needs at least one grain".to_string(),
        ));
    }
    if grain.core_diameter >= grain.diameter {
        return Err(SimulationError::ConfigurationError(format!(
            "Core diameter {} mm must be smaller than grain diameter {} mm",
            grain.core_diameter, grain.diameter
        )));
    }
    if grain.diameter > chamber.diameter {
        return Err(SimulationError::ConfigurationError(format!(
            "Grain diameter {} mm does not fit chamber bore {} mm",
            grain.diameter, chamber.diameter
        )));
    }
    if grain.total_length() > chamber.length {
        return Err(SimulationError::ConfigurationError(format!(
            "Grain stack of {} mm does not fit chamber length {} mm",
            grain.total_length(),
            chamber.length
        )));
    }

    Ok(())
}

fn validate_nozzle(nozzle: &NozzleGeometry) -> Result<(), SimulationError> {
    require_positive("Throat diameter", nozzle.throat_diameter)?;
    require_angle("Convergent half-angle", nozzle.convergent_angle)?;
    require_angle("Divergent half-angle", nozzle.divergent_angle)?;

    if !(nozzle.erosion.is_finite() && nozzle.erosion >= 0.0) {
        return Err(SimulationError::ConfigurationError(format!(
            "Nozzle erosion must be zero or positive, got {}",
            nozzle.erosion
        )));
    }

    Ok(())
}
