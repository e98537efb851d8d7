use serde::{Deserialize, Serialize};

use super::propellant::Propellant;
use crate::constants::{
    AMBIENT_PRESSURE, BURST_PRESSURE, COMBUSTION_EFFICIENCY, EROSIVE_BURNING_AREA_RATIO_THRESHOLD,
    EROSIVE_BURNING_VELOCITY_COEFFICIENT, RATIO_OF_SPECIFIC_HEATS, SPECIFIC_GAS_CONSTANT,
    UNIVERSAL_GAS_CONSTANT,
};
use crate::errors::SimulationError;

/// Source of the gas properties used for nozzle flow and chamber pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GasModel {
    Fixed {
        /// J/kg-K
        specific_gas_constant: f64,
        ratio_of_specific_heats: f64,
    },
    /// Derive both from the propellant's chemistry table.
    Propellant,
}

impl Default for GasModel {
    fn default() -> Self {
        GasModel::Fixed {
            specific_gas_constant: SPECIFIC_GAS_CONSTANT,
            ratio_of_specific_heats: RATIO_OF_SPECIFIC_HEATS,
        }
    }
}

/// Physical surroundings and model constants shared by one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Pa
    pub ambient_pressure: f64,
    /// J/kmol-K
    pub universal_gas_constant: f64,
    pub combustion_efficiency: f64,
    /// kv, zero disables erosive burning
    pub erosive_velocity_coefficient: f64,
    /// G*
    pub erosive_area_ratio_threshold: f64,
    /// Pa
    pub burst_pressure: f64,
    pub gas_model: GasModel,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            ambient_pressure: AMBIENT_PRESSURE,
            universal_gas_constant: UNIVERSAL_GAS_CONSTANT,
            combustion_efficiency: COMBUSTION_EFFICIENCY,
            erosive_velocity_coefficient: EROSIVE_BURNING_VELOCITY_COEFFICIENT,
            erosive_area_ratio_threshold: EROSIVE_BURNING_AREA_RATIO_THRESHOLD,
            burst_pressure: BURST_PRESSURE,
            gas_model: GasModel::default(),
        }
    }
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ambient_pressure(mut self, ambient_pressure: f64) -> Self {
        self.ambient_pressure = ambient_pressure;
        self
    }

    pub fn with_gas_model(mut self, gas_model: GasModel) -> Self {
        self.gas_model = gas_model;
        self
    }

    pub fn with_erosive_burning(
        mut self,
        velocity_coefficient: f64,
        area_ratio_threshold: f64,
    ) -> Self {
        self.erosive_velocity_coefficient = velocity_coefficient;
        self.erosive_area_ratio_threshold = area_ratio_threshold;
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let positive = [
            ("Ambient pressure", self.ambient_pressure),
            ("Universal gas constant", self.universal_gas_constant),
            ("Combustion efficiency", self.combustion_efficiency),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimulationError::ConfigurationError(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            (
                "Erosive burning velocity coefficient",
                self.erosive_velocity_coefficient,
            ),
            (
                "Erosive burning area ratio threshold",
                self.erosive_area_ratio_threshold,
            ),
            ("Burst pressure", self.burst_pressure),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimulationError::ConfigurationError(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if let GasModel::Fixed {
            specific_gas_constant,
            ratio_of_specific_heats,
        } = self.gas_model
        {
            let physical = specific_gas_constant.is_finite()
                && specific_gas_constant > 0.0
                && ratio_of_specific_heats.is_finite()
                && ratio_of_specific_heats > 1.0;
            if !physical {
                return Err(SimulationError::ConfigurationError(format!(
                    "Gas constant {} and ratio of specific heats {} are not physical",
                    specific_gas_constant, ratio_of_specific_heats
                )));
            }
        }

        Ok(())
    }

    /// J/kg-K
    pub fn specific_gas_constant(&self, propellant: Propellant) -> f64 {
        match self.gas_model {
            GasModel::Fixed {
                specific_gas_constant,
                ..
            } => specific_gas_constant,
            GasModel::Propellant => {
                self.universal_gas_constant / propellant.effective_molecular_weight()
            }
        }
    }

    pub fn ratio_of_specific_heats(&self, propellant: Propellant) -> f64 {
        match self.gas_model {
            GasModel::Fixed {
                ratio_of_specific_heats,
                ..
            } => ratio_of_specific_heats,
            GasModel::Propellant => propellant.ratio_of_specific_heats_mixture(),
        }
    }

    /// Flame temperature scaled by combustion efficiency [K].
    pub fn actual_chamber_temperature(&self, propellant: Propellant) -> f64 {
        propellant.chamber_temperature() * self.combustion_efficiency
    }
}
