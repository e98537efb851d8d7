use thiserror::Error;

use crate::motor::propellant::Propellant;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Pressure {pressure} Pa is outside the {propellant} burn rate correlation")]
    BurnRateOutOfRange {
        propellant: Propellant,
        pressure: f64,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to read motor file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse motor file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to export telemetry: {0}")]
    Export(#[from] csv::Error),
}
