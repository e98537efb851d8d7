pub mod config;
pub mod constants;
pub mod errors;
pub mod motor;
pub mod simulation_system;
pub mod telemetry_system;
pub mod utils;

pub use constants::*;
pub use errors::SimulationError;
pub use motor::chamber::ChamberGeometry;
pub use motor::configuration::MotorConfiguration;
pub use motor::environment::{Environment, GasModel};
pub use motor::grain::{GrainGeometry, GrainSurface, InhibitedSurfaces};
pub use motor::nozzle::NozzleGeometry;
pub use motor::propellant::{BurnRateCoefficients, Propellant};

// Re-export commonly used items from simulation_system
pub use simulation_system::pressure::{PressureSimulation, PressureState};
pub use simulation_system::record::SimulationRecord;
pub use simulation_system::regression::RegressionSimulation;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::cylinder::Cylinder;
