pub mod chamber;
pub mod configuration;
pub mod environment;
pub mod grain;
pub mod nozzle;
pub mod propellant;
