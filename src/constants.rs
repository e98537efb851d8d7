// Gas Constants
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8314.0; // J/kmol-K
pub const SPECIFIC_GAS_CONSTANT: f64 = 196.1; // J/kg-K
pub const RATIO_OF_SPECIFIC_HEATS: f64 = 1.131; // mixture

// Environmental Constants
pub const AMBIENT_PRESSURE: f64 = 101_000.0; // Pa

// Efficiency Constants
pub const COMBUSTION_EFFICIENCY: f64 = 0.95;
pub const DENSITY_RATIO: f64 = 0.95; // actual / ideal grain density

// Erosive Burning Constants
pub const EROSIVE_BURNING_VELOCITY_COEFFICIENT: f64 = 0.0; // kv
pub const EROSIVE_BURNING_AREA_RATIO_THRESHOLD: f64 = 6.0; // G*

// Nozzle Constants
pub const BURST_PRESSURE: f64 = 0.0; // Pa

// Grain Constants
pub const GRAIN_VOLUME_MULTIPLIER: f64 = 4.0;

// Simulation Parameters
pub const SIMULATION_STEP: f64 = 0.0294; // mm of regression per step
pub const SIMULATION_STEPS: usize = 833;

// Unit Conversions
pub const PASCALS_PER_MEGAPASCAL: f64 = 1_000_000.0;
pub const MM2_PER_M2: f64 = 1_000_000.0;
pub const MM3_PER_M3: f64 = 1_000_000_000.0;
pub const G_CM3_MM3_PER_KG: f64 = 1_000_000.0; // (g/cm³ · mm³) -> kg
