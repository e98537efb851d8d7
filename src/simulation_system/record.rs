use serde::Serialize;

/// Everything observable about one simulation step, one CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationRecord {
    pub step_index: usize,
    /// Regression depth [mm]
    pub regression_depth: f64,
    pub web_thickness: f64,
    pub core_diameter: f64,
    pub outer_diameter: f64,
    /// Grain stack length [mm]
    pub length: f64,
    /// Burning area [mm²]
    pub burn_area: f64,
    pub kn: f64,
    pub throat_area: f64,
    /// Nozzle critical area [m²]
    pub critical_area: f64,
    pub duct_area: f64,
    /// Duct area over throat area
    pub erosive_ratio: f64,
    pub erosive_factor: f64,
    pub previous_pressure: f64,
    pub burn_rate_a: f64,
    pub burn_rate_n: f64,
    /// mm/s
    pub burn_rate: f64,
    pub time: f64,
    pub grain_volume: f64,
    pub free_volume: f64,
    pub grain_mass: f64,
    pub mass_generation_rate: f64,
    pub nozzle_mass_flow_rate: f64,
    pub mass_storage_rate: f64,
    pub stored_mass: f64,
    /// kg/m³
    pub product_density: f64,
    /// Chamber pressure, absolute [Pa]
    pub pressure: f64,
    pub choked_mass_flow: f64,
}

impl SimulationRecord {
    pub fn is_finite(&self) -> bool {
        [
            self.time,
            self.pressure,
            self.mass_generation_rate,
            self.nozzle_mass_flow_rate,
            self.kn,
            self.throat_area,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}
