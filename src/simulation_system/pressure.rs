use super::record::SimulationRecord;
use super::regression::RegressionSimulation;
use crate::constants::{MM2_PER_M2, MM3_PER_M3};
use crate::errors::SimulationError;
use crate::motor::configuration::MotorConfiguration;
use crate::motor::environment::Environment;
use crate::motor::propellant::{BurnRateCoefficients, Propellant};

/// Chamber state carried from one step to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureState {
    pub step_index: usize,
    /// Time since ignition [s]
    pub elapsed_time: f64,
    /// Chamber pressure of the prior step [Pa], drives this step's burn rate
    pub previous_pressure: f64,
    /// Chamber pressure, absolute [Pa]
    pub pressure: f64,
    pub burn_rate_coefficients: BurnRateCoefficients,
    /// mm/s
    pub burn_rate: f64,
    pub mass_generation_rate: f64,
    pub nozzle_mass_flow_rate: f64,
    /// Combustion products held in the chamber [kg]
    pub stored_mass: f64,
    pub choked_mass_flow: f64,
}

/// Mass balance and chamber pressure model driving a [`RegressionSimulation`].
///
/// Each step burns a fixed regression depth; the time it takes follows from
/// the burn rate at the previous step's pressure, so the time step shrinks as
/// pressure rises.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSimulation {
    environment: Environment,
    regression: RegressionSimulation,
    state: PressureState,
}

impl PressureSimulation {
    pub fn new(
        motor: MotorConfiguration,
        environment: Environment,
        simulation_step: f64,
    ) -> Result<Self, SimulationError> {
        environment.validate()?;
        if !(simulation_step.is_finite() && simulation_step > 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "Simulation step must be a positive number of millimetres, got {}",
                simulation_step
            )));
        }

        let regression = RegressionSimulation::new(motor, simulation_step);
        let ambient_pressure = environment.ambient_pressure;
        let coefficients = regression
            .motor()
            .grain()
            .propellant
            .burn_rate_coefficients(ambient_pressure)?;
        let burn_rate =
            erosive_burn_rate(&environment, &regression, coefficients, ambient_pressure);

        Ok(PressureSimulation {
            state: PressureState {
                step_index: 0,
                elapsed_time: 0.0,
                previous_pressure: ambient_pressure,
                pressure: ambient_pressure,
                burn_rate_coefficients: coefficients,
                burn_rate,
                mass_generation_rate: 0.0,
                nozzle_mass_flow_rate: 0.0,
                stored_mass: 0.0,
                choked_mass_flow: 0.0,
            },
            environment,
            regression,
        })
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn regression(&self) -> &RegressionSimulation {
        &self.regression
    }

    pub fn state(&self) -> &PressureState {
        &self.state
    }

    pub fn simulation_step(&self) -> f64 {
        self.regression.simulation_step()
    }

    /// Advances regression and chamber state by one step.
    ///
    /// On error the simulation is left on its last good step.
    pub fn step(&mut self) -> Result<SimulationRecord, SimulationError> {
        let (regression, state) = advance(&self.environment, &self.regression, &self.state)?;
        self.regression = regression;
        self.state = state;
        Ok(self.snapshot())
    }

    /// Initial snapshot followed by one per step.
    pub fn run(&mut self, steps: usize) -> Result<Vec<SimulationRecord>, SimulationError> {
        let mut records = Vec::with_capacity(steps + 1);
        records.push(self.snapshot());
        for _ in 0..steps {
            records.push(self.step()?);
        }
        Ok(records)
    }

    /// Like [`run`](Self::run), but stops early once the web is consumed.
    pub fn run_until_burnout(
        &mut self,
        max_steps: usize,
    ) -> Result<Vec<SimulationRecord>, SimulationError> {
        let mut records = vec![self.snapshot()];
        while records.len() <= max_steps && !self.regression.is_burned_out() {
            records.push(self.step()?);
        }
        Ok(records)
    }

    pub fn snapshot(&self) -> SimulationRecord {
        let regression = &self.regression;
        let state = &self.state;
        let throat_area = regression.throat_area();
        let free_volume = regression.free_volume();
        let duct_area = regression.duct_area();

        SimulationRecord {
            step_index: state.step_index,
            regression_depth: regression.regression_depth(),
            web_thickness: regression.web_thickness(),
            core_diameter: regression.core_diameter(),
            outer_diameter: regression.outer_diameter(),
            length: regression.total_length(),
            burn_area: regression.total_burn_area(),
            kn: regression.kn(),
            throat_area,
            critical_area: throat_area / MM2_PER_M2,
            duct_area,
            erosive_ratio: duct_area / throat_area,
            erosive_factor: erosive_factor(&self.environment, regression),
            previous_pressure: state.previous_pressure,
            burn_rate_a: state.burn_rate_coefficients.a,
            burn_rate_n: state.burn_rate_coefficients.n,
            burn_rate: state.burn_rate,
            time: state.elapsed_time,
            grain_volume: regression.grain_volume(),
            free_volume,
            grain_mass: regression.grain_mass(),
            mass_generation_rate: state.mass_generation_rate,
            nozzle_mass_flow_rate: state.nozzle_mass_flow_rate,
            mass_storage_rate: state.mass_generation_rate - state.nozzle_mass_flow_rate,
            stored_mass: state.stored_mass,
            product_density: state.stored_mass / (free_volume / MM3_PER_M3),
            pressure: state.pressure,
            choked_mass_flow: state.choked_mass_flow,
        }
    }
}

/// One explicit Euler step from the immutable prior state.
fn advance(
    environment: &Environment,
    previous_regression: &RegressionSimulation,
    previous: &PressureState,
) -> Result<(RegressionSimulation, PressureState), SimulationError> {
    let mut regression = previous_regression.clone();
    regression.step();

    let propellant = regression.motor().grain().propellant;
    let previous_pressure = previous.pressure;
    let coefficients = propellant.burn_rate_coefficients(previous_pressure)?;
    let burn_rate = erosive_burn_rate(environment, &regression, coefficients, previous_pressure);

    let elapsed_time = previous.elapsed_time + regression.simulation_step() / burn_rate;
    let delta_time = elapsed_time - previous.elapsed_time;

    let mass_generation_rate =
        (previous_regression.grain_mass() - regression.grain_mass()) / delta_time;
    let choked = choked_mass_flow(
        environment,
        propellant,
        regression.throat_area(),
        previous_pressure,
    );
    let nozzle_mass_flow_rate = nozzle_mass_flow(
        mass_generation_rate,
        choked,
        previous_pressure,
        environment.burst_pressure,
    );

    let mass_storage_rate = mass_generation_rate - nozzle_mass_flow_rate;
    let stored_mass = previous.stored_mass + mass_storage_rate * delta_time;
    let product_density = stored_mass / (regression.free_volume() / MM3_PER_M3);
    let gas_constant = environment.specific_gas_constant(propellant);
    let temperature = environment.actual_chamber_temperature(propellant);
    let pressure = product_density * gas_constant * temperature + environment.ambient_pressure;

    let state = PressureState {
        step_index: previous.step_index + 1,
        elapsed_time,
        previous_pressure,
        pressure,
        burn_rate_coefficients: coefficients,
        burn_rate,
        mass_generation_rate,
        nozzle_mass_flow_rate,
        stored_mass,
        choked_mass_flow: choked,
    };

    Ok((regression, state))
}

/// Erosive burning factor G; zero once the duct is wide enough.
fn erosive_factor(environment: &Environment, regression: &RegressionSimulation) -> f64 {
    let area_ratio = regression.duct_area() / regression.throat_area();
    (environment.erosive_area_ratio_threshold - area_ratio).max(0.0)
}

/// Linear burn rate [mm/s] including the erosive burning multiplier.
fn erosive_burn_rate(
    environment: &Environment,
    regression: &RegressionSimulation,
    coefficients: BurnRateCoefficients,
    pressure: f64,
) -> f64 {
    let erosive_multiplier =
        1.0 + environment.erosive_velocity_coefficient * erosive_factor(environment, regression);
    erosive_multiplier * coefficients.burn_rate(pressure)
}

/// Choked nozzle mass flow [kg/s] for a throat of `throat_area` mm².
fn choked_mass_flow(
    environment: &Environment,
    propellant: Propellant,
    throat_area: f64,
    chamber_pressure: f64,
) -> f64 {
    let gas_constant = environment.specific_gas_constant(propellant);
    let gamma = environment.ratio_of_specific_heats(propellant);
    let temperature = environment.actual_chamber_temperature(propellant);
    let critical_area = throat_area / MM2_PER_M2;

    let pressure_difference = chamber_pressure - environment.ambient_pressure;
    let sqrt_rt = (gas_constant * temperature).sqrt();
    let choke_term = (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / 2.0 / (gamma - 1.0));

    pressure_difference * critical_area / sqrt_rt * gamma.sqrt() * choke_term
}

// The nozzle only passes flow below generation once the burst pressure has
// been exceeded; above generation it always runs choked.
fn nozzle_mass_flow(
    mass_generation_rate: f64,
    choked_mass_flow: f64,
    previous_pressure: f64,
    burst_pressure: f64,
) -> f64 {
    if mass_generation_rate < choked_mass_flow {
        if previous_pressure > burst_pressure {
            choked_mass_flow
        } else {
            0.0
        }
    } else {
        choked_mass_flow
    }
}
