use std::f64::consts::PI;

use crate::constants::G_CM3_MM3_PER_KG;
use crate::motor::configuration::MotorConfiguration;
use crate::motor::grain::GrainSurface;

/// Grain regression model: burn depth advanced by a fixed step, everything
/// else derived from it. Lengths in mm, areas in mm², volumes in mm³.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionSimulation {
    motor: MotorConfiguration,
    simulation_step: f64,
    regression_depth: f64,
}

impl RegressionSimulation {
    pub fn new(motor: MotorConfiguration, simulation_step: f64) -> Self {
        Self::resume(motor, simulation_step, 0)
    }

    /// Starts `step_index` steps into the burn.
    pub fn resume(motor: MotorConfiguration, simulation_step: f64, step_index: usize) -> Self {
        RegressionSimulation {
            motor,
            simulation_step,
            regression_depth: step_index as f64 * simulation_step,
        }
    }

    pub fn step(&mut self) {
        self.regression_depth += self.simulation_step;
    }

    pub fn motor(&self) -> &MotorConfiguration {
        &self.motor
    }

    pub fn simulation_step(&self) -> f64 {
        self.simulation_step
    }

    pub fn regression_depth(&self) -> f64 {
        self.regression_depth
    }

    fn burns(&self, surface: GrainSurface) -> bool {
        !self.motor.grain().inhibited.contains(surface)
    }

    pub fn core_diameter(&self) -> f64 {
        let grain = self.motor.grain();
        if self.burns(GrainSurface::Core) {
            grain.core_diameter + 2.0 * self.regression_depth
        } else {
            grain.core_diameter
        }
    }

    pub fn outer_diameter(&self) -> f64 {
        let grain = self.motor.grain();
        if self.burns(GrainSurface::Outer) {
            grain.diameter - 2.0 * self.regression_depth
        } else {
            grain.diameter
        }
    }

    /// Remaining length of the whole grain stack; every grain loses both ends.
    pub fn total_length(&self) -> f64 {
        let grain = self.motor.grain();
        if self.burns(GrainSurface::Ends) {
            grain.total_length() - 2.0 * f64::from(grain.grain_count) * self.regression_depth
        } else {
            grain.total_length()
        }
    }

    pub fn web_thickness(&self) -> f64 {
        (self.outer_diameter() - self.core_diameter()) / 2.0
    }

    pub fn initial_web_thickness(&self) -> f64 {
        let grain = self.motor.grain();
        (grain.diameter - grain.core_diameter) / 2.0
    }

    /// Initial web minus the depth burned from each regressing radial surface.
    pub fn remaining_web(&self) -> f64 {
        let burning_sides = [GrainSurface::Core, GrainSurface::Outer]
            .into_iter()
            .filter(|surface| self.burns(*surface))
            .count();
        self.initial_web_thickness() - self.regression_depth * burning_sides as f64
    }

    pub fn is_burned_out(&self) -> bool {
        self.web_thickness() <= 0.0 || self.total_length() <= 0.0
    }

    pub fn end_burn_area(&self) -> f64 {
        if !self.burns(GrainSurface::Ends) {
            return 0.0;
        }
        let grain_count = f64::from(self.motor.grain().grain_count);
        let diameter_difference = self.outer_diameter().powi(2) - self.core_diameter().powi(2);
        2.0 * grain_count * PI / 4.0 * diameter_difference
    }

    pub fn core_burn_area(&self) -> f64 {
        if !self.burns(GrainSurface::Core) {
            return 0.0;
        }
        PI * self.core_diameter() * self.total_length()
    }

    pub fn outer_burn_area(&self) -> f64 {
        if !self.burns(GrainSurface::Outer) {
            return 0.0;
        }
        PI * self.outer_diameter() * self.total_length()
    }

    pub fn total_burn_area(&self) -> f64 {
        self.end_burn_area() + self.core_burn_area() + self.outer_burn_area()
    }

    /// Throat area with the erosion allowance applied in proportion to the
    /// web consumed so far.
    pub fn throat_area(&self) -> f64 {
        let initial_web = self.initial_web_thickness();
        let burned_fraction = (initial_web - self.web_thickness()) / initial_web;
        self.motor.nozzle().eroded_throat_area(burned_fraction)
    }

    /// Burning area to throat area ratio.
    pub fn kn(&self) -> f64 {
        self.total_burn_area() / self.throat_area()
    }

    /// Grain annulus cross-section [mm²]
    pub fn grain_cross_section(&self) -> f64 {
        PI / 4.0 * (self.outer_diameter().powi(2) - self.core_diameter().powi(2))
    }

    /// Chamber bore area not occupied by propellant [mm²]
    pub fn duct_area(&self) -> f64 {
        self.motor.chamber().bore_area() - self.grain_cross_section()
    }

    pub fn grain_volume(&self) -> f64 {
        self.grain_cross_section() * self.total_length()
    }

    /// Chamber volume not occupied by propellant [mm³]
    pub fn free_volume(&self) -> f64 {
        self.motor.chamber().volume() - self.grain_volume()
    }

    pub fn grain_mass(&self) -> f64 {
        self.motor.grain().actual_density() * self.grain_volume() / G_CM3_MM3_PER_KG
    }
}
