use std::path::PathBuf;

use clap::Parser;
use solid_motor_simulation::config::{load_motor_file, SimulationSection, SimulationSetup};
use solid_motor_simulation::*;

#[derive(Parser, Debug)]
#[command(
    name = "main",
    about = "Solid rocket motor internal ballistics simulator"
)]
struct Args {
    /// Motor description file (TOML); the KNSU reference motor when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the propellant of the motor
    #[arg(short, long)]
    propellant: Option<Propellant>,

    /// Number of steps to run
    #[arg(long)]
    steps: Option<usize>,

    /// Regression per step [mm]
    #[arg(long)]
    step: Option<f64>,

    /// Stop as soon as the grain web is consumed
    #[arg(long)]
    until_burnout: bool,

    /// Write every step to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn reference_setup() -> Result<SimulationSetup, SimulationError> {
    let grain = GrainGeometry::new(
        Propellant::Knsu,
        InhibitedSurfaces::NONE,
        10.0,
        65.0,
        41.0,
        4,
    );
    let chamber = ChamberGeometry::new(300.0, 41.25, grain);
    let nozzle = NozzleGeometry::new(9.5, 30f64.to_radians(), 12f64.to_radians(), 0.0);

    Ok(SimulationSetup {
        motor: MotorConfiguration::new(chamber, nozzle)?,
        environment: Environment::default(),
        simulation: SimulationSection::default(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut setup = match &args.config {
        Some(path) => load_motor_file(path)?,
        None => reference_setup()?,
    };

    if let Some(propellant) = args.propellant {
        let mut chamber = setup.motor.chamber().clone();
        chamber.grain.propellant = propellant;
        setup.motor = MotorConfiguration::new(chamber, setup.motor.nozzle().clone())?;
    }
    let steps = args.steps.unwrap_or(setup.simulation.steps);
    let step = args.step.unwrap_or(setup.simulation.step_mm);
    let until_burnout = args.until_burnout || setup.simulation.until_burnout;

    let grain = setup.motor.grain();
    println!(
        "Simulating {} x {} grain(s), Kn at ignition {:.1}, {} steps of {} mm",
        grain.grain_count,
        grain.propellant,
        RegressionSimulation::new(setup.motor.clone(), step).kn(),
        steps,
        step
    );

    let mut simulation = PressureSimulation::new(setup.motor, setup.environment, step)?;
    let mut telemetry = Telemetry::new(simulation.environment().ambient_pressure);
    telemetry.collect(simulation.snapshot());

    for _ in 0..steps {
        if until_burnout && simulation.regression().is_burned_out() {
            println!("Grain burned out. Ending simulation.");
            break;
        }
        match simulation.step() {
            Ok(record) => telemetry.collect(record),
            Err(e) => {
                println!("Error during simulation step: {}", e);
                break;
            }
        }
    }

    telemetry.display_summary();

    if let Some(path) = &args.csv {
        telemetry.export_csv(path)?;
        let rows = telemetry.records.len();
        println!("Wrote {} rows to {}", rows, path.display());
    }

    Ok(())
}
