use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use solid_motor_simulation::{
    config::parse_motor_file, ChamberGeometry, Environment, GrainGeometry, GrainSurface,
    InhibitedSurfaces, MotorConfiguration, NozzleGeometry, PressureSimulation, Propellant,
    SimulationError, SimulationRecord, Telemetry,
};

// Helper function to create the four-grain reference motor
fn create_reference_motor(propellant: Propellant) -> MotorConfiguration {
    let grain = GrainGeometry::new(propellant, InhibitedSurfaces::NONE, 10.0, 65.0, 41.0, 4);
    let chamber = ChamberGeometry::new(300.0, 41.25, grain);
    let nozzle = NozzleGeometry::new(9.5, 30f64.to_radians(), 12f64.to_radians(), 0.0);
    MotorConfiguration::new(chamber, nozzle).expect("reference motor should be valid")
}

fn create_random_motor(rng: &mut StdRng) -> MotorConfiguration {
    let propellant = Propellant::ALL[rng.gen_range(0..Propellant::ALL.len())];
    let inhibited: InhibitedSurfaces = [GrainSurface::Outer, GrainSurface::Core, GrainSurface::Ends]
        .into_iter()
        .filter(|_| rng.gen_bool(0.3))
        .collect();

    let diameter = rng.gen_range(20.0..80.0);
    let core_diameter = diameter * rng.gen_range(0.15..0.5);
    let length = rng.gen_range(30.0..120.0);
    let grain_count = rng.gen_range(1..5);
    let grain = GrainGeometry::new(
        propellant,
        inhibited,
        core_diameter,
        length,
        diameter,
        grain_count,
    );

    let chamber = ChamberGeometry::new(
        length * f64::from(grain_count) + rng.gen_range(5.0..50.0),
        diameter + rng.gen_range(0.1..3.0),
        grain,
    );
    let nozzle = NozzleGeometry::new(
        core_diameter * rng.gen_range(0.6..1.2),
        rng.gen_range(20f64..45.0).to_radians(),
        rng.gen_range(8f64..15.0).to_radians(),
        rng.gen_range(0.0..1.0),
    );
    MotorConfiguration::new(chamber, nozzle).expect("random motor should be valid")
}

fn run_steps(
    simulation: &mut PressureSimulation,
    steps: usize,
) -> Vec<Result<SimulationRecord, String>> {
    let mut results = vec![Ok(simulation.snapshot())];
    for _ in 0..steps {
        let result = simulation.step().map_err(|e| e.to_string());
        let failed = result.is_err();
        results.push(result);
        if failed {
            break;
        }
    }
    results
}

fn record_bits(record: &SimulationRecord) -> Vec<u64> {
    [
        record.regression_depth,
        record.time,
        record.previous_pressure,
        record.pressure,
        record.burn_rate,
        record.mass_generation_rate,
        record.nozzle_mass_flow_rate,
        record.stored_mass,
        record.kn,
        record.throat_area,
    ]
    .iter()
    .map(|value| value.to_bits())
    .collect()
}

#[test]
fn test_reference_motor_burn() {
    println!("INTEGRATION TEST: KNSU reference motor, 834 steps");

    let motor = create_reference_motor(Propellant::Knsu);
    let mut simulation = PressureSimulation::new(motor, Environment::default(), 0.0294)
        .expect("simulation should initialise");
    let records = simulation
        .run(834)
        .expect("KNSU has no upper pressure bound");

    assert_eq!(records.len(), 835);
    assert_eq!(
        records[0].pressure, 101_000.0,
        "Burn should start at ambient pressure"
    );

    for window in records[..600].windows(2) {
        assert!(
            window[1].pressure > window[0].pressure,
            "Pressure should rise through ignition, step {}: {} -> {}",
            window[1].step_index,
            window[0].pressure,
            window[1].pressure
        );
    }

    for record in &records {
        assert!(
            record.is_finite(),
            "Step {} produced a non-finite value",
            record.step_index
        );
        assert!(
            record.pressure >= 0.0,
            "Step {} produced negative pressure",
            record.step_index
        );
    }

    for window in records.windows(2) {
        assert!(
            window[1].time > window[0].time,
            "Time should advance every step"
        );
    }

    let mut telemetry = Telemetry::new(101_000.0);
    telemetry.collect_all(records.iter().copied());
    telemetry.display_summary();
    assert!(telemetry.max_pressure() > records[1].pressure);
}

#[test]
fn test_kndx_overpressure_halts_run() {
    println!("INTEGRATION TEST: KNDX outside its burn rate correlation");

    let motor = create_reference_motor(Propellant::Kndx);
    let mut simulation = PressureSimulation::new(motor, Environment::default(), 0.0294)
        .expect("simulation should initialise");

    match simulation.run(834) {
        Err(SimulationError::BurnRateOutOfRange {
            propellant,
            pressure,
        }) => {
            assert_eq!(propellant, Propellant::Kndx);
            assert!(pressure > 11_200_000.0);
            assert_eq!(simulation.state().pressure, pressure);
        }
        other => panic!(
            "Expected a burn rate range error, got {:?}",
            other.map(|r| r.len())
        ),
    }
}

#[test]
fn test_identical_simulations_are_bit_identical() {
    println!("INTEGRATION TEST: determinism across random motors");

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..25 {
        let motor = create_random_motor(&mut rng);
        let step = rng.gen_range(0.01..0.1);

        let mut first = PressureSimulation::new(motor.clone(), Environment::default(), step)
            .expect("simulation should initialise");
        let mut second = PressureSimulation::new(motor, Environment::default(), step)
            .expect("simulation should initialise");

        let first_results = run_steps(&mut first, 120);
        let second_results = run_steps(&mut second, 120);
        assert_eq!(first_results.len(), second_results.len());

        for (a, b) in first_results.iter().zip(&second_results) {
            match (a, b) {
                (Ok(a), Ok(b)) => assert_eq!(record_bits(a), record_bits(b)),
                (Err(a), Err(b)) => assert_eq!(a, b),
                _ => panic!("Simulations diverged: {:?} vs {:?}", a.is_ok(), b.is_ok()),
            }
        }
    }
}

#[test]
fn test_core_burner_file_runs_to_burnout() {
    println!("INTEGRATION TEST: KNDX core burner from motor file");

    let setup = parse_motor_file(include_str!("../motors/kndx_core_burner.toml"))
        .expect("motor file should parse");
    assert!(setup.simulation.until_burnout);
    assert!(setup.motor.grain().inhibited.contains(GrainSurface::Outer));

    let mut simulation =
        PressureSimulation::new(setup.motor, setup.environment, setup.simulation.step_mm)
            .expect("simulation should initialise");
    let records = simulation
        .run_until_burnout(setup.simulation.steps)
        .expect("pressure should stay inside the KNDX correlation");

    let last = records.last().unwrap();
    assert!(last.web_thickness <= 0.0, "Run should end at burnout");
    assert!(records.len() < setup.simulation.steps + 1);
    // Outer wall and ends are inhibited, so only the core moves.
    assert_eq!(last.outer_diameter, 38.0);
    assert_eq!(last.length, 150.0);
    // Erosion allowance fully applied once the web is gone.
    assert!(last.throat_area > records[0].throat_area);
    for record in &records {
        assert!(record.is_finite());
        assert!(record.pressure > 0.0 && record.pressure <= 11_200_000.0);
    }
}

#[test]
fn test_reference_file_matches_built_motor() {
    let setup = parse_motor_file(include_str!("../motors/knsu_reference.toml"))
        .expect("motor file should parse");
    let built = create_reference_motor(Propellant::Knsu);

    assert_eq!(setup.motor.grain(), built.grain());
    assert_eq!(setup.motor.chamber().length, built.chamber().length);
    assert_eq!(setup.environment, Environment::default());

    let mut from_file =
        PressureSimulation::new(setup.motor, setup.environment, setup.simulation.step_mm)
            .expect("simulation should initialise");
    let mut from_code = PressureSimulation::new(built, Environment::default(), 0.0294)
        .expect("simulation should initialise");
    for _ in 0..50 {
        let a = from_file.step().unwrap();
        let b = from_code.step().unwrap();
        assert_eq!(a.pressure.to_bits(), b.pressure.to_bits());
    }
}

#[test]
fn test_csv_export() {
    let motor = create_reference_motor(Propellant::Knsu);
    let mut simulation = PressureSimulation::new(motor, Environment::default(), 0.0294)
        .expect("simulation should initialise");
    let mut telemetry = Telemetry::new(simulation.environment().ambient_pressure);
    telemetry.collect_all(simulation.run(20).unwrap());

    let mut buffer = Vec::new();
    telemetry
        .write_csv(&mut buffer)
        .expect("CSV export should succeed");
    let text = String::from_utf8(buffer).unwrap();

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers().unwrap().clone();
    let pressure_column = headers.iter().position(|h| h == "pressure").unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), 21);
    assert_eq!(rows[0][pressure_column].parse::<f64>().unwrap(), 101_000.0);
    assert_eq!(
        rows[20][pressure_column].parse::<f64>().unwrap(),
        telemetry.records[20].pressure
    );
}
