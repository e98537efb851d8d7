use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::SimulationError;
use crate::simulation_system::record::SimulationRecord;

/// Collects simulation snapshots and tracks the headline figures of a burn.
pub struct Telemetry {
    pub records: Vec<SimulationRecord>,
    ambient_pressure: f64,
    max_pressure: f64,
    max_pressure_time: f64,
    max_kn: f64,
    max_nozzle_mass_flow: f64,
    burn_time: f64,
}

impl Telemetry {
    pub fn new(ambient_pressure: f64) -> Self {
        Telemetry {
            records: Vec::new(),
            ambient_pressure,
            max_pressure: ambient_pressure,
            max_pressure_time: 0.0,
            max_kn: 0.0,
            max_nozzle_mass_flow: 0.0,
            burn_time: 0.0,
        }
    }

    fn format_pressure(pressure: f64) -> String {
        if pressure.abs() >= 1_000_000.0 {
            format!("{:.3} MPa", pressure / 1_000_000.0)
        } else {
            format!("{:.1} kPa", pressure / 1_000.0)
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 1.0 {
            format!("{:.3} s", elapsed_time)
        } else if elapsed_time >= 1e-3 {
            format!("{:.3} ms", elapsed_time * 1e3)
        } else {
            format!("{:.3} µs", elapsed_time * 1e6)
        }
    }

    pub fn collect(&mut self, record: SimulationRecord) {
        if record.pressure > self.max_pressure {
            self.max_pressure = record.pressure;
            self.max_pressure_time = record.time;
        }
        if record.kn > self.max_kn {
            self.max_kn = record.kn;
        }
        if record.nozzle_mass_flow_rate > self.max_nozzle_mass_flow {
            self.max_nozzle_mass_flow = record.nozzle_mass_flow_rate;
        }
        self.burn_time = record.time;
        self.records.push(record);
    }

    pub fn collect_all<I: IntoIterator<Item = SimulationRecord>>(&mut self, records: I) {
        for record in records {
            self.collect(record);
        }
    }

    pub fn max_pressure(&self) -> f64 {
        self.max_pressure
    }

    pub fn max_kn(&self) -> f64 {
        self.max_kn
    }

    pub fn max_nozzle_mass_flow(&self) -> f64 {
        self.max_nozzle_mass_flow
    }

    pub fn burn_time(&self) -> f64 {
        self.burn_time
    }

    /// `(time, pressure)` pairs for plotting.
    pub fn pressure_series(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|record| (record.time, record.pressure))
            .collect()
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), SimulationError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in &self.records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), SimulationError> {
        let file = File::create(path)?;
        self.write_csv(file)
    }

    pub fn display_summary(&self) {
        println!("--- Burn Summary ---");
        println!("Steps: {}", self.records.len().saturating_sub(1));
        println!("Burn Time: {}", Self::format_time(self.burn_time));
        println!(
            "Max Chamber Pressure: {} ({} gauge) at {}",
            Self::format_pressure(self.max_pressure),
            Self::format_pressure(self.max_pressure - self.ambient_pressure),
            Self::format_time(self.max_pressure_time)
        );
        println!("Max Kn: {:.1}", self.max_kn);
        println!(
            "Max Nozzle Mass Flow: {:.3} kg/s",
            self.max_nozzle_mass_flow
        );
        if let Some(last) = self.records.last() {
            println!(
                "Final State: web {:.3} mm, grain mass {:.4} kg, pressure {}",
                last.web_thickness,
                last.grain_mass,
                Self::format_pressure(last.pressure)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(step_index: usize, time: f64, pressure: f64, kn: f64) -> SimulationRecord {
        SimulationRecord {
            step_index,
            regression_depth: step_index as f64 * 0.1,
            web_thickness: 15.5 - step_index as f64 * 0.2,
            core_diameter: 10.0,
            outer_diameter: 41.0,
            length: 260.0,
            burn_area: kn * 70.0,
            kn,
            throat_area: 70.0,
            critical_area: 70.0e-6,
            duct_area: 95.0,
            erosive_ratio: 95.0 / 70.0,
            erosive_factor: 0.0,
            previous_pressure: 101_000.0,
            burn_rate_a: 8.26e6,
            burn_rate_n: 0.319,
            burn_rate: 4.0e6,
            time,
            grain_volume: 300_000.0,
            free_volume: 100_000.0,
            grain_mass: 0.5,
            mass_generation_rate: 10.0,
            nozzle_mass_flow_rate: pressure / 1e7,
            mass_storage_rate: 0.0,
            stored_mass: 0.0,
            product_density: 0.0,
            pressure,
            choked_mass_flow: pressure / 1e7,
        }
    }

    #[test]
    fn test_tracks_peaks() {
        let mut telemetry = Telemetry::new(101_000.0);
        telemetry.collect_all([
            record(0, 0.0, 101_000.0, 300.0),
            record(1, 1e-8, 5_000_000.0, 310.0),
            record(2, 2e-8, 4_000_000.0, 305.0),
        ]);

        assert_eq!(telemetry.records.len(), 3);
        assert_eq!(telemetry.max_pressure(), 5_000_000.0);
        assert_eq!(telemetry.max_kn(), 310.0);
        assert_eq!(telemetry.max_nozzle_mass_flow(), 0.5);
        assert_eq!(telemetry.burn_time(), 2e-8);
        assert_eq!(telemetry.pressure_series()[1], (1e-8, 5_000_000.0));
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_record() {
        let mut telemetry = Telemetry::new(101_000.0);
        telemetry.collect(record(0, 0.0, 101_000.0, 300.0));
        telemetry.collect(record(1, 1e-8, 2_000_000.0, 301.0));

        let mut buffer = Vec::new();
        telemetry.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("step_index,regression_depth,"));
        assert!(lines[0].contains(",pressure,choked_mass_flow"));
        assert!(lines[2].starts_with("1,"));
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(Telemetry::format_pressure(2_500_000.0), "2.500 MPa");
        assert_eq!(Telemetry::format_pressure(101_000.0), "101.0 kPa");
        assert_eq!(Telemetry::format_time(2.0), "2.000 s");
        assert_eq!(Telemetry::format_time(0.0125), "12.500 ms");
    }
}
