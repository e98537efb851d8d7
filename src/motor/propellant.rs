use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::PASCALS_PER_MEGAPASCAL;
use crate::errors::SimulationError;

/// Potassium nitrate based "rocket candy" propellants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Propellant {
    Knsb,
    Knsu,
    Kndx,
    Kner,
    Knmn,
}

/// Saint-Robert's law coefficients, `r = a · Pc^n` with `Pc` in MPa and `r` in mm/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BurnRateCoefficients {
    pub a: f64,
    pub n: f64,
}

impl BurnRateCoefficients {
    pub const fn new(a: f64, n: f64) -> Self {
        BurnRateCoefficients { a, n }
    }

    /// Linear burn rate [mm/s] at `pressure` [Pa].
    pub fn burn_rate(&self, pressure: f64) -> f64 {
        self.a * (pressure / PASCALS_PER_MEGAPASCAL).powf(self.n)
    }
}

// Upper pressure bound [Pa] of each band, ascending. A pressure equal to a
// bound belongs to the lower band.
const KNDX_BANDS: [(f64, BurnRateCoefficients); 5] = [
    (779_000.0, BurnRateCoefficients::new(8.875, 0.619)),
    (2_572_000.0, BurnRateCoefficients::new(7.553, -0.009)),
    (5_930_000.0, BurnRateCoefficients::new(3.841, 0.688)),
    (8_502_000.0, BurnRateCoefficients::new(17.2, -0.148)),
    (11_200_000.0, BurnRateCoefficients::new(4.775, 0.422)),
];

// Documented for 0.101 to 10.3 MPa, applied at any pressure.
const KNSU_COEFFICIENTS: BurnRateCoefficients = BurnRateCoefficients::new(8_260_000.0, 0.319);

// No correlation available yet.
const PLACEHOLDER_COEFFICIENTS: BurnRateCoefficients = BurnRateCoefficients::new(1.0, 1.0);

impl Propellant {
    pub const ALL: [Propellant; 5] = [
        Propellant::Knsb,
        Propellant::Knsu,
        Propellant::Kndx,
        Propellant::Kner,
        Propellant::Knmn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Propellant::Knsb => "KNSB",
            Propellant::Knsu => "KNSU",
            Propellant::Kndx => "KNDX",
            Propellant::Kner => "KNER",
            Propellant::Knmn => "KNMN",
        }
    }

    /// Ideal grain mass density [g/cm³].
    pub fn density(&self) -> f64 {
        match self {
            Propellant::Knsb => 1.841,
            Propellant::Knsu => 1.889,
            Propellant::Kndx => 1.879,
            Propellant::Kner => 1.820,
            Propellant::Knmn => 1.854,
        }
    }

    /// Ratio of specific heats of the dynamic (zero lag) gas-particle mixture.
    pub fn ratio_of_specific_heats_two_phase(&self) -> f64 {
        match self {
            Propellant::Knsb => 1.042,
            Propellant::Knsu => 1.044,
            Propellant::Kndx => 1.043,
            Propellant::Kner => 1.043,
            Propellant::Knmn => 1.042,
        }
    }

    /// Ratio of specific heats of the static gas-particle mixture.
    pub fn ratio_of_specific_heats_mixture(&self) -> f64 {
        match self {
            Propellant::Knsb => 1.136,
            Propellant::Knsu => 1.133,
            Propellant::Kndx => 1.131,
            Propellant::Kner => 1.139,
            Propellant::Knmn => 1.136,
        }
    }

    /// Effective molecular weight of the products [kg/kmol].
    pub fn effective_molecular_weight(&self) -> f64 {
        match self {
            Propellant::Knsb => 39.90,
            Propellant::Knsu => 41.98,
            Propellant::Kndx => 42.39,
            Propellant::Kner => 38.78,
            Propellant::Knmn => 39.83,
        }
    }

    /// Adiabatic flame temperature [K].
    pub fn chamber_temperature(&self) -> f64 {
        match self {
            Propellant::Knsb => 1600.0,
            Propellant::Knsu => 1720.0,
            Propellant::Kndx => 1710.0,
            Propellant::Kner => 1608.0,
            Propellant::Knmn => 1616.0,
        }
    }

    /// Burn rate coefficients valid at `pressure` [Pa].
    ///
    /// KNDX is banded up to 11.2 MPa and anything outside the bands is an
    /// error. KNSU has a single pair. The remaining propellants return the
    /// `(1, 1)` placeholder, which produces physically meaningless burn rates.
    pub fn burn_rate_coefficients(
        &self,
        pressure: f64,
    ) -> Result<BurnRateCoefficients, SimulationError> {
        match self {
            Propellant::Kndx => {
                if pressure.is_nan() || pressure < 0.0 {
                    return Err(self.out_of_range(pressure));
                }
                KNDX_BANDS
                    .iter()
                    .find(|(upper, _)| pressure <= *upper)
                    .map(|(_, coefficients)| *coefficients)
                    .ok_or_else(|| self.out_of_range(pressure))
            }
            Propellant::Knsu => Ok(KNSU_COEFFICIENTS),
            Propellant::Knsb | Propellant::Kner | Propellant::Knmn => Ok(PLACEHOLDER_COEFFICIENTS),
        }
    }

    /// Linear burn rate [mm/s] at `pressure` [Pa], without erosive burning.
    pub fn linear_burn_rate(&self, pressure: f64) -> Result<f64, SimulationError> {
        Ok(self.burn_rate_coefficients(pressure)?.burn_rate(pressure))
    }

    fn out_of_range(&self, pressure: f64) -> SimulationError {
        SimulationError::BurnRateOutOfRange {
            propellant: *self,
            pressure,
        }
    }
}

impl fmt::Display for Propellant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Propellant {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Propellant::ALL
            .iter()
            .copied()
            .find(|propellant| propellant.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                SimulationError::ConfigurationError(format!("Unknown propellant '{}'", s))
            })
    }
}
