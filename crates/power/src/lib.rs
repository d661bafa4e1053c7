//! Power budget module.
//!
//! Pure transform from orbit, spacecraft, and subsystem loads to a
//! generation/consumption/battery report. Degenerate-but-valid designs
//! (no generation, no battery) surface as critical statuses, not errors.

use mission_core::constants::SOLAR_FLUX_W_M2;
use mission_environment::{beta_angle_deg, eclipse_duration_min, eclipse_fraction};
use mission_orbits::{OrbitError, OrbitalElements, derive_orbital_state};
use mission_report::Status;
use mission_spacecraft::{SpacecraftConfig, SubsystemPowerModel};
use serde::Serialize;
use thiserror::Error;

/// Representative triple-junction cell efficiency.
const CELL_EFFICIENCY: f64 = 0.29;
/// Combined cosine/pointing/packing loss factor applied to the flat-plate peak.
const COSINE_LOSS_FACTOR: f64 = 0.75;
/// Linear array degradation per year of mission life.
const ANNUAL_DEGRADATION: f64 = 0.025;

/// Margin thresholds: nominal at 20 % or better, warning down to zero.
const MARGIN_NOMINAL_MIN: f64 = 0.20;
const MARGIN_WARNING_MIN: f64 = 0.0;
/// Depth-of-discharge thresholds per LEO battery-cycling guidance.
const DOD_WARNING_MAX: f64 = 0.30;
const DOD_CRITICAL_MAX: f64 = 0.50;

/// Computed power budget for one design point.
#[derive(Debug, Clone, Serialize)]
pub struct PowerReport {
    pub peak_generation_w: f64,
    pub avg_generation_w: f64,
    pub eol_generation_w: f64,
    pub avg_consumption_w: f64,
    /// (generation - consumption) / generation at beginning of life.
    pub power_margin: f64,
    pub margin_status: Status,
    /// Same margin evaluated against end-of-life generation.
    pub eol_margin: f64,
    pub eol_status: Status,
    pub eclipse_fraction: f64,
    pub eclipse_duration_min: f64,
    /// Eclipse energy deficit over battery capacity; may exceed 1.
    pub battery_depth_of_discharge: f64,
    pub battery_status: Status,
}

/// Input-domain violations rejected before computation.
#[derive(Debug, Error)]
pub enum PowerError {
    #[error(transparent)]
    Orbit(#[from] OrbitError),
    #[error("solar array area must be non-negative, got {0} m²")]
    InvalidArrayArea(f64),
    #[error("battery capacity must be non-negative, got {0} Wh")]
    InvalidBatteryCapacity(f64),
    #[error("mission lifetime must be non-negative, got {0} years")]
    InvalidLifetime(f64),
    #[error("subsystem '{name}' has duty cycle {duty} outside [0, 1]")]
    InvalidDutyCycle { name: String, duty: f64 },
}

/// Compute the full power analysis for one orbit/spacecraft/load set.
pub fn compute_power_analysis(
    elements: &OrbitalElements,
    spacecraft: &SpacecraftConfig,
    subsystems: &SubsystemPowerModel,
    lifetime_years: f64,
) -> Result<PowerReport, PowerError> {
    let state = derive_orbital_state(elements)?;
    if spacecraft.solar_array_area_m2 < 0.0 {
        return Err(PowerError::InvalidArrayArea(spacecraft.solar_array_area_m2));
    }
    if spacecraft.battery_capacity_wh < 0.0 {
        return Err(PowerError::InvalidBatteryCapacity(
            spacecraft.battery_capacity_wh,
        ));
    }
    if lifetime_years < 0.0 {
        return Err(PowerError::InvalidLifetime(lifetime_years));
    }
    for load in &subsystems.loads {
        if !(0.0..=1.0).contains(&load.duty_cycle) {
            return Err(PowerError::InvalidDutyCycle {
                name: load.name.clone(),
                duty: load.duty_cycle,
            });
        }
    }

    let beta_deg = beta_angle_deg(elements.inclination_deg);
    let fraction = eclipse_fraction(state.mean_altitude_km, beta_deg);
    let eclipse_min = eclipse_duration_min(state.period_seconds, fraction);

    let peak = spacecraft.solar_array_area_m2 * SOLAR_FLUX_W_M2 * CELL_EFFICIENCY
        * COSINE_LOSS_FACTOR;
    // Illuminated-fraction-weighted orbit average.
    let avg_generation = peak * (1.0 - fraction);
    let eol_generation = avg_generation * (1.0 - ANNUAL_DEGRADATION * lifetime_years).max(0.0);
    let avg_consumption = subsystems.average_consumption_w();

    let (power_margin, margin_status) = classify_margin(avg_generation, avg_consumption);
    let (eol_margin, eol_status) = classify_margin(eol_generation, avg_consumption);

    let (dod, battery_status) = battery_depth_of_discharge(
        avg_consumption,
        eclipse_min,
        spacecraft.battery_capacity_wh,
    );

    Ok(PowerReport {
        peak_generation_w: peak,
        avg_generation_w: avg_generation,
        eol_generation_w: eol_generation,
        avg_consumption_w: avg_consumption,
        power_margin,
        margin_status,
        eol_margin,
        eol_status,
        eclipse_fraction: fraction,
        eclipse_duration_min: eclipse_min,
        battery_depth_of_discharge: dod,
        battery_status,
    })
}

/// Margin against generation; zero generation with nonzero consumption is a
/// degenerate-but-valid design reported as a full negative margin.
fn classify_margin(generation_w: f64, consumption_w: f64) -> (f64, Status) {
    if generation_w <= 0.0 {
        return if consumption_w > 0.0 {
            (-1.0, Status::Critical)
        } else {
            (0.0, Status::Warning)
        };
    }
    let margin = (generation_w - consumption_w) / generation_w;
    (
        margin,
        Status::from_margin(margin, MARGIN_NOMINAL_MIN, MARGIN_WARNING_MIN),
    )
}

/// Eclipse energy deficit over battery capacity.
///
/// An absent or zero-capacity battery facing a nonzero eclipse deficit pins
/// the depth of discharge at 1 and reports critical rather than dividing by
/// zero; a dire design point is still a valid one.
fn battery_depth_of_discharge(
    consumption_w: f64,
    eclipse_duration_min: f64,
    battery_capacity_wh: f64,
) -> (f64, Status) {
    let deficit_wh = consumption_w * eclipse_duration_min / 60.0;
    if deficit_wh <= 0.0 {
        return (0.0, Status::Nominal);
    }
    if battery_capacity_wh <= 0.0 {
        return (1.0, Status::Critical);
    }
    let dod = deficit_wh / battery_capacity_wh;
    (dod, Status::from_load(dod, DOD_WARNING_MAX, DOD_CRITICAL_MAX))
}
