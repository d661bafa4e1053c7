//! Delta-v budget module.
//!
//! Available capability via the Tsiolkovsky equation against a required
//! ledger of maneuvers, a perigee-lowering deorbit burn, and annual drag
//! makeup. Infeasible designs report negative remaining propellant and a
//! critical status; they are diagnostics, not errors.

use mission_core::constants::{
    ATMOSPHERIC_INTERFACE_ALTITUDE_KM, EARTH_EQUATORIAL_RADIUS_KM, G0, MU_EARTH_KM3_S2,
    SECONDS_PER_YEAR,
};
use mission_core::units::{km_to_m, kms_to_ms};
use mission_environment::atmospheric_density_kg_m3;
use mission_report::Status;
use mission_spacecraft::{Maneuver, PropulsionSystem};
use serde::Serialize;
use thiserror::Error;

/// Margin thresholds: nominal at 10 % or better, warning down to zero.
const MARGIN_NOMINAL_MIN: f64 = 0.10;
const MARGIN_WARNING_MIN: f64 = 0.0;

/// Computed delta-v budget for one design point.
#[derive(Debug, Clone, Serialize)]
pub struct DeltaVReport {
    pub available_m_s: f64,
    pub maneuver_total_m_s: f64,
    pub deorbit_m_s: f64,
    pub drag_makeup_per_year_m_s: f64,
    pub required_m_s: f64,
    pub margin_m_s: f64,
    /// Margin over required; 1.0 when nothing is required at all.
    pub margin_fraction: f64,
    /// Propellant left after the required ledger; negative means infeasible.
    pub propellant_remaining_kg: f64,
    pub status: Status,
}

/// Input-domain violations rejected before computation.
#[derive(Debug, Error)]
pub enum DeltaVError {
    #[error("dry mass must be positive, got {0} kg")]
    InvalidDryMass(f64),
    #[error("ballistic coefficient must be positive, got {0} kg/m²")]
    InvalidBallisticCoefficient(f64),
    #[error("mission lifetime must be non-negative, got {0} years")]
    InvalidLifetime(f64),
    #[error("specific impulse must be positive when propellant is loaded, got {0} s")]
    InvalidSpecificImpulse(f64),
    #[error("maneuver '{name}' has negative delta-v {delta_v} m/s")]
    NegativeManeuver { name: String, delta_v: f64 },
}

/// Compute the full delta-v budget.
///
/// `avg_altitude_km` is the representative mean altitude from the orbital
/// state; `ballistic_coefficient_kg_m2` is m/(Cd·A) and drives drag makeup.
pub fn compute_delta_v_budget(
    propulsion: &PropulsionSystem,
    maneuvers: &[Maneuver],
    dry_mass_kg: f64,
    avg_altitude_km: f64,
    lifetime_years: f64,
    ballistic_coefficient_kg_m2: f64,
) -> Result<DeltaVReport, DeltaVError> {
    if dry_mass_kg <= 0.0 {
        return Err(DeltaVError::InvalidDryMass(dry_mass_kg));
    }
    if ballistic_coefficient_kg_m2 <= 0.0 {
        return Err(DeltaVError::InvalidBallisticCoefficient(
            ballistic_coefficient_kg_m2,
        ));
    }
    if lifetime_years < 0.0 {
        return Err(DeltaVError::InvalidLifetime(lifetime_years));
    }
    let isp = propulsion.isp_seconds();
    if !matches!(propulsion, PropulsionSystem::None) && propulsion.propellant_kg() > 0.0 && isp <= 0.0
    {
        return Err(DeltaVError::InvalidSpecificImpulse(isp));
    }
    for maneuver in maneuvers {
        if maneuver.delta_v_m_s < 0.0 {
            return Err(DeltaVError::NegativeManeuver {
                name: maneuver.name.clone(),
                delta_v: maneuver.delta_v_m_s,
            });
        }
    }

    let available = available_delta_v_m_s(propulsion, dry_mass_kg);
    let maneuver_total: f64 = maneuvers.iter().map(|m| m.delta_v_m_s).sum();
    let deorbit = deorbit_delta_v_m_s(avg_altitude_km);
    let drag_per_year = drag_makeup_per_year_m_s(avg_altitude_km, ballistic_coefficient_kg_m2);
    let required = maneuver_total + deorbit + drag_per_year * lifetime_years;

    let margin = available - required;
    // Zero required delta-v is degenerate but fine: full margin by definition.
    let margin_fraction = if required > 0.0 { margin / required } else { 1.0 };
    let status = Status::from_margin(margin_fraction, MARGIN_NOMINAL_MIN, MARGIN_WARNING_MIN);

    let propellant_remaining =
        propellant_remaining_kg(propulsion, dry_mass_kg, required);

    Ok(DeltaVReport {
        available_m_s: available,
        maneuver_total_m_s: maneuver_total,
        deorbit_m_s: deorbit,
        drag_makeup_per_year_m_s: drag_per_year,
        required_m_s: required,
        margin_m_s: margin,
        margin_fraction,
        propellant_remaining_kg: propellant_remaining,
        status,
    })
}

/// Tsiolkovsky capability, Δv = Isp · g0 · ln(wet/dry). Zero without propulsion.
pub fn available_delta_v_m_s(propulsion: &PropulsionSystem, dry_mass_kg: f64) -> f64 {
    let propellant = propulsion.propellant_kg();
    if matches!(propulsion, PropulsionSystem::None) || propellant <= 0.0 {
        return 0.0;
    }
    let wet = dry_mass_kg + propellant;
    propulsion.isp_seconds() * G0 * (wet / dry_mass_kg).ln()
}

/// Perigee-lowering burn from a circular orbit down to the atmospheric
/// interface, estimated as the first impulse of a Hohmann-style transfer.
pub fn deorbit_delta_v_m_s(altitude_km: f64) -> f64 {
    if altitude_km <= ATMOSPHERIC_INTERFACE_ALTITUDE_KM {
        return 0.0;
    }
    let r1 = EARTH_EQUATORIAL_RADIUS_KM + altitude_km;
    let r2 = EARTH_EQUATORIAL_RADIUS_KM + ATMOSPHERIC_INTERFACE_ALTITUDE_KM;
    let v_circular = (MU_EARTH_KM3_S2 / r1).sqrt();
    // Retro burn onto the transfer ellipse whose perigee is the interface.
    let dv_km_s = v_circular * (1.0 - (2.0 * r2 / (r1 + r2)).sqrt());
    kms_to_ms(dv_km_s)
}

/// Annual drag-makeup budget at the given altitude.
///
/// Drag deceleration a = ρ v² / (2β) integrated over one year; the density
/// floor in the atmosphere model keeps this finite at high altitude.
pub fn drag_makeup_per_year_m_s(altitude_km: f64, ballistic_coefficient_kg_m2: f64) -> f64 {
    let r_m = km_to_m(EARTH_EQUATORIAL_RADIUS_KM + altitude_km);
    let mu_m3_s2 = MU_EARTH_KM3_S2 * 1.0e9;
    let v_m_s = (mu_m3_s2 / r_m).sqrt();
    let rho = atmospheric_density_kg_m3(altitude_km);
    let decel = rho * v_m_s * v_m_s / (2.0 * ballistic_coefficient_kg_m2);
    decel * SECONDS_PER_YEAR
}

/// Invert Tsiolkovsky for the required ledger and report what is left.
///
/// Negative remaining propellant signals an infeasible design; the status
/// already carries the verdict so no error is raised.
fn propellant_remaining_kg(
    propulsion: &PropulsionSystem,
    dry_mass_kg: f64,
    required_m_s: f64,
) -> f64 {
    if matches!(propulsion, PropulsionSystem::None) {
        return 0.0;
    }
    let isp = propulsion.isp_seconds();
    if isp <= 0.0 {
        return 0.0;
    }
    let wet = dry_mass_kg + propulsion.propellant_kg();
    wet - dry_mass_kg * (required_m_s / (isp * G0)).exp()
}
