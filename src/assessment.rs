//! Assessment orchestrator that runs every budget module over one scenario.
//!
//! Performs no physics itself: each module stays independently callable and
//! mutually independent, so the sequencing here is convenience, not
//! coupling.

use crate::scenario::MissionScenario;
use mission_constellation::{ConstellationMetrics, WalkerError, compute_constellation_metrics};
use mission_deltav::{DeltaVError, DeltaVReport, compute_delta_v_budget};
use mission_environment::{annual_dose_krad, shielding_attenuation};
use mission_lifetime::{DecayError, DecayOutcome, propagate_decay};
use mission_link::{
    LinkError, LinkSample, MAX_ELEVATION_DEG, MIN_ELEVATION_DEG, evaluate_sample,
    link_margin_profile,
};
use mission_orbits::{OrbitError, derive_orbital_state};
use mission_power::{PowerError, PowerReport, compute_power_analysis};
use mission_radiation::mission_total_krad;
use mission_report::Status;
use serde::Serialize;
use thiserror::Error;

/// Elevation samples in the assessment's link sweep (5° steps over [5°, 90°]).
const LINK_PROFILE_SAMPLES: usize = 18;

/// Link margin at the elevation floor for a nominal verdict, in dB.
const LINK_NOMINAL_MARGIN_DB: f64 = 3.0;

/// Mission dose for a nominal/warning verdict, in krad behind shielding.
const DOSE_NOMINAL_MAX_KRAD: f64 = 30.0;
const DOSE_WARNING_MAX_KRAD: f64 = 100.0;

/// Deorbit-guideline horizon in years.
const DEORBIT_GUIDELINE_YEARS: f64 = 25.0;

/// Link verdict condensed from the elevation profile.
#[derive(Debug, Clone, Serialize)]
pub struct LinkSummary {
    /// Worst-case sample, at the elevation floor.
    pub horizon: LinkSample,
    /// Best-case sample, at zenith.
    pub zenith: LinkSample,
    pub status: Status,
}

/// Radiation verdict at the scenario's shielding thickness.
#[derive(Debug, Clone, Serialize)]
pub struct RadiationSummary {
    pub annual_unshielded_krad: f64,
    pub shielding_attenuation: f64,
    pub mission_total_krad: f64,
    pub status: Status,
}

/// Decay verdict against the deorbit guideline.
#[derive(Debug, Clone, Serialize)]
pub struct LifetimeSummary {
    pub outcome: DecayOutcome,
    pub status: Status,
}

/// Aggregated assessment across every budget module.
#[derive(Debug, Clone, Serialize)]
pub struct MissionAssessment {
    pub scenario: String,
    pub orbital_period_min: f64,
    pub mean_altitude_km: f64,
    pub power: PowerReport,
    pub delta_v: DeltaVReport,
    pub link: LinkSummary,
    pub radiation: RadiationSummary,
    pub constellation: Option<ConstellationMetrics>,
    pub lifetime: LifetimeSummary,
    /// Severity join of every module status.
    pub overall_status: Status,
}

/// Top-level assessment error: input-domain violations from any module.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("orbit derivation failed: {0}")]
    Orbit(#[from] OrbitError),
    #[error("power budget failed: {0}")]
    Power(#[from] PowerError),
    #[error("delta-v budget failed: {0}")]
    DeltaV(#[from] DeltaVError),
    #[error("link budget failed: {0}")]
    Link(#[from] LinkError),
    #[error("constellation geometry failed: {0}")]
    Constellation(#[from] WalkerError),
    #[error("decay propagation failed: {0}")]
    Decay(#[from] DecayError),
    #[error("spacecraft drag geometry is degenerate (zero area or drag coefficient)")]
    DegenerateDragGeometry,
}

/// Run every budget module over one scenario and aggregate the verdict.
pub fn assess_mission(scenario: &MissionScenario) -> Result<MissionAssessment, AssessmentError> {
    let state = derive_orbital_state(&scenario.elements)?;
    let ballistic_coefficient = scenario
        .spacecraft
        .ballistic_coefficient_kg_m2()
        .ok_or(AssessmentError::DegenerateDragGeometry)?;

    let power = compute_power_analysis(
        &scenario.elements,
        &scenario.spacecraft,
        &scenario.subsystems,
        scenario.lifetime_years,
    )?;

    let delta_v = compute_delta_v_budget(
        &scenario.propulsion,
        &scenario.maneuvers,
        scenario.spacecraft.dry_mass_kg,
        state.mean_altitude_km,
        scenario.lifetime_years,
        ballistic_coefficient,
    )?;

    let link = summarize_link(scenario, state.mean_altitude_km)?;
    let radiation = summarize_radiation(scenario, state.mean_altitude_km);

    let constellation = scenario
        .walker
        .as_ref()
        .map(|params| compute_constellation_metrics(params, scenario.spacecraft.dry_mass_kg))
        .transpose()?;

    let lifetime = summarize_lifetime(scenario, ballistic_coefficient)?;

    let overall_status = power
        .margin_status
        .worst(power.eol_status)
        .worst(power.battery_status)
        .worst(delta_v.status)
        .worst(link.status)
        .worst(radiation.status)
        .worst(lifetime.status);

    Ok(MissionAssessment {
        scenario: scenario.name.clone(),
        orbital_period_min: state.period_seconds / 60.0,
        mean_altitude_km: state.mean_altitude_km,
        power,
        delta_v,
        link,
        radiation,
        constellation,
        lifetime,
        overall_status,
    })
}

fn summarize_link(
    scenario: &MissionScenario,
    mean_altitude_km: f64,
) -> Result<LinkSummary, LinkError> {
    // Validates the link configuration; the endpoints are then evaluated
    // directly since every elevation sample is independent.
    link_margin_profile(&scenario.link, mean_altitude_km, LINK_PROFILE_SAMPLES)?;
    let horizon = evaluate_sample(&scenario.link, mean_altitude_km, MIN_ELEVATION_DEG);
    let zenith = evaluate_sample(&scenario.link, mean_altitude_km, MAX_ELEVATION_DEG);
    let status = Status::from_margin(horizon.link_margin_db, LINK_NOMINAL_MARGIN_DB, 0.0);
    Ok(LinkSummary {
        horizon,
        zenith,
        status,
    })
}

fn summarize_radiation(scenario: &MissionScenario, mean_altitude_km: f64) -> RadiationSummary {
    let inclination = scenario.elements.inclination_deg;
    let total = mission_total_krad(
        mean_altitude_km,
        inclination,
        scenario.shielding_mm,
        scenario.lifetime_years,
    );
    RadiationSummary {
        annual_unshielded_krad: annual_dose_krad(mean_altitude_km, inclination),
        shielding_attenuation: shielding_attenuation(scenario.shielding_mm),
        mission_total_krad: total,
        status: Status::from_load(total, DOSE_NOMINAL_MAX_KRAD, DOSE_WARNING_MAX_KRAD),
    }
}

fn summarize_lifetime(
    scenario: &MissionScenario,
    ballistic_coefficient: f64,
) -> Result<LifetimeSummary, DecayError> {
    let propagation = propagate_decay(
        &scenario.elements,
        ballistic_coefficient,
        scenario.decay_horizon_days,
    )?;
    let (_, outcome) = propagation.run();
    let status = match outcome {
        DecayOutcome::Deorbited { time_days }
            if time_days <= DEORBIT_GUIDELINE_YEARS * 365.25 =>
        {
            Status::Nominal
        }
        // Long-lived orbits are a disposal concern, not an input error.
        _ => Status::Warning,
    };
    Ok(LifetimeSummary { outcome, status })
}
