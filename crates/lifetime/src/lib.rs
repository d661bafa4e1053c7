//! Orbital decay (lifetime) propagator.
//!
//! Integrates the standard drag-decay ODE da/dt = -ρ(a)·√(μa)/β with a step
//! size bounded so altitude loss per step stays within 1 % of the current
//! altitude; the exponential density model makes larger steps unstable.
//! The sequence is lazy, finite, and non-restartable, and a hard step-count
//! cap guarantees termination regardless of input.

use mission_core::constants::{
    ATMOSPHERIC_INTERFACE_ALTITUDE_KM, EARTH_EQUATORIAL_RADIUS_KM, MU_EARTH_KM3_S2,
    SECONDS_PER_DAY,
};
use mission_core::units::km_to_m;
use mission_environment::atmospheric_density_kg_m3;
use mission_orbits::{OrbitError, OrbitalElements, derive_orbital_state};
use serde::Serialize;
use thiserror::Error;

/// Altitude loss per step as a fraction of current altitude.
const MAX_STEP_ALTITUDE_FRACTION: f64 = 0.01;
/// Longest step taken when drag is weak (days).
const MAX_STEP_DAYS: f64 = 10.0;
/// Hard cap on integration steps; the propagator always terminates.
const MAX_STEPS: usize = 500_000;

/// One decay history point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecaySample {
    pub time_days: f64,
    pub altitude_km: f64,
}

/// Terminal state of a decay propagation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DecayOutcome {
    /// The orbit reached the atmospheric interface.
    Deorbited { time_days: f64 },
    /// The horizon (or the step cap) was exhausted before reentry; a false
    /// deorbit time is never reported.
    Unresolved { horizon_days: f64 },
}

/// Input-domain violations rejected before propagation.
#[derive(Debug, Error)]
pub enum DecayError {
    #[error(transparent)]
    Orbit(#[from] OrbitError),
    #[error("ballistic coefficient must be positive, got {0} kg/m²")]
    InvalidBallisticCoefficient(f64),
    #[error("starting altitude {0} km is already at or below the atmospheric interface")]
    BelowInterface(f64),
    #[error("decay horizon must be positive, got {0} days")]
    InvalidHorizon(f64),
}

/// Lazy, finite, non-restartable decay history.
///
/// Deliberately not `Clone`: replaying a partially consumed propagation
/// would silently restart the integration from its current state.
#[derive(Debug)]
pub struct DecayPropagation {
    ballistic_coefficient_kg_m2: f64,
    horizon_days: f64,
    time_days: f64,
    altitude_km: f64,
    steps_taken: usize,
    emitted_initial: bool,
    outcome: Option<DecayOutcome>,
}

/// Start a decay propagation from the given elements.
///
/// The orbit is collapsed to its representative mean altitude; eccentricity
/// decay is not modelled separately.
pub fn propagate_decay(
    elements: &OrbitalElements,
    ballistic_coefficient_kg_m2: f64,
    horizon_days: f64,
) -> Result<DecayPropagation, DecayError> {
    let state = derive_orbital_state(elements)?;
    if ballistic_coefficient_kg_m2 <= 0.0 {
        return Err(DecayError::InvalidBallisticCoefficient(
            ballistic_coefficient_kg_m2,
        ));
    }
    if state.mean_altitude_km <= ATMOSPHERIC_INTERFACE_ALTITUDE_KM {
        return Err(DecayError::BelowInterface(state.mean_altitude_km));
    }
    if horizon_days <= 0.0 {
        return Err(DecayError::InvalidHorizon(horizon_days));
    }
    Ok(DecayPropagation {
        ballistic_coefficient_kg_m2,
        horizon_days,
        time_days: 0.0,
        altitude_km: state.mean_altitude_km,
        steps_taken: 0,
        emitted_initial: false,
        outcome: None,
    })
}

impl DecayPropagation {
    /// Terminal state, available once the iterator is exhausted.
    pub fn outcome(&self) -> Option<DecayOutcome> {
        self.outcome
    }

    /// Consume the propagation into its full history and terminal state.
    pub fn run(mut self) -> (Vec<DecaySample>, DecayOutcome) {
        let mut samples = Vec::new();
        for sample in &mut self {
            samples.push(sample);
        }
        let outcome = self
            .outcome
            .unwrap_or(DecayOutcome::Unresolved {
                horizon_days: self.horizon_days,
            });
        (samples, outcome)
    }

    /// Decay rate at the current altitude in km/day (negative).
    fn decay_rate_km_day(&self) -> f64 {
        let a_m = km_to_m(EARTH_EQUATORIAL_RADIUS_KM + self.altitude_km);
        let mu_m3_s2 = MU_EARTH_KM3_S2 * 1.0e9;
        let rho = atmospheric_density_kg_m3(self.altitude_km);
        let da_dt_m_s = -rho * (mu_m3_s2 * a_m).sqrt() / self.ballistic_coefficient_kg_m2;
        da_dt_m_s * SECONDS_PER_DAY / 1_000.0
    }
}

impl Iterator for DecayPropagation {
    type Item = DecaySample;

    fn next(&mut self) -> Option<DecaySample> {
        if self.outcome.is_some() {
            return None;
        }
        if !self.emitted_initial {
            self.emitted_initial = true;
            return Some(DecaySample {
                time_days: 0.0,
                altitude_km: self.altitude_km,
            });
        }
        if self.time_days >= self.horizon_days || self.steps_taken >= MAX_STEPS {
            self.outcome = Some(DecayOutcome::Unresolved {
                horizon_days: self.horizon_days,
            });
            return None;
        }

        let rate = self.decay_rate_km_day();
        // Step bounded so the altitude loss stays within 1 % of altitude.
        let max_loss_km = self.altitude_km * MAX_STEP_ALTITUDE_FRACTION;
        let mut dt_days = (max_loss_km / rate.abs()).min(MAX_STEP_DAYS);
        dt_days = dt_days.min(self.horizon_days - self.time_days).max(1e-6);

        self.time_days += dt_days;
        self.altitude_km += rate * dt_days;
        self.steps_taken += 1;

        if self.altitude_km <= ATMOSPHERIC_INTERFACE_ALTITUDE_KM {
            self.altitude_km = ATMOSPHERIC_INTERFACE_ALTITUDE_KM;
            self.outcome = Some(DecayOutcome::Deorbited {
                time_days: self.time_days,
            });
        }

        Some(DecaySample {
            time_days: self.time_days,
            altitude_km: self.altitude_km,
        })
    }
}
