//! Orbital elements and derived two-body kinematics.
//!
//! Converts a minimal orbital-element set into the quantities the budget
//! modules consume: period, mean motion, and a representative mean altitude.
//! Ground-track generation lives in [`ground_track`].

pub mod ground_track;

pub use ground_track::{GroundTrack, GroundTrackSample, ground_track};

use mission_core::constants::{EARTH_EQUATORIAL_RADIUS_KM, MU_EARTH_KM3_S2};
use std::f64::consts::PI;
use thiserror::Error;

/// Classical orbital elements in the caller-facing angle convention (degrees).
///
/// Immutable value type; every module takes it by reference and never
/// mutates it, so concurrent budget computations need no coordination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub raan_deg: f64,
    pub arg_perigee_deg: f64,
    pub mean_anomaly_deg: f64,
}

impl OrbitalElements {
    /// Circular orbit at the given altitude and inclination, remaining
    /// angles zeroed.
    pub fn circular(altitude_km: f64, inclination_deg: f64) -> Self {
        Self {
            semi_major_axis_km: EARTH_EQUATORIAL_RADIUS_KM + altitude_km,
            eccentricity: 0.0,
            inclination_deg,
            raan_deg: 0.0,
            arg_perigee_deg: 0.0,
            mean_anomaly_deg: 0.0,
        }
    }

    /// Perigee radius a(1 - e) in km.
    pub fn perigee_radius_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 - self.eccentricity)
    }

    /// Validate the element set against the engine's input domain.
    pub fn validate(&self) -> Result<(), OrbitError> {
        if !self.semi_major_axis_km.is_finite() || self.semi_major_axis_km <= 0.0 {
            return Err(OrbitError::InvalidSemiMajorAxis(self.semi_major_axis_km));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrbitError::InvalidEccentricity(self.eccentricity));
        }
        if self.perigee_radius_km() <= EARTH_EQUATORIAL_RADIUS_KM {
            return Err(OrbitError::PerigeeBelowSurface {
                perigee_km: self.perigee_radius_km(),
            });
        }
        Ok(())
    }
}

/// Derived kinematic quantities for one orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    pub period_seconds: f64,
    pub mean_motion_rad_s: f64,
    /// Semi-major axis minus the equatorial radius. A representative mean
    /// for eccentric orbits, not a true time average.
    pub mean_altitude_km: f64,
}

/// Out-of-domain element sets rejected before any computation.
#[derive(Debug, Error)]
pub enum OrbitError {
    #[error("semi-major axis must be positive and finite, got {0} km")]
    InvalidSemiMajorAxis(f64),
    #[error("eccentricity must lie in [0, 1), got {0}")]
    InvalidEccentricity(f64),
    #[error("perigee at {perigee_km} km intersects the Earth surface")]
    PerigeeBelowSurface { perigee_km: f64 },
    #[error("ground track duration and step must be positive")]
    InvalidTrackSampling,
}

/// Derive period, mean motion, and mean altitude from an element set.
///
/// Period follows Kepler's third law, T = 2π √(a³/μ).
pub fn derive_orbital_state(elements: &OrbitalElements) -> Result<OrbitalState, OrbitError> {
    elements.validate()?;
    let a = elements.semi_major_axis_km;
    let period_seconds = 2.0 * PI * (a.powi(3) / MU_EARTH_KM3_S2).sqrt();
    Ok(OrbitalState {
        period_seconds,
        mean_motion_rad_s: 2.0 * PI / period_seconds,
        mean_altitude_km: a - EARTH_EQUATORIAL_RADIUS_KM,
    })
}

/// Solve Kepler's equation M = E - e sin E for the eccentric anomaly.
///
/// Newton iteration; converges in a handful of steps for e < 1.
pub(crate) fn eccentric_anomaly(mean_anomaly_rad: f64, eccentricity: f64) -> f64 {
    if eccentricity < 1e-8 {
        return mean_anomaly_rad;
    }
    let mut ea = mean_anomaly_rad;
    for _ in 0..12 {
        let delta = (ea - eccentricity * ea.sin() - mean_anomaly_rad)
            / (1.0 - eccentricity * ea.cos());
        ea -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ea
}

/// True anomaly from eccentric anomaly.
pub(crate) fn true_anomaly(eccentric_anomaly_rad: f64, eccentricity: f64) -> f64 {
    2.0 * ((1.0 + eccentricity).sqrt() * (eccentric_anomaly_rad / 2.0).sin())
        .atan2((1.0 - eccentricity).sqrt() * (eccentric_anomaly_rad / 2.0).cos())
}
