//! Link budget module.
//!
//! Produces the link-margin profile versus ground-station elevation for one
//! pass geometry: spherical-Earth slant range, Friis free-space path loss,
//! Eb/N0 against a fixed threshold, and the closed-form maximum data rate.
//! Each elevation sample is independent, so the profile streams lazily and
//! restarts by cloning.

use mission_core::constants::{BOLTZMANN_DBW_K_HZ, EARTH_MEAN_RADIUS_KM, SPEED_OF_LIGHT_M_S};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

/// Lowest elevation worth budgeting; below this, terrain and multipath rule.
pub const MIN_ELEVATION_DEG: f64 = 5.0;
/// Zenith.
pub const MAX_ELEVATION_DEG: f64 = 90.0;

/// Fixed per-link budget constants supplied by the configuration layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkBudgetConfig {
    /// Carrier frequency in GHz.
    pub frequency_ghz: f64,
    /// Spacecraft EIRP in dBW.
    pub eirp_dbw: f64,
    /// Ground-station receive gain in dBi.
    pub rx_gain_dbi: f64,
    /// Receive system noise temperature in kelvin.
    pub system_noise_temp_k: f64,
    /// Nominal downlink data rate in kbps.
    pub data_rate_kbps: f64,
    /// Eb/N0 threshold for the selected modulation and coding, in dB.
    pub required_eb_n0_db: f64,
    /// Implementation loss in dB.
    pub implementation_loss_db: f64,
}

/// One elevation sample of the link profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinkSample {
    pub elevation_deg: f64,
    pub slant_range_km: f64,
    pub path_loss_db: f64,
    pub eb_n0_db: f64,
    pub link_margin_db: f64,
    pub max_data_rate_kbps: f64,
}

/// Lazy, finite, restartable profile over [5°, 90°].
#[derive(Debug, Clone)]
pub struct LinkProfile {
    config: LinkBudgetConfig,
    altitude_km: f64,
    step_deg: f64,
    emitted: usize,
    samples: usize,
}

/// Input-domain violations rejected before computation.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("profile needs at least 2 samples, got {0}")]
    DegenerateSampleCount(usize),
    #[error("carrier frequency must be positive, got {0} GHz")]
    InvalidFrequency(f64),
    #[error("data rate must be positive, got {0} kbps")]
    InvalidDataRate(f64),
    #[error("orbit altitude must be positive, got {0} km")]
    InvalidAltitude(f64),
}

/// Build the link-margin profile for the given altitude.
pub fn link_margin_profile(
    config: &LinkBudgetConfig,
    avg_altitude_km: f64,
    samples: usize,
) -> Result<LinkProfile, LinkError> {
    if samples < 2 {
        return Err(LinkError::DegenerateSampleCount(samples));
    }
    if config.frequency_ghz <= 0.0 {
        return Err(LinkError::InvalidFrequency(config.frequency_ghz));
    }
    if config.data_rate_kbps <= 0.0 {
        return Err(LinkError::InvalidDataRate(config.data_rate_kbps));
    }
    if avg_altitude_km <= 0.0 {
        return Err(LinkError::InvalidAltitude(avg_altitude_km));
    }
    Ok(LinkProfile {
        config: *config,
        altitude_km: avg_altitude_km,
        step_deg: (MAX_ELEVATION_DEG - MIN_ELEVATION_DEG) / (samples - 1) as f64,
        emitted: 0,
        samples,
    })
}

/// Slant range to the spacecraft from a station seeing it at `elevation_deg`,
/// spherical-Earth law-of-cosines geometry.
pub fn slant_range_km(altitude_km: f64, elevation_deg: f64) -> f64 {
    let re = EARTH_MEAN_RADIUS_KM;
    let r = re + altitude_km;
    let el = elevation_deg.to_radians();
    let ratio = r / re;
    re * ((ratio * ratio - el.cos() * el.cos()).sqrt() - el.sin())
}

/// Friis free-space path loss, 20 log10(4π d f / c), in dB.
pub fn free_space_path_loss_db(distance_km: f64, frequency_ghz: f64) -> f64 {
    let d_m = distance_km * 1_000.0;
    let f_hz = frequency_ghz * 1.0e9;
    20.0 * (4.0 * PI * d_m * f_hz / SPEED_OF_LIGHT_M_S).log10()
}

/// Evaluate one elevation sample.
pub fn evaluate_sample(
    config: &LinkBudgetConfig,
    altitude_km: f64,
    elevation_deg: f64,
) -> LinkSample {
    let range = slant_range_km(altitude_km, elevation_deg);
    let path_loss = free_space_path_loss_db(range, config.frequency_ghz);

    let received_dbw = config.eirp_dbw + config.rx_gain_dbi - path_loss;
    let noise_density_dbw = BOLTZMANN_DBW_K_HZ + 10.0 * config.system_noise_temp_k.log10();
    let cn0_db_hz = received_dbw - noise_density_dbw;

    let rate_bps = config.data_rate_kbps * 1_000.0;
    let eb_n0 = cn0_db_hz - 10.0 * rate_bps.log10() - config.implementation_loss_db;
    let margin = eb_n0 - config.required_eb_n0_db;

    // Closed form from the link equation: the rate at which Eb/N0 meets the
    // threshold exactly.
    let max_log_rate = cn0_db_hz - config.required_eb_n0_db - config.implementation_loss_db;
    let max_rate_kbps = (10.0_f64.powf(max_log_rate / 10.0) / 1_000.0).max(0.0);

    LinkSample {
        elevation_deg,
        slant_range_km: range,
        path_loss_db: path_loss,
        eb_n0_db: eb_n0,
        link_margin_db: margin,
        max_data_rate_kbps: max_rate_kbps,
    }
}

impl Iterator for LinkProfile {
    type Item = LinkSample;

    fn next(&mut self) -> Option<LinkSample> {
        if self.emitted >= self.samples {
            return None;
        }
        let elevation = if self.emitted == self.samples - 1 {
            MAX_ELEVATION_DEG
        } else {
            MIN_ELEVATION_DEG + self.step_deg * self.emitted as f64
        };
        self.emitted += 1;
        Some(evaluate_sample(&self.config, self.altitude_km, elevation))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.samples - self.emitted;
        (left, Some(left))
    }
}

impl ExactSizeIterator for LinkProfile {}
