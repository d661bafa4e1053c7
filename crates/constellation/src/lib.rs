//! Constellation geometry module.
//!
//! Expands a Walker pattern definition (i:T/P/F notation) into
//! constellation-level metrics. The conventional Walker constraint is
//! T mod P = 0; non-divisible totals are tolerated by assigning the
//! remainder satellites to the trailing planes, a documented deterministic
//! policy rather than a silent error.

use mission_core::angles::effective_inclination_deg;
use mission_orbits::{OrbitError, OrbitalElements, derive_orbital_state};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Walker pattern family: Delta spreads planes over 360°, Star over 180°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkerPattern {
    Delta,
    Star,
}

/// Walker pattern parameters (T total satellites, P planes, F phasing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkerParams {
    pub pattern: WalkerPattern,
    pub total_sats: u32,
    pub planes: u32,
    pub phasing: u32,
    pub altitude_km: f64,
    pub inclination_deg: f64,
}

/// Constellation-level metric set.
#[derive(Debug, Clone, Serialize)]
pub struct ConstellationMetrics {
    pub total_satellites: u32,
    /// Ceiling of T/P; the largest plane population under the remainder policy.
    pub sats_per_plane: u32,
    /// Population of each plane, remainder satellites in the trailing planes.
    pub plane_distribution: Vec<u32>,
    /// RAAN spacing between adjacent planes in degrees.
    pub raan_spacing_deg: f64,
    pub total_mass_kg: f64,
    pub orbital_period_min: f64,
    /// Ground-coverage envelope: latitudes within ±min(i, 180 - i).
    ///
    /// An envelope over the pattern, not an instantaneous footprint.
    pub coverage_lat_band_deg: (f64, f64),
}

/// Input-domain violations rejected before computation.
#[derive(Debug, Error)]
pub enum WalkerError {
    #[error("constellation needs at least one satellite")]
    EmptyConstellation,
    #[error("plane count {planes} must be between 1 and the satellite total {total}")]
    InvalidPlaneCount { planes: u32, total: u32 },
    #[error("phasing {phasing} must be less than the plane count {planes}")]
    InvalidPhasing { phasing: u32, planes: u32 },
    #[error("unit satellite mass must be positive, got {0} kg")]
    InvalidUnitMass(f64),
    #[error(transparent)]
    Orbit(#[from] OrbitError),
}

impl WalkerParams {
    /// Validate the T/P/F pattern constraints.
    pub fn validate(&self) -> Result<(), WalkerError> {
        if self.total_sats == 0 {
            return Err(WalkerError::EmptyConstellation);
        }
        if self.planes == 0 || self.planes > self.total_sats {
            return Err(WalkerError::InvalidPlaneCount {
                planes: self.planes,
                total: self.total_sats,
            });
        }
        if self.phasing >= self.planes {
            return Err(WalkerError::InvalidPhasing {
                phasing: self.phasing,
                planes: self.planes,
            });
        }
        Ok(())
    }

    /// Per-plane satellite counts.
    ///
    /// Evenly divisible totals give T/P everywhere; otherwise the leading
    /// planes carry floor(T/P) and the trailing `T mod P` planes carry one
    /// extra, so populations always sum back to T.
    pub fn plane_distribution(&self) -> Vec<u32> {
        let base = self.total_sats / self.planes;
        let remainder = self.total_sats % self.planes;
        let first_heavy_plane = self.planes - remainder;
        (0..self.planes)
            .map(|p| if p >= first_heavy_plane { base + 1 } else { base })
            .collect()
    }

    /// RAAN spacing between adjacent planes in degrees.
    pub fn raan_spacing_deg(&self) -> f64 {
        let spread = match self.pattern {
            WalkerPattern::Delta => 360.0,
            WalkerPattern::Star => 180.0,
        };
        spread / self.planes as f64
    }
}

/// Expand a Walker pattern into constellation metrics.
pub fn compute_constellation_metrics(
    params: &WalkerParams,
    unit_sat_mass_kg: f64,
) -> Result<ConstellationMetrics, WalkerError> {
    params.validate()?;
    if unit_sat_mass_kg <= 0.0 {
        return Err(WalkerError::InvalidUnitMass(unit_sat_mass_kg));
    }

    let distribution = params.plane_distribution();
    let sats_per_plane = *distribution.iter().max().unwrap_or(&0);

    let elements = OrbitalElements::circular(params.altitude_km, params.inclination_deg);
    let state = derive_orbital_state(&elements)?;

    let reach = effective_inclination_deg(params.inclination_deg);

    Ok(ConstellationMetrics {
        total_satellites: params.total_sats,
        sats_per_plane,
        plane_distribution: distribution,
        raan_spacing_deg: params.raan_spacing_deg(),
        total_mass_kg: params.total_sats as f64 * unit_sat_mass_kg,
        orbital_period_min: state.period_seconds / 60.0,
        coverage_lat_band_deg: (-reach, reach),
    })
}
