//! Radiation budget module.
//!
//! Mission-total dose curves swept over shielding thickness or altitude.
//! Both curves are evenly spaced, lazy, restartable sequences; monotonicity
//! comes from the underlying environment model invariants.

use mission_environment::{annual_dose_krad, shielding_attenuation};
use serde::Serialize;
use thiserror::Error;

/// One point of a dose curve; `x` is mm of aluminium or km of altitude
/// depending on which sweep produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoseSample {
    pub x: f64,
    pub mission_dose_krad: f64,
}

/// Input-domain violations rejected before computation.
#[derive(Debug, Error)]
pub enum RadiationError {
    #[error("dose curve needs at least 2 samples, got {0}")]
    DegenerateSampleCount(usize),
    #[error("sweep range must satisfy min < max, got [{min}, {max}]")]
    EmptySweepRange { min: f64, max: f64 },
    #[error("mission lifetime must be non-negative, got {0} years")]
    InvalidLifetime(f64),
    #[error("shielding thickness must be non-negative, got {0} mm")]
    InvalidShielding(f64),
}

/// Evenly spaced lazy sweep shared by both curve shapes.
#[derive(Debug, Clone)]
pub struct DoseCurve {
    min: f64,
    step: f64,
    emitted: usize,
    samples: usize,
    kind: SweepKind,
}

#[derive(Debug, Clone, Copy)]
enum SweepKind {
    /// Fixed orbit, sweeping shielding thickness.
    Shielding {
        altitude_km: f64,
        inclination_deg: f64,
        lifetime_years: f64,
    },
    /// Fixed shielding, sweeping altitude.
    Altitude {
        inclination_deg: f64,
        shielding_mm: f64,
        lifetime_years: f64,
    },
}

/// Mission-total ionizing dose behind the given shielding.
pub fn mission_total_krad(
    altitude_km: f64,
    inclination_deg: f64,
    shielding_mm: f64,
    lifetime_years: f64,
) -> f64 {
    annual_dose_krad(altitude_km, inclination_deg)
        * shielding_attenuation(shielding_mm)
        * lifetime_years
}

/// Dose versus shielding thickness at a fixed orbit.
pub fn dose_vs_shielding(
    altitude_km: f64,
    inclination_deg: f64,
    lifetime_years: f64,
    min_mm: f64,
    max_mm: f64,
    samples: usize,
) -> Result<DoseCurve, RadiationError> {
    validate_sweep(min_mm, max_mm, samples, lifetime_years)?;
    if min_mm < 0.0 {
        return Err(RadiationError::InvalidShielding(min_mm));
    }
    Ok(DoseCurve {
        min: min_mm,
        step: (max_mm - min_mm) / (samples - 1) as f64,
        emitted: 0,
        samples,
        kind: SweepKind::Shielding {
            altitude_km,
            inclination_deg,
            lifetime_years,
        },
    })
}

/// Dose versus altitude at a fixed shielding thickness.
pub fn dose_vs_altitude(
    inclination_deg: f64,
    shielding_mm: f64,
    min_km: f64,
    max_km: f64,
    samples: usize,
) -> Result<DoseCurve, RadiationError> {
    validate_sweep(min_km, max_km, samples, 0.0)?;
    if shielding_mm < 0.0 {
        return Err(RadiationError::InvalidShielding(shielding_mm));
    }
    Ok(DoseCurve {
        min: min_km,
        step: (max_km - min_km) / (samples - 1) as f64,
        emitted: 0,
        samples,
        kind: SweepKind::Altitude {
            inclination_deg,
            shielding_mm,
            // Altitude sweeps compare design points over one year of life.
            lifetime_years: 1.0,
        },
    })
}

fn validate_sweep(
    min: f64,
    max: f64,
    samples: usize,
    lifetime_years: f64,
) -> Result<(), RadiationError> {
    if samples < 2 {
        return Err(RadiationError::DegenerateSampleCount(samples));
    }
    if min >= max {
        return Err(RadiationError::EmptySweepRange { min, max });
    }
    if lifetime_years < 0.0 {
        return Err(RadiationError::InvalidLifetime(lifetime_years));
    }
    Ok(())
}

impl Iterator for DoseCurve {
    type Item = DoseSample;

    fn next(&mut self) -> Option<DoseSample> {
        if self.emitted >= self.samples {
            return None;
        }
        let x = self.min + self.step * self.emitted as f64;
        self.emitted += 1;
        let dose = match self.kind {
            SweepKind::Shielding {
                altitude_km,
                inclination_deg,
                lifetime_years,
            } => mission_total_krad(altitude_km, inclination_deg, x, lifetime_years),
            SweepKind::Altitude {
                inclination_deg,
                shielding_mm,
                lifetime_years,
            } => mission_total_krad(x, inclination_deg, shielding_mm, lifetime_years),
        };
        Some(DoseSample {
            x,
            mission_dose_krad: dose,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.samples - self.emitted;
        (left, Some(left))
    }
}

impl ExactSizeIterator for DoseCurve {}
