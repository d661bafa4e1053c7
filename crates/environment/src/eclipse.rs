//! Eclipse and illumination geometry for a cylindrical Earth shadow.

use mission_core::angles::effective_inclination_deg;
use mission_core::constants::{EARTH_MEAN_RADIUS_KM, EARTH_OBLIQUITY_DEG};
use std::f64::consts::PI;

/// Representative beta angle derived from inclination alone.
///
/// The true beta angle couples inclination, RAAN, and the seasonal solar
/// position; this engine deliberately approximates it as the minimum-magnitude
/// beta the orbit can see, max(0, i_eff - obliquity). That is the worst case
/// for eclipse length, which is the conservative choice for power sizing.
pub fn beta_angle_deg(inclination_deg: f64) -> f64 {
    (effective_inclination_deg(inclination_deg) - EARTH_OBLIQUITY_DEG).max(0.0)
}

/// Fraction of a circular orbit spent in the Earth's cylindrical shadow.
///
/// Returns 0 when the beta angle exceeds the critical value at which the
/// orbit no longer crosses the shadow cylinder.
pub fn eclipse_fraction(altitude_km: f64, beta_deg: f64) -> f64 {
    if altitude_km <= 0.0 {
        return 0.0;
    }
    let r = EARTH_MEAN_RADIUS_KM + altitude_km;
    let beta = beta_deg.to_radians();

    // Above the critical beta the shadow cylinder is never entered.
    let critical_beta = (EARTH_MEAN_RADIUS_KM / r).asin();
    if beta.abs() >= critical_beta {
        return 0.0;
    }

    let horizon = (altitude_km * altitude_km + 2.0 * EARTH_MEAN_RADIUS_KM * altitude_km).sqrt();
    let cos_half_arc = horizon / (r * beta.cos());
    if cos_half_arc >= 1.0 {
        return 0.0;
    }
    cos_half_arc.acos() / PI
}

/// Eclipse duration in minutes for one orbit of the given period.
pub fn eclipse_duration_min(period_seconds: f64, eclipse_fraction: f64) -> f64 {
    period_seconds * eclipse_fraction / 60.0
}
