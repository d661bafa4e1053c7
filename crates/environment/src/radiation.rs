//! Trapped-radiation dose-rate model.
//!
//! Altitude-indexed unshielded dose rates with log-linear interpolation,
//! scaled by an inclination factor (high-inclination orbits sweep more of
//! the trapped-particle population), and an aluminium-equivalent shielding
//! attenuation curve. Tuned to trade-study magnitudes, not AP8/AE8 fidelity.

use mission_core::angles::effective_inclination_deg;

/// (altitude km, unshielded dose rate krad/year) for an equatorial orbit.
///
/// Rises through LEO into the inner proton belt, peaks in MEO, and relaxes
/// toward GEO. Monotonic within the LEO/MEO bands the budget modules query.
const DOSE_TABLE: &[(f64, f64)] = &[
    (200.0, 0.1),
    (300.0, 0.2),
    (400.0, 0.5),
    (500.0, 1.0),
    (700.0, 3.0),
    (1000.0, 10.0),
    (1500.0, 80.0),
    (2000.0, 300.0),
    (3000.0, 1200.0),
    (4000.0, 3000.0),
    (6000.0, 6000.0),
    (10000.0, 4000.0),
    (20000.0, 1500.0),
    (36000.0, 800.0),
];

/// Residual transmission through arbitrarily thick shielding, representing
/// the penetrating high-energy component.
const ATTENUATION_FLOOR: f64 = 0.02;

/// Attenuation e-folding thickness in mm of aluminium.
const ATTENUATION_SCALE_MM: f64 = 2.5;

/// Unshielded annual dose rate in krad/year.
///
/// Altitudes outside the table clamp to its endpoints.
pub fn annual_dose_krad(altitude_km: f64, inclination_deg: f64) -> f64 {
    let inc = effective_inclination_deg(inclination_deg).to_radians();
    // Equatorial orbits skirt the belt edges; polar orbits cut through them.
    let inclination_factor = 0.6 + 0.4 * inc.sin();
    base_dose_krad(altitude_km) * inclination_factor
}

/// Dose transmission factor for an aluminium-equivalent shield thickness.
///
/// Strictly decreasing in thickness, approaching the penetrating-particle
/// floor; zero thickness transmits everything.
pub fn shielding_attenuation(thickness_mm: f64) -> f64 {
    let t = thickness_mm.max(0.0);
    ATTENUATION_FLOOR + (1.0 - ATTENUATION_FLOOR) * (-t / ATTENUATION_SCALE_MM).exp()
}

fn base_dose_krad(altitude_km: f64) -> f64 {
    let first = DOSE_TABLE[0];
    let last = DOSE_TABLE[DOSE_TABLE.len() - 1];
    if altitude_km <= first.0 {
        return first.1;
    }
    if altitude_km >= last.0 {
        return last.1;
    }
    for window in DOSE_TABLE.windows(2) {
        let (a0, d0) = window[0];
        let (a1, d1) = window[1];
        if altitude_km >= a0 && altitude_km <= a1 {
            // Interpolate in log-dose for smooth decade-spanning behaviour.
            let t = (altitude_km - a0) / (a1 - a0);
            let log_dose = d0.ln() + t * (d1.ln() - d0.ln());
            return log_dose.exp();
        }
    }
    last.1
}
