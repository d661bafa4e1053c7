//! Piecewise-exponential atmospheric density model.
//!
//! Standard-atmosphere style table: each layer carries a base altitude, a
//! base density, and a scale height, with exponential falloff inside the
//! layer. Density is monotonically non-increasing with altitude and bounded
//! below by a floor so downstream drag terms never divide by zero.

/// (base altitude km, base density kg/m³, scale height km)
const LAYERS: &[(f64, f64, f64)] = &[
    (0.0, 1.225, 7.249),
    (25.0, 3.899e-2, 6.349),
    (30.0, 1.774e-2, 6.682),
    (40.0, 3.972e-3, 7.554),
    (50.0, 1.057e-3, 8.382),
    (60.0, 3.206e-4, 7.714),
    (70.0, 8.770e-5, 6.549),
    (80.0, 1.905e-5, 5.799),
    (90.0, 3.396e-6, 5.382),
    (100.0, 5.297e-7, 5.877),
    (110.0, 9.661e-8, 7.263),
    (120.0, 2.438e-8, 9.473),
    (130.0, 8.484e-9, 12.636),
    (140.0, 3.845e-9, 16.149),
    (150.0, 2.070e-9, 22.523),
    (180.0, 5.464e-10, 29.740),
    (200.0, 2.789e-10, 37.105),
    (250.0, 7.248e-11, 45.546),
    (300.0, 2.418e-11, 53.628),
    (350.0, 9.518e-12, 53.298),
    (400.0, 3.725e-12, 58.515),
    (450.0, 1.585e-12, 60.828),
    (500.0, 6.967e-13, 63.822),
    (600.0, 1.454e-13, 71.835),
    (700.0, 3.614e-14, 88.667),
    (800.0, 1.170e-14, 124.64),
    (900.0, 5.245e-15, 181.05),
    (1000.0, 3.019e-15, 268.0),
];

/// Residual density floor above ~1000 km (kg/m³).
const DENSITY_FLOOR_KG_M3: f64 = 1.0e-16;

/// Atmospheric density at the given altitude.
///
/// Altitudes below the table base clamp to sea-level density; the floor
/// applies everywhere so the result is always strictly positive.
pub fn atmospheric_density_kg_m3(altitude_km: f64) -> f64 {
    if altitude_km <= 0.0 {
        return LAYERS[0].1;
    }
    let (base_alt, base_density, scale_height) = *LAYERS
        .iter()
        .rev()
        .find(|(base, _, _)| altitude_km >= *base)
        .unwrap_or(&LAYERS[0]);
    let density = base_density * (-(altitude_km - base_alt) / scale_height).exp();
    density.max(DENSITY_FLOOR_KG_M3)
}
