use sat_mission_calculator::environment::{
    annual_dose_krad, atmospheric_density_kg_m3, beta_angle_deg, eclipse_duration_min,
    eclipse_fraction, shielding_attenuation,
};

#[test]
fn density_is_monotonically_non_increasing_with_altitude() {
    let mut previous = f64::INFINITY;
    for altitude in (100..=2000).step_by(25) {
        let density = atmospheric_density_kg_m3(altitude as f64);
        assert!(
            density <= previous,
            "density rose between {} km steps: {} -> {}",
            altitude,
            previous,
            density
        );
        assert!(density > 0.0);
        previous = density;
    }
}

#[test]
fn density_magnitudes_match_the_reference_table() {
    // Spot checks at table bases.
    assert!((atmospheric_density_kg_m3(400.0) - 3.725e-12).abs() < 1e-13);
    assert!((atmospheric_density_kg_m3(0.0) - 1.225).abs() < 1e-6);
    // Above ~1000 km the floor keeps drag terms finite.
    assert!(atmospheric_density_kg_m3(5000.0) >= 1.0e-16);
}

#[test]
fn eclipse_fraction_iss_like_orbit() {
    // 400 km, in-plane sun: the classic ~39 % shadow fraction.
    let fraction = eclipse_fraction(400.0, 0.0);
    assert!((0.35..=0.42).contains(&fraction), "fraction = {fraction}");
}

#[test]
fn eclipse_vanishes_above_the_critical_beta() {
    // At 400 km the shadow cylinder subtends ~70°; beta above that never
    // crosses it.
    assert_eq!(eclipse_fraction(400.0, 75.0), 0.0);
    assert!(eclipse_fraction(400.0, 60.0) > 0.0);
}

#[test]
fn eclipse_fraction_shrinks_with_altitude_and_beta() {
    assert!(eclipse_fraction(400.0, 0.0) > eclipse_fraction(2000.0, 0.0));
    assert!(eclipse_fraction(400.0, 0.0) > eclipse_fraction(400.0, 40.0));
}

#[test]
fn beta_approximation_tracks_inclination() {
    // Low and mid inclinations see in-plane sun geometries.
    assert_eq!(beta_angle_deg(0.0), 0.0);
    assert_eq!(beta_angle_deg(23.0), 0.0);
    // Near-polar orbits can hold the sun well out of plane.
    assert!(beta_angle_deg(97.5) > 50.0);
    // Retrograde folds onto its effective inclination.
    assert!((beta_angle_deg(100.0) - beta_angle_deg(80.0)).abs() < 1e-9);
}

#[test]
fn eclipse_duration_scales_with_period() {
    let duration = eclipse_duration_min(5553.0, 0.39);
    assert!((duration - 36.1).abs() < 0.5, "duration = {duration} min");
}

#[test]
fn attenuation_is_strictly_decreasing_in_thickness() {
    let mut previous = f64::INFINITY;
    for tenth_mm in 0..200 {
        let attenuation = shielding_attenuation(tenth_mm as f64 / 10.0);
        assert!(attenuation < previous);
        previous = attenuation;
    }
    assert!((shielding_attenuation(0.0) - 1.0).abs() < 1e-12);
    // The penetrating component never attenuates away entirely.
    assert!(shielding_attenuation(100.0) >= 0.02);
}

#[test]
fn dose_rate_rises_through_leo_into_the_belts() {
    let mut previous = 0.0;
    for altitude in (300..=2000).step_by(100) {
        let dose = annual_dose_krad(altitude as f64, 51.6);
        assert!(
            dose > previous,
            "dose fell between {} km steps: {} -> {}",
            altitude,
            previous,
            dose
        );
        previous = dose;
    }
}

#[test]
fn polar_orbits_collect_more_dose_than_equatorial() {
    assert!(annual_dose_krad(800.0, 98.0) > annual_dose_krad(800.0, 0.0));
}
