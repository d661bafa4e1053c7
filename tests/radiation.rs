use sat_mission_calculator::radiation::{
    RadiationError, dose_vs_altitude, dose_vs_shielding, mission_total_krad,
};

#[test]
fn mission_dose_scales_linearly_with_lifetime() {
    let one_year = mission_total_krad(550.0, 51.6, 2.0, 1.0);
    let five_years = mission_total_krad(550.0, 51.6, 2.0, 5.0);
    assert!(one_year > 0.0);
    assert!((five_years - 5.0 * one_year).abs() < 1e-9);
}

#[test]
fn shielding_cuts_dose_but_never_to_zero() {
    let bare = mission_total_krad(550.0, 51.6, 0.0, 5.0);
    let shielded = mission_total_krad(550.0, 51.6, 5.0, 5.0);
    assert!(shielded < bare);
    // Penetrating component survives arbitrary aluminium.
    assert!(mission_total_krad(550.0, 51.6, 500.0, 5.0) >= 0.02 * bare);
}

#[test]
fn shielding_sweep_is_monotonically_decreasing() {
    let curve = dose_vs_shielding(800.0, 98.0, 5.0, 0.0, 10.0, 41).expect("valid sweep");
    let samples: Vec<_> = curve.collect();
    assert_eq!(samples.len(), 41);
    assert_eq!(samples[0].x, 0.0);
    assert!((samples[40].x - 10.0).abs() < 1e-9);
    for pair in samples.windows(2) {
        assert!(pair[1].mission_dose_krad < pair[0].mission_dose_krad);
    }
}

#[test]
fn altitude_sweep_climbs_into_the_inner_belt() {
    let curve = dose_vs_altitude(51.6, 2.0, 300.0, 2000.0, 18).expect("valid sweep");
    let samples: Vec<_> = curve.collect();
    assert_eq!(samples.len(), 18);
    for pair in samples.windows(2) {
        assert!(pair[1].mission_dose_krad > pair[0].mission_dose_krad);
    }
}

#[test]
fn dose_curves_are_restartable() {
    let curve = dose_vs_shielding(550.0, 51.6, 3.0, 0.0, 8.0, 17).expect("valid sweep");
    let replay = curve.clone();
    assert_eq!(curve.len(), 17);
    let first: Vec<_> = curve.collect();
    let second: Vec<_> = replay.collect();
    assert_eq!(first, second);
}

#[test]
fn rejects_out_of_domain_sweeps() {
    assert!(matches!(
        dose_vs_shielding(550.0, 51.6, 3.0, 0.0, 10.0, 1),
        Err(RadiationError::DegenerateSampleCount(1))
    ));
    assert!(matches!(
        dose_vs_shielding(550.0, 51.6, 3.0, 10.0, 10.0, 5),
        Err(RadiationError::EmptySweepRange { .. })
    ));
    assert!(matches!(
        dose_vs_shielding(550.0, 51.6, -1.0, 0.0, 10.0, 5),
        Err(RadiationError::InvalidLifetime(_))
    ));
    assert!(matches!(
        dose_vs_shielding(550.0, 51.6, 3.0, -1.0, 10.0, 5),
        Err(RadiationError::InvalidShielding(_))
    ));
    assert!(matches!(
        dose_vs_altitude(51.6, -2.0, 300.0, 2000.0, 5),
        Err(RadiationError::InvalidShielding(_))
    ));
}
