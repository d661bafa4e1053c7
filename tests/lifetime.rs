use sat_mission_calculator::lifetime::{DecayError, DecayOutcome, propagate_decay};
use sat_mission_calculator::orbits::OrbitalElements;

#[test]
fn low_orbit_smallsat_reenters_within_the_horizon() {
    let elements = OrbitalElements::circular(400.0, 51.6);
    let propagation = propagate_decay(&elements, 100.0, 9131.25).expect("valid start");
    let (samples, outcome) = propagation.run();

    assert_eq!(samples[0].time_days, 0.0);
    assert!((samples[0].altitude_km - 400.0).abs() < 10.0);
    for pair in samples.windows(2) {
        assert!(pair[1].time_days > pair[0].time_days);
        assert!(pair[1].altitude_km <= pair[0].altitude_km);
    }

    match outcome {
        DecayOutcome::Deorbited { time_days } => {
            assert!(time_days > 10.0, "reentry after {time_days} days");
            assert!(time_days < 9_000.0, "reentry after {time_days} days");
        }
        DecayOutcome::Unresolved { .. } => panic!("400 km orbit must decay within 25 years"),
    }
    let last = samples.last().expect("history is non-empty");
    assert_eq!(last.altitude_km, 120.0);
}

#[test]
fn short_horizon_reports_unresolved_not_a_false_reentry() {
    let elements = OrbitalElements::circular(400.0, 51.6);
    let propagation = propagate_decay(&elements, 100.0, 10.0).expect("valid start");
    let (samples, outcome) = propagation.run();
    assert!(matches!(
        outcome,
        DecayOutcome::Unresolved { horizon_days } if horizon_days == 10.0
    ));
    // The history still covers the horizon it did integrate.
    let last = samples.last().expect("history is non-empty");
    assert!(last.altitude_km > 120.0);
}

#[test]
fn high_orbit_outlives_a_decade() {
    let elements = OrbitalElements::circular(800.0, 98.0);
    let propagation = propagate_decay(&elements, 200.0, 3_652.5).expect("valid start");
    let (_, outcome) = propagation.run();
    assert!(matches!(outcome, DecayOutcome::Unresolved { .. }));
}

#[test]
fn heavier_spacecraft_decay_more_slowly() {
    let elements = OrbitalElements::circular(350.0, 51.6);
    let light = propagate_decay(&elements, 50.0, 9131.25)
        .expect("valid start")
        .run()
        .1;
    let heavy = propagate_decay(&elements, 200.0, 9131.25)
        .expect("valid start")
        .run()
        .1;
    match (light, heavy) {
        (
            DecayOutcome::Deorbited { time_days: t_light },
            DecayOutcome::Deorbited { time_days: t_heavy },
        ) => assert!(t_heavy > t_light, "{t_heavy} vs {t_light}"),
        other => panic!("both 350 km cases should deorbit, got {other:?}"),
    }
}

#[test]
fn outcome_is_absent_until_the_iterator_is_exhausted() {
    let elements = OrbitalElements::circular(400.0, 51.6);
    let mut propagation = propagate_decay(&elements, 100.0, 30.0).expect("valid start");
    assert!(propagation.outcome().is_none());
    propagation.next();
    assert!(propagation.outcome().is_none());
    for _ in propagation.by_ref() {}
    assert!(propagation.outcome().is_some());
}

#[test]
fn rejects_out_of_domain_starts() {
    let elements = OrbitalElements::circular(400.0, 51.6);
    assert!(matches!(
        propagate_decay(&elements, 0.0, 100.0),
        Err(DecayError::InvalidBallisticCoefficient(_))
    ));
    assert!(matches!(
        propagate_decay(&elements, 100.0, 0.0),
        Err(DecayError::InvalidHorizon(_))
    ));

    let low = OrbitalElements::circular(100.0, 51.6);
    assert!(matches!(
        propagate_decay(&low, 100.0, 100.0),
        Err(DecayError::BelowInterface(_))
    ));

    let mut bad = elements;
    bad.eccentricity = -0.1;
    assert!(matches!(
        propagate_decay(&bad, 100.0, 100.0),
        Err(DecayError::Orbit(_))
    ));
}
