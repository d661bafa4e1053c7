use sat_mission_calculator::orbits::OrbitalElements;
use sat_mission_calculator::power::{PowerError, compute_power_analysis};
use sat_mission_calculator::report::Status;
use sat_mission_calculator::spacecraft::{SpacecraftConfig, SubsystemLoad, SubsystemPowerModel};

fn smallsat() -> SpacecraftConfig {
    SpacecraftConfig {
        dry_mass_kg: 120.0,
        drag_area_m2: 0.8,
        drag_coefficient: 2.2,
        solar_array_area_m2: 1.0,
        battery_capacity_wh: 200.0,
    }
}

fn loads(power_w: f64) -> SubsystemPowerModel {
    SubsystemPowerModel {
        loads: vec![
            SubsystemLoad {
                name: "bus".into(),
                power_w,
                duty_cycle: 1.0,
            },
            SubsystemLoad {
                name: "payload".into(),
                power_w: 40.0,
                duty_cycle: 0.5,
            },
        ],
    }
}

#[test]
fn healthy_leo_design_is_nominal() {
    let elements = OrbitalElements::circular(550.0, 51.6);
    let report =
        compute_power_analysis(&elements, &smallsat(), &loads(60.0), 3.0).expect("valid inputs");

    // 1 m² at 1361 W/m² with cell efficiency and cosine losses applied.
    assert!((250.0..350.0).contains(&report.peak_generation_w));
    assert!(report.avg_generation_w < report.peak_generation_w);
    assert!(report.eol_generation_w < report.avg_generation_w);
    assert!((report.avg_consumption_w - 80.0).abs() < 1e-9);

    assert!(report.power_margin > 0.20, "margin = {}", report.power_margin);
    assert_eq!(report.margin_status, Status::Nominal);
    assert_eq!(report.battery_status, Status::Nominal);
    assert!(report.battery_depth_of_discharge < 0.30);
    assert!(report.eclipse_duration_min > 20.0);
}

#[test]
fn eol_margin_is_tighter_than_bol() {
    let elements = OrbitalElements::circular(550.0, 51.6);
    let report =
        compute_power_analysis(&elements, &smallsat(), &loads(60.0), 10.0).expect("valid inputs");
    assert!(report.eol_margin < report.power_margin);
    assert!(report.eol_generation_w < report.avg_generation_w);
}

#[test]
fn overloaded_bus_reports_critical_not_error() {
    let elements = OrbitalElements::circular(550.0, 51.6);
    let report =
        compute_power_analysis(&elements, &smallsat(), &loads(400.0), 3.0).expect("valid inputs");
    assert!(report.power_margin < 0.0);
    assert_eq!(report.margin_status, Status::Critical);
}

#[test]
fn absent_battery_in_eclipse_is_critical_not_division_error() {
    let elements = OrbitalElements::circular(550.0, 51.6);
    let mut spacecraft = smallsat();
    spacecraft.battery_capacity_wh = 0.0;
    let report =
        compute_power_analysis(&elements, &spacecraft, &loads(60.0), 3.0).expect("valid inputs");
    assert_eq!(report.battery_status, Status::Critical);
    assert!(report.battery_depth_of_discharge >= 1.0);
}

#[test]
fn no_array_with_consumption_is_critical() {
    let elements = OrbitalElements::circular(550.0, 51.6);
    let mut spacecraft = smallsat();
    spacecraft.solar_array_area_m2 = 0.0;
    let report =
        compute_power_analysis(&elements, &spacecraft, &loads(60.0), 3.0).expect("valid inputs");
    assert_eq!(report.margin_status, Status::Critical);
    assert_eq!(report.power_margin, -1.0);
}

#[test]
fn deep_depth_of_discharge_is_flagged() {
    let elements = OrbitalElements::circular(550.0, 51.6);
    let mut spacecraft = smallsat();
    spacecraft.battery_capacity_wh = 50.0;
    let report =
        compute_power_analysis(&elements, &spacecraft, &loads(60.0), 3.0).expect("valid inputs");
    assert!(report.battery_depth_of_discharge > 0.50);
    assert_eq!(report.battery_status, Status::Critical);
}

#[test]
fn rejects_out_of_domain_inputs() {
    let elements = OrbitalElements::circular(550.0, 51.6);

    let mut spacecraft = smallsat();
    spacecraft.solar_array_area_m2 = -1.0;
    assert!(matches!(
        compute_power_analysis(&elements, &spacecraft, &loads(60.0), 3.0),
        Err(PowerError::InvalidArrayArea(_))
    ));

    let mut bad_loads = loads(60.0);
    bad_loads.loads[0].duty_cycle = 1.5;
    assert!(matches!(
        compute_power_analysis(&elements, &smallsat(), &bad_loads, 3.0),
        Err(PowerError::InvalidDutyCycle { .. })
    ));

    assert!(matches!(
        compute_power_analysis(&elements, &smallsat(), &loads(60.0), -1.0),
        Err(PowerError::InvalidLifetime(_))
    ));
}
