use assert_cmd::Command;
use predicates::prelude::*;

const SCENARIO_TOML: &str = r#"
name = "smallsat-demo"
lifetime_years = 5.0

[orbit]
altitude_km = 550.0
inclination_deg = 97.5

[spacecraft]
dry_mass_kg = 120.0
drag_area_m2 = 0.8
solar_array_area_m2 = 1.2
battery_capacity_wh = 240.0

[[subsystems]]
name = "bus"
power_w = 55.0

[[subsystems]]
name = "payload"
power_w = 60.0
duty_cycle = 0.4

[propulsion]
type = "chemical"
isp_seconds = 220.0
propellant_kg = 6.0

[[maneuvers]]
name = "orbit raise"
delta_v_m_s = 20.0

[link]
frequency_ghz = 2.2
eirp_dbw = 10.0
rx_gain_dbi = 35.0
system_noise_temp_k = 200.0
data_rate_kbps = 1000.0
required_eb_n0_db = 4.0
"#;

fn write_scenario(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("smallsat.toml");
    std::fs::write(&path, SCENARIO_TOML).expect("write scenario");
    path
}

#[test]
fn prints_every_budget_verdict() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_scenario(&dir);

    Command::cargo_bin("mission_report")
        .expect("binary built")
        .args(["--scenario", path.to_str().expect("utf8 path")])
        .assert()
        .success()
        .stdout(predicate::str::contains("scenario: smallsat-demo"))
        .stdout(predicate::str::contains("power:"))
        .stdout(predicate::str::contains("delta-v:"))
        .stdout(predicate::str::contains("link:"))
        .stdout(predicate::str::contains("radiation:"))
        .stdout(predicate::str::contains("lifetime:"))
        .stdout(predicate::str::contains("overall:"));
}

#[test]
fn exports_csv_tables_and_json_sidecar() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_scenario(&dir);
    let csv_dir = dir.path().join("out");
    let json_path = dir.path().join("assessment.json");

    Command::cargo_bin("mission_report")
        .expect("binary built")
        .args([
            "--scenario",
            path.to_str().expect("utf8 path"),
            "--csv-dir",
            csv_dir.to_str().expect("utf8 path"),
            "--json",
            json_path.to_str().expect("utf8 path"),
        ])
        .assert()
        .success();

    let link_csv = std::fs::read_to_string(csv_dir.join("link_profile.csv")).expect("link csv");
    assert!(link_csv.starts_with("elevation_deg,"));
    assert_eq!(link_csv.lines().count(), 87);

    let dose_csv =
        std::fs::read_to_string(csv_dir.join("dose_vs_shielding.csv")).expect("dose csv");
    assert_eq!(dose_csv.lines().count(), 42);

    assert!(csv_dir.join("decay_history.csv").exists());

    let sidecar = std::fs::read_to_string(&json_path).expect("json sidecar");
    assert!(sidecar.contains("\"scenario\""));
    assert!(sidecar.contains("\"generated_utc\""));
    assert!(sidecar.contains("\"overall_status\""));
}

#[test]
fn unknown_scenario_name_fails_with_a_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_scenario(&dir);

    Command::cargo_bin("mission_report")
        .expect("binary built")
        .args([
            "--scenario",
            path.to_str().expect("utf8 path"),
            "--name",
            "no-such-mission",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn missing_scenario_file_fails_with_context() {
    Command::cargo_bin("mission_report")
        .expect("binary built")
        .args(["--scenario", "/nonexistent/missions.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading scenarios"));
}
