//! Run a full mission assessment over a saved scenario and print the
//! per-budget verdicts, optionally exporting curve CSVs and a JSON sidecar.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sat_mission_calculator::assessment::{MissionAssessment, assess_mission};
use sat_mission_calculator::config::load_scenarios;
use sat_mission_calculator::export::{curves, sidecar};
use sat_mission_calculator::lifetime::{DecayOutcome, propagate_decay};
use sat_mission_calculator::link::link_margin_profile;
use sat_mission_calculator::radiation::dose_vs_shielding;
use sat_mission_calculator::scenario::{self, MissionScenario};

/// Elevation samples written to the link-profile CSV.
const LINK_CSV_SAMPLES: usize = 86;
/// Shielding sweep written to the dose-curve CSV, in mm.
const DOSE_SWEEP_MAX_MM: f64 = 10.0;
const DOSE_SWEEP_SAMPLES: usize = 41;

#[derive(Parser, Debug)]
#[command(name = "mission_report", about = "Assess a satellite mission scenario")]
struct Args {
    /// Scenario source: YAML catalog, TOML file, or directory of TOML files.
    #[arg(long)]
    scenario: PathBuf,

    /// Scenario name to select from the catalog (defaults to the first).
    #[arg(long)]
    name: Option<String>,

    /// Directory receiving link/dose/decay CSV tables.
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Path for the JSON assessment sidecar.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let catalog = load_scenarios(&args.scenario)
        .with_context(|| format!("loading scenarios from {}", args.scenario.display()))?;
    let scenario = scenario::select(&catalog, args.name.as_deref())?;

    let assessment = assess_mission(&scenario)?;
    print_summary(&assessment);

    if let Some(csv_dir) = &args.csv_dir {
        export_curves(csv_dir, &scenario, &assessment)?;
    }
    if let Some(json_path) = &args.json {
        sidecar::write_assessment(json_path, &assessment.scenario, &assessment)
            .with_context(|| format!("writing {}", json_path.display()))?;
        println!("wrote {}", json_path.display());
    }

    Ok(())
}

fn print_summary(assessment: &MissionAssessment) {
    println!("scenario: {}", assessment.scenario);
    println!(
        "orbit: {:.1} min period at {:.0} km mean altitude",
        assessment.orbital_period_min, assessment.mean_altitude_km
    );
    println!(
        "power: {:>8.1} W avg generation, {:>8.1} W consumption, margin {:>6.1}% [{}]",
        assessment.power.avg_generation_w,
        assessment.power.avg_consumption_w,
        assessment.power.power_margin * 100.0,
        assessment.power.margin_status
    );
    println!(
        "battery: depth of discharge {:>5.1}% [{}]",
        assessment.power.battery_depth_of_discharge * 100.0,
        assessment.power.battery_status
    );
    println!(
        "delta-v: {:>7.1} m/s available, {:>7.1} m/s required, remaining propellant {:.2} kg [{}]",
        assessment.delta_v.available_m_s,
        assessment.delta_v.required_m_s,
        assessment.delta_v.propellant_remaining_kg,
        assessment.delta_v.status
    );
    println!(
        "link: {:>5.1} dB margin at {:.0}° elevation, {:>5.1} dB at zenith [{}]",
        assessment.link.horizon.link_margin_db,
        assessment.link.horizon.elevation_deg,
        assessment.link.zenith.link_margin_db,
        assessment.link.status
    );
    println!(
        "radiation: {:.2} krad mission total behind shielding [{}]",
        assessment.radiation.mission_total_krad, assessment.radiation.status
    );
    if let Some(constellation) = &assessment.constellation {
        println!(
            "constellation: {} sats in {} planes, coverage to ±{:.1}° latitude",
            constellation.total_satellites,
            constellation.plane_distribution.len(),
            constellation.coverage_lat_band_deg.1
        );
    }
    match assessment.lifetime.outcome {
        DecayOutcome::Deorbited { time_days } => println!(
            "lifetime: deorbits after {:.0} days ({:.1} years) [{}]",
            time_days,
            time_days / 365.25,
            assessment.lifetime.status
        ),
        DecayOutcome::Unresolved { horizon_days } => println!(
            "lifetime: still in orbit at the {:.0}-day horizon [{}]",
            horizon_days, assessment.lifetime.status
        ),
    }
    println!("overall: {}", assessment.overall_status);
}

fn export_curves(
    csv_dir: &PathBuf,
    scenario: &MissionScenario,
    assessment: &MissionAssessment,
) -> Result<()> {
    let link_profile = link_margin_profile(
        &scenario.link,
        assessment.mean_altitude_km,
        LINK_CSV_SAMPLES,
    )?;
    curves::write_samples(
        curves::writer_for_path(&csv_dir.join("link_profile.csv"))?,
        link_profile,
    )?;

    let dose_curve = dose_vs_shielding(
        assessment.mean_altitude_km,
        scenario.elements.inclination_deg,
        scenario.lifetime_years,
        0.0,
        DOSE_SWEEP_MAX_MM,
        DOSE_SWEEP_SAMPLES,
    )?;
    curves::write_samples(
        curves::writer_for_path(&csv_dir.join("dose_vs_shielding.csv"))?,
        dose_curve,
    )?;

    if let Some(beta) = scenario.spacecraft.ballistic_coefficient_kg_m2() {
        let decay =
            propagate_decay(&scenario.elements, beta, scenario.decay_horizon_days)?;
        curves::write_samples(
            curves::writer_for_path(&csv_dir.join("decay_history.csv"))?,
            decay,
        )?;
    }

    println!("wrote CSV tables to {}", csv_dir.display());
    Ok(())
}
