//! Scenario models and loaders for the satellite mission calculator.
//!
//! The engine imposes no persistence format of its own; these models are
//! the plain structured values an external state layer hands to it. A
//! scenario source is either a YAML catalog (a list of scenarios), a single
//! TOML scenario, or a directory of TOML scenario fragments.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One saved mission design point.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub orbit: OrbitConfig,
    pub spacecraft: SpacecraftDefConfig,
    #[serde(default)]
    pub subsystems: Vec<SubsystemLoadConfig>,
    pub propulsion: PropulsionDefConfig,
    #[serde(default)]
    pub maneuvers: Vec<ManeuverConfig>,
    pub link: LinkDefConfig,
    #[serde(default)]
    pub walker: Option<WalkerDefConfig>,
    pub lifetime_years: f64,
    #[serde(default = "default_decay_horizon_days")]
    pub decay_horizon_days: f64,
    #[serde(default = "default_shielding_mm")]
    pub shielding_mm: f64,
}

fn default_decay_horizon_days() -> f64 {
    9_131.25 // 25 years, the common deorbit-guideline horizon
}

fn default_shielding_mm() -> f64 {
    2.0
}

/// Orbit geometry: a circular shortcut via `altitude_km`, or explicit
/// elements via `semi_major_axis_km`.
#[derive(Debug, Deserialize, Clone)]
pub struct OrbitConfig {
    #[serde(default)]
    pub altitude_km: Option<f64>,
    #[serde(default)]
    pub semi_major_axis_km: Option<f64>,
    #[serde(default)]
    pub eccentricity: f64,
    pub inclination_deg: f64,
    #[serde(default)]
    pub raan_deg: f64,
    #[serde(default)]
    pub arg_perigee_deg: f64,
    #[serde(default)]
    pub mean_anomaly_deg: f64,
}

/// Spacecraft mass, geometry, and battery descriptor.
#[derive(Debug, Deserialize, Clone)]
pub struct SpacecraftDefConfig {
    pub dry_mass_kg: f64,
    pub drag_area_m2: f64,
    #[serde(default = "default_drag_coefficient")]
    pub drag_coefficient: f64,
    pub solar_array_area_m2: f64,
    pub battery_capacity_wh: f64,
}

fn default_drag_coefficient() -> f64 {
    2.2
}

/// One named subsystem load.
#[derive(Debug, Deserialize, Clone)]
pub struct SubsystemLoadConfig {
    pub name: String,
    pub power_w: f64,
    #[serde(default = "default_duty_cycle")]
    pub duty_cycle: f64,
}

fn default_duty_cycle() -> f64 {
    1.0
}

/// Propulsion descriptor in scenario manifests.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum PropulsionDefConfig {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "chemical")]
    Chemical { isp_seconds: f64, propellant_kg: f64 },
    #[serde(rename = "electric")]
    Electric { isp_seconds: f64, propellant_kg: f64 },
    #[serde(other)]
    Unsupported,
}

/// One required-budget ledger entry.
#[derive(Debug, Deserialize, Clone)]
pub struct ManeuverConfig {
    pub name: String,
    pub delta_v_m_s: f64,
}

/// Fixed per-link budget constants.
#[derive(Debug, Deserialize, Clone)]
pub struct LinkDefConfig {
    pub frequency_ghz: f64,
    pub eirp_dbw: f64,
    pub rx_gain_dbi: f64,
    pub system_noise_temp_k: f64,
    pub data_rate_kbps: f64,
    pub required_eb_n0_db: f64,
    #[serde(default = "default_implementation_loss_db")]
    pub implementation_loss_db: f64,
}

fn default_implementation_loss_db() -> f64 {
    2.0
}

/// Walker pattern definition; altitude and inclination default to the
/// scenario orbit when omitted.
#[derive(Debug, Deserialize, Clone)]
pub struct WalkerDefConfig {
    pub pattern: String,
    pub total_sats: u32,
    pub planes: u32,
    #[serde(default)]
    pub phasing: u32,
    #[serde(default)]
    pub altitude_km: Option<f64>,
    #[serde(default)]
    pub inclination_deg: Option<f64>,
}

/// Errors that can occur while loading scenario files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load scenario configurations from a YAML catalog, a TOML file, or a
/// directory of TOML fragments.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
