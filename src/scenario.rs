//! Conversion from scenario configuration into runtime parameter bundles.

use mission_config::{
    OrbitConfig, PropulsionDefConfig, ScenarioConfig, WalkerDefConfig,
};
use mission_constellation::{WalkerParams, WalkerPattern};
use mission_core::constants::EARTH_EQUATORIAL_RADIUS_KM;
use mission_link::LinkBudgetConfig;
use mission_orbits::OrbitalElements;
use mission_spacecraft::{
    Maneuver, PropulsionSystem, SpacecraftConfig, SubsystemLoad, SubsystemPowerModel,
};
use thiserror::Error;

/// Fully resolved runtime scenario handed to the assessment orchestrator.
#[derive(Debug, Clone)]
pub struct MissionScenario {
    pub name: String,
    pub elements: OrbitalElements,
    pub spacecraft: SpacecraftConfig,
    pub subsystems: SubsystemPowerModel,
    pub propulsion: PropulsionSystem,
    pub maneuvers: Vec<Maneuver>,
    pub link: LinkBudgetConfig,
    pub walker: Option<WalkerParams>,
    pub lifetime_years: f64,
    pub decay_horizon_days: f64,
    pub shielding_mm: f64,
}

/// Errors surfaced when resolving or selecting scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("orbit needs either altitude_km or semi_major_axis_km")]
    MissingOrbitGeometry,
    #[error("propulsion configuration is not supported")]
    UnsupportedPropulsion,
    #[error("unknown walker pattern '{0}', expected 'delta' or 'star'")]
    UnknownWalkerPattern(String),
    #[error("scenario '{0}' not found in catalog")]
    NotFound(String),
    #[error("scenario catalog is empty")]
    EmptyCatalog,
}

/// Convert a `ScenarioConfig` into its runtime representation.
pub fn from_config(config: &ScenarioConfig) -> Result<MissionScenario, ScenarioError> {
    let elements = resolve_elements(&config.orbit)?;

    let propulsion = match &config.propulsion {
        PropulsionDefConfig::None => PropulsionSystem::None,
        PropulsionDefConfig::Chemical {
            isp_seconds,
            propellant_kg,
        } => PropulsionSystem::Chemical {
            isp_seconds: *isp_seconds,
            propellant_kg: *propellant_kg,
        },
        PropulsionDefConfig::Electric {
            isp_seconds,
            propellant_kg,
        } => PropulsionSystem::Electric {
            isp_seconds: *isp_seconds,
            propellant_kg: *propellant_kg,
        },
        PropulsionDefConfig::Unsupported => {
            return Err(ScenarioError::UnsupportedPropulsion);
        }
    };

    let walker = config
        .walker
        .as_ref()
        .map(|w| resolve_walker(w, &config.orbit, &elements))
        .transpose()?;

    Ok(MissionScenario {
        name: config.name.clone(),
        elements,
        spacecraft: SpacecraftConfig {
            dry_mass_kg: config.spacecraft.dry_mass_kg,
            drag_area_m2: config.spacecraft.drag_area_m2,
            drag_coefficient: config.spacecraft.drag_coefficient,
            solar_array_area_m2: config.spacecraft.solar_array_area_m2,
            battery_capacity_wh: config.spacecraft.battery_capacity_wh,
        },
        subsystems: SubsystemPowerModel {
            loads: config
                .subsystems
                .iter()
                .map(|load| SubsystemLoad {
                    name: load.name.clone(),
                    power_w: load.power_w,
                    duty_cycle: load.duty_cycle,
                })
                .collect(),
        },
        propulsion,
        maneuvers: config
            .maneuvers
            .iter()
            .enumerate()
            .map(|(index, m)| Maneuver {
                id: index as u32,
                name: m.name.clone(),
                delta_v_m_s: m.delta_v_m_s,
            })
            .collect(),
        link: LinkBudgetConfig {
            frequency_ghz: config.link.frequency_ghz,
            eirp_dbw: config.link.eirp_dbw,
            rx_gain_dbi: config.link.rx_gain_dbi,
            system_noise_temp_k: config.link.system_noise_temp_k,
            data_rate_kbps: config.link.data_rate_kbps,
            required_eb_n0_db: config.link.required_eb_n0_db,
            implementation_loss_db: config.link.implementation_loss_db,
        },
        walker,
        lifetime_years: config.lifetime_years,
        decay_horizon_days: config.decay_horizon_days,
        shielding_mm: config.shielding_mm,
    })
}

/// Select a scenario from the catalog by optional name, defaulting to the
/// first entry.
pub fn select(
    configs: &[ScenarioConfig],
    requested: Option<&str>,
) -> Result<MissionScenario, ScenarioError> {
    if configs.is_empty() {
        return Err(ScenarioError::EmptyCatalog);
    }

    let chosen = if let Some(name) = requested {
        let upper = name.to_uppercase();
        configs
            .iter()
            .find(|cfg| cfg.name.to_uppercase() == upper)
            .ok_or_else(|| ScenarioError::NotFound(name.to_string()))?
    } else {
        &configs[0]
    };

    from_config(chosen)
}

fn resolve_elements(orbit: &OrbitConfig) -> Result<OrbitalElements, ScenarioError> {
    let semi_major_axis_km = match (orbit.semi_major_axis_km, orbit.altitude_km) {
        (Some(a), _) => a,
        (None, Some(altitude)) => EARTH_EQUATORIAL_RADIUS_KM + altitude,
        (None, None) => return Err(ScenarioError::MissingOrbitGeometry),
    };
    Ok(OrbitalElements {
        semi_major_axis_km,
        eccentricity: orbit.eccentricity,
        inclination_deg: orbit.inclination_deg,
        raan_deg: orbit.raan_deg,
        arg_perigee_deg: orbit.arg_perigee_deg,
        mean_anomaly_deg: orbit.mean_anomaly_deg,
    })
}

fn resolve_walker(
    walker: &WalkerDefConfig,
    orbit: &OrbitConfig,
    elements: &OrbitalElements,
) -> Result<WalkerParams, ScenarioError> {
    let pattern = match walker.pattern.to_lowercase().as_str() {
        "delta" => WalkerPattern::Delta,
        "star" => WalkerPattern::Star,
        other => return Err(ScenarioError::UnknownWalkerPattern(other.to_string())),
    };
    let altitude_km = walker
        .altitude_km
        .or(orbit.altitude_km)
        .unwrap_or(elements.semi_major_axis_km - EARTH_EQUATORIAL_RADIUS_KM);
    Ok(WalkerParams {
        pattern,
        total_sats: walker.total_sats,
        planes: walker.planes,
        phasing: walker.phasing,
        altitude_km,
        inclination_deg: walker.inclination_deg.unwrap_or(orbit.inclination_deg),
    })
}
