//! Spacecraft, subsystem, propulsion, and maneuver value types.
//!
//! Plain immutable snapshots owned by the caller and passed by reference
//! into the budget modules; nothing here carries state between calls.

/// Spacecraft mass, geometry, and energy-storage descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacecraftConfig {
    pub dry_mass_kg: f64,
    /// Drag-facing cross section (m²).
    pub drag_area_m2: f64,
    /// Drag coefficient, typically ~2.2 for a tumbling box.
    pub drag_coefficient: f64,
    /// Deployed solar-array area (m²).
    pub solar_array_area_m2: f64,
    /// Usable battery capacity (Wh).
    pub battery_capacity_wh: f64,
}

impl SpacecraftConfig {
    /// Ballistic coefficient m / (Cd · A) in kg/m², governing decay rate.
    ///
    /// Returns `None` when the drag geometry is degenerate (zero area or
    /// coefficient), which callers must treat as "drag-free".
    pub fn ballistic_coefficient_kg_m2(&self) -> Option<f64> {
        let drag_term = self.drag_coefficient * self.drag_area_m2;
        if drag_term <= 0.0 || self.dry_mass_kg <= 0.0 {
            return None;
        }
        Some(self.dry_mass_kg / drag_term)
    }
}

/// One named subsystem load.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsystemLoad {
    pub name: String,
    pub power_w: f64,
    /// Fraction of the orbit the load is on, in [0, 1].
    pub duty_cycle: f64,
}

/// Mapping of named loads to average draw; aggregated into mean consumption.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubsystemPowerModel {
    pub loads: Vec<SubsystemLoad>,
}

impl SubsystemPowerModel {
    /// Duty-weighted average consumption in watts.
    pub fn average_consumption_w(&self) -> f64 {
        self.loads
            .iter()
            .map(|load| load.power_w * load.duty_cycle)
            .sum()
    }
}

/// Propulsion system descriptor.
///
/// `None` is a terminal variant: every delta-v output derived from it
/// reports zero available capability.
#[derive(Debug, Clone, PartialEq)]
pub enum PropulsionSystem {
    None,
    Chemical { isp_seconds: f64, propellant_kg: f64 },
    Electric { isp_seconds: f64, propellant_kg: f64 },
}

impl PropulsionSystem {
    /// Specific impulse, zero for the propulsion-less variant.
    pub fn isp_seconds(&self) -> f64 {
        match self {
            PropulsionSystem::None => 0.0,
            PropulsionSystem::Chemical { isp_seconds, .. }
            | PropulsionSystem::Electric { isp_seconds, .. } => *isp_seconds,
        }
    }

    /// Loaded propellant mass, zero for the propulsion-less variant.
    pub fn propellant_kg(&self) -> f64 {
        match self {
            PropulsionSystem::None => 0.0,
            PropulsionSystem::Chemical { propellant_kg, .. }
            | PropulsionSystem::Electric { propellant_kg, .. } => *propellant_kg,
        }
    }
}

/// One entry in the required delta-v ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Maneuver {
    pub id: u32,
    pub name: String,
    pub delta_v_m_s: f64,
}
