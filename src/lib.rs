//! Satellite mission analysis engine.
//!
//! Deterministic astrodynamics and subsystem-budget computations for early
//! mission trade studies: orbit geometry, power, delta-v, RF links,
//! radiation, constellation patterns, and orbital lifetime. Every module is
//! a pure transform over immutable parameter structs, so independent budget
//! computations are safe to run concurrently. Front ends (CLI, UI shells)
//! consume the structured reports; no physics lives outside this library.

pub use mission_core::{angles, constants, time, units};

pub use mission_config as config;
pub use mission_constellation as constellation;
pub use mission_deltav as deltav;
pub use mission_environment as environment;
pub use mission_export as export;
pub use mission_lifetime as lifetime;
pub use mission_link as link;
pub use mission_orbits as orbits;
pub use mission_power as power;
pub use mission_radiation as radiation;
pub use mission_report as report;
pub use mission_spacecraft as spacecraft;

pub mod assessment;
pub mod scenario;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
