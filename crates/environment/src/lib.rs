//! Environment models shared by the budget modules.
//!
//! Everything here is a pure function over scalars, tuned for
//! engineering-grade trade studies rather than operational fidelity.

pub mod atmosphere;
pub mod eclipse;
pub mod radiation;

pub use atmosphere::atmospheric_density_kg_m3;
pub use eclipse::{beta_angle_deg, eclipse_duration_min, eclipse_fraction};
pub use radiation::{annual_dose_krad, shielding_attenuation};
