//! Status classification shared by every budget report.
//!
//! Each budget module emits scalar results plus a [`Status`] derived from
//! fixed thresholds. Presentation layers map the status to styling; the
//! engine only emits the enumerated value.

use serde::Serialize;
use std::fmt;

/// Three-level design verdict attached to every budget report.
///
/// Ordering is by severity, so `max` of two statuses is the worse one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Nominal,
    Warning,
    Critical,
}

impl Status {
    /// Classify a fractional margin where larger is better.
    ///
    /// `margin >= nominal_min` is nominal, `margin >= warning_min` is a
    /// warning, anything below is critical.
    pub fn from_margin(margin: f64, nominal_min: f64, warning_min: f64) -> Self {
        if margin >= nominal_min {
            Status::Nominal
        } else if margin >= warning_min {
            Status::Warning
        } else {
            Status::Critical
        }
    }

    /// Classify a load-style metric where smaller is better (e.g. battery
    /// depth of discharge).
    pub fn from_load(load: f64, warning_max: f64, critical_max: f64) -> Self {
        if load <= warning_max {
            Status::Nominal
        } else if load <= critical_max {
            Status::Warning
        } else {
            Status::Critical
        }
    }

    /// Severity join of two statuses.
    pub fn worst(self, other: Status) -> Status {
        self.max(other)
    }

    /// True when the status is [`Status::Critical`].
    pub fn is_critical(self) -> bool {
        matches!(self, Status::Critical)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Nominal => "nominal",
            Status::Warning => "warning",
            Status::Critical => "critical",
        };
        f.write_str(label)
    }
}
