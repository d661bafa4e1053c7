//! Sub-satellite ground-track generation.
//!
//! Two-body propagation only: the mean anomaly advances linearly in time and
//! the sub-satellite point is projected onto a rotating Earth. No J2 or drag
//! perturbations are applied.

use crate::{OrbitError, OrbitalElements, derive_orbital_state, eccentric_anomaly, true_anomaly};
use mission_core::angles::wrap_longitude_deg;
use mission_core::constants::EARTH_ROTATION_RATE_RAD_S;

/// One sub-satellite point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundTrackSample {
    pub time_s: f64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

/// Lazy, finite, restartable sequence of sub-satellite points.
///
/// Restartable by construction: the iterator is `Clone` and cloning rewinds
/// to the first sample. Each sample is computed on demand, so a caller that
/// stops consuming simply stops paying.
#[derive(Debug, Clone)]
pub struct GroundTrack {
    elements: OrbitalElements,
    mean_motion_rad_s: f64,
    step_s: f64,
    samples_remaining: usize,
    next_time_s: f64,
}

/// Build a ground track covering `duration_s` sampled every `step_s` seconds.
pub fn ground_track(
    elements: &OrbitalElements,
    duration_s: f64,
    step_s: f64,
) -> Result<GroundTrack, OrbitError> {
    let state = derive_orbital_state(elements)?;
    if duration_s <= 0.0 || step_s <= 0.0 {
        return Err(OrbitError::InvalidTrackSampling);
    }
    let samples = (duration_s / step_s).floor() as usize + 1;
    Ok(GroundTrack {
        elements: *elements,
        mean_motion_rad_s: state.mean_motion_rad_s,
        step_s,
        samples_remaining: samples,
        next_time_s: 0.0,
    })
}

impl GroundTrack {
    fn sample_at(&self, time_s: f64) -> GroundTrackSample {
        let e = self.elements.eccentricity;
        let mean_anomaly =
            self.elements.mean_anomaly_deg.to_radians() + self.mean_motion_rad_s * time_s;
        let nu = true_anomaly(eccentric_anomaly(mean_anomaly, e), e);

        // Argument of latitude locates the satellite within its plane.
        let arg_latitude = nu + self.elements.arg_perigee_deg.to_radians();
        let inc = self.elements.inclination_deg.to_radians();

        let latitude = (inc.sin() * arg_latitude.sin()).asin();
        // Longitude of the sub-satellite point relative to the ascending node,
        // then shifted by RAAN and the rotation of the Earth underneath.
        let node_relative = (inc.cos() * arg_latitude.sin()).atan2(arg_latitude.cos());
        let longitude = self.elements.raan_deg.to_radians() + node_relative
            - EARTH_ROTATION_RATE_RAD_S * time_s;

        GroundTrackSample {
            time_s,
            latitude_deg: latitude.to_degrees(),
            longitude_deg: wrap_longitude_deg(longitude.to_degrees()),
        }
    }
}

impl Iterator for GroundTrack {
    type Item = GroundTrackSample;

    fn next(&mut self) -> Option<GroundTrackSample> {
        if self.samples_remaining == 0 {
            return None;
        }
        let sample = self.sample_at(self.next_time_s);
        self.samples_remaining -= 1;
        self.next_time_s += self.step_s;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.samples_remaining, Some(self.samples_remaining))
    }
}

impl ExactSizeIterator for GroundTrack {}
