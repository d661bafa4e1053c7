//! Core units, constants, and shared primitives for the mission calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Earth gravitational parameter (km³/s²).
    pub const MU_EARTH_KM3_S2: f64 = 398_600.4418;
    /// Earth equatorial radius (km).
    pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6_378.137;
    /// Earth mean radius (km), used for shadow and coverage geometry.
    pub const EARTH_MEAN_RADIUS_KM: f64 = 6_371.0;
    /// Earth sidereal rotation rate (rad/s).
    pub const EARTH_ROTATION_RATE_RAD_S: f64 = 7.292_115_9e-5;
    /// Obliquity of the ecliptic (deg).
    pub const EARTH_OBLIQUITY_DEG: f64 = 23.44;
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Solar flux at 1 AU (W/m²).
    pub const SOLAR_FLUX_W_M2: f64 = 1_361.0;
    /// Speed of light (m/s).
    pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;
    /// Boltzmann constant expressed in decibel-watts per kelvin per hertz.
    pub const BOLTZMANN_DBW_K_HZ: f64 = -228.6;
    /// Altitude treated as the atmospheric entry interface (km).
    pub const ATMOSPHERIC_INTERFACE_ALTITUDE_KM: f64 = 120.0;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Seconds per Julian year.
    pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert a linear power ratio to decibels.
    #[inline]
    pub fn ratio_to_db(v: f64) -> f64 {
        10.0 * v.log10()
    }

    /// Convert decibels to a linear power ratio.
    #[inline]
    pub fn db_to_ratio(v: f64) -> f64 {
        10.0_f64.powf(v / 10.0)
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }

    /// Convert seconds to minutes.
    #[inline]
    pub fn seconds_to_minutes(seconds: f64) -> f64 {
        seconds / 60.0
    }
}

/// Angle helpers shared by ground-track and coverage geometry.
pub mod angles {
    /// Wrap an angle in degrees to the interval [-180, 180).
    #[inline]
    pub fn wrap_longitude_deg(deg: f64) -> f64 {
        let mut wrapped = (deg + 180.0) % 360.0;
        if wrapped < 0.0 {
            wrapped += 360.0;
        }
        wrapped - 180.0
    }

    /// Fold an inclination into its effective latitude reach, min(i, 180 - i).
    #[inline]
    pub fn effective_inclination_deg(inclination_deg: f64) -> f64 {
        inclination_deg.min(180.0 - inclination_deg)
    }
}
