//! Geocentric solar coordinate formulas.
//!
//! Low-accuracy expressions for the sun's ecliptic longitude, declination,
//! right ascension and the local sidereal time, as described in the
//! "Position of the Sun" chapter of Astronomy Answers (aa.quae.nl).
//! All angles are in radians; time is in days since the J2000.0 epoch.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{asin, atan2, cos, degrees_to_radians, sin, PI};

/// Obliquity of Earth's axis, in radians (23.4397°).
pub(crate) const EARTH_OBLIQUITY: f64 = 0.40909994067971484;

/// Longitude of Earth's perihelion, in degrees.
const PERIHELION_LONGITUDE: f64 = 102.9372;

/// Geocentric equatorial coordinates of the sun.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SunCoordinates {
    /// Declination in radians.
    pub declination: f64,
    /// Right ascension in radians.
    pub right_ascension: f64,
}

/// Solar mean anomaly for the given days since J2000.0.
pub(crate) fn mean_anomaly(days: f64) -> f64 {
    degrees_to_radians(357.5291 + 0.98560028 * days)
}

/// Equation of center: the correction from mean to true anomaly.
pub(crate) fn equation_of_center(mean_anomaly: f64) -> f64 {
    let m = mean_anomaly;
    degrees_to_radians(1.9148 * sin(m) + 0.02 * sin(2.0 * m) + 0.0003 * sin(3.0 * m))
}

/// Ecliptic longitude of the sun, from its mean anomaly.
///
/// Adds π because the formula ladder tracks Earth as seen from the sun;
/// the sun as seen from Earth sits opposite.
pub(crate) fn ecliptic_longitude(mean_anomaly: f64) -> f64 {
    mean_anomaly
        + equation_of_center(mean_anomaly)
        + degrees_to_radians(PERIHELION_LONGITUDE)
        + PI
}

/// Declination of the sun for an ecliptic longitude.
///
/// The sun's ecliptic latitude never exceeds 0.00033° and is taken as zero.
pub(crate) fn declination(ecliptic_longitude: f64) -> f64 {
    asin(sin(ecliptic_longitude) * sin(EARTH_OBLIQUITY))
}

/// Right ascension of the sun for an ecliptic longitude.
pub(crate) fn right_ascension(ecliptic_longitude: f64) -> f64 {
    atan2(
        sin(ecliptic_longitude) * cos(EARTH_OBLIQUITY),
        cos(ecliptic_longitude),
    )
}

/// Local sidereal time for the given days since J2000.0 and west longitude.
pub(crate) fn sidereal_time(days: f64, west_longitude: f64) -> f64 {
    degrees_to_radians(280.16 + 360.9856235 * days) - west_longitude
}

/// Declination and right ascension of the sun for the given days since
/// J2000.0.
pub(crate) fn sun_coordinates(days: f64) -> SunCoordinates {
    let l = ecliptic_longitude(mean_anomaly(days));
    SunCoordinates {
        declination: declination(l),
        right_ascension: right_ascension(l),
    }
}
