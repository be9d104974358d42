//! Sun position calculation in horizontal coordinates.

#![allow(clippy::many_single_char_names)]

use crate::error::{check_coordinates, check_julian_day};
use crate::math::{asin, atan2, cos, degrees_to_radians, sin, tan, PI};
use crate::solar::{sidereal_time, sun_coordinates};
use crate::time::JulianDay;
use crate::types::SunPosition;
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Calculates the sun's azimuth and altitude for a datetime and location.
///
/// The datetime is taken as an absolute instant; its timezone does not
/// affect the result.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Errors
/// Returns an error for out-of-range coordinates.
///
/// # Example
/// ```
/// use solar_ephemeris::sun_position;
/// use chrono::{TimeZone, Utc};
///
/// // London, noon UTC on the June solstice
/// let datetime = Utc.with_ymd_and_hms(2023, 6, 21, 12, 0, 0).unwrap();
/// let position = sun_position(datetime, 51.5074, -0.1278).unwrap();
///
/// // A few minutes before solar noon: just east of south, near the
/// // highest point of the year
/// assert!((position.azimuth_degrees() - 178.75).abs() < 0.05);
/// assert!((position.altitude_degrees() - 61.93).abs() < 0.05);
/// ```
#[cfg(feature = "chrono")]
pub fn sun_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SunPosition> {
    sun_position_from_julian(JulianDay::from_datetime(&datetime), latitude, longitude)
}

/// Calculates the sun's azimuth and altitude for a Julian day and location.
///
/// This is the numeric entry point, available without chrono and in
/// `no_std` builds.
///
/// # Errors
/// Returns an error for a non-finite Julian day or out-of-range
/// coordinates.
///
/// # Example
/// ```
/// use solar_ephemeris::{sun_position_from_julian, JulianDay};
///
/// let jd = JulianDay::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
/// let position = sun_position_from_julian(jd, 50.5, 30.5).unwrap();
///
/// assert!((position.azimuth() - 0.6412750628729547).abs() < 1e-6);
/// assert!((position.altitude() + 0.7000406838781611).abs() < 1e-6);
/// ```
pub fn sun_position_from_julian(
    julian_day: JulianDay,
    latitude: f64,
    longitude: f64,
) -> Result<SunPosition> {
    check_julian_day(julian_day.value())?;
    check_coordinates(latitude, longitude)?;

    let lw = -degrees_to_radians(longitude);
    let phi = degrees_to_radians(latitude);
    let d = julian_day.days_since_j2000();

    let coords = sun_coordinates(d);
    let h = sidereal_time(d, lw) - coords.right_ascension;

    // asin argument can drift just past 1 when the sun is at the zenith
    let sin_altitude = (sin(phi) * sin(coords.declination)
        + cos(phi) * cos(coords.declination) * cos(h))
    .clamp(-1.0, 1.0);
    let altitude = asin(sin_altitude);

    // Shifted by π so that azimuth is measured from north instead of south
    let azimuth = PI + atan2(sin(h), cos(h) * sin(phi) - tan(coords.declination) * cos(phi));

    SunPosition::new(azimuth, altitude)
}
