//! Calculation of sunrise, sunset, twilight and golden-hour times.
//!
//! The algorithm estimates the solar transit closest to the requested
//! instant, then finds when the sun crosses each event's threshold
//! elevation on its way up and down. Rise times are obtained by
//! mirroring the corresponding set times around the transit, so each
//! rising/setting pair is symmetric about solar noon.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::error::{check_coordinates, check_julian_day};
use crate::math::{acos, cos, degrees_to_radians, round, sin, TWO_PI};
use crate::solar::{declination, ecliptic_longitude, mean_anomaly};
use crate::time::{JulianDay, J2000_JD};
use crate::types::{Event, EventTime, SunEvents};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Fractional-day offset of the mean solar transit from midnight UTC.
const J0: f64 = 0.0009;

/// Rising/setting pairs sharing a threshold elevation. The threshold is
/// taken from the rising member.
const EVENT_PAIRS: [(Event, Event); 6] = [
    (Event::Sunrise, Event::Sunset),
    (Event::SunriseEnd, Event::SunsetStart),
    (Event::Dawn, Event::Dusk),
    (Event::NauticalDawn, Event::NauticalDusk),
    (Event::NightEnd, Event::Night),
    (Event::GoldenHourEnd, Event::GoldenHour),
];

/// Calculates the times of solar noon, nadir, and all rising and setting
/// events for the day of the solar transit closest to `datetime`.
///
/// Because the table is anchored to the nearest transit, an instant
/// close to midnight may resolve to the previous civil day's transit.
/// Pass a time near local noon to select a specific date.
///
/// `latitude` and `longitude` are in degrees, northern and eastern
/// coordinates positive. The returned times carry the same timezone as
/// the input, so results can be requested directly in a local zone.
///
/// Events the sun does not reach on that day are reported as
/// [`EventTime::AlwaysAbove`] or [`EventTime::AlwaysBelow`] rather than
/// as times.
///
/// # Errors
/// Returns an error if `latitude` is outside [-90, 90], `longitude` is
/// outside [-180, 180], or a resulting time cannot be represented.
///
/// # Examples
/// ```
/// # use chrono::{TimeZone, Utc};
/// # use solar_ephemeris::{sun_events, Event};
/// let datetime = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
/// let events = sun_events(datetime, 50.5, 30.5).unwrap();
///
/// let sunrise = events.get(Event::Sunrise).time().unwrap();
/// assert_eq!(sunrise.format("%H:%M:%S").to_string(), "04:34:56");
/// assert_eq!(events.transit().format("%H:%M:%S").to_string(), "10:10:57");
/// ```
#[cfg(feature = "chrono")]
pub fn sun_events<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SunEvents<DateTime<Tz>>> {
    let julian_day = JulianDay::from_datetime(&datetime);
    let table = sun_events_from_julian(julian_day, latitude, longitude)?;
    let timezone = datetime.timezone();
    table.try_map_times(|jd| jd.to_datetime(&timezone))
}

/// Calculates the event table for the solar transit closest to
/// `julian_day`, with all times as [`JulianDay`] values.
///
/// This is the plain-number core of [`sun_events`] and is available
/// without the `chrono` feature.
///
/// # Errors
/// Returns an error if `julian_day` is not finite or the coordinates are
/// out of range.
pub fn sun_events_from_julian(
    julian_day: JulianDay,
    latitude: f64,
    longitude: f64,
) -> Result<SunEvents<JulianDay>> {
    check_julian_day(julian_day.value())?;
    check_coordinates(latitude, longitude)?;

    let lw = -degrees_to_radians(longitude);
    let phi = degrees_to_radians(latitude);
    let d = julian_day.days_since_j2000();

    let n = julian_cycle(d, lw);
    let ds = approx_transit(0.0, lw, n);

    let m = mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = declination(l);

    let j_noon = solar_transit_j(ds, m, l);

    let mut times = [EventTime::AlwaysBelow; 12];
    for (rising, setting) in EVENT_PAIRS {
        let threshold = degrees_to_radians(rising.elevation_angle());
        let (rise, set) = match threshold_crossing(threshold, phi, dec) {
            ThresholdCrossing::At(ht) => {
                let j_set = solar_transit_j(approx_transit(ht, lw, n), m, l);
                let j_rise = j_noon - (j_set - j_noon);
                (
                    EventTime::At(JulianDay::new(j_rise)),
                    EventTime::At(JulianDay::new(j_set)),
                )
            }
            ThresholdCrossing::AllDay => (EventTime::AlwaysAbove, EventTime::AlwaysAbove),
            ThresholdCrossing::AllNight => (EventTime::AlwaysBelow, EventTime::AlwaysBelow),
        };
        times[rising.index()] = rise;
        times[setting.index()] = set;
    }

    Ok(SunEvents::new(
        JulianDay::new(j_noon),
        JulianDay::new(j_noon - 0.5),
        times,
    ))
}

/// Where the sun's daily arc sits relative to a threshold elevation.
enum ThresholdCrossing {
    /// Setting hour angle at which the threshold is crossed, in radians.
    At(f64),
    /// The sun stays above the threshold all day.
    AllDay,
    /// The sun stays below the threshold all day.
    AllNight,
}

fn threshold_crossing(threshold: f64, phi: f64, dec: f64) -> ThresholdCrossing {
    let acos_arg = (sin(threshold) - sin(phi) * sin(dec)) / (cos(phi) * cos(dec));
    if acos_arg < -1.0 {
        ThresholdCrossing::AllDay
    } else if acos_arg > 1.0 || acos_arg.is_nan() {
        // NaN can only come from a 0/0 at degenerate pole geometry,
        // where the sun never crosses the threshold either
        ThresholdCrossing::AllNight
    } else {
        ThresholdCrossing::At(acos(acos_arg))
    }
}

/// Number of the solar cycle (days since the J2000 transit at the
/// reference meridian) whose transit lies closest to day value `d`.
fn julian_cycle(d: f64, lw: f64) -> f64 {
    round(d - J0 - lw / TWO_PI)
}

/// Approximate day value of the transit of cycle `n`, shifted by
/// `hour_angle` towards the setting side.
fn approx_transit(hour_angle: f64, lw: f64, n: f64) -> f64 {
    J0 + (hour_angle + lw) / TWO_PI + n
}

/// Refines an approximate transit day value into a Julian day, applying
/// the equation-of-time correction.
fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000_JD + ds + 0.0053 * sin(m) - 0.0069 * sin(2.0 * l)
}
