//! Time-related calculations for the solar ephemeris.
//!
//! This module provides the [`JulianDay`] type used throughout the crate,
//! conversions to and from `chrono` datetimes, and timestamp formatting.

#![allow(clippy::unreadable_literal)]

use crate::math::{floor, round};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::TimeZone;

/// Julian day number of the Unix epoch (1970-01-01 00:00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian day number of the J2000.0 epoch (2000-01-01 12:00:00 UTC).
pub(crate) const J2000_JD: f64 = 2_451_545.0;

/// Milliseconds per day (86,400,000)
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Continuous Julian day number used for all ephemeris calculations.
///
/// The value counts days (including the fractional part) since noon on
/// January 1, 4713 BCE; midnight at the start of the Unix epoch is
/// 2,440,587.5. Fractional values denote the time of day, so adding 0.5
/// moves from one noon to the following midnight.
///
/// # Example
/// ```
/// # use solar_ephemeris::JulianDay;
/// let noon_j2000 = JulianDay::new(2_451_545.0);
/// assert_eq!(noon_j2000.days_since_j2000(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Creates a Julian day from a raw day number.
    ///
    /// The value is not validated here; the calculation entry points reject
    /// non-finite day numbers.
    #[must_use]
    pub const fn new(julian_day: f64) -> Self {
        Self(julian_day)
    }

    /// Creates a Julian day from days relative to the J2000.0 epoch
    /// (2000-01-01 12:00:00 UTC).
    #[must_use]
    pub fn from_days_since_j2000(days: f64) -> Self {
        Self(J2000_JD + days)
    }

    /// Gets the raw Julian day number.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Gets the number of days since the J2000.0 epoch.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000_JD
    }

    /// Creates a Julian day from a timezone-aware chrono `DateTime`.
    ///
    /// The datetime is taken as an absolute instant, so the same moment
    /// expressed in different timezones yields the same Julian day.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::JulianDay;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let datetime = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    /// let jd = JulianDay::from_datetime(&datetime);
    /// assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
    /// ```
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let millis = datetime.timestamp_millis();
        Self(millis as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD)
    }

    /// Converts the Julian day to a chrono `DateTime` in the given timezone.
    ///
    /// The instant is rounded to the nearest millisecond.
    ///
    /// # Errors
    /// Returns `InvalidJulianDay` for a non-finite day number, or
    /// `InvalidDateTime` if the instant is outside chrono's representable
    /// range.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::JulianDay;
    /// use chrono::Utc;
    ///
    /// let datetime = JulianDay::new(2_440_587.5).to_datetime(&Utc).unwrap();
    /// assert_eq!(datetime.to_rfc3339(), "1970-01-01T00:00:00+00:00");
    /// ```
    #[cfg(feature = "chrono")]
    pub fn to_datetime<Tz: TimeZone>(&self, timezone: &Tz) -> Result<chrono::DateTime<Tz>> {
        if !self.0.is_finite() {
            return Err(Error::invalid_julian_day(self.0));
        }
        let millis = round((self.0 - UNIX_EPOCH_JD) * MILLIS_PER_DAY);
        chrono::DateTime::<chrono::Utc>::from_timestamp_millis(millis as i64)
            .map(|utc| utc.with_timezone(timezone))
            .ok_or_else(|| Error::invalid_datetime("instant is outside the representable range"))
    }

    /// Creates a Julian day from year, month, day, hour, minute, and second
    /// in UTC, without requiring chrono.
    ///
    /// Dates are interpreted in the proleptic Gregorian calendar, matching
    /// the Unix time scale (and chrono's calendar) for all years.
    ///
    /// # Arguments
    /// * `year` - Year (can be negative for BCE years)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its valid range.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::JulianDay;
    /// let jd = JulianDay::from_utc(1970, 1, 1, 0, 0, 0.0).unwrap();
    /// assert!((jd.value() - 2_440_587.5).abs() < 1e-9);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        Ok(Self(calculate_julian_day(
            year, month, day, hour, minute, second,
        )))
    }
}

/// Calculates the Julian day number from proleptic Gregorian date/time
/// components, following Meeus, "Astronomical Algorithms", 2nd edition.
fn calculate_julian_day(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
    let mut y = year;
    #[allow(clippy::cast_possible_wrap)]
    let mut m = month as i32;

    // January and February count as months 13 and 14 of the previous year
    if m < 3 {
        y -= 1;
        m += 12;
    }

    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let jd =
        floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1)) + d - 1524.5;

    // Gregorian leap year correction, applied for all years (proleptic)
    let a = floor(f64::from(y) / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    jd + b
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Formats a datetime as `YYYY-MM-DD HH:MM:SS` in its own timezone.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::format_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let datetime = Utc.with_ymd_and_hms(2023, 6, 21, 4, 43, 9).unwrap();
/// assert_eq!(format_timestamp(&datetime), "2023-06-21 04:43:09");
/// ```
#[cfg(all(feature = "std", feature = "chrono"))]
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> String
where
    Tz::Offset: core::fmt::Display,
{
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}
