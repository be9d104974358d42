//! Core data types for the solar ephemeris.

use crate::error::{check_altitude, check_azimuth};
use crate::math::radians_to_degrees;
use crate::Result;
use core::fmt;

/// The twelve threshold events of a solar day.
///
/// Events come in rising/setting pairs sharing a sun elevation threshold:
/// the rising member is when the sun climbs through the threshold before
/// the solar transit, the setting member when it descends through it
/// afterwards.
///
/// # Example
/// ```
/// # use solar_ephemeris::Event;
/// assert_eq!(Event::Sunrise.elevation_angle(), -0.833);
/// assert_eq!(Event::Sunrise.name(), "sunrise");
/// assert!(Event::Sunrise.is_rising());
/// assert!(!Event::Dusk.is_rising());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Sun's upper limb touches the horizon in the morning (-0.833°).
    Sunrise,
    /// Sun's upper limb touches the horizon in the evening (-0.833°).
    Sunset,
    /// Sun's lower limb clears the horizon; end of the sunrise (-0.3°).
    SunriseEnd,
    /// Sun's lower limb touches the horizon; start of the sunset (-0.3°).
    SunsetStart,
    /// Start of civil twilight in the morning (-6°).
    Dawn,
    /// End of civil twilight in the evening (-6°).
    Dusk,
    /// Start of nautical twilight in the morning (-12°).
    NauticalDawn,
    /// End of nautical twilight in the evening (-12°).
    NauticalDusk,
    /// End of astronomical night in the morning (-18°).
    NightEnd,
    /// Start of astronomical night in the evening (-18°).
    Night,
    /// End of the morning golden hour (+6°).
    GoldenHourEnd,
    /// Start of the evening golden hour (+6°).
    GoldenHour,
}

impl Event {
    /// All twelve events, in rising/setting pair order.
    pub const ALL: [Self; 12] = [
        Self::Sunrise,
        Self::Sunset,
        Self::SunriseEnd,
        Self::SunsetStart,
        Self::Dawn,
        Self::Dusk,
        Self::NauticalDawn,
        Self::NauticalDusk,
        Self::NightEnd,
        Self::Night,
        Self::GoldenHourEnd,
        Self::GoldenHour,
    ];

    /// Gets the sun elevation threshold for this event, in degrees.
    ///
    /// Negative values are below the horizon. The -0.833° horizon pair
    /// accounts for average refraction and the sun's apparent radius.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::Sunrise | Self::Sunset => -0.833,
            Self::SunriseEnd | Self::SunsetStart => -0.3,
            Self::Dawn | Self::Dusk => -6.0,
            Self::NauticalDawn | Self::NauticalDusk => -12.0,
            Self::NightEnd | Self::Night => -18.0,
            Self::GoldenHourEnd | Self::GoldenHour => 6.0,
        }
    }

    /// Whether this event happens while the sun is ascending (before the
    /// solar transit).
    #[must_use]
    pub const fn is_rising(&self) -> bool {
        matches!(
            self,
            Self::Sunrise
                | Self::SunriseEnd
                | Self::Dawn
                | Self::NauticalDawn
                | Self::NightEnd
                | Self::GoldenHourEnd
        )
    }

    /// Gets the conventional camel-case name of the event.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::SunriseEnd => "sunriseEnd",
            Self::SunsetStart => "sunsetStart",
            Self::Dawn => "dawn",
            Self::Dusk => "dusk",
            Self::NauticalDawn => "nauticalDawn",
            Self::NauticalDusk => "nauticalDusk",
            Self::NightEnd => "nightEnd",
            Self::Night => "night",
            Self::GoldenHourEnd => "goldenHourEnd",
            Self::GoldenHour => "goldenHour",
        }
    }

    /// Position of this event in [`Event::ALL`] and in `SunEvents` storage.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The time of a threshold event, or the reason it does not occur.
///
/// At high latitudes the sun can stay above or below an elevation
/// threshold for the entire day; each event carries its own
/// classification so one degenerate threshold leaves the others intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime<T> {
    /// The event occurs at the contained time.
    At(T),
    /// The sun stays above the threshold all day (polar day for this
    /// threshold); the event does not occur.
    AlwaysAbove,
    /// The sun stays below the threshold all day (polar night for this
    /// threshold); the event does not occur.
    AlwaysBelow,
}

impl<T> EventTime<T> {
    /// Gets the event time if the event occurs.
    pub const fn time(&self) -> Option<&T> {
        if let Self::At(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Checks whether the event occurs on this day.
    pub const fn occurs(&self) -> bool {
        matches!(self, Self::At(_))
    }

    /// Checks if the sun stays above the threshold all day.
    pub const fn is_always_above(&self) -> bool {
        matches!(self, Self::AlwaysAbove)
    }

    /// Checks if the sun stays below the threshold all day.
    pub const fn is_always_below(&self) -> bool {
        matches!(self, Self::AlwaysBelow)
    }

    /// Maps the contained time with `f`, preserving the classification.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> EventTime<U> {
        match self {
            Self::At(time) => EventTime::At(f(time)),
            Self::AlwaysAbove => EventTime::AlwaysAbove,
            Self::AlwaysBelow => EventTime::AlwaysBelow,
        }
    }

    /// Maps the contained time with a fallible `f`, preserving the
    /// classification.
    pub(crate) fn try_map<U, F: FnOnce(T) -> Result<U>>(self, f: F) -> Result<EventTime<U>> {
        Ok(match self {
            Self::At(time) => EventTime::At(f(time)?),
            Self::AlwaysAbove => EventTime::AlwaysAbove,
            Self::AlwaysBelow => EventTime::AlwaysBelow,
        })
    }
}

/// The full event table for one solar day at a location.
///
/// Contains the solar transit (solar noon) and nadir, which always exist,
/// plus an [`EventTime`] for each of the twelve threshold events. The time
/// type `T` is [`JulianDay`](crate::JulianDay) for the numeric API and a
/// chrono `DateTime` for the datetime API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunEvents<T> {
    transit: T,
    nadir: T,
    times: [EventTime<T>; 12],
}

impl<T> SunEvents<T> {
    pub(crate) const fn new(transit: T, nadir: T, times: [EventTime<T>; 12]) -> Self {
        Self {
            transit,
            nadir,
            times,
        }
    }

    /// Gets the solar transit (solar noon), when the sun crosses the
    /// meridian and reaches its highest point.
    pub const fn transit(&self) -> &T {
        &self.transit
    }

    /// Gets the nadir, when the sun is lowest (half a day before the
    /// transit).
    pub const fn nadir(&self) -> &T {
        &self.nadir
    }

    /// Gets the time entry for an event.
    #[must_use]
    pub fn get(&self, event: Event) -> &EventTime<T> {
        &self.times[event.index()]
    }

    /// Iterates over all twelve events and their time entries, in
    /// rising/setting pair order.
    pub fn iter(&self) -> impl Iterator<Item = (Event, &EventTime<T>)> + '_ {
        Event::ALL.into_iter().map(move |event| (event, self.get(event)))
    }

    /// Maps every contained time with a fallible `f`, preserving each
    /// event's classification.
    pub(crate) fn try_map_times<U, F: FnMut(T) -> Result<U>>(
        self,
        mut f: F,
    ) -> Result<SunEvents<U>> {
        let [t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11] = self.times;
        Ok(SunEvents {
            transit: f(self.transit)?,
            nadir: f(self.nadir)?,
            times: [
                t0.try_map(&mut f)?,
                t1.try_map(&mut f)?,
                t2.try_map(&mut f)?,
                t3.try_map(&mut f)?,
                t4.try_map(&mut f)?,
                t5.try_map(&mut f)?,
                t6.try_map(&mut f)?,
                t7.try_map(&mut f)?,
                t8.try_map(&mut f)?,
                t9.try_map(&mut f)?,
                t10.try_map(&mut f)?,
                t11.try_map(&mut f)?,
            ],
        })
    }
}

#[cfg(all(feature = "std", feature = "chrono"))]
impl<Tz: chrono::TimeZone> SunEvents<chrono::DateTime<Tz>>
where
    Tz::Offset: fmt::Display,
{
    /// Formats an event's time as `YYYY-MM-DD HH:MM:SS` in the table's
    /// timezone, or `None` when the event does not occur.
    #[must_use]
    pub fn format(&self, event: Event) -> Option<String> {
        self.get(event).time().map(crate::time::format_timestamp)
    }
}

/// Sun position in horizontal coordinates, as seen from a point on Earth's
/// surface.
///
/// - Azimuth: radians in [0, 2π), 0 = north, increasing clockwise (east is
///   π/2)
/// - Altitude: radians in [-π/2, π/2], 0 = horizon, π/2 = zenith
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Azimuth in radians, normalized to [0, 2π).
    azimuth: f64,
    /// Altitude above the horizon in radians.
    altitude: f64,
}

impl SunPosition {
    /// Creates a sun position from azimuth and altitude in radians.
    ///
    /// The azimuth is normalized to [0, 2π).
    ///
    /// # Errors
    /// Returns `ComputationError` if either angle is non-finite or the
    /// altitude is outside [-π/2, π/2].
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::SunPosition;
    /// use core::f64::consts::PI;
    ///
    /// let position = SunPosition::new(PI, 0.5).unwrap();
    /// assert!((position.azimuth_degrees() - 180.0).abs() < 1e-9);
    /// assert!(position.is_sun_up());
    /// ```
    pub fn new(azimuth: f64, altitude: f64) -> Result<Self> {
        let normalized_azimuth = check_azimuth(azimuth)?;
        let validated_altitude = check_altitude(altitude)?;

        Ok(Self {
            azimuth: normalized_azimuth,
            altitude: validated_altitude,
        })
    }

    /// Gets the azimuth in radians (0 to 2π, 0 = north, increasing
    /// clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the altitude above the horizon in radians (-π/2 to π/2).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the azimuth in degrees (0° to 360°, 0° = north, increasing
    /// clockwise).
    #[must_use]
    pub fn azimuth_degrees(&self) -> f64 {
        radians_to_degrees(self.azimuth)
    }

    /// Gets the altitude in degrees (-90° to +90°, 0° = horizon).
    #[must_use]
    pub fn altitude_degrees(&self) -> f64 {
        radians_to_degrees(self.altitude)
    }

    /// Checks if the sun is above the horizon (altitude > 0).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude > 0.0
    }
}
