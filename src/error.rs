//! Error types for the solar ephemeris library.

use crate::math::{normalize_radians_0_to_two_pi, PI};
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during ephemeris calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid Julian day number (must be finite).
    InvalidJulianDay {
        /// The invalid Julian day value provided.
        value: f64,
    },
    /// Invalid or unrepresentable date/time.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Numerical computation error (e.g., a non-finite intermediate value).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidJulianDay { value } => {
                write!(f, "invalid Julian day {value} (must be finite)")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid Julian day error.
    #[must_use]
    pub const fn invalid_julian_day(value: f64) -> Self {
        Self::InvalidJulianDay { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees or not finite.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees or not finite.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a Julian day number is finite.
///
/// # Errors
/// Returns `InvalidJulianDay` if the value is NaN or infinite.
pub fn check_julian_day(julian_day: f64) -> Result<()> {
    if !julian_day.is_finite() {
        return Err(Error::invalid_julian_day(julian_day));
    }
    Ok(())
}

/// Validates and normalizes an azimuth angle to the range [0, 2π) radians.
///
/// # Errors
/// Returns `ComputationError` if azimuth is not finite.
pub fn check_azimuth(azimuth: f64) -> Result<f64> {
    if !azimuth.is_finite() {
        return Err(Error::computation_error("azimuth is not finite"));
    }
    Ok(normalize_radians_0_to_two_pi(azimuth))
}

/// Validates an altitude angle to be within the range [-π/2, π/2] radians.
///
/// # Errors
/// Returns `ComputationError` if altitude is not finite or outside the valid range.
pub fn check_altitude(altitude: f64) -> Result<f64> {
    if !altitude.is_finite() {
        return Err(Error::computation_error("altitude is not finite"));
    }
    if !(-PI / 2.0..=PI / 2.0).contains(&altitude) {
        return Err(Error::computation_error(
            "altitude must be between -π/2 and π/2",
        ));
    }
    Ok(altitude)
}
