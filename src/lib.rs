//! # Solar Ephemeris Library
//!
//! Sun position and sunrise/sunset/twilight time calculation for any place on Earth.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library computes, from a date and geographic coordinates:
//! - **Sun position**: azimuth and altitude at a given instant
//! - **Event times**: sunrise, sunset, dawn, dusk, nautical and astronomical twilight,
//!   golden hour, solar noon and nadir, all from a single calculation
//!
//! The algorithms are low-order ephemeris approximations, accurate to about a minute
//! for event times, which is ample for photography, lighting control and UI display.
//!
//! ## Features
//!
//! - Complete event table: all twelve rising/setting events plus transit and nadir in one call
//! - Typed polar handling: events the sun never reaches are reported as values, not errors
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Thread-safe: stateless functions, immutable data structures
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! solar-ephemeris = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # no_std + chrono (embedded with DateTime support)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["libm", "chrono"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Strous, L. "Position of the Sun" and "Sunrise and sunset", Astronomy Answers.
//!   <https://aa.quae.nl/en/reken/zonpositie.html>
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell. (Julian day
//!   arithmetic, chapter 7.)
//!
//! ## Quick Start
//!
//! ### Event times (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_ephemeris::{sun_events, Event};
//! use chrono::{DateTime, FixedOffset};
//!
//! // Sunrise and sunset for Kyiv, in local time
//! let datetime = "2013-03-05T02:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let events = sun_events(datetime, 50.5, 30.5).unwrap();
//!
//! for event in [Event::Sunrise, Event::Sunset] {
//!     match events.get(event).time() {
//!         Some(time) => println!("{event}: {time}"),
//!         None => println!("{event}: does not occur today"),
//!     }
//! }
//! # }
//! ```
//!
//! ### Sun position (numeric API, no chrono)
//! ```rust
//! use solar_ephemeris::{sun_position_from_julian, time::JulianDay};
//!
//! // Create a Julian day from UTC components (2013-03-05 10:00:00 UTC)
//! let jd = JulianDay::from_utc(2013, 3, 5, 10, 0, 0.0).unwrap();
//!
//! // Works in both std and no_std
//! let position = sun_position_from_julian(jd, 50.5, 30.5).unwrap();
//!
//! println!("Azimuth: {:.3}°", position.azimuth_degrees());
//! println!("Altitude: {:.3}°", position.altitude_degrees());
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0 = North, measured clockwise, in radians (0 to 2π)
//! - **Altitude**: 0 = horizon, π/2 = directly overhead, in radians (-π/2 to +π/2)
//! - **Latitude/Longitude**: degrees, northern and eastern coordinates positive

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
#[cfg(feature = "chrono")]
pub use crate::events::sun_events;
pub use crate::events::sun_events_from_julian;
#[cfg(feature = "chrono")]
pub use crate::position::sun_position;
pub use crate::position::sun_position_from_julian;
pub use crate::time::JulianDay;
pub use crate::types::{Event, EventTime, SunEvents, SunPosition};

// Algorithm modules
pub mod events;
pub mod position;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;
mod solar;

// Public modules
pub mod time;
