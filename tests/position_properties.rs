#![cfg(feature = "chrono")]

//! Property-style tests for the position calculation and its agreement
//! with the event table.

use chrono::{DateTime, Duration, Utc};
use solar_ephemeris::{
    sun_events, sun_position, sun_position_from_julian, Error, Event, EventTime, JulianDay,
};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

const LONDON: (f64, f64) = (51.5074, -0.1278);

#[test]
fn test_azimuth_sweeps_clockwise_through_the_day() {
    let start = "2023-06-21T00:00:00Z".parse::<DateTime<Utc>>().unwrap();

    let mut previous: Option<f64> = None;
    let mut wraps = 0;
    for step in 0i64..=288 {
        let instant = start + Duration::minutes(5 * step);
        let position = sun_position(instant, LONDON.0, LONDON.1).unwrap();

        let azimuth = position.azimuth();
        assert!((0.0..TAU).contains(&azimuth), "azimuth {azimuth} out of range");
        assert!(position.altitude().abs() <= FRAC_PI_2);

        if let Some(previous) = previous {
            if azimuth < previous {
                // only permissible decrease is the wrap past north
                assert!(
                    previous - azimuth > PI,
                    "azimuth moved backwards at step {step}: {previous} -> {azimuth}"
                );
                wraps += 1;
            }
        }
        previous = Some(azimuth);
    }

    // one solar midnight in a 24 hour window
    assert_eq!(wraps, 1);
}

#[test]
fn test_altitude_peaks_at_the_transit() {
    let noon_input = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let events = sun_events(noon_input, LONDON.0, LONDON.1).unwrap();
    let transit = *events.transit();

    let start = "2023-06-21T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let mut best_instant = start;
    let mut best_altitude = f64::NEG_INFINITY;
    for step in 0i64..=288 {
        let instant = start + Duration::minutes(5 * step);
        let position = sun_position(instant, LONDON.0, LONDON.1).unwrap();
        if position.altitude_degrees() > best_altitude {
            best_altitude = position.altitude_degrees();
            best_instant = instant;
        }
    }

    // the sampled maximum lies within one sampling step of the transit
    assert!((best_instant - transit).num_seconds().abs() < 300);
    // midsummer noon altitude at London's latitude
    assert!((best_altitude - 61.93).abs() < 0.05);
}

#[test]
fn test_altitude_at_each_event_matches_its_threshold() {
    let cases = [
        ("2013-03-05T00:00:00Z", 50.5, 30.5),
        ("2023-06-21T12:00:00Z", LONDON.0, LONDON.1),
        ("2024-01-15T09:00:00Z", -33.8688, 151.2093),
    ];

    for (input, latitude, longitude) in cases {
        let datetime = input.parse::<DateTime<Utc>>().unwrap();
        let events = sun_events(datetime, latitude, longitude).unwrap();

        for (event, time) in events.iter() {
            if let EventTime::At(instant) = time {
                let position = sun_position(*instant, latitude, longitude).unwrap();
                let error = position.altitude_degrees() - event.elevation_angle();
                // the event times are approximate, so the sun sits near
                // but not exactly at the threshold
                assert!(
                    error.abs() < 0.3,
                    "{event} at ({latitude}, {longitude}): altitude {:.4}° vs threshold {}°",
                    position.altitude_degrees(),
                    event.elevation_angle()
                );
            }
        }
    }
}

#[test]
fn test_rise_and_set_mirror_the_transit() {
    let cases = [
        ("2013-03-05T00:00:00Z", 50.5, 30.5),
        ("2023-06-21T12:00:00Z", LONDON.0, LONDON.1),
        ("2024-01-15T09:00:00Z", -33.8688, 151.2093),
    ];

    for (input, latitude, longitude) in cases {
        let datetime = input.parse::<DateTime<Utc>>().unwrap();
        let events = sun_events(datetime, latitude, longitude).unwrap();
        let transit = *events.transit();

        for (rising, setting) in [
            (Event::Sunrise, Event::Sunset),
            (Event::Dawn, Event::Dusk),
            (Event::GoldenHourEnd, Event::GoldenHour),
        ] {
            let rise = *events.get(rising).time().unwrap();
            let set = *events.get(setting).time().unwrap();
            let morning = (transit - rise).num_milliseconds();
            let evening = (set - transit).num_milliseconds();
            assert!(
                (morning - evening).abs() <= 3,
                "{rising}/{setting} asymmetric around transit at ({latitude}, {longitude})"
            );
        }
    }
}

#[test]
fn test_julian_day_datetime_roundtrip() {
    for days in [-10_000.25, -1.0, 0.0, 0.5, 8_572.264, 20_000.75] {
        let jd = JulianDay::from_days_since_j2000(days);
        let datetime = jd.to_datetime(&Utc).unwrap();
        let back = JulianDay::from_datetime(&datetime);
        // conversion rounds to whole milliseconds
        assert!(
            (back.value() - jd.value()).abs() < 1e-8,
            "roundtrip drifted for {jd:?}"
        );
    }
}

#[test]
fn test_validation_errors() {
    let datetime = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();

    assert!(matches!(
        sun_position(datetime, 90.5, 0.0),
        Err(Error::InvalidLatitude { .. })
    ));
    assert!(matches!(
        sun_position(datetime, 0.0, 180.5),
        Err(Error::InvalidLongitude { .. })
    ));
    assert!(matches!(
        sun_events(datetime, -91.0, 0.0),
        Err(Error::InvalidLatitude { .. })
    ));
    assert!(matches!(
        sun_position(datetime, f64::NAN, 0.0),
        Err(Error::InvalidLatitude { .. })
    ));
    assert!(matches!(
        sun_position_from_julian(JulianDay::new(f64::INFINITY), 0.0, 0.0),
        Err(Error::InvalidJulianDay { .. })
    ));

    // boundary coordinates are valid
    assert!(sun_position(datetime, 90.0, 180.0).is_ok());
    assert!(sun_position(datetime, -90.0, -180.0).is_ok());

    // the message names the offending value
    let error = sun_position(datetime, 91.0, 0.0).unwrap_err();
    assert!(error.to_string().contains("91"));
}
