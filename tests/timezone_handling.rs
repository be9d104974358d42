#![cfg(feature = "chrono")]

//! Tests for timezone-aware inputs and outputs.
//!
//! The calculation itself only depends on the absolute instant; the
//! timezone of the input determines how results are rendered.

use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};
use chrono_tz::{Australia, Europe};
use solar_ephemeris::time::format_timestamp;
use solar_ephemeris::{sun_events, sun_position, Event};

fn millis(rfc3339: &str) -> i64 {
    rfc3339
        .parse::<DateTime<Utc>>()
        .unwrap()
        .timestamp_millis()
}

#[test]
fn london_midsummer_in_local_time() {
    // noon BST on the summer solstice
    let datetime = Europe::London
        .with_ymd_and_hms(2023, 6, 21, 12, 0, 0)
        .unwrap();
    let events = sun_events(datetime, 51.5074, -0.1278).unwrap();

    let sunrise = events.get(Event::Sunrise).time().unwrap();
    let sunset = events.get(Event::Sunset).time().unwrap();
    assert!((sunrise.timestamp_millis() - millis("2023-06-21T03:44:16.998Z")).abs() <= 2);
    assert!((sunset.timestamp_millis() - millis("2023-06-21T20:22:38.470Z")).abs() <= 2);

    // rendered in British Summer Time
    assert_eq!(sunrise.hour(), 4);
    assert_eq!(sunrise.minute(), 44);
    assert_eq!(sunset.hour(), 21);

    // no astronomical night this far north at midsummer
    assert!(events.get(Event::Night).is_always_above());
    assert!(events.get(Event::NightEnd).is_always_above());

    // the sun reaches about 62° at the transit
    let noon = sun_position(*events.transit(), 51.5074, -0.1278).unwrap();
    assert!((noon.altitude_degrees() - 61.93).abs() < 0.05);
    assert!((noon.altitude_degrees() - 62.0).abs() < 1.0);
}

#[test]
fn sydney_summer_in_local_time() {
    // 20:00 AEDT; the nearest transit is midday on the same local day
    let datetime = Australia::Sydney
        .with_ymd_and_hms(2024, 1, 15, 20, 0, 0)
        .unwrap();
    let events = sun_events(datetime, -33.8688, 151.2093).unwrap();

    let sunrise = events.get(Event::Sunrise).time().unwrap();
    assert!((sunrise.timestamp_millis() - millis("2024-01-14T19:00:03.000Z")).abs() <= 1500);
    assert_eq!(sunrise.timezone(), Australia::Sydney);
    // 19:00 UTC on the 14th is 6 am on the 15th in Sydney
    assert_eq!(sunrise.hour(), 6);
}

#[test]
fn same_instant_queried_in_different_zones() {
    let utc = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    let sydney = utc.with_timezone(&Australia::Sydney);
    let offset = utc.with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap());

    let from_utc = sun_events(utc, -33.8688, 151.2093).unwrap();
    let from_sydney = sun_events(sydney, -33.8688, 151.2093).unwrap();
    let from_offset = sun_events(offset, -33.8688, 151.2093).unwrap();

    assert_eq!(
        from_utc.transit().timestamp_millis(),
        from_sydney.transit().timestamp_millis()
    );
    assert_eq!(
        from_utc.transit().timestamp_millis(),
        from_offset.transit().timestamp_millis()
    );

    for (event, time) in from_utc.iter() {
        let a = time.time().map(DateTime::timestamp_millis);
        let b = from_sydney.get(event).time().map(DateTime::timestamp_millis);
        let c = from_offset.get(event).time().map(DateTime::timestamp_millis);
        assert_eq!(a, b, "{event} differs between UTC and Sydney queries");
        assert_eq!(a, c, "{event} differs between UTC and fixed-offset queries");
    }
}

#[test]
fn fixed_offset_input_is_respected() {
    let india = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    let datetime = india.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
    let events = sun_events(datetime, 12.9716, 77.5946).unwrap();

    let sunrise = events.get(Event::Sunrise).time().unwrap();
    assert_eq!(sunrise.timezone(), india);
    assert_eq!(sunrise.offset().local_minus_utc(), 5 * 3600 + 1800);

    // Bengaluru sunrise in mid-January is just before 7 am local
    assert!(sunrise.hour() == 6 || sunrise.hour() == 7);
}

#[test]
fn formatted_timestamps_use_the_table_zone() {
    let zone = FixedOffset::east_opt(2 * 3600).unwrap();
    let datetime = zone.with_ymd_and_hms(2013, 3, 5, 2, 0, 0).unwrap();
    let events = sun_events(datetime, 50.5, 30.5).unwrap();

    // 04:34:56 UTC rendered at UTC+2
    assert_eq!(
        events.format(Event::Sunrise).as_deref(),
        Some("2013-03-05 06:34:56")
    );
    assert_eq!(
        format_timestamp(events.transit()),
        "2013-03-05 12:10:57"
    );

    // events that do not occur have no timestamp
    let solstice = Utc.with_ymd_and_hms(2023, 6, 21, 12, 0, 0).unwrap();
    let arctic = sun_events(solstice, 70.0, 20.0).unwrap();
    assert_eq!(arctic.format(Event::Sunrise), None);
}
