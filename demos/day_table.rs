//! Print a full day's solar event table for a location.

use chrono::{DateTime, FixedOffset};
use solar_ephemeris::{sun_events, Event};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Kyiv, in its winter-time zone
    let datetime = "2013-03-05T08:00:00+02:00".parse::<DateTime<FixedOffset>>()?;
    let latitude = 50.5;
    let longitude = 30.5;

    let events = sun_events(datetime, latitude, longitude)?;

    println!("Solar events for ({latitude}, {longitude}) around {datetime}");
    println!();
    println!("  {:15} {}", "solar noon", events.transit().format("%H:%M:%S"));
    println!("  {:15} {}", "nadir", events.nadir().format("%H:%M:%S"));
    println!();

    for event in Event::ALL {
        match events.format(event) {
            Some(timestamp) => println!("  {:15} {timestamp}", event.name()),
            None => println!("  {:15} --", event.name()),
        }
    }

    Ok(())
}
