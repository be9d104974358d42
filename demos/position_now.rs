//! Show where the sun currently is for a given location.

use chrono::Utc;
use solar_ephemeris::sun_position;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let latitude = 48.21; // Vienna
    let longitude = 16.37;

    let now = Utc::now();
    let position = sun_position(now, latitude, longitude)?;

    println!("Sun position for ({latitude}, {longitude}) at {now}");
    println!("  Azimuth:  {:8.3}°", position.azimuth_degrees());
    println!("  Altitude: {:8.3}°", position.altitude_degrees());
    println!(
        "  The sun is {}",
        if position.is_sun_up() { "up" } else { "down" }
    );

    Ok(())
}
