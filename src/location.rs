use std::sync::LazyLock;

use anyhow::{bail, Context};
use regex::Regex;
use serde::Deserialize;

use crate::USER_AGENT;

/// A resolved geographic location with coordinates and display name.
#[derive(Debug, Clone)]
pub struct Location {
    /// Human-readable name (place name from Nominatim, or original coordinate string).
    pub display_name: String,
    /// Latitude in degrees, range -90 to 90.
    pub latitude: f64,
    /// Longitude in degrees, range -180 to 180.
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

/// Parse a coordinate string in "latitude,longitude" format.
///
/// Returns `None` if the string doesn't match the expected format or if
/// coordinates are out of valid ranges (latitude: -90 to 90, longitude: -180 to 180).
fn parse_coordinates(s: &str) -> Option<Location> {
    static COORD_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r#"(?x)
            ^
            \s*
            (-?\d+(?:\.\d+)?)   # latitude: decimal number
            \s*,\s*
            (-?\d+(?:\.\d+)?)   # longitude: decimal number
            \s*
            $
        "#,
        )
        .unwrap()
    });

    let caps = COORD_RE.captures(s)?;
    let latitude: f64 = caps[1].parse().ok()?;
    let longitude: f64 = caps[2].parse().ok()?;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return None;
    }

    Some(Location {
        display_name: s.to_string(),
        latitude,
        longitude,
    })
}

/// Resolve a location string to geographic coordinates.
///
/// Accepts either a coordinate pair (e.g., "45.4981,-122.4314") or a place
/// name (e.g., "Sisters, OR"). Coordinates are validated to be within valid
/// ranges. Place names are resolved using the Nominatim geocoding API.
pub async fn resolve_location(s: &str) -> anyhow::Result<Location> {
    if let Some(location) = parse_coordinates(s) {
        return Ok(location);
    }

    let client = reqwest::Client::new();
    let response = client
        .get("https://nominatim.openstreetmap.org/search")
        .query(&[("q", s), ("format", "json"), ("limit", "1")])
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .context("Geocoding request failed")?;

    if !response.status().is_success() {
        bail!("Geocoding failed: {}", response.status());
    }

    let mut results: Vec<SearchResult> = response
        .json()
        .await
        .context("Geocoding JSON parsing failed")?;
    if results.is_empty() {
        bail!("Location not found: {s}");
    }

    let result = results.remove(0);
    let latitude = result.lat.parse().context("Bad latitude in geocoding result")?;
    let longitude = result.lon.parse().context("Bad longitude in geocoding result")?;
    Ok(Location {
        display_name: result.display_name,
        latitude,
        longitude,
    })
}
