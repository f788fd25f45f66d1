use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::USER_AGENT;

/// Latest observation reported by an Ambient Weather station.
///
/// The station reports imperial units throughout: temperatures in °F,
/// wind in mph, pressure in inHg, rain in inches. Fields not present on
/// every station model are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct StationData {
    pub tempf: f64,
    #[serde(rename = "feelsLike")]
    pub feels_like: f64,
    pub humidity: f64,
    /// Wind direction in compass degrees.
    pub winddir: f64,
    pub windspeedmph: f64,
    pub windgustmph: f64,
    pub baromrelin: f64,
    pub uv: Option<f64>,
    pub maxdailygust: Option<f64>,
    pub hourlyrainin: Option<f64>,
    pub dailyrainin: Option<f64>,
    #[serde(rename = "lastRain")]
    pub last_rain: Option<DateTime<Utc>>,
}

/// Fetch the most recent observation for the configured device.
pub async fn fetch_station_data(config: &Config) -> anyhow::Result<StationData> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Query<'a> {
        application_key: &'a str,
        api_key: &'a str,
        limit: u8,
    }

    let client = reqwest::Client::new();
    let url = format!(
        "https://rt.ambientweather.net/v1/devices/{}",
        config.device_id
    );

    let response = client
        .get(&url)
        .query(&Query {
            application_key: &config.application_key,
            api_key: &config.api_key,
            limit: 1,
        })
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .context("Station request failed")?;

    if !response.status().is_success() {
        bail!("Ambient Weather API failed: {}", response.status());
    }

    let mut data: Vec<StationData> = response
        .json()
        .await
        .context("Station JSON parsing failed")?;
    if data.is_empty() {
        bail!("Station returned no observations");
    }
    Ok(data.remove(0))
}
