use anyhow::{bail, Context};
use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::USER_AGENT;

const API_URL: &str = "https://api.weather.gov";

/// One day or night segment of the NWS forecast.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub name: String,
    pub start_time: DateTime<FixedOffset>,
    pub is_daytime: bool,
    /// Already in °F: the forecast is requested in US units.
    pub temperature: f64,
    pub wind_speed: String,
    pub wind_direction: String,
    pub short_forecast: String,
    #[serde(default)]
    pub probability_of_precipitation: Option<QuantitativeValue>,
    pub icon: String,
}

impl ForecastPeriod {
    /// Precipitation probability percentage, if the API reported one.
    pub fn precip_chance(&self) -> Option<f64> {
        self.probability_of_precipitation.as_ref()?.value
    }
}

/// Measurement wrapper used throughout the NWS API (`value` is null when
/// the sensor or forecast has no data).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    pub value: Option<f64>,
}

/// Current conditions from the observation station nearest the forecast point.
#[derive(Debug, Clone)]
pub struct CurrentConditions {
    pub description: String,
    pub icon: String,
    /// Observation temperature converted from the API's °C.
    pub temp_f: Option<f64>,
}

/// Merged result of the NWS fetch: where the point resolved to, the latest
/// nearby observation, and the period-by-period forecast.
#[derive(Debug)]
pub struct NwsWeather {
    pub location_name: String,
    pub current: CurrentConditions,
    pub periods: Vec<ForecastPeriod>,
}

pub fn c_to_f(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[derive(Debug, Deserialize)]
struct PointResponse {
    properties: PointProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointProperties {
    forecast: String,
    observation_stations: String,
    relative_location: RelativeLocation,
}

#[derive(Debug, Deserialize)]
struct RelativeLocation {
    properties: RelativeLocationProperties,
}

#[derive(Debug, Deserialize)]
struct RelativeLocationProperties {
    city: String,
    state: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationsResponse {
    observation_stations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ObservationResponse {
    properties: ObservationProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObservationProperties {
    text_description: String,
    #[serde(default)]
    icon: Option<String>,
    temperature: QuantitativeValue,
}

async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> anyhow::Result<T> {
    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .context("HTTP request failed")?;

    if !response.status().is_success() {
        bail!("NWS API error for {url}: {}", response.status());
    }

    response.json().await.context("JSON parsing failed")
}

/// Download forecast and current conditions from the NWS API.
///
/// The point metadata lookup must complete first since it carries the
/// forecast and station-list URLs; the two legs hanging off it run in
/// parallel. Any failure aborts the whole fetch.
pub async fn fetch_nws_weather(latitude: f64, longitude: f64) -> anyhow::Result<NwsWeather> {
    let client = reqwest::Client::new();

    // The points endpoint rejects coordinates with more than 4 decimals.
    let point: PointResponse = get_json(
        &client,
        &format!("{API_URL}/points/{latitude:.4},{longitude:.4}"),
    )
    .await
    .context("Point metadata lookup failed")?;

    let forecast_url = format!("{}?units=us", point.properties.forecast);
    let (forecast, current) = tokio::try_join!(
        get_json::<ForecastResponse>(&client, &forecast_url),
        fetch_latest_observation(&client, &point.properties.observation_stations),
    )?;

    let relative = point.properties.relative_location.properties;
    Ok(NwsWeather {
        location_name: format!("{}, {}", relative.city, relative.state),
        current,
        periods: forecast.properties.periods,
    })
}

/// Resolve the nearest observation station from the station-list URL, then
/// fetch its latest observation. These two steps are inherently sequential.
async fn fetch_latest_observation(
    client: &reqwest::Client,
    stations_url: &str,
) -> anyhow::Result<CurrentConditions> {
    let stations: StationsResponse = get_json(client, stations_url)
        .await
        .context("Station list fetch failed")?;

    let Some(station_url) = stations.observation_stations.first() else {
        bail!("No observation stations near forecast point");
    };

    let observation: ObservationResponse =
        get_json(client, &format!("{station_url}/observations/latest"))
            .await
            .context("Latest observation fetch failed")?;

    let props = observation.properties;
    Ok(CurrentConditions {
        description: props.text_description,
        icon: props.icon.unwrap_or_default(),
        temp_f: props.temperature.value.map(c_to_f),
    })
}
