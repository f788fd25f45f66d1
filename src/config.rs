use thiserror::Error;

/// Default station coordinates, used when `WEATHER_LAT`/`WEATHER_LON`
/// are not set.
const DEFAULT_LAT: f64 = 45.4981;
const DEFAULT_LON: f64 = -122.4314;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),
    #[error("invalid value for {name}: {value:?} is not a coordinate")]
    InvalidCoordinate { name: &'static str, value: String },
}

/// Runtime configuration, validated once at startup.
///
/// The Ambient Weather credentials are passed as query parameters on the
/// station request; latitude and longitude select the NWS forecast point.
#[derive(Debug, Clone)]
pub struct Config {
    pub device_id: String,
    pub application_key: String,
    pub api_key: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Config {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup. All missing
    /// required variables are reported together rather than one at a time.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut require = |name: &str| {
            let value = lookup(name).filter(|v| !v.is_empty());
            if value.is_none() {
                missing.push(name.to_string());
            }
            value.unwrap_or_default()
        };

        let device_id = require("AMBIENT_DEVICE_ID");
        let application_key = require("AMBIENT_APPLICATION_KEY");
        let api_key = require("AMBIENT_API_KEY");
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let latitude = coordinate(&lookup, "WEATHER_LAT", DEFAULT_LAT)?;
        let longitude = coordinate(&lookup, "WEATHER_LON", DEFAULT_LON)?;

        Ok(Config {
            device_id,
            application_key,
            api_key,
            latitude,
            longitude,
        })
    }
}

fn coordinate(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: f64,
) -> Result<f64, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidCoordinate { name, value }),
    }
}
