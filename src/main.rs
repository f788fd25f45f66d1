mod cardinal;
mod config;
mod display;
mod icons;
mod location;
mod nws;
mod station;
mod table;
mod wrap;

use clap::{Parser, Subcommand};
use colored::Colorize;

use config::Config;
use location::resolve_location;

/// Sent on every outgoing request; Nominatim and api.weather.gov both
/// want a distinctive agent string.
pub const USER_AGENT: &str = concat!("weather-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(name = "weather")]
#[command(about = "Check weather from your station and the NWS")]
#[command(version)]
struct Cli {
    /// Place name or lat,long pair (overrides configured coordinates)
    #[arg(short, long, global = true)]
    location: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show current weather conditions
    Current,
    /// Show the multi-day forecast
    Forecast,
}

/// Handle the `current` subcommand: station observation and NWS current
/// conditions, fetched in parallel.
async fn do_current(
    config: &Config,
    latitude: f64,
    longitude: f64,
    verbose: bool,
) -> anyhow::Result<()> {
    let (station, weather) = tokio::try_join!(
        station::fetch_station_data(config),
        nws::fetch_nws_weather(latitude, longitude),
    )?;
    if verbose {
        println!("Forecast point: {}", weather.location_name);
    }
    print!("{}", display::render_current(&station, &weather.current));
    Ok(())
}

/// Handle the `forecast` subcommand.
async fn do_forecast(latitude: f64, longitude: f64, verbose: bool) -> anyhow::Result<()> {
    let weather = nws::fetch_nws_weather(latitude, longitude).await?;
    if verbose {
        println!("Forecast point: {}", weather.location_name);
    }
    print!("{}", display::render_forecast(&weather.periods));
    Ok(())
}

/// Default action: current conditions followed by the forecast.
async fn do_all(
    config: &Config,
    latitude: f64,
    longitude: f64,
    verbose: bool,
) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("Fetching weather data for {latitude}, {longitude}...")
            .green()
            .bold()
    );
    let (station, weather) = tokio::try_join!(
        station::fetch_station_data(config),
        nws::fetch_nws_weather(latitude, longitude),
    )?;
    if verbose {
        println!("Forecast point: {}", weather.location_name);
    }
    print!("{}", display::render_current(&station, &weather.current));
    print!("{}", display::render_forecast(&weather.periods));
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let (latitude, longitude) = match &cli.location {
        Some(query) => {
            let location = resolve_location(query).await?;
            if cli.verbose {
                println!("Resolved location: {}", location.display_name);
            }
            (location.latitude, location.longitude)
        }
        None => (config.latitude, config.longitude),
    };

    match cli.command {
        Some(Command::Current) => do_current(&config, latitude, longitude, cli.verbose).await,
        Some(Command::Forecast) => do_forecast(latitude, longitude, cli.verbose).await,
        None => do_all(&config, latitude, longitude, cli.verbose).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{}", format!("Failed to fetch weather data: {err:#}").red());
        std::process::exit(1);
    }
}
