use chrono::Local;
use colored::Colorize;
use itertools::{EitherOrBoth, Itertools};

use crate::nws::{CurrentConditions, ForecastPeriod};
use crate::station::StationData;
use crate::table::Table;
use crate::{cardinal, icons, wrap};

/// Column budget for wrapped forecast text.
const CONDITIONS_WIDTH: usize = 24;

/// Render the current-conditions block: icon art on the left, labeled
/// station fields on the right. Optional station fields are omitted when
/// the station doesn't report them.
pub fn render_current(station: &StationData, current: &CurrentConditions) -> String {
    let (code, is_day) = icons::from_icon_url(&current.icon);
    let art = icons::classify(&code, is_day);

    let mut fields = Vec::new();
    let condition = match current.temp_f {
        Some(t) => format!(
            "{} {}",
            current.description.blue(),
            format!("(NWS: {t:.1}°F)").dimmed()
        ),
        None => current.description.blue().to_string(),
    };
    fields.push(field("Condition:", condition));
    fields.push(field(
        "Temp:",
        format!(
            "{} (Feels like: {})",
            format!("{}°F", station.tempf).yellow(),
            format!("{}°F", station.feels_like).yellow()
        ),
    ));
    fields.push(field("Humidity:", format!("{}%", station.humidity).magenta().to_string()));
    fields.push(field(
        "Barometer:",
        format!("{} inHg", station.baromrelin).cyan().to_string(),
    ));
    if let Some(uv) = station.uv {
        fields.push(field("UV Index:", uv.to_string().red().to_string()));
    }
    fields.push(field(
        "Wind:",
        format!(
            "{} {} mph (Gust: {} mph)",
            cardinal::from_degrees(station.winddir),
            station.windspeedmph,
            station.windgustmph
        )
        .green()
        .to_string(),
    ));
    if let Some(gust) = station.maxdailygust {
        fields.push(field("Max Gust:", format!("{gust} mph").green().to_string()));
    }
    if station.hourlyrainin.is_some() || station.dailyrainin.is_some() {
        let hourly = station.hourlyrainin.unwrap_or(0.0);
        let daily = station.dailyrainin.unwrap_or(0.0);
        fields.push(field(
            "Rain:",
            format!(
                "{} (Today: {})",
                format!("{hourly} in/hr").blue(),
                format!("{daily} in").blue()
            ),
        ));
    }
    if let Some(last_rain) = station.last_rain {
        let local = last_rain.with_timezone(&Local);
        fields.push(field(
            "Last Rain:",
            local.format("%Y-%m-%d %H:%M").to_string().dimmed().to_string(),
        ));
    }

    format!(
        "\n{}\n{}\n",
        "--- Current Conditions ---".cyan().bold(),
        beside(&art, &fields)
    )
}

fn field(label: &str, value: String) -> String {
    format!("{label:<10} {value}")
}

/// Lay icon art to the left of the field lines, padding the art column so
/// the fields stay aligned when the art is shorter or taller.
fn beside(art: &str, fields: &[String]) -> String {
    if art.is_empty() {
        return fields.join("\n");
    }
    let art_lines: Vec<&str> = art.lines().collect();
    let width = art_lines.iter().map(|l| l.len()).max().unwrap_or(0);

    art_lines
        .iter()
        .zip_longest(fields)
        .map(|pair| match pair {
            EitherOrBoth::Both(a, f) => format!("{a:<width$}  {f}"),
            EitherOrBoth::Left(a) => a.to_string(),
            EitherOrBoth::Right(f) => format!("{:width$}  {f}", ""),
        })
        .join("\n")
}

/// Render the forecast as a table, one row per day (or per leading night).
///
/// Forecast periods alternate day/night; each daytime period takes its low
/// from the immediately following nighttime period. When a sequence starts
/// with a nighttime period (evening runs), that period gets its own row.
pub fn render_forecast(periods: &[ForecastPeriod]) -> String {
    let mut names = Vec::new();
    let mut dates = Vec::new();
    let mut glyphs = Vec::new();
    let mut temps = Vec::new();
    let mut winds = Vec::new();
    let mut precips = Vec::new();
    let mut conditions = Vec::new();

    for (day, night) in pair_periods(periods) {
        let lead = match (day, night) {
            (Some(day), _) => day,
            (None, Some(night)) => night,
            (None, None) => continue,
        };
        let (code, is_day) = icons::from_icon_url(&lead.icon);

        names.push(lead.name.clone());
        dates.push(lead.start_time.format("%-m/%-d").to_string());
        glyphs.push(icons::classify(&code, is_day));
        temps.push(format!("{} / {}", format_temp(day), format_temp(night)));
        winds.push(format!(
            "{} {}",
            cardinal::abbreviate(&lead.wind_direction),
            lead.wind_speed
        ));
        precips.push(match lead.precip_chance() {
            Some(p) => format!("{p:.0}%"),
            None => String::new(),
        });
        conditions.push(wrap::wrap(&lead.short_forecast, CONDITIONS_WIDTH).join("\n"));
    }

    let table = Table::new()
        .column("Date", dates)
        .column("", names)
        .column("", glyphs)
        .numeric_column("Hi / Lo", temps)
        .column("Wind", winds)
        .numeric_column("Precip", precips)
        .column("Conditions", conditions);

    format!("\n{}\n{}", "--- 7-Day Forecast ---".cyan().bold(), table.render())
}

fn format_temp(period: Option<&ForecastPeriod>) -> String {
    match period {
        Some(p) => format!("{}°", p.temperature.round() as i32),
        None => "--".to_string(),
    }
}

/// Group alternating periods into (daytime, following nighttime) pairs.
fn pair_periods(
    periods: &[ForecastPeriod],
) -> Vec<(Option<&ForecastPeriod>, Option<&ForecastPeriod>)> {
    let mut rows = Vec::new();
    let mut iter = periods.iter().peekable();
    while let Some(period) = iter.next() {
        if period.is_daytime {
            let night = iter.next_if(|p| !p.is_daytime);
            rows.push((Some(period), night));
        } else {
            rows.push((None, Some(period)));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn period(name: &str, is_daytime: bool, temperature: f64, icon: &str) -> ForecastPeriod {
        let start: DateTime<FixedOffset> = "2026-08-25T06:00:00-07:00".parse().unwrap();
        ForecastPeriod {
            name: name.to_string(),
            start_time: start,
            is_daytime,
            temperature,
            wind_speed: "5 to 10 mph".to_string(),
            wind_direction: "NW".to_string(),
            short_forecast: "Slight Chance Showers and Thunderstorms".to_string(),
            probability_of_precipitation: None,
            icon: icon.to_string(),
        }
    }

    fn station() -> StationData {
        StationData {
            tempf: 72.5,
            feels_like: 70.1,
            humidity: 45.0,
            winddir: 315.0,
            windspeedmph: 5.4,
            windgustmph: 8.1,
            baromrelin: 29.92,
            uv: Some(5.0),
            maxdailygust: Some(12.3),
            hourlyrainin: Some(0.0),
            dailyrainin: Some(0.05),
            last_rain: None,
        }
    }

    #[test]
    fn current_block_labels_and_wind_direction() {
        colored::control::set_override(false);
        let current = CurrentConditions {
            description: "Mostly Cloudy".to_string(),
            icon: "https://api.weather.gov/icons/land/day/bkn?size=medium".to_string(),
            temp_f: Some(70.0),
        };
        let block = render_current(&station(), &current);
        assert!(block.contains("Current Conditions"));
        assert!(block.contains("Mostly Cloudy"));
        assert!(block.contains("72.5°F"));
        assert!(block.contains("Humidity:"));
        // 315° is northwest
        assert!(block.contains("NW 5.4 mph (Gust: 8.1 mph)"));
        assert!(block.contains("UV Index:"));
        assert!(block.contains("0.05 in"));
    }

    #[test]
    fn current_block_omits_absent_fields() {
        colored::control::set_override(false);
        let mut data = station();
        data.uv = None;
        data.maxdailygust = None;
        data.hourlyrainin = None;
        data.dailyrainin = None;
        let current = CurrentConditions {
            description: "Clear".to_string(),
            icon: String::new(),
            temp_f: None,
        };
        let block = render_current(&data, &current);
        assert!(!block.contains("UV Index:"));
        assert!(!block.contains("Max Gust:"));
        assert!(!block.contains("Rain:"));
    }

    #[test]
    fn day_low_comes_from_following_night() {
        colored::control::set_override(false);
        let periods = vec![
            period("Tuesday", true, 82.0, "https://api.weather.gov/icons/land/day/few"),
            period("Tuesday Night", false, 58.0, "https://api.weather.gov/icons/land/night/skc"),
        ];
        let rendered = render_forecast(&periods);
        assert!(rendered.contains("8/25"));
        assert!(rendered.contains("82° / 58°"));
        assert!(rendered.lines().all(|l| !l.contains("Tuesday Night")));
    }

    #[test]
    fn trailing_day_without_night_shows_placeholder() {
        colored::control::set_override(false);
        let periods = vec![period(
            "Monday",
            true,
            75.0,
            "https://api.weather.gov/icons/land/day/sct",
        )];
        let rendered = render_forecast(&periods);
        assert!(rendered.contains("75° / --"));
    }

    #[test]
    fn leading_night_gets_its_own_row() {
        colored::control::set_override(false);
        let periods = vec![
            period("Tonight", false, 55.0, "https://api.weather.gov/icons/land/night/bkn"),
            period("Wednesday", true, 80.0, "https://api.weather.gov/icons/land/day/few"),
        ];
        let rendered = render_forecast(&periods);
        assert!(rendered.contains("Tonight"));
        assert!(rendered.contains("-- / 55°"));
        assert!(rendered.contains("80° / --"));
    }

    #[test]
    fn forecast_text_is_wrapped() {
        colored::control::set_override(false);
        let periods = vec![period(
            "Tuesday",
            true,
            82.0,
            "https://api.weather.gov/icons/land/day/tsra,40",
        )];
        let rendered = render_forecast(&periods);
        // "Slight Chance Showers and Thunderstorms" exceeds the column
        // budget and must split across lines.
        assert!(!rendered.contains("Showers and Thunderstorms"));
        assert!(rendered.contains("Slight Chance Showers"));
    }

    #[test]
    fn pairing_consumes_alternating_sequence() {
        let periods = vec![
            period("Tonight", false, 55.0, "i"),
            period("Tue", true, 80.0, "i"),
            period("Tue Night", false, 57.0, "i"),
            period("Wed", true, 83.0, "i"),
        ];
        let rows = pair_periods(&periods);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].0.is_none());
        assert_eq!(rows[1].0.map(|p| p.name.as_str()), Some("Tue"));
        assert_eq!(rows[1].1.map(|p| p.name.as_str()), Some("Tue Night"));
        assert_eq!(rows[2].1.map(|p| p.name.as_str()), None);
    }
}
