//! ASCII glyphs for forecast icon codes.
//!
//! The NWS encodes conditions in the last path segment of an icon URL, e.g.
//! `https://api.weather.gov/icons/land/day/tsra,40?size=medium`. A code is
//! matched by substring against an ordered rule list; the first hit wins.
//! The order matters: short codes like `ra` also occur inside longer ones,
//! and the list order is what resolves the overlap.

const SUN: &str = "   \\ | /
    .-.
 --(   )--
    `-'
   / | \\";

const MOON: &str = "    .--.
   (    `.
   |     |
   (    .'
    `--'";

const CLOUD: &str = "     .--.
  .-(    ).
 (___.__)__)";

const SUN_BEHIND_CLOUD: &str = "   \\ /
 --( ).--.
  .-(    ).
 (___.__)__)";

const MOON_BEHIND_CLOUD: &str = "    .-.
   (  ).--.
  .-(    ).
 (___.__)__)";

const FOG: &str = " _ - _ - _ -
  _ - _ - _
 _ - _ - _ -";

const WIND: &str = " ~ ~ ~ ~ ~
  ~ ~ ~ ~ ~
 ~ ~ ~ ~ ~";

const RAIN: &str = "  ' ' ' '
 ' ' ' '";

const SNOW: &str = "  * * * *
 * * * *";

const LIGHTNING: &str = "    /_
   /";

#[derive(Debug, Clone, Copy)]
enum Glyph {
    Wind,
    Thunderstorm,
    Snow,
    Rain,
    Fog,
    Clear,
    Cloudy,
}

/// Substring rules in priority order. Evaluation stops at the first rule
/// whose patterns match, so e.g. `tsra` is classified as a thunderstorm
/// before the `ra` rule gets a chance to see it.
const RULES: [(&[&str], Glyph); 7] = [
    (&["wind"], Glyph::Wind),
    (&["tsra"], Glyph::Thunderstorm),
    (&["sn", "blz", "snow"], Glyph::Snow),
    (&["rain", "ra", "shra", "hi_shwrs"], Glyph::Rain),
    (&["fg", "mist", "smoke"], Glyph::Fog),
    (&["skc", "few"], Glyph::Clear),
    (&["sct", "bkn", "ovc"], Glyph::Cloudy),
];

impl Glyph {
    fn render(self, is_day: bool) -> String {
        match self {
            Glyph::Wind => WIND.to_string(),
            Glyph::Thunderstorm => format!("{CLOUD}\n{LIGHTNING}"),
            Glyph::Snow => format!("{CLOUD}\n{SNOW}"),
            Glyph::Rain => format!("{CLOUD}\n{RAIN}"),
            Glyph::Fog => FOG.to_string(),
            Glyph::Clear if is_day => SUN.to_string(),
            Glyph::Clear => MOON.to_string(),
            Glyph::Cloudy if is_day => SUN_BEHIND_CLOUD.to_string(),
            Glyph::Cloudy => MOON_BEHIND_CLOUD.to_string(),
        }
    }
}

/// Select ASCII art for an icon code. Unrecognized codes get the plain
/// cloud; an empty code gets no art at all.
pub fn classify(code: &str, is_day: bool) -> String {
    if code.is_empty() {
        return String::new();
    }
    let code = code.to_lowercase();
    for (patterns, glyph) in RULES {
        if patterns.iter().any(|p| code.contains(p)) {
            return glyph.render(is_day);
        }
    }
    CLOUD.to_string()
}

/// Extract the icon code and day/night flag from an NWS icon URL.
///
/// The code is the last path segment with the query string and any
/// comma-joined coverage percentage stripped (`.../day/tsra,40?size=medium`
/// yields `tsra`). Daytime is signalled by the URL mentioning "day".
pub fn from_icon_url(url: &str) -> (String, bool) {
    let is_day = url.contains("day");
    let code = url
        .split('?')
        .next()
        .unwrap_or("")
        .rsplit('/')
        .next()
        .unwrap_or("")
        .split(',')
        .next()
        .unwrap_or("")
        .to_string();
    (code, is_day)
}
