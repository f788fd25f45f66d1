use std::borrow::Cow;

/// 8-point compass rose, in 45° steps starting at north.
const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Verbose compass names as reported by forecast providers, mapped to the
/// standard abbreviations. Providers disagree on separators ("NORTH_NORTHEAST"
/// vs "NORTH-NORTHEAST"), which `abbreviate` normalizes before the lookup.
const NAMES: [(&str, &str); 16] = [
    ("NORTH", "N"),
    ("SOUTH", "S"),
    ("EAST", "E"),
    ("WEST", "W"),
    ("NORTHEAST", "NE"),
    ("NORTHWEST", "NW"),
    ("SOUTHEAST", "SE"),
    ("SOUTHWEST", "SW"),
    ("NORTH-NORTHEAST", "NNE"),
    ("EAST-NORTHEAST", "ENE"),
    ("EAST-SOUTHEAST", "ESE"),
    ("SOUTH-SOUTHEAST", "SSE"),
    ("SOUTH-SOUTHWEST", "SSW"),
    ("WEST-SOUTHWEST", "WSW"),
    ("WEST-NORTHWEST", "WNW"),
    ("NORTH-NORTHWEST", "NNW"),
];

/// Convert a wind bearing in degrees to an 8-point compass abbreviation.
///
/// Any real bearing is accepted: values outside `[0, 360)` (including
/// negative ones) are folded into range first, so `from_degrees(-45.0)`
/// and `from_degrees(315.0)` both yield `"NW"`.
pub fn from_degrees(degrees: f64) -> &'static str {
    let folded = degrees.rem_euclid(360.0);
    POINTS[(folded / 45.0).round() as usize % 8]
}

/// Abbreviate a verbose compass name like "North-Northeast" to "NNE".
///
/// Matching is case-insensitive and treats underscores as hyphens. Anything
/// not in the 16-name table is returned unchanged, so already-abbreviated
/// directions and free-form text pass through untouched.
pub fn abbreviate(direction: &str) -> Cow<'_, str> {
    if direction.is_empty() {
        return Cow::Borrowed(direction);
    }
    let key = direction.to_uppercase().replace('_', "-");
    match NAMES.iter().find(|(name, _)| *name == key) {
        Some((_, abbr)) => Cow::Borrowed(abbr),
        None => Cow::Borrowed(direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_cardinal_points() {
        assert_eq!(from_degrees(0.0), "N");
        assert_eq!(from_degrees(45.0), "NE");
        assert_eq!(from_degrees(90.0), "E");
        assert_eq!(from_degrees(180.0), "S");
        assert_eq!(from_degrees(270.0), "W");
    }

    #[test]
    fn degrees_rounds_to_nearest_point() {
        assert_eq!(from_degrees(22.0), "N");
        assert_eq!(from_degrees(23.0), "NE");
        assert_eq!(from_degrees(337.4), "NW");
        assert_eq!(from_degrees(337.5), "N");
    }

    #[test]
    fn degrees_negative_and_wrapped() {
        assert_eq!(from_degrees(-45.0), "NW");
        assert_eq!(from_degrees(-90.0), "W");
        assert_eq!(from_degrees(360.0), "N");
        assert_eq!(from_degrees(405.0), "NE");
    }

    #[test]
    fn degrees_periodic_over_full_turns() {
        for d in [0.0, 12.5, 45.0, 180.0, 359.9] {
            for k in [-2.0, -1.0, 1.0, 3.0] {
                assert_eq!(from_degrees(d), from_degrees(d + 360.0 * k));
            }
        }
    }

    #[test]
    fn abbreviates_all_sixteen_names() {
        for (name, abbr) in NAMES {
            assert_eq!(abbreviate(name), *abbr);
        }
    }

    #[test]
    fn abbreviate_case_and_separator_insensitive() {
        assert_eq!(abbreviate("north"), "N");
        assert_eq!(abbreviate("North-Northeast"), "NNE");
        assert_eq!(abbreviate("north_northeast"), "NNE");
        assert_eq!(abbreviate("WEST_SOUTHWEST"), "WSW");
    }

    #[test]
    fn abbreviate_passes_unknown_through() {
        assert_eq!(abbreviate(""), "");
        assert_eq!(abbreviate("variable"), "variable");
        assert_eq!(abbreviate("north by northwest"), "north by northwest");
    }

    #[test]
    fn abbreviate_idempotent_on_abbreviations() {
        for (_, abbr) in NAMES {
            assert_eq!(abbreviate(abbr), *abbr);
        }
        assert_eq!(abbreviate("N"), "N");
    }
}
