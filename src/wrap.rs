/// Greedily wrap `text` into lines at most `width` characters wide,
/// breaking only at spaces.
///
/// A word longer than `width` is never split; it becomes its own over-width
/// line. Empty input produces no lines. For single-space-separated input,
/// joining the result with spaces reconstructs the original text.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split(' ') {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(line.trim_end().to_string());
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line.trim_end().to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_long_text() {
        let text = "Slight Chance Showers and Thunderstorms";
        let lines = wrap(text, 20);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 20, "line {line:?} exceeds width");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap("Sunny", 20), vec!["Sunny"]);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(wrap("", 20).is_empty());
        assert!(wrap("", 1).is_empty());
    }

    #[test]
    fn never_splits_inside_a_word() {
        let word = "Supercalifragilisticexpialidocious";
        assert_eq!(wrap(word, 10), vec![word]);
    }

    #[test]
    fn over_width_word_occupies_its_own_line() {
        let lines = wrap("a Supercalifragilisticexpialidocious b", 10);
        assert_eq!(
            lines,
            vec!["a", "Supercalifragilisticexpialidocious", "b"]
        );
    }

    #[test]
    fn join_reconstructs_input() {
        for text in [
            "Mostly Cloudy then Slight Chance Rain Showers",
            "Patchy Fog",
            "a b c d e f g",
        ] {
            for width in [1, 5, 12, 80] {
                assert_eq!(wrap(text, width).join(" "), text);
            }
        }
    }

    #[test]
    fn consecutive_spaces_do_not_leave_trailing_space() {
        assert_eq!(wrap("ab  cd", 3), vec!["ab", "cd"]);
        for line in wrap("Patchy  Fog  then  Sunny", 10) {
            assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn fills_lines_greedily() {
        assert_eq!(wrap("one two three four", 9), vec!["one two", "three", "four"]);
        assert_eq!(wrap("one two three four", 13), vec!["one two three", "four"]);
    }
}
