use regex::Regex;
use std::sync::LazyLock;

use crate::text::{strip_stopwords, title_case};

/// Words dropped from free text when no "in <place>" phrase is present.
pub const PARSER_STOPLIST: &[&str] = &[
    "weather", "forecast", "tomorrow", "today", "is it", "will it", "rain", "raining", "sunny",
    "snow", "cold", "hot", "outside", "be", "in", "the",
];

static IN_PLACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bin\s+([a-zA-Z\s]+)").expect("IN_PLACE regex is valid"));

/// Result of the keyword heuristics over raw user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Coarse place name. Only the heuristic extractor relies on it.
    pub location_guess: String,
    pub is_tomorrow: bool,
}

/// Split free text like "Will it rain in Pune tomorrow?" into a location
/// guess and a tomorrow flag. Never fails.
///
/// Two paths:
/// - text containing the word "in" followed by letters: the guess is the
///   captured run, title-cased, with no stopword removal;
/// - otherwise the whole text minus [`PARSER_STOPLIST`], title-cased.
pub fn parse_weather_input(input: &str) -> ParsedInput {
    let lower = input.to_lowercase();
    let is_tomorrow = lower.contains("tomorrow") || lower.contains("next day");

    let location_guess = match IN_PLACE.captures(&lower).and_then(|c| c.get(1)) {
        Some(place) => title_case(place.as_str()),
        None => title_case(&strip_stopwords(&lower, PARSER_STOPLIST)),
    };

    ParsedInput {
        location_guess,
        is_tomorrow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_tomorrow() {
        assert!(parse_weather_input("Will it rain in Pune tomorrow?").is_tomorrow);
        assert!(parse_weather_input("TOMORROW in Oslo").is_tomorrow);
        assert!(parse_weather_input("what about the next day in Rome").is_tomorrow);
    }

    #[test]
    fn today_by_default() {
        assert!(!parse_weather_input("Weather in Pune").is_tomorrow);
        assert!(!parse_weather_input("is it sunny today").is_tomorrow);
        assert!(!parse_weather_input("").is_tomorrow);
    }

    #[test]
    fn in_phrase_keeps_captured_words_verbatim() {
        // The matched branch does not strip stopwords, so "tomorrow" stays.
        let parsed = parse_weather_input("Will it rain in Pune tomorrow?");
        assert_eq!(parsed.location_guess, "Pune Tomorrow");

        let parsed = parse_weather_input("Is it sunny today in new york");
        assert_eq!(parsed.location_guess, "New York");
    }

    #[test]
    fn in_must_be_a_word_of_its_own() {
        // "in" inside "raining" is not a match; the real "in" is.
        let parsed = parse_weather_input("Raining in Mumbai?");
        assert_eq!(parsed.location_guess, "Mumbai");
    }

    #[test]
    fn fallback_strips_stopwords() {
        let parsed = parse_weather_input("Tomorrow weather Pune");
        assert_eq!(parsed.location_guess, "Pune");
        assert!(parsed.is_tomorrow);

        let parsed = parse_weather_input("forecast for delhi");
        assert_eq!(parsed.location_guess, "For Delhi");
    }

    #[test]
    fn fallback_can_leave_nothing() {
        let parsed = parse_weather_input("weather today");
        assert_eq!(parsed.location_guess, "");
    }
}
