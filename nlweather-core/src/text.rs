//! Small text helpers shared by the input parser and the location sanitizer.

/// Remove every occurrence of each stopword from `text`, in stoplist order.
///
/// Matching is plain substring matching, so a stopword is also removed from
/// inside longer words ("in" disappears from "raining").
pub fn strip_stopwords(text: &str, stoplist: &[&str]) -> String {
    stoplist
        .iter()
        .fold(text.to_owned(), |acc, word| acc.replace(word, ""))
}

/// Capitalise every letter that follows a non-letter ("winston-salem" ->
/// "Winston-Salem", "o'neil" -> "O'Neil") and lowercase the rest.
/// Runs of whitespace collapse to a single space.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut out = String::with_capacity(word.len());
            let mut after_letter = false;
            for c in word.chars() {
                if after_letter {
                    out.extend(c.to_lowercase());
                } else {
                    out.extend(c.to_uppercase());
                }
                after_letter = c.is_alphabetic();
            }
            out
        })
        .collect::<Vec<String>>()
        .join(" ")
}
