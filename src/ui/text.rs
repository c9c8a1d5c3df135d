use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.?!])\s+").expect("sentence boundary pattern is valid"));

/// Presentation heuristic carried over from the web client: sentence-ending
/// punctuation followed by whitespace becomes the punctuation plus a blank
/// line. Not a markdown parser; already-paragraphed input double-breaks.
#[must_use]
pub fn paragraph_breaks(text: &str) -> String {
    SENTENCE_BOUNDARY.replace_all(text, "${1}\n\n").into_owned()
}
