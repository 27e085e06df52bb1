use std::sync::LazyLock;

use regex::Regex;

use super::clean::clean_sentence;

/// Fragments at or below this many characters are dropped.
pub const MIN_SENTENCE_CHARS: usize = 30;

static TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+:\d+\]").expect("valid timestamp regex"));

// Auto-generated captions have no punctuation, so a lowercase letter followed
// by a capital is taken as a sentence break.
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])\s+([A-Z])").expect("valid boundary regex"));

static PRONOUN_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])\s+(I\s)").expect("valid boundary regex"));

static PERIOD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.+").expect("valid period regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static CONJUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z])\s+(?:but|and|or|so|because|however|therefore)\s+")
        .expect("valid conjunction regex")
});

/// Split a raw transcript into cleaned candidate sentences, in source order.
///
/// Each candidate is longer than [`MIN_SENTENCE_CHARS`] and ends with a period.
pub fn split_sentences(transcript: &str) -> Vec<String> {
    let text = TIMESTAMP.replace_all(transcript, "");
    let text = CASE_BOUNDARY.replace_all(&text, "${1}. ${2}");
    let text = PRONOUN_BOUNDARY.replace_all(&text, "${1}. ${2}");
    let text = PERIOD_RUN.replace_all(&text, ".");
    let text = WHITESPACE.replace_all(&text, " ");

    let mut sentences = Vec::new();
    for raw in text.split('.') {
        let segment = clean_sentence(raw);
        if !is_substantial(&segment) {
            continue;
        }

        for part in split_on_conjunctions(&segment) {
            let part = clean_sentence(part);
            if is_substantial(&part) {
                sentences.push(format!("{part}."));
            }
        }
    }
    sentences
}

fn is_substantial(text: &str) -> bool {
    text.chars().count() > MIN_SENTENCE_CHARS
}

/// Break a run-on clause at coordinating conjunctions. The letter before the
/// conjunction stays with the left part; the conjunction itself is dropped.
fn split_on_conjunctions(sentence: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;

    for caps in CONJUNCTION.captures_iter(sentence) {
        let (Some(whole), Some(letter)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        parts.push(&sentence[last..letter.end()]);
        last = whole.end();
    }

    parts.push(&sentence[last..]);
    parts
}
