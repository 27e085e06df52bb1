use std::sync::LazyLock;

use regex::Regex;

/// Filler phrases, removed in this order. A later pass can catch what an
/// earlier removal exposes ("I think so" loses "so", then "I think").
static FILLER_PASSES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\b(um|uh|like|you know|sort of|kind of)\b").expect("valid filler regex"),
        Regex::new(r"(?i)\b(right|okay|well|so)\b").expect("valid filler regex"),
        Regex::new(r"(?i)\b(I mean|I think|I guess|I don't know)\b").expect("valid filler regex"),
    ]
});

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

const LEADING_STRIP: &[char] = &[',', '.', '!', '?', ':', ';'];
const TRAILING_STRIP: &[char] = &[',', '!', '?', ':', ';'];

/// Strip filler words, stutters and stray punctuation from a transcript fragment.
///
/// Cleaning is idempotent: the cleaning pass is repeated until the text stops
/// changing, so feeding the output back in returns it unchanged.
pub fn clean_sentence(text: &str) -> String {
    let mut current = clean_pass(text);
    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(text: &str) -> String {
    let mut text = text.to_string();
    for filler in FILLER_PASSES.iter() {
        text = filler.replace_all(&text, "").into_owned();
    }

    let text = collapse_repeated_words(&text);
    let text = WHITESPACE.replace_all(&text, " ");

    text.trim_start_matches(|c: char| c.is_whitespace() || LEADING_STRIP.contains(&c))
        .trim_end_matches(|c: char| c.is_whitespace() || TRAILING_STRIP.contains(&c))
        .to_string()
}

/// Collapse runs of the same word separated only by whitespace ("the the",
/// "I I I") down to the first occurrence. Comparison ignores case.
fn collapse_repeated_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied_to = 0;
    let mut previous: Option<(usize, &str)> = None;

    for word in WORD.find_iter(text) {
        if let Some((previous_end, previous_word)) = previous {
            let gap = &text[previous_end..word.start()];
            let stutter = !gap.is_empty()
                && gap.chars().all(char::is_whitespace)
                && previous_word.to_lowercase() == word.as_str().to_lowercase();
            if stutter {
                copied_to = word.end();
                previous = Some((word.end(), previous_word));
                continue;
            }
        }

        out.push_str(&text[copied_to..word.end()]);
        copied_to = word.end();
        previous = Some((word.end(), word.as_str()));
    }

    out.push_str(&text[copied_to..]);
    out
}
