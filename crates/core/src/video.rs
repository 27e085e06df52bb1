use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, TubenotesError};

static ID_IN_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|/)([a-zA-Z0-9_-]{11})(?:\?|&|/|$)").expect("valid video id regex")
});

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9_-]{11})$").expect("valid video id regex"));

static INVALID_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid filename regex"));

const MAX_DIR_TITLE_CHARS: usize = 100;
const MAX_NOTE_FILENAME_CHARS: usize = 255;

/// Extract the 11-character video ID from a watch URL, short link, embed URL
/// or a bare ID.
pub fn parse_video_id(input: &str) -> Result<String> {
    let input = input.trim();
    [&*ID_IN_URL, &*BARE_ID]
        .iter()
        .find_map(|pattern| pattern.captures(input))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| TubenotesError::InvalidVideoUrl {
            input: input.to_string(),
        })
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Directory-safe form of a video title: invalid characters dropped, spaces
/// turned into underscores, lowercased and truncated.
pub fn sanitize_title(title: &str) -> String {
    INVALID_FILENAME_CHARS
        .replace_all(title, "")
        .replace(' ', "_")
        .to_lowercase()
        .chars()
        .take(MAX_DIR_TITLE_CHARS)
        .collect()
}

/// Name of the per-video directory, `<sanitized title>_<video id>`.
pub fn video_dir_name(title: &str, video_id: &str) -> String {
    format!("{}_{}", sanitize_title(title), video_id)
}

/// File name a note gets when synced to the drive. Case is preserved.
pub fn note_file_name(title: &str) -> String {
    let stem: String = INVALID_FILENAME_CHARS
        .replace_all(title, "")
        .replace(' ', "_")
        .chars()
        .take(MAX_NOTE_FILENAME_CHARS)
        .collect();
    format!("{stem}.md")
}
