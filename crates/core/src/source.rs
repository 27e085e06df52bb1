//! Remote collaborators: video title lookup and transcript download.
//!
//! Both are single best-effort calls. The title falls back to a placeholder;
//! a missing transcript is an error.

use std::path::Path;

use serde::Deserialize;
use tokio::{fs, process::Command};

use crate::{
    cache::find_subtitles_in_cache,
    error::{Result, TubenotesError},
    types::{Segment, Transcript},
    video::watch_url,
};

const OEMBED_URL: &str = "https://www.youtube.com/oembed";

#[derive(Debug, Deserialize)]
struct OEmbed {
    title: String,
}

/// Subtitle track in YouTube's `json3` format as written by yt-dlp.
#[derive(Debug, Default, Deserialize)]
struct Json3 {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Json3Event {
    #[serde(default)]
    t_start_ms: u64,
    #[serde(default)]
    d_duration_ms: u64,
    #[serde(default)]
    segs: Vec<Json3Seg>,
}

#[derive(Debug, Default, Deserialize)]
struct Json3Seg {
    #[serde(default)]
    utf8: String,
}

pub fn placeholder_title(video_id: &str) -> String {
    format!("YouTube Video {video_id}")
}

/// Look up the video title through the oEmbed endpoint (no API key needed).
pub async fn fetch_title(video_id: &str) -> Result<String> {
    let response = reqwest::Client::new()
        .get(OEMBED_URL)
        .query(&[("url", watch_url(video_id).as_str()), ("format", "json")])
        .send()
        .await?
        .error_for_status()?
        .json::<OEmbed>()
        .await?;

    Ok(response.title)
}

/// [`fetch_title`], degrading to a placeholder title on any failure.
pub async fn fetch_title_or_placeholder(video_id: &str) -> String {
    match fetch_title(video_id).await {
        Ok(title) => title,
        Err(e) => {
            tracing::warn!(video_id, error = %e, "could not fetch video title");
            placeholder_title(video_id)
        }
    }
}

/// Download the subtitle track for `lang` with yt-dlp and parse it.
///
/// Manual subtitles are preferred; auto-generated captions are the fallback.
pub async fn fetch_transcript(video_id: &str, lang: &str, cache_dir: &Path) -> Result<Transcript> {
    fs::create_dir_all(cache_dir).await?;

    let output_template = cache_dir.join("subs.%(ext)s");
    let output = Command::new("yt-dlp")
        .arg(watch_url(video_id))
        .arg("--skip-download")
        .arg("--write-subs")
        .arg("--write-auto-subs")
        .arg("--sub-langs")
        .arg(lang)
        .arg("--sub-format")
        .arg("json3")
        .arg("-o")
        .arg(&output_template)
        .output()
        .await?;

    if !output.status.success() {
        return Err(TubenotesError::TranscriptUnavailable {
            video_id: video_id.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let subtitles_path = find_subtitles_in_cache(cache_dir, lang).ok_or_else(|| {
        TubenotesError::TranscriptUnavailable {
            video_id: video_id.to_string(),
            reason: format!("no '{lang}' subtitles published"),
        }
    })?;
    tracing::debug!(path = %subtitles_path.display(), "reading subtitles");

    let raw = fs::read_to_string(&subtitles_path).await?;
    let segments = parse_json3(&raw)?;
    if segments.is_empty() {
        return Err(TubenotesError::TranscriptUnavailable {
            video_id: video_id.to_string(),
            reason: "subtitle track is empty".to_string(),
        });
    }

    Ok(Transcript {
        video_id: video_id.to_string(),
        language: lang.to_string(),
        segments,
    })
}

/// Parse a `json3` subtitle document into transcript segments, dropping
/// events that carry no text (window setup, line breaks).
pub fn parse_json3(raw: &str) -> Result<Vec<Segment>> {
    let track: Json3 = serde_json::from_str(raw)?;

    let segments = track
        .events
        .into_iter()
        .filter_map(|event| {
            let text: String = event.segs.iter().map(|seg| seg.utf8.as_str()).collect();
            let text = text.replace('\n', " ").trim().to_string();
            if text.is_empty() {
                return None;
            }
            Some(Segment {
                text,
                start: event.t_start_ms as f64 / 1000.0,
                duration: event.d_duration_ms as f64 / 1000.0,
            })
        })
        .collect();

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json3_joins_segs_and_skips_blank_events() {
        let raw = r#"{
            "wireMagic": "pb3",
            "events": [
                {"tStartMs": 0, "dDurationMs": 120000, "id": 1, "wpWinPosId": 1},
                {"tStartMs": 1500, "dDurationMs": 3000, "segs": [{"utf8": "hello"}, {"utf8": " there", "tOffsetMs": 400}]},
                {"tStartMs": 4500, "dDurationMs": 10, "aAppend": 1, "segs": [{"utf8": "\n"}]},
                {"tStartMs": 61000, "dDurationMs": 2000, "segs": [{"utf8": "general\nkenobi"}]}
            ]
        }"#;

        let segments = parse_json3(raw).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment {
                    text: "hello there".to_string(),
                    start: 1.5,
                    duration: 3.0,
                },
                Segment {
                    text: "general kenobi".to_string(),
                    start: 61.0,
                    duration: 2.0,
                },
            ]
        );
    }

    #[test]
    fn test_parse_json3_without_events() {
        assert!(parse_json3("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json3_rejects_invalid_json() {
        assert!(matches!(
            parse_json3("not json"),
            Err(TubenotesError::Json(_))
        ));
    }

    #[test]
    fn test_placeholder_title() {
        assert_eq!(placeholder_title("abc"), "YouTube Video abc");
    }
}
