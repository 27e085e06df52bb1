use std::path::{Path, PathBuf};

use chrono::Local;

use crate::{
    cache::{get_cache_dir, get_transcript_txt_path, get_video_info_path},
    config::Settings,
    error::Result,
    keypoints::{KeyPoints, extract_key_points},
    notes::{apply_key_points, render_initial_note},
    source::{fetch_title_or_placeholder, fetch_transcript},
    store::{
        ensure_video_dir, list_video_dirs, load_note, load_transcript_text, save_key_points,
        save_note, save_transcript,
    },
    types::{Transcript, VideoInfo},
    video::{parse_video_id, video_dir_name, watch_url},
};

#[derive(Debug)]
pub struct FetchedVideo {
    pub info: VideoInfo,
    pub video_dir: PathBuf,
    pub transcript: Transcript,
}

#[derive(Debug)]
pub struct SummarizeOutcome {
    pub video_dir: PathBuf,
    pub result: Result<KeyPoints>,
}

/// Resolve the video, download its transcript and lay out its directory:
/// transcript files plus an initial note. An existing note is left alone.
pub async fn fetch_video(url: &str, settings: &Settings) -> Result<FetchedVideo> {
    let video_id = parse_video_id(url)?;
    let title = fetch_title_or_placeholder(&video_id).await;
    tracing::debug!(%video_id, %title, "resolved video");

    let cache_dir = get_cache_dir(&settings.cache_dir, &video_id);
    let transcript = fetch_transcript(&video_id, &settings.language, &cache_dir).await?;

    let video_dir = ensure_video_dir(&settings.output_dir, &title, &video_id).await?;
    save_transcript(&transcript, &video_dir).await?;

    let info = VideoInfo {
        url: if url.trim() == video_id {
            watch_url(&video_id)
        } else {
            url.trim().to_string()
        },
        video_id,
        title,
    };

    if get_video_info_path(&video_dir).exists() {
        tracing::debug!(dir = %video_dir.display(), "note exists, keeping it");
    } else {
        let note = render_initial_note(
            &info,
            &video_dir_name(&info.title, &info.video_id),
            &settings.note,
            Local::now().date_naive(),
        )?;
        save_note(&note, &video_dir).await?;
    }

    Ok(FetchedVideo {
        info,
        video_dir,
        transcript,
    })
}

/// Extract key points for one video directory and fold them into its note.
pub async fn summarize_video_dir(video_dir: &Path, settings: &Settings) -> Result<KeyPoints> {
    let text = load_transcript_text(video_dir).await?;
    let key_points = extract_key_points(&text);
    save_key_points(&key_points, video_dir).await?;

    let note = load_note(video_dir).await?;
    let updated = apply_key_points(
        &note,
        &key_points,
        &settings.note,
        Local::now().date_naive(),
    )?;
    save_note(&updated, video_dir).await?;

    tracing::info!(
        dir = %video_dir.display(),
        points = key_points.total(),
        "updated note with key points"
    );
    Ok(key_points)
}

/// Whether `dir` holds both a transcript and a note.
pub fn is_video_dir(dir: &Path) -> bool {
    get_transcript_txt_path(dir).exists() && get_video_info_path(dir).exists()
}

/// Re-run extraction for every video directory under the output directory.
/// A failing directory does not stop the others.
pub async fn summarize_all(settings: &Settings) -> Result<Vec<SummarizeOutcome>> {
    let mut outcomes = Vec::new();
    for video_dir in list_video_dirs(&settings.output_dir).await? {
        if !is_video_dir(&video_dir) {
            continue;
        }
        let result = summarize_video_dir(&video_dir, settings).await;
        if let Err(e) = &result {
            tracing::warn!(dir = %video_dir.display(), error = %e, "summarize failed");
        }
        outcomes.push(SummarizeOutcome { video_dir, result });
    }
    Ok(outcomes)
}
