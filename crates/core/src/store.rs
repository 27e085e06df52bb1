use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{
    cache::{
        get_key_points_json_path, get_key_points_txt_path, get_transcript_json_path,
        get_transcript_txt_path, get_video_info_path,
    },
    error::Result,
    format::{format_key_points_readable, format_transcript_with_timestamps},
    keypoints::KeyPoints,
    types::Transcript,
    video::video_dir_name,
};

/// Create the directory for a video under `output_dir`, removing directories
/// left behind for the same video under an older title.
pub async fn ensure_video_dir(output_dir: &Path, title: &str, video_id: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).await?;

    let dir_name = video_dir_name(title, video_id);
    let mut entries = fs::read_dir(output_dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().to_string();
        if name != dir_name && name.contains(video_id) && entry.file_type().await?.is_dir() {
            tracing::info!(path = %entry.path().display(), "removing stale video directory");
            fs::remove_dir_all(entry.path()).await?;
        }
    }

    let video_dir = output_dir.join(dir_name);
    fs::create_dir_all(&video_dir).await?;
    Ok(video_dir)
}

/// Every subdirectory of `output_dir`, sorted by name. A missing output
/// directory has no videos.
pub async fn list_video_dirs(output_dir: &Path) -> Result<Vec<PathBuf>> {
    if !output_dir.exists() {
        return Ok(Vec::new());
    }

    let mut dirs = Vec::new();
    let mut entries = fs::read_dir(output_dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Save the transcript as raw JSON segments and as timestamped text.
pub async fn save_transcript(transcript: &Transcript, video_dir: &Path) -> Result<()> {
    let json_path = get_transcript_json_path(video_dir);
    fs::write(&json_path, serde_json::to_string_pretty(&transcript.segments)?).await?;

    let txt_path = get_transcript_txt_path(video_dir);
    fs::write(&txt_path, format_transcript_with_timestamps(transcript)).await?;

    tracing::info!(dir = %video_dir.display(), "saved transcript");
    Ok(())
}

/// The timestamped transcript text, as fed to the extractor.
pub async fn load_transcript_text(video_dir: &Path) -> Result<String> {
    Ok(fs::read_to_string(get_transcript_txt_path(video_dir)).await?)
}

pub async fn save_key_points(key_points: &KeyPoints, video_dir: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(key_points)?;
    fs::write(get_key_points_json_path(video_dir), pretty_json).await?;
    fs::write(
        get_key_points_txt_path(video_dir),
        format_key_points_readable(key_points),
    )
    .await?;
    Ok(())
}

pub async fn load_note(video_dir: &Path) -> Result<String> {
    Ok(fs::read_to_string(get_video_info_path(video_dir)).await?)
}

pub async fn save_note(content: &str, video_dir: &Path) -> Result<()> {
    fs::write(get_video_info_path(video_dir), content).await?;
    Ok(())
}
