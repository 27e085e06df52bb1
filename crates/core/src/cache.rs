use std::path::{Path, PathBuf};

pub const TRANSCRIPT_JSON: &str = "transcript.json";
pub const TRANSCRIPT_TXT: &str = "transcript.txt";
pub const KEY_POINTS_JSON: &str = "key_points.json";
pub const KEY_POINTS_TXT: &str = "key_points.txt";
pub const VIDEO_INFO_MD: &str = "video_info.md";

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("tubenotes")
}

/// Scratch directory for one video's subtitle download
pub fn get_cache_dir(root: &Path, video_id: &str) -> PathBuf {
    root.join(video_id)
}

pub fn get_transcript_json_path(video_dir: &Path) -> PathBuf {
    video_dir.join(TRANSCRIPT_JSON)
}

pub fn get_transcript_txt_path(video_dir: &Path) -> PathBuf {
    video_dir.join(TRANSCRIPT_TXT)
}

pub fn get_key_points_json_path(video_dir: &Path) -> PathBuf {
    video_dir.join(KEY_POINTS_JSON)
}

pub fn get_key_points_txt_path(video_dir: &Path) -> PathBuf {
    video_dir.join(KEY_POINTS_TXT)
}

pub fn get_video_info_path(video_dir: &Path) -> PathBuf {
    video_dir.join(VIDEO_INFO_MD)
}

/// Find a subtitle file yt-dlp wrote for `lang` in the cache directory
pub fn find_subtitles_in_cache(cache_dir: &Path, lang: &str) -> Option<PathBuf> {
    let Ok(entries) = std::fs::read_dir(cache_dir) else {
        return None;
    };

    let suffix = format!(".{lang}.json3");
    entries
        .flatten()
        .map(|entry| entry.path())
        .find(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().ends_with(&suffix))
                .unwrap_or(false)
        })
}
