use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TubenotesError {
    #[error("Could not extract a video ID from {input}")]
    InvalidVideoUrl { input: String },

    #[error("Transcript unavailable for {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("Section '{section}' not found in {path}")]
    MissingSection { section: String, path: PathBuf },

    #[error("Drive path {path} does not exist")]
    DrivePathMissing { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TubenotesError>;
