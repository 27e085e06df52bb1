//! Tubenotes Core Library
//!
//! Downloads YouTube transcripts, extracts heuristic key points and keeps a
//! Markdown note per video for an Obsidian-style knowledge base.

pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod keypoints;
pub mod notes;
pub mod pipeline;
pub mod source;
pub mod store;
pub mod sync;
pub mod types;
pub mod video;

// Re-export commonly used items at crate root
pub use config::{NoteTemplate, Settings};
pub use error::{Result, TubenotesError};
pub use format::{
    format_key_points_readable, format_key_points_section, format_timestamp,
    format_transcript_with_timestamps,
};
pub use keypoints::{Category, KeyPointExtractor, KeyPoints, extract_key_points};
pub use pipeline::{FetchedVideo, SummarizeOutcome, fetch_video, summarize_all, summarize_video_dir};
pub use sync::{SyncReport, sync_notes};
pub use types::{Segment, Transcript, VideoInfo};
pub use video::parse_video_id;
