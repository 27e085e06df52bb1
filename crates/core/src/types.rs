use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: String,
    pub language: String,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl Transcript {
    pub fn duration_minutes(&self) -> f64 {
        self.segments
            .last()
            .map(|s| (s.start + s.duration) / 60.0)
            .unwrap_or(0.0)
    }
}

/// Identity of a video as recorded in its note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    pub video_id: String,
    pub title: String,
    pub url: String,
}
