use std::path::PathBuf;

use crate::cache::get_root_cache_dir;

/// Frontmatter values stamped into every note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTemplate {
    pub category: String,
    pub tags: Vec<String>,
}

impl Default for NoteTemplate {
    fn default() -> Self {
        Self {
            category: "career".to_string(),
            tags: vec![
                "career-advice".to_string(),
                "corporate-life".to_string(),
                "professional-development".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Root holding one directory per video.
    pub output_dir: PathBuf,
    /// Scratch space for subtitle downloads.
    pub cache_dir: PathBuf,
    pub language: String,
    pub drive_dir: Option<PathBuf>,
    pub note: NoteTemplate,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            cache_dir: get_root_cache_dir(),
            language: "en".to_string(),
            drive_dir: None,
            note: NoteTemplate::default(),
        }
    }
}

impl Settings {
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_drive_dir(mut self, drive_dir: Option<PathBuf>) -> Self {
        self.drive_dir = drive_dir;
        self
    }
}
