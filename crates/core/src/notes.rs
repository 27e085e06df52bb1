//! The per-video Markdown note (`video_info.md`).
//!
//! A note is YAML frontmatter followed by `## ` sections. Everything here works
//! on strings; reading and writing files lives in [`crate::store`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    config::NoteTemplate,
    error::Result,
    format::format_key_points_section,
    keypoints::KeyPoints,
    types::VideoInfo,
};

pub const TITLE_SECTION: &str = "Title";
pub const VIDEO_ID_SECTION: &str = "Video ID";
pub const KEY_POINTS_SECTION: &str = "Key Points";
pub const SUMMARY_SECTION: &str = "Summary";
pub const NOTES_SECTION: &str = "Notes";

const FRONTMATTER_FENCE: &str = "---\n";
const DATE_FORMAT: &str = "%Y/%m/%d";

const STATUS_CHECKBOXES: [(&str, &str); 2] = [
    ("- [ ] Key points extracted", "- [x] Key points extracted"),
    ("- [ ] Summary generated", "- [x] Summary generated"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    pub title: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    pub video_id: String,
    pub created_date: String,
    pub tags: Vec<String>,
    pub status: NoteStatus,
}

impl Frontmatter {
    pub fn new(
        title: &str,
        video_id: &str,
        template: &NoteTemplate,
        created: NaiveDate,
        status: NoteStatus,
    ) -> Self {
        Self {
            title: title.to_string(),
            category: template.category.clone(),
            kind: "video-notes".to_string(),
            source: "youtube".to_string(),
            video_id: video_id.to_string(),
            created_date: created.format(DATE_FORMAT).to_string(),
            tags: template.tags.clone(),
            status,
        }
    }

    pub fn render(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("{FRONTMATTER_FENCE}{yaml}{FRONTMATTER_FENCE}"))
    }
}

/// Split a note into its raw frontmatter YAML (if any) and the body after it.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content.strip_prefix(FRONTMATTER_FENCE) else {
        return (None, content);
    };
    // An empty block closes on the very next line.
    if let Some(body) = rest.strip_prefix(FRONTMATTER_FENCE) {
        return (Some(""), body);
    }
    match rest.find("\n---\n") {
        Some(end) => (Some(&rest[..=end]), &rest[end + 5..]),
        None => (None, content),
    }
}

/// First non-empty line under `## {heading}`.
pub fn read_section(content: &str, heading: &str) -> Option<String> {
    let marker = format!("## {heading}");
    let mut lines = content.lines();
    lines.find(|line| line.trim_end() == marker)?;
    lines
        .map(str::trim)
        .find(|line| !line.is_empty())
        .filter(|line| !line.starts_with("## "))
        .map(str::to_string)
}

/// Remove every `## {heading}` section, from its leading newline up to the
/// next `## ` heading or the end of the note.
pub fn remove_section(content: &str, heading: &str) -> String {
    let marker = format!("\n## {heading}\n");
    let mut content = content.to_string();

    while let Some(start) = content.find(&marker) {
        let body_start = start + marker.len();
        let end = match content[body_start - 1..].find("\n## ") {
            Some(offset) => body_start - 1 + offset,
            None if content.ends_with('\n') && content.len() > body_start => content.len() - 1,
            None => content.len(),
        };
        content.replace_range(start..end, "");
    }

    content
}

/// The note written right after a transcript is downloaded.
pub fn render_initial_note(
    info: &VideoInfo,
    dir_name: &str,
    template: &NoteTemplate,
    today: NaiveDate,
) -> Result<String> {
    let frontmatter = Frontmatter::new(
        &info.title,
        &info.video_id,
        template,
        today,
        NoteStatus::InProgress,
    );

    let body = format!(
        "# Video Information

## Title
{title}

## Video URL
{url}

## Video ID
{video_id}

## Directory Name
{dir_name}

## Files
- `transcript.txt`: Human-readable transcript with timestamps
- `transcript.json`: Raw transcript data in JSON format
- `key_points.txt`: Extracted key points in human-readable format
- `key_points.json`: Structured key points data

## Processing Status
- [x] Transcript downloaded
- [ ] Key points extracted
- [ ] Summary generated

## Notes
- Transcript downloaded on: {date}
",
        title = info.title,
        url = info.url,
        video_id = info.video_id,
        date = today.format(DATE_FORMAT),
    );

    Ok(format!("{}{}", frontmatter.render()?, body))
}

/// Rewrite a note with freshly extracted key points.
///
/// The frontmatter is regenerated as completed (keeping an existing
/// `createdDate`), the status checkboxes are ticked, old Summary and Key Points
/// sections are dropped and the new Key Points section goes before `## Notes`.
pub fn apply_key_points(
    content: &str,
    key_points: &KeyPoints,
    template: &NoteTemplate,
    today: NaiveDate,
) -> Result<String> {
    let (existing_frontmatter, body) = split_frontmatter(content);

    let title = read_section(body, TITLE_SECTION);
    let video_id = read_section(body, VIDEO_ID_SECTION);

    let mut content = match (title, video_id) {
        (Some(title), Some(video_id)) => {
            let created = existing_frontmatter
                .and_then(created_date)
                .and_then(|date| NaiveDate::parse_from_str(&date, DATE_FORMAT).ok())
                .unwrap_or(today);
            let frontmatter =
                Frontmatter::new(&title, &video_id, template, created, NoteStatus::Completed);
            format!("{}{}", frontmatter.render()?, body)
        }
        _ => {
            tracing::warn!("note has no title or video id section, frontmatter left as is");
            content.to_string()
        }
    };

    for (unchecked, checked) in STATUS_CHECKBOXES {
        content = content.replace(unchecked, checked);
    }

    let content = remove_section(&content, SUMMARY_SECTION);
    let mut content = remove_section(&content, KEY_POINTS_SECTION);

    let section = format_key_points_section(key_points);
    match heading_offset(&content, NOTES_SECTION) {
        Some(at) => content.insert_str(at, &format!("{section}\n")),
        None => {
            content.push('\n');
            content.push_str(&section);
        }
    }

    Ok(content)
}

/// Byte offset of the line that is exactly `## {heading}`.
fn heading_offset(content: &str, heading: &str) -> Option<usize> {
    let marker = format!("## {heading}");
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.trim_end() == marker {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

fn created_date(yaml: &str) -> Option<String> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml).ok()?;
    value
        .get("createdDate")
        .and_then(serde_yaml::Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypoints::extract_key_points;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn info() -> VideoInfo {
        VideoInfo {
            video_id: "dQw4w9WgXcQ".to_string(),
            title: "Career Advice: The Real Story".to_string(),
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        }
    }

    fn initial() -> String {
        render_initial_note(
            &info(),
            "career_advice_the_real_story_dQw4w9WgXcQ",
            &NoteTemplate::default(),
            date(2024, 3, 9),
        )
        .unwrap()
    }

    fn parse_frontmatter(note: &str) -> Frontmatter {
        let (yaml, _) = split_frontmatter(note);
        serde_yaml::from_str(yaml.expect("frontmatter present")).unwrap()
    }

    fn key_points() -> KeyPoints {
        extract_key_points(
            "Remember that the real key to success is showing up every single day for your team",
        )
    }

    #[test]
    fn test_initial_note_frontmatter() {
        let front = parse_frontmatter(&initial());
        assert_eq!(front.title, "Career Advice: The Real Story");
        assert_eq!(front.video_id, "dQw4w9WgXcQ");
        assert_eq!(front.created_date, "2024/03/09");
        assert_eq!(front.kind, "video-notes");
        assert_eq!(front.status, NoteStatus::InProgress);
        assert_eq!(front.tags, NoteTemplate::default().tags);
    }

    #[test]
    fn test_initial_note_sections() {
        let note = initial();
        let (_, body) = split_frontmatter(&note);
        assert!(body.starts_with("# Video Information\n"));
        assert_eq!(
            read_section(body, TITLE_SECTION).as_deref(),
            Some("Career Advice: The Real Story")
        );
        assert_eq!(
            read_section(body, VIDEO_ID_SECTION).as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert!(body.contains("- [ ] Key points extracted"));
        assert!(body.contains("- Transcript downloaded on: 2024/03/09"));
    }

    #[test]
    fn test_split_frontmatter_without_fence() {
        let (yaml, body) = split_frontmatter("# Title\nbody\n");
        assert!(yaml.is_none());
        assert_eq!(body, "# Title\nbody\n");
    }

    #[test]
    fn test_split_frontmatter_unterminated() {
        let content = "---\ntitle: x\nno closing fence\n";
        let (yaml, body) = split_frontmatter(content);
        assert!(yaml.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_read_section_skips_blank_lines() {
        let content = "## Title\n\n  Spaced Title  \n## Next\n";
        assert_eq!(
            read_section(content, "Title").as_deref(),
            Some("Spaced Title")
        );
    }

    #[test]
    fn test_read_section_missing_or_empty() {
        assert!(read_section("## Other\nvalue\n", "Title").is_none());
        assert!(read_section("## Title\n\n## Next\nvalue\n", "Title").is_none());
    }

    #[test]
    fn test_remove_section_between_headings() {
        let content = "# Doc\n\n## Summary\nold summary\nmore\n\n## Notes\nkeep\n";
        assert_eq!(
            remove_section(content, "Summary"),
            "# Doc\n\n## Notes\nkeep\n"
        );
    }

    #[test]
    fn test_remove_section_at_end() {
        let content = "# Doc\n\n## Notes\nkeep\n\n## Key Points\n- a\n- b\n";
        assert_eq!(
            remove_section(content, "Key Points"),
            "# Doc\n\n## Notes\nkeep\n\n"
        );
    }

    #[test]
    fn test_remove_section_ignores_subheadings() {
        let content = "x\n## Key Points\n\n### Main Insights\n- a\n\n## Notes\nkeep\n";
        assert_eq!(remove_section(content, "Key Points"), "x\n## Notes\nkeep\n");
    }

    #[test]
    fn test_remove_every_occurrence() {
        let content = "x\n## Summary\na\n## Keep\nb\n## Summary\nc\n## End\n";
        assert_eq!(remove_section(content, "Summary"), "x\n## Keep\nb\n## End\n");
    }

    #[test]
    fn test_apply_key_points_completes_note() {
        let updated = apply_key_points(
            &initial(),
            &key_points(),
            &NoteTemplate::default(),
            date(2025, 1, 1),
        )
        .unwrap();

        let front = parse_frontmatter(&updated);
        assert_eq!(front.status, NoteStatus::Completed);
        assert_eq!(front.created_date, "2024/03/09");

        assert!(updated.contains("- [x] Key points extracted"));
        assert!(updated.contains("- [x] Summary generated"));

        let key_points_at = updated.find("\n## Key Points\n").unwrap();
        let notes_at = updated.find("\n## Notes\n").unwrap();
        assert!(key_points_at < notes_at);
        assert!(updated.contains("### Main Insights\n- Remember that the real key to success"));
    }

    #[test]
    fn test_apply_key_points_is_stable() {
        let template = NoteTemplate::default();
        let once = apply_key_points(&initial(), &key_points(), &template, date(2025, 1, 1)).unwrap();
        let twice = apply_key_points(&once, &key_points(), &template, date(2025, 6, 1)).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.matches("## Key Points").count(), 1);
    }

    #[test]
    fn test_apply_key_points_replaces_old_sections() {
        let note = format!(
            "{}\n## Summary\nan old summary\n",
            initial().replace(
                "## Notes",
                "## Key Points\n\n### Stale\n- stale point\n\n## Notes"
            )
        );
        let updated =
            apply_key_points(&note, &key_points(), &NoteTemplate::default(), date(2025, 1, 1))
                .unwrap();

        assert!(!updated.contains("stale point"));
        assert!(!updated.contains("an old summary"));
        assert_eq!(updated.matches("## Key Points").count(), 1);
    }

    #[test]
    fn test_apply_key_points_without_notes_section_appends() {
        let note = "# Video Information\n\n## Title\nT\n\n## Video ID\nabc\n";
        let updated =
            apply_key_points(note, &key_points(), &NoteTemplate::default(), date(2025, 1, 1))
                .unwrap();

        let (_, body) = split_frontmatter(&updated);
        assert!(body.starts_with("# Video Information\n"));
        assert!(body.ends_with("- Remember that the real key to success is showing up every single day for your team.\n"));
        assert_eq!(parse_frontmatter(&updated).created_date, "2025/01/01");
    }

    #[test]
    fn test_apply_key_points_ignores_notes_subheading() {
        let note = "# Video Information\n\n## Title\nT\n\n## Video ID\nabc\n\n\
                    ## Processing Status\n### Notes to self\nmine\n\n## Notes\n- kept\n";
        let updated =
            apply_key_points(note, &key_points(), &NoteTemplate::default(), date(2025, 1, 1))
                .unwrap();

        assert!(updated.contains("\n### Notes to self\nmine\n"));
        let subheading_at = updated.find("### Notes to self").unwrap();
        let key_points_at = updated.find("\n## Key Points\n").unwrap();
        let notes_at = updated.find("\n## Notes\n").unwrap();
        assert!(subheading_at < key_points_at);
        assert!(key_points_at < notes_at);
        assert!(updated.ends_with("\n## Notes\n- kept\n"));
    }

    #[test]
    fn test_apply_key_points_with_only_notes_subheading_appends() {
        let note = "# Video Information\n\n## Title\nT\n\n## Video ID\nabc\n\n### Notes\nmine\n";
        let updated =
            apply_key_points(note, &key_points(), &NoteTemplate::default(), date(2025, 1, 1))
                .unwrap();

        let subheading_at = updated.find("\n### Notes\nmine\n").unwrap();
        let key_points_at = updated.find("\n## Key Points\n").unwrap();
        assert!(subheading_at < key_points_at);
    }

    #[test]
    fn test_apply_key_points_without_identity_keeps_frontmatter() {
        let note = "---\ntitle: custom\n---\nbody only\n";
        let updated =
            apply_key_points(note, &KeyPoints::default(), &NoteTemplate::default(), date(2025, 1, 1))
                .unwrap();

        assert!(updated.starts_with("---\ntitle: custom\n---\nbody only\n"));
        assert!(updated.ends_with("\n## Key Points\n"));
    }
}
