use crate::{keypoints::KeyPoints, types::Transcript};

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Format transcript segments with timestamps, one line each
pub fn format_transcript_with_timestamps(transcript: &Transcript) -> String {
    let mut output = transcript
        .segments
        .iter()
        .map(|seg| format!("[{}] {}", format_timestamp(seg.start), seg.text.trim()))
        .collect::<Vec<_>>()
        .join("\n");
    if !output.is_empty() {
        output.push('\n');
    }
    output
}

/// Plain-text key points, underlined category headings. Empty categories are skipped.
pub fn format_key_points_readable(key_points: &KeyPoints) -> String {
    let mut output = String::new();
    for (category, points) in key_points.iter() {
        if points.is_empty() {
            continue;
        }
        let label = category.label();
        output.push_str(&format!(
            "\n{}\n{}\n",
            label,
            "=".repeat(label.chars().count())
        ));
        for point in points {
            output.push_str(&format!("- {}\n", point));
        }
    }
    output
}

/// The `## Key Points` section of a note, starting with a blank line.
pub fn format_key_points_section(key_points: &KeyPoints) -> String {
    let mut output = String::from("\n## Key Points\n");
    for (category, points) in key_points.iter() {
        if points.is_empty() {
            continue;
        }
        output.push_str(&format!("\n### {}\n", category));
        for point in points {
            output.push_str(&format!("- {}\n", point));
        }
    }
    output
}
