//! Copy finished notes into a synced drive folder, one Markdown file per video.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{
    cache::get_video_info_path,
    error::{Result, TubenotesError},
    notes::{TITLE_SECTION, read_section},
    store::list_video_dirs,
    video::note_file_name,
};

#[derive(Debug, Default)]
pub struct SyncReport {
    pub copied: Vec<PathBuf>,
    /// Notes without a title section.
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Copy every note under `output_dir` into `drive_dir`, named after the
/// video title. A note that cannot be read or copied is recorded as failed
/// and the rest still sync.
pub async fn sync_notes(output_dir: &Path, drive_dir: &Path) -> Result<SyncReport> {
    if !drive_dir.is_dir() {
        return Err(TubenotesError::DrivePathMissing {
            path: drive_dir.to_path_buf(),
        });
    }

    let mut report = SyncReport::default();
    for video_dir in list_video_dirs(output_dir).await? {
        let note_path = get_video_info_path(&video_dir);
        if !note_path.exists() {
            continue;
        }

        let content = match fs::read_to_string(&note_path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %note_path.display(), error = %e, "could not read note");
                report.failed.push((note_path, e.to_string()));
                continue;
            }
        };
        let Some(title) = read_section(&content, TITLE_SECTION) else {
            tracing::warn!(path = %note_path.display(), "could not extract title from note");
            report.skipped.push(note_path);
            continue;
        };

        let dest_path = drive_dir.join(note_file_name(&title));
        match fs::copy(&note_path, &dest_path).await {
            Ok(_) => {
                tracing::info!(from = %note_path.display(), to = %dest_path.display(), "copied note");
                report.copied.push(dest_path);
            }
            Err(e) => {
                tracing::warn!(path = %note_path.display(), error = %e, "copy failed");
                report.failed.push((note_path, e.to_string()));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_note(output: &Path, dir: &str, content: &str) {
        let video_dir = output.join(dir);
        std::fs::create_dir_all(&video_dir).unwrap();
        std::fs::write(video_dir.join("video_info.md"), content).unwrap();
    }

    #[tokio::test]
    async fn test_missing_drive_is_an_error() {
        let output = tempfile::tempdir().unwrap();
        let result = sync_notes(output.path(), Path::new("/definitely/not/a/drive")).await;
        assert!(matches!(
            result,
            Err(TubenotesError::DrivePathMissing { .. })
        ));
    }

    #[tokio::test]
    async fn test_copies_titled_notes_and_skips_untitled() {
        let output = tempfile::tempdir().unwrap();
        let drive = tempfile::tempdir().unwrap();

        write_note(output.path(), "first_aaaaaaaaaaa", "# Video Information\n\n## Title\nFirst: Video\n");
        write_note(output.path(), "broken_bbbbbbbbbbb", "# Video Information\n\nno title here\n");
        std::fs::create_dir_all(output.path().join("empty_ccccccccccc")).unwrap();

        let report = sync_notes(output.path(), drive.path()).await.unwrap();

        assert_eq!(report.copied, vec![drive.path().join("First_Video.md")]);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.failed.is_empty());

        let copied = std::fs::read_to_string(drive.path().join("First_Video.md")).unwrap();
        assert!(copied.contains("## Title\nFirst: Video"));
    }

    #[tokio::test]
    async fn test_blocked_destination_is_reported_and_rest_copied() {
        let output = tempfile::tempdir().unwrap();
        let drive = tempfile::tempdir().unwrap();

        write_note(output.path(), "alpha_aaaaaaaaaaa", "## Title\nAlpha\n");
        write_note(output.path(), "beta_bbbbbbbbbbb", "## Title\nBeta\n");
        std::fs::create_dir_all(drive.path().join("Alpha.md")).unwrap();

        let report = sync_notes(output.path(), drive.path()).await.unwrap();

        assert_eq!(report.failed.len(), 1);
        assert_eq!(
            report.failed[0].0,
            output.path().join("alpha_aaaaaaaaaaa").join("video_info.md")
        );
        assert_eq!(report.copied, vec![drive.path().join("Beta.md")]);
        assert!(drive.path().join("Beta.md").is_file());
    }

    #[tokio::test]
    async fn test_unreadable_note_does_not_abort_sync() {
        let output = tempfile::tempdir().unwrap();
        let drive = tempfile::tempdir().unwrap();

        write_note(output.path(), "alpha_aaaaaaaaaaa", "## Title\nAlpha\n");
        let garbled = output.path().join("garbled_ccccccccccc");
        std::fs::create_dir_all(&garbled).unwrap();
        std::fs::write(garbled.join("video_info.md"), b"\xff\xfe").unwrap();
        write_note(output.path(), "zeta_zzzzzzzzzzz", "## Title\nZeta\n");

        let report = sync_notes(output.path(), drive.path()).await.unwrap();

        assert_eq!(
            report.copied,
            vec![drive.path().join("Alpha.md"), drive.path().join("Zeta.md")]
        );
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, garbled.join("video_info.md"));
        assert!(report.skipped.is_empty());
    }

    #[tokio::test]
    async fn test_missing_output_dir_syncs_nothing() {
        let drive = tempfile::tempdir().unwrap();
        let report = sync_notes(Path::new("/definitely/not/here"), drive.path())
            .await
            .unwrap();
        assert!(report.copied.is_empty());
    }
}
