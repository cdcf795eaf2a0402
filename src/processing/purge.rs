//! Removal of original images once their optimized copies are in place.
//!
//! Nothing here checks that an optimized copy actually exists; every image
//! in the directory is deleted except those inside the protected subdirectory.

use std::io;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};
use crate::core::{BatchReport, FileOutcome, Notifier, PurgeJob};
use crate::utils::{OptimizerResult, dir_exists, is_recognized_image, read_dir};

/// Deletes the images directly inside `job.directory`.
///
/// A missing directory is a no-op. Entries are skipped when they are the
/// protected subdirectory, not a regular file, not named in UTF-8, or not an
/// image. A file that cannot be removed is logged and left in place. An
/// entry that cannot be read stops the pass; deletions up to that point are
/// still reported.
pub async fn purge_originals<N: Notifier>(job: &PurgeJob, notifier: N) -> OptimizerResult<BatchReport> {
    if !dir_exists(&job.directory).await {
        debug!("Nothing to purge, {} does not exist", job.directory.display());
        return Ok(BatchReport::default());
    }

    let mut entries = read_dir(&job.directory).await?;
    let mut listed = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => listed.push(Ok(entry.path())),
            Ok(None) => break,
            Err(e) => {
                listed.push(Err(e));
                break;
            }
        }
    }

    let report = purge_listed(job, listed, notifier).await;
    info!("Purged {} originals from {}", report.deleted(), job.directory.display());
    Ok(report)
}

async fn purge_listed<N: Notifier>(
    job: &PurgeJob,
    listed: Vec<io::Result<PathBuf>>,
    notifier: N,
) -> BatchReport {
    let mut report = BatchReport::default();

    for item in listed {
        let path = match item {
            Ok(path) => path,
            Err(e) => {
                warn!("Stopped reading {}: {}", job.directory.display(), e);
                break;
            }
        };

        if path == job.protected_subdir {
            continue;
        }

        let is_file = fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => {
                warn!("Skipping non UTF-8 entry {:?}", path);
                continue;
            }
        };
        if !is_recognized_image(&name) {
            continue;
        }

        if let Err(e) = fs::remove_file(&path).await {
            warn!("Failed to delete {}: {}", path.display(), e);
            continue;
        }

        let outcome = FileOutcome::Deleted { name };
        notifier.notify(&outcome);
        report.push(outcome);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordingNotifier;
    use std::path::Path;

    fn purge_job(dir: &Path) -> PurgeJob {
        PurgeJob {
            directory: dir.to_path_buf(),
            protected_subdir: dir.join("optimized"),
        }
    }

    #[tokio::test]
    async fn missing_directory_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let notifier = RecordingNotifier::new();

        let report = purge_originals(&purge_job(&dir.path().join("playeras")), &notifier)
            .await
            .unwrap();

        assert!(report.is_empty());
        assert!(notifier.lines().is_empty());
    }

    #[tokio::test]
    async fn deletes_only_top_level_images() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("shirt1.jpg"), b"x").unwrap();
        std::fs::write(root.join("SHIRT2.PNG"), b"x").unwrap();
        std::fs::write(root.join("anim.gif"), b"x").unwrap();
        std::fs::create_dir_all(root.join("optimized")).unwrap();
        std::fs::write(root.join("optimized/shirt1.jpg"), b"x").unwrap();
        std::fs::create_dir_all(root.join("other.png")).unwrap();
        std::fs::write(root.join("other.png/nested.png"), b"x").unwrap();
        let notifier = RecordingNotifier::new();

        let report = purge_originals(&purge_job(root), &notifier).await.unwrap();

        assert_eq!(report.deleted(), 2);
        assert!(!root.join("shirt1.jpg").exists());
        assert!(!root.join("SHIRT2.PNG").exists());
        assert!(root.join("anim.gif").exists());
        assert!(root.join("optimized/shirt1.jpg").exists());
        assert!(root.join("other.png/nested.png").exists());

        let mut lines = notifier.lines();
        lines.sort();
        assert_eq!(lines, ["Deleted original: SHIRT2.PNG", "Deleted original: shirt1.jpg"]);
    }

    #[tokio::test]
    async fn second_run_deletes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpeg"), b"x").unwrap();

        let first = purge_originals(&purge_job(dir.path()), RecordingNotifier::new()).await.unwrap();
        let second = purge_originals(&purge_job(dir.path()), RecordingNotifier::new()).await.unwrap();

        assert_eq!(first.deleted(), 1);
        assert_eq!(second.deleted(), 0);
    }

    #[tokio::test]
    async fn unreadable_entry_ends_pass_with_partial_report() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.jpg");
        let after = dir.path().join("after.jpg");
        std::fs::write(&first, b"x").unwrap();
        std::fs::write(&after, b"x").unwrap();
        let listed = vec![
            Ok(first.clone()),
            Err(io::Error::other("entry vanished")),
            Ok(after.clone()),
        ];
        let notifier = RecordingNotifier::new();

        let report = purge_listed(&purge_job(dir.path()), listed, &notifier).await;

        assert_eq!(report.deleted(), 1);
        assert!(!first.exists());
        assert!(after.exists());
        assert_eq!(notifier.lines(), ["Deleted original: first.jpg"]);
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn non_utf8_names_are_left_alone() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join(OsStr::from_bytes(b"camisa\xff.png"));
        std::fs::write(&odd, b"x").unwrap();
        std::fs::write(dir.path().join("plain.png"), b"x").unwrap();

        let report = purge_originals(&purge_job(dir.path()), RecordingNotifier::new()).await.unwrap();

        assert_eq!(report.deleted(), 1);
        assert!(odd.exists());
        assert!(!dir.path().join("plain.png").exists());
    }
}
