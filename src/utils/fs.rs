use std::io;
use std::path::Path;
use tokio::fs;
use tracing::warn;
use crate::utils::{OptimizerResult, PathError, is_recognized_image};

/// Get file size in bytes
pub async fn get_file_size(path: impl AsRef<Path>) -> OptimizerResult<u64> {
    Ok(fs::metadata(path.as_ref()).await?.len())
}

/// Check that `path` is a regular file, following symlinks.
pub async fn is_regular_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref())
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Check if directory exists
pub async fn dir_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref())
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// Creates `path` and any missing parents. Succeeds if it already exists.
pub async fn create_dir_all(path: impl AsRef<Path>) -> OptimizerResult<()> {
    fs::create_dir_all(path.as_ref()).await?;
    Ok(())
}

/// Opens `dir` for listing, naming the path when it is missing.
pub async fn read_dir(dir: impl AsRef<Path>) -> OptimizerResult<fs::ReadDir> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).await.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PathError::NotFound(dir.to_path_buf()),
        io::ErrorKind::NotADirectory => PathError::NotDirectory(dir.to_path_buf()),
        _ => PathError::from(e),
    })?;
    Ok(entries)
}

/// Lists the names in `dir` that look like images, in directory order.
///
/// Directories are left out even when their name carries an image suffix.
/// Names that are not valid UTF-8 are skipped with a warning.
pub async fn list_image_names(dir: impl AsRef<Path>) -> OptimizerResult<Vec<String>> {
    let dir = dir.as_ref();
    let mut entries = read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!("Skipping non UTF-8 entry in {}: {:?}", dir.display(), raw);
                continue;
            }
        };

        if !is_recognized_image(&name) {
            continue;
        }

        if fs::metadata(entry.path()).await.map(|m| m.is_dir()).unwrap_or(false) {
            continue;
        }

        names.push(name);
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_only_image_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.png", "b.JPG", "c.jpeg", "d.gif", "e.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("optimized")).unwrap();
        std::fs::create_dir(dir.path().join("folder.png")).unwrap();

        let mut names = list_image_names(dir.path()).await.unwrap();
        names.sort();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.jpeg"]);
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn listing_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(OsStr::from_bytes(b"camisa\xff.png")), b"x").unwrap();
        std::fs::write(dir.path().join("plain.png"), b"x").unwrap();

        assert_eq!(list_image_names(dir.path()).await.unwrap(), vec!["plain.png"]);
    }

    #[tokio::test]
    async fn listing_a_missing_dir_names_it() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = list_image_names(&missing).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Validation error: Path error: File not found: {}", missing.display())
        );
    }

    #[tokio::test]
    async fn create_dir_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("x").join("y").join("optimized");
        create_dir_all(&nested).await.unwrap();
        create_dir_all(&nested).await.unwrap();
        assert!(dir_exists(&nested).await);
    }

    #[tokio::test]
    async fn file_probes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.png");
        std::fs::write(&file, b"x").unwrap();

        assert!(dir_exists(dir.path()).await);
        assert!(!dir_exists(&file).await);
        assert!(!is_regular_file(dir.path().join("missing.png")).await);
        assert!(is_regular_file(&file).await);
        assert!(!is_regular_file(dir.path()).await);
        assert_eq!(get_file_size(&file).await.unwrap(), 1);
    }
}
