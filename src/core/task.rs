//! Image task definition and creation.

use std::path::{Path, PathBuf};

/// A single resize: one source file and where its copy goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTask {
    /// File name shared by source and destination
    pub name: String,
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Path where the resized image will be written
    pub output_path: PathBuf,
}

impl ImageTask {
    pub fn new(source_dir: &Path, output_dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            input_path: source_dir.join(&name),
            output_path: output_dir.join(&name),
            name,
        }
    }

    /// Builds one task per name, keeping the order of `names`.
    pub fn for_names<I, S>(source_dir: &Path, output_dir: &Path, names: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(|name| Self::new(source_dir, output_dir, name))
            .collect()
    }
}
