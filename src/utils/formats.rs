/// Image formats picked up by directory listings and the purge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum ImageFormat {
    JPEG,
    PNG,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 2] = [Self::PNG, Self::JPEG];

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
        }
    }

    /// Format whose extension `name` ends with, ignoring case.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.into_iter().find(|format| {
            format
                .extensions()
                .iter()
                .any(|ext| lower.ends_with(&format!(".{ext}")))
        })
    }
}

/// Whether `name` ends in `.png`, `.jpg` or `.jpeg`, ignoring case.
///
/// This is a plain suffix test on the lowercased name, so a file called
/// just `.png` counts as an image too.
pub fn is_recognized_image(name: &str) -> bool {
    ImageFormat::from_file_name(name).is_some()
}
