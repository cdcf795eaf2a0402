//! Job and tool configuration.
//!
//! Every default mirrors the fixed photo library layout the tool was written
//! for. A JSON file named by `PHOTO_OPTIMIZER_CONFIG` can override any field;
//! fields it leaves out keep their defaults.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::utils::{OptimizerError, OptimizerResult, ValidationError};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "PHOTO_OPTIMIZER_CONFIG";

pub const DEFAULT_PHOTOS_ROOT: &str = "/Users/emitripp/Downloads/Legado san josé-1/fotos";
pub const OPTIMIZED_DIR_NAME: &str = "optimized";
pub const PLAYERAS_DIR_NAME: &str = "playeras";

pub const DEFAULT_ACCESSORIES: [&str; 8] = [
    "gorra1 frente.png",
    "Mochila.png",
    "Maleta.png",
    "gorra2.png",
    "gorra3.png",
    "modelo gorra1.png",
    "modelo2 gorra1.png",
    "bolsas.png",
];

/// How the external resize tool is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizeToolConfig {
    /// Executable name or path
    pub program: String,
    /// Largest allowed width or height in pixels
    pub max_dimension: u32,
}

impl Default for ResizeToolConfig {
    fn default() -> Self {
        Self {
            program: "sips".to_string(),
            max_dimension: 800,
        }
    }
}

/// A resize pass: where originals live, where copies go, and which files.
///
/// Without `file_list` every image in `source_dir` is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchJob {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub file_list: Option<Vec<String>>,
}

/// A purge pass over `directory` that never touches `protected_subdir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeJob {
    pub directory: PathBuf,
    pub protected_subdir: PathBuf,
}

/// Top-level configuration for both binaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Root photo directory; accessories live directly inside it
    pub photos_root: PathBuf,
    /// Accessory file names resized from the photo root
    pub accessories: Vec<String>,
    pub tool: ResizeToolConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            photos_root: PathBuf::from(DEFAULT_PHOTOS_ROOT),
            accessories: DEFAULT_ACCESSORIES.iter().map(|s| s.to_string()).collect(),
            tool: ResizeToolConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the file named by [`CONFIG_ENV_VAR`], or the defaults when unset.
    pub async fn load() -> OptimizerResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from(Path::new(&path)).await,
            None => {
                debug!("{} not set, using built-in defaults", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub async fn load_from(path: &Path) -> OptimizerResult<Self> {
        debug!("Loading configuration from {}", path.display());
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            OptimizerError::config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> OptimizerResult<()> {
        if self.tool.program.trim().is_empty() {
            return Err(ValidationError::settings("Resize program cannot be empty").into());
        }
        if self.tool.max_dimension == 0 {
            return Err(ValidationError::settings("Max dimension cannot be 0").into());
        }
        Ok(())
    }

    /// Explicit accessory list from the photo root into `<root>/optimized`.
    pub fn accessories_job(&self) -> BatchJob {
        BatchJob {
            source_dir: self.photos_root.clone(),
            output_dir: self.photos_root.join(OPTIMIZED_DIR_NAME),
            file_list: Some(self.accessories.clone()),
        }
    }

    /// Every image in `<root>/playeras` into `<root>/playeras/optimized`.
    pub fn playeras_job(&self) -> BatchJob {
        let source_dir = self.playeras_dir();
        BatchJob {
            output_dir: source_dir.join(OPTIMIZED_DIR_NAME),
            source_dir,
            file_list: None,
        }
    }

    /// Removes the playeras originals, sparing `playeras/optimized`.
    pub fn playeras_purge(&self) -> PurgeJob {
        let directory = self.playeras_dir();
        PurgeJob {
            protected_subdir: directory.join(OPTIMIZED_DIR_NAME),
            directory,
        }
    }

    fn playeras_dir(&self) -> PathBuf {
        self.photos_root.join(PLAYERAS_DIR_NAME)
    }
}
