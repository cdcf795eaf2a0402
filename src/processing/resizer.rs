//! The resize capability and its subprocess-backed implementation.

use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;
use crate::core::ResizeToolConfig;
use crate::utils::{OptimizerError, OptimizerResult};

/// Produces a copy of `input` at `output` whose largest side is at most
/// `max_dimension` pixels.
///
/// An `Err` carries the diagnostic shown to the user for that file.
pub trait Resizer {
    fn resize(
        &self,
        input: &Path,
        output: &Path,
        max_dimension: u32,
    ) -> impl Future<Output = OptimizerResult<()>> + Send;
}

impl<R: Resizer + ?Sized> Resizer for &R {
    fn resize(
        &self,
        input: &Path,
        output: &Path,
        max_dimension: u32,
    ) -> impl Future<Output = OptimizerResult<()>> + Send {
        (**self).resize(input, output, max_dimension)
    }
}

/// Runs an external tool as `<program> -Z <max> <input> --out <output>`.
///
/// Only the exit status is trusted; the written file is never inspected.
#[derive(Debug, Clone)]
pub struct CommandResizer {
    program: String,
}

impl CommandResizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn from_config(config: &ResizeToolConfig) -> Self {
        Self::new(config.program.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Resizer for CommandResizer {
    async fn resize(&self, input: &Path, output: &Path, max_dimension: u32) -> OptimizerResult<()> {
        debug!("Running {} -Z {} on {}", self.program, max_dimension, input.display());

        let output_result = Command::new(&self.program)
            .arg("-Z")
            .arg(max_dimension.to_string())
            .arg(input)
            .arg("--out")
            .arg(output)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| OptimizerError::tool(format!("Failed to run {}: {}", self.program, e)))?;

        if output_result.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output_result.stderr);
        let stderr = stderr.trim();
        let message = if stderr.is_empty() {
            format!("{} exited with {}", self.program, output_result.status)
        } else {
            format!("{} exited with {}: {}", self.program, output_result.status, stderr)
        };
        debug!("{}", message);
        Err(OptimizerError::tool(message))
    }
}
