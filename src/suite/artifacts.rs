use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ConsoleError;
use crate::report::report_model::DeviceSummary;
use crate::suite::suite_model::ScenarioResult;

/// Debug record written next to every scenario run.
#[derive(Debug, Serialize)]
pub struct ScenarioMetadata<'a> {
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<&'a DeviceSummary>,
    #[serde(flatten)]
    pub result: &'a ScenarioResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
}

/// Lays out `<dir>/<id>_metadata.json` and
/// `<dir>/screenshots/<id>_failure.png`.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn metadata_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}_metadata.json", sanitize_filename(id)))
    }

    pub fn screenshot_path(&self, id: &str) -> PathBuf {
        self.dir
            .join("screenshots")
            .join(format!("{}_failure.png", sanitize_filename(id)))
    }

    /// Create the screenshot directory and return the target path.
    pub fn prepare_screenshot(&self, id: &str) -> Result<PathBuf, ConsoleError> {
        let path = self.screenshot_path(id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(path)
    }

    pub fn write_metadata(&self, metadata: &ScenarioMetadata<'_>) -> Result<PathBuf, ConsoleError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.metadata_path(&metadata.result.id);
        let json = serde_json::to_string_pretty(metadata)?;
        fs::write(&path, json)?;
        debug!(path = %path.display(), "metadata written");
        Ok(path)
    }

    /// Best-effort variant: failures are logged, never propagated.
    pub fn record(&self, result: &ScenarioResult, device: Option<&DeviceSummary>, screenshot: Option<String>) {
        let metadata = ScenarioMetadata {
            timestamp: Utc::now(),
            device,
            result,
            screenshot,
        };
        if let Err(e) = self.write_metadata(&metadata) {
            warn!(scenario = %result.id, error = %e, "failed to write metadata");
        }
    }
}

/// Replace characters that are unsafe in file names.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
