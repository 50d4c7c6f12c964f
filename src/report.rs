//! Per-batch and per-run results, console summary, and JSON report.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::RenderConfig;
use crate::dimension::Dimension;
use crate::error::RenderError;
use crate::planner::PlacementPlan;
use crate::platform::{Platform, Purpose};

/// One output image that was written.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenImage {
    /// Source file name.
    pub source: String,
    /// Where the output was stored.
    pub output: PathBuf,
    /// Natural size of the source.
    pub source_size: Dimension,
    /// Size of the written image.
    pub output_size: Dimension,
    /// Placement used for feature images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlacementPlan>,
}

/// One (source, size) pair that could not be produced.
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    /// Source file name.
    pub source: String,
    /// Requested feature size, if the failure belongs to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Dimension>,
    /// Stable error kind label.
    pub kind: &'static str,
    /// Human-readable error message.
    pub message: String,
}

impl Failure {
    /// Record a failure from an error.
    #[must_use]
    pub fn new(source: &str, target: Option<Dimension>, err: &RenderError) -> Self {
        Self { source: source.to_string(), target, kind: err.kind(), message: err.to_string() }
    }
}

/// Outcome of one platform/purpose batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Platform processed.
    pub platform: Platform,
    /// Display or feature batch.
    pub purpose: Purpose,
    /// Why the whole batch was skipped, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
    /// Outputs written.
    pub written: Vec<WrittenImage>,
    /// Pairs that failed.
    pub failures: Vec<Failure>,
}

impl BatchReport {
    /// Empty report for a batch about to run.
    #[must_use]
    pub fn new(platform: Platform, purpose: Purpose) -> Self {
        Self { platform, purpose, skipped: None, written: Vec::new(), failures: Vec::new() }
    }
}

/// Outcome of a whole invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// When the run finished.
    pub generated_at: DateTime<Utc>,
    /// Settings the run used.
    pub config: RenderConfig,
    /// Every batch in processing order.
    pub batches: Vec<BatchReport>,
}

impl RunReport {
    /// Number of outputs written for one purpose across platforms.
    #[must_use]
    pub fn written_count(&self, purpose: Purpose) -> usize {
        self.batches.iter().filter(|b| b.purpose == purpose).map(|b| b.written.len()).sum()
    }

    /// Number of outputs written for one platform and purpose.
    #[must_use]
    pub fn written_for(&self, platform: Platform, purpose: Purpose) -> usize {
        self.batches
            .iter()
            .filter(|b| b.platform == platform && b.purpose == purpose)
            .map(|b| b.written.len())
            .sum()
    }

    /// Total failed pairs across all batches.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.batches.iter().map(|b| b.failures.len()).sum()
    }

    /// Human-readable summary lines.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            "Processing Summary:".to_string(),
            format!("  README images generated: {}", self.written_count(Purpose::Display)),
            format!(
                "  Android feature images: {}",
                self.written_for(Platform::Android, Purpose::Feature)
            ),
            format!("  iOS feature images: {}", self.written_for(Platform::Ios, Purpose::Feature)),
            format!("  Failures: {}", self.failure_count()),
        ]
    }

    /// Write the report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_json(&self, path: &Path) -> Result<(), RenderError> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
