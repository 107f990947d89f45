//! Report output model for headless scenario runs.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};

/// Report status for a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Final scroll state of one axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisReport {
    pub offset: f32,
    pub max_offset: f32,
    pub thumb_length: f32,
    pub thumb_position: f32,
}

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub steps_run: usize,
    pub elapsed_ms: u64,
    pub x: AxisReport,
    pub y: AxisReport,
}

impl HeadlessReport {
    pub fn passed(steps_run: usize, elapsed_ms: u64) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            steps_run,
            elapsed_ms,
            x: AxisReport::default(),
            y: AxisReport::default(),
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            steps_run: failed_step_index + 1,
            elapsed_ms,
            x: AxisReport::default(),
            y: AxisReport::default(),
        }
    }

    /// Attach the final per-axis state
    pub fn with_axes(mut self, x: AxisReport, y: AxisReport) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_escaping_paths() {
        let report = HeadlessReport::passed(0, 0);
        assert!(report.write_to_path(Path::new("/tmp/report.json")).is_err());
        assert!(report.write_to_path(Path::new("../report.json")).is_err());
    }

    #[test]
    fn test_writer_output_is_json() {
        let report = HeadlessReport::failed("assert_offset", 2, "y: off".to_string(), 40);
        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["failed_step_index"], 2);
        assert_eq!(value["steps_run"], 3);
        assert_eq!(value["assertion"], "assert_offset");
    }
}
