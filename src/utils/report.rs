//! Run report generation
//!
//! Writes an `.env`-style summary of a successful run for CI consumption.

use crate::{
    core::rebuilder::RebuildSummary,
    error::{RebuilderError, Result},
    utils::fs::FileSystemUtils,
};
use chrono::Utc;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Writes run summaries as environment files
#[derive(Debug)]
pub struct ReportWriter {
    fs_utils: FileSystemUtils,
}

/// Summary of one successful run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Number of projects processed
    pub projects_rebuilt: usize,
    /// Stale archives removed across all projects
    pub archives_removed: usize,
    /// Archives present after packing across all projects
    pub archives_produced: usize,
    /// Completion timestamp in RFC3339 format
    pub finished_at: String,
}

impl ReportWriter {
    /// Create a new report writer
    pub fn new() -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Write a run report for `summary` to `output_file`
    #[instrument(skip(self, summary))]
    pub fn write<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        summary: &RebuildSummary,
        output_file: P,
    ) -> Result<RunReport> {
        let output_file = output_file.as_ref();

        let report = RunReport {
            projects_rebuilt: summary.projects.len(),
            archives_removed: summary.archives_removed(),
            archives_produced: summary.archives_produced(),
            finished_at: Utc::now().to_rfc3339(),
        };

        let content = Self::format_as_env_file(&report);
        self.fs_utils
            .write_file(output_file, content.as_bytes())
            .map_err(|e| RebuilderError::file_system("write", output_file.to_path_buf(), e))?;

        info!("Run report written to: {}", output_file.display());
        debug!("Run report: {:?}", report);

        Ok(report)
    }

    /// Format a run report as environment file (.env format)
    fn format_as_env_file(report: &RunReport) -> String {
        format!(
            r#"PROJECTS_REBUILT={}
ARCHIVES_REMOVED={}
ARCHIVES_PRODUCED={}
FINISHED_AT={}
"#,
            report.projects_rebuilt,
            report.archives_removed,
            report.archives_produced,
            report.finished_at
        )
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}
