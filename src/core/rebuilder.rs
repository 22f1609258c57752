//! The sequential rebuild engine
//!
//! Processes configured projects strictly in list order. Each project gets a
//! stale-archive sweep followed by one packer invocation inside the project
//! directory. The first failure of any step aborts the run, leaving every
//! later project untouched.

use crate::{
    config::Config,
    core::archives,
    error::{RebuilderError, Result},
    utils::{fs::FileSystemUtils, process::ProcessRunner},
};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Rebuilder that sweeps stale archives and drives the packer
pub struct PackageRebuilder {
    config: Config,
    process_runner: ProcessRunner,
    fs_utils: FileSystemUtils,
}

/// What happened to a single project
#[derive(Debug)]
pub struct ProjectOutcome {
    /// Project name as configured
    pub name: String,
    /// Resolved project directory
    pub dir: PathBuf,
    /// Stale archives removed before packing
    pub removed: Vec<PathBuf>,
    /// Archives present after packing
    pub produced: Vec<PathBuf>,
}

/// Per-run totals across all processed projects
#[derive(Debug, Default)]
pub struct RebuildSummary {
    /// Outcomes in processing order
    pub projects: Vec<ProjectOutcome>,
}

impl RebuildSummary {
    /// Total stale archives removed
    pub fn archives_removed(&self) -> usize {
        self.projects.iter().map(|p| p.removed.len()).sum()
    }

    /// Total archives present after packing
    pub fn archives_produced(&self) -> usize {
        self.projects.iter().map(|p| p.produced.len()).sum()
    }
}

impl std::fmt::Display for RebuildSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Processed {} project(s): removed {} stale archive(s), {} archive(s) now present",
            self.projects.len(),
            self.archives_removed(),
            self.archives_produced()
        )
    }
}

impl PackageRebuilder {
    /// Create a new rebuilder with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            process_runner: ProcessRunner::new(config.debug),
            fs_utils: FileSystemUtils,
            config,
        }
    }

    /// Resolve a project name, requiring the directory to exist
    fn project_dir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.config.resolve_project(name);
        if !self.fs_utils.is_dir(&dir) {
            return Err(RebuilderError::project(name, dir));
        }
        Ok(dir)
    }

    /// Sweep and repack every configured project, in order
    #[instrument(skip(self))]
    pub fn rebuild_all(&self) -> Result<RebuildSummary> {
        let mut summary = RebuildSummary::default();

        for name in &self.config.projects {
            summary.projects.push(self.rebuild_project(name)?);
        }

        Ok(summary)
    }

    /// Sweep and repack a single project
    #[instrument(skip(self))]
    fn rebuild_project(&self, name: &str) -> Result<ProjectOutcome> {
        info!("Rebuilding {}", name);

        let dir = self.project_dir(name)?;
        let removed = archives::sweep_archives(&self.fs_utils, &dir, &self.config.archive_suffix)?;
        if !removed.is_empty() {
            info!("  Removed {} stale archive(s)", removed.len());
        }

        let (cmd, args) = self.config.packer_cmd();
        let args_str: Vec<&str> = args.iter().map(String::as_str).collect();
        self.process_runner.run_in_dir(&cmd, &args_str, &dir)?;

        let produced = archives::find_archives(&dir, &self.config.archive_suffix)?;
        info!("  {} archive(s) present after packing", produced.len());

        Ok(ProjectOutcome {
            name: name.to_string(),
            dir,
            removed,
            produced,
        })
    }

    /// Sweep stale archives in every configured project without repacking
    #[instrument(skip(self))]
    pub fn clean_all(&self) -> Result<RebuildSummary> {
        let mut summary = RebuildSummary::default();

        for name in &self.config.projects {
            info!("Cleaning {}", name);
            let dir = self.project_dir(name)?;
            let removed =
                archives::sweep_archives(&self.fs_utils, &dir, &self.config.archive_suffix)?;
            summary.projects.push(ProjectOutcome {
                name: name.clone(),
                dir,
                removed,
                produced: Vec::new(),
            });
        }

        Ok(summary)
    }

    /// Read-only listing of every configured project and its archives
    #[instrument(skip(self))]
    pub fn status_all(&self) -> Result<Vec<ProjectOutcome>> {
        let mut outcomes = Vec::new();

        for name in &self.config.projects {
            let dir = self.project_dir(name)?;
            let present = archives::find_archives(&dir, &self.config.archive_suffix)?;
            outcomes.push(ProjectOutcome {
                name: name.clone(),
                dir,
                removed: Vec::new(),
                produced: present,
            });
        }

        Ok(outcomes)
    }
}
