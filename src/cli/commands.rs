//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::rebuilder::PackageRebuilder,
    utils::{process::ProcessRunner, report::ReportWriter},
};
use anyhow::Context;
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Rebuild { .. } => execute_rebuild_command(config),
        Command::Clean { .. } => execute_clean_command(config),
        Command::List => execute_list_command(config),
    }
}

/// Execute the rebuild command
#[instrument(skip(config))]
fn execute_rebuild_command(config: &Config) -> anyhow::Result<()> {
    info!("Rebuilding {} project(s)...", config.projects.len());

    let rebuilder = PackageRebuilder::new(config.clone());
    let summary = rebuilder
        .rebuild_all()
        .context("Failed to rebuild package archives")?;

    info!("{}", summary);

    if let Some(report_file) = &config.report_file {
        let writer = ReportWriter::new();
        writer
            .write(&summary, report_file)
            .context("Failed to write run report")?;
    }

    Ok(())
}

/// Execute the clean command
#[instrument(skip(config))]
fn execute_clean_command(config: &Config) -> anyhow::Result<()> {
    info!("Cleaning {} project(s)...", config.projects.len());

    let rebuilder = PackageRebuilder::new(config.clone());
    let summary = rebuilder
        .clean_all()
        .context("Failed to clean stale archives")?;

    info!(
        "Cleaned {} project(s): removed {} stale archive(s)",
        summary.projects.len(),
        summary.archives_removed()
    );

    Ok(())
}

/// Execute the list command
#[instrument(skip(config))]
fn execute_list_command(config: &Config) -> anyhow::Result<()> {
    let rebuilder = PackageRebuilder::new(config.clone());
    let outcomes = rebuilder
        .status_all()
        .context("Failed to list project archives")?;

    let (packer_cmd, _) = config.packer_cmd();
    let packer_found = ProcessRunner::new(config.debug).command_exists(&packer_cmd);
    info!(
        "Packer: {} ({})",
        packer_cmd,
        if packer_found {
            "found in PATH"
        } else {
            "not found in PATH"
        }
    );

    for outcome in &outcomes {
        info!(
            "{} ({}): {} archive(s)",
            outcome.name,
            outcome.dir.display(),
            outcome.produced.len()
        );
        for archive in &outcome.produced {
            info!("  {}", archive.display());
        }
    }

    Ok(())
}
