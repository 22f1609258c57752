//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Package Rebuilder - regenerates distributable package archives for a set of library projects
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "rebuilder")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to the project manifest
    #[arg(long, global = true, default_value = "rebuild.toml")]
    pub config: PathBuf,

    /// Resolve project names against this directory instead of the manifest's
    #[arg(long = "base-dir", global = true)]
    pub base_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete stale archives and repack every configured project, in order
    Rebuild {
        /// Projects to rebuild instead of the manifest list
        projects: Vec<String>,

        /// Write a run summary to this file after a successful rebuild
        #[arg(long = "report-file")]
        report_file: Option<PathBuf>,
    },

    /// Delete stale archives without invoking the packer
    Clean {
        /// Projects to clean instead of the manifest list
        projects: Vec<String>,
    },

    /// Show configured projects and the archives they currently contain
    List,
}

impl Command {
    /// Positional project overrides, if the subcommand accepts them
    pub fn projects(&self) -> &[String] {
        match self {
            Self::Rebuild { projects, .. } | Self::Clean { projects } => projects,
            Self::List => &[],
        }
    }

    /// Report destination, if the subcommand writes one
    pub fn report_file(&self) -> Option<&PathBuf> {
        match self {
            Self::Rebuild { report_file, .. } => report_file.as_ref(),
            _ => None,
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
