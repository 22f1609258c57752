//! # Package Rebuilder
//!
//! A reliable tool for regenerating distributable package archives for a set
//! of library projects. For each configured project directory, in order, the
//! rebuilder deletes stale package archives and invokes an external packaging
//! tool to produce fresh ones.
//!
//! ## Features
//!
//! - Project list externalized into a TOML manifest
//! - Project paths resolved against the manifest's directory, independent of
//!   the invocation working directory
//! - Shallow suffix-based stale-archive sweep before every repack
//! - Fail-fast sequential processing with structured errors
//! - Optional `.env`-style run report for CI
//!
//! ## Example
//!
//! ```no_run
//! use package_rebuilder::{config::Config, core::PackageRebuilder};
//!
//! # fn run(config: Config) -> anyhow::Result<()> {
//! let rebuilder = PackageRebuilder::new(config);
//! let summary = rebuilder.rebuild_all()?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
