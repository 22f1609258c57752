//! Process execution utilities
//!
//! Runs the external packer as a blocking child process. The child is handed
//! its working directory explicitly; the rebuilder's own working directory is
//! never changed.

use crate::error::{RebuilderError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Run a command inside `dir`, inheriting stdout/stderr, blocking until
    /// the child exits. A spawn failure or non-zero exit status is an error.
    #[instrument(skip(self))]
    pub fn run_in_dir(&self, command: &str, args: &[&str], dir: &Path) -> Result<()> {
        let cmd_str = format!("{} {}", command, args.join(" "));

        if self.debug {
            debug!("Running command: {} (in {})", cmd_str, dir.display());
        } else {
            info!("+ {} (in {})", cmd_str, dir.display());
        }

        let status = Command::new(command)
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| RebuilderError::process_with_source(cmd_str.clone(), e))?;

        if !status.success() {
            return Err(RebuilderError::process(cmd_str, status.code()));
        }

        debug!("Command completed successfully");
        Ok(())
    }

    /// Check if a command exists in PATH
    #[instrument(skip(self))]
    pub fn command_exists(&self, command: &str) -> bool {
        let result = Command::new("which")
            .arg(command)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                let exists = status.success();
                debug!("Command '{}' exists: {}", command, exists);
                exists
            }
            Err(e) => {
                debug!("Failed to check if command '{}' exists: {}", command, e);
                false
            }
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}
