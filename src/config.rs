//! Configuration management for the package rebuilder
//!
//! Combines the on-disk project manifest with command-line overrides and
//! provides validation.

use crate::{cli::Args, error::RebuilderError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_archive_suffix() -> String {
    ".nupkg".to_string()
}

/// On-disk manifest (TOML) describing the projects to rebuild
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Project list and archive settings
    pub rebuild: RebuildSection,
    /// Packer invocation settings
    #[serde(default)]
    pub packer: PackerConfig,
}

/// The `[rebuild]` section of the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebuildSection {
    /// Project directory names, in processing order
    pub projects: Vec<String>,
    /// File-name suffix identifying stale package archives
    #[serde(default = "default_archive_suffix")]
    pub archive_suffix: String,
}

/// The `[packer]` section of the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackerConfig {
    /// External packaging command
    pub command: String,
    /// Fixed arguments passed to the command
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            command: "nuget".to_string(),
            args: vec!["pack".to_string()],
        }
    }
}

impl Manifest {
    /// Load a manifest from a TOML file
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, RebuilderError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| RebuilderError::file_system("read", path.to_path_buf(), e))?;
        toml::from_str(&text).map_err(|e| {
            RebuilderError::config_with_source(
                format!("Invalid manifest {}", path.display()),
                e,
            )
        })
    }
}

/// Main runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Directory against which project names are resolved
    pub base_dir: PathBuf,
    /// Project directory names, in processing order
    pub projects: Vec<String>,
    /// File-name suffix identifying stale package archives
    pub archive_suffix: String,
    /// Packer invocation settings
    pub packer: PackerConfig,
    /// Optional run-report destination
    pub report_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command line arguments, layered over the
    /// manifest when one is present.
    ///
    /// Project names resolve against the manifest's own directory, so a run
    /// behaves the same no matter where the tool is invoked from. Without a
    /// manifest, projects must come from the command line and resolve
    /// against `--base-dir` (or the current directory).
    pub fn from_args(args: &Args) -> Result<Self, RebuilderError> {
        let cli_projects = args.command.projects();

        let mut config = if args.config.exists() {
            let manifest_path = std::fs::canonicalize(&args.config).map_err(|e| {
                RebuilderError::file_system("canonicalize", args.config.clone(), e)
            })?;
            let manifest = Manifest::load_from_path(&manifest_path)?;
            let base_dir = manifest_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            Self {
                debug: args.debug,
                base_dir,
                projects: manifest.rebuild.projects,
                archive_suffix: manifest.rebuild.archive_suffix,
                packer: manifest.packer,
                report_file: None,
            }
        } else if !cli_projects.is_empty() {
            Self {
                debug: args.debug,
                base_dir: PathBuf::from("."),
                projects: Vec::new(),
                archive_suffix: default_archive_suffix(),
                packer: PackerConfig::default(),
                report_file: None,
            }
        } else {
            return Err(RebuilderError::config(format!(
                "Manifest not found: {} (and no projects given on the command line)",
                args.config.display()
            )));
        };

        if !cli_projects.is_empty() {
            config.projects = cli_projects.to_vec();
        }
        if let Some(base_dir) = &args.base_dir {
            config.base_dir = base_dir.clone();
        }
        config.report_file = args.command.report_file().cloned();

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), RebuilderError> {
        if self.projects.is_empty() {
            return Err(RebuilderError::validation(
                "No projects configured: the manifest's project list is empty",
            ));
        }

        if !self.base_dir.is_dir() {
            return Err(RebuilderError::validation(format!(
                "Base directory not found: {}",
                self.base_dir.display()
            )));
        }

        if !self.archive_suffix.starts_with('.') || self.archive_suffix.len() < 2 {
            return Err(RebuilderError::validation(format!(
                "Archive suffix must be a non-empty extension starting with '.': '{}'",
                self.archive_suffix
            )));
        }

        if self.packer.command.is_empty() {
            return Err(RebuilderError::validation("Packer command is empty"));
        }

        Ok(())
    }

    /// Resolve a project name to its directory under the base directory
    pub fn resolve_project(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Get the packer command with its fixed arguments
    pub fn packer_cmd(&self) -> (String, Vec<String>) {
        (self.packer.command.clone(), self.packer.args.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("rebuild.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_manifest_full() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_manifest(
            &temp_dir,
            r#"
[rebuild]
projects = ["core", "core-mongo"]
archive_suffix = ".pkg"

[packer]
command = "pack-tool"
args = ["--quiet"]
"#,
        );

        let manifest = Manifest::load_from_path(&path).unwrap();
        assert_eq!(manifest.rebuild.projects, vec!["core", "core-mongo"]);
        assert_eq!(manifest.rebuild.archive_suffix, ".pkg");
        assert_eq!(manifest.packer.command, "pack-tool");
        assert_eq!(manifest.packer.args, vec!["--quiet"]);
    }

    #[test]
    fn test_manifest_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_manifest(
            &temp_dir,
            r#"
[rebuild]
projects = ["core"]
"#,
        );

        let manifest = Manifest::load_from_path(&path).unwrap();
        assert_eq!(manifest.rebuild.archive_suffix, ".nupkg");
        assert_eq!(manifest.packer.command, "nuget");
        assert_eq!(manifest.packer.args, vec!["pack"]);
    }

    #[test]
    fn test_manifest_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_manifest(&temp_dir, "rebuild = nonsense");

        let result = Manifest::load_from_path(&path);
        assert!(matches!(result, Err(RebuilderError::Config { .. })));
    }

    #[test]
    fn test_manifest_missing_file() {
        let result = Manifest::load_from_path("does/not/exist.toml");
        assert!(matches!(result, Err(RebuilderError::FileSystem { .. })));
    }

    fn base_config(temp_dir: &TempDir) -> Config {
        Config {
            debug: false,
            base_dir: temp_dir.path().to_path_buf(),
            projects: vec!["core".to_string()],
            archive_suffix: ".nupkg".to_string(),
            packer: PackerConfig::default(),
            report_file: None,
        }
    }

    #[test]
    fn test_validate_ok() {
        let temp_dir = TempDir::new().unwrap();
        let config = base_config(&temp_dir);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_projects() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = base_config(&temp_dir);
        config.projects.clear();
        assert!(matches!(
            config.validate(),
            Err(RebuilderError::Validation { .. })
        ));
    }

    #[test]
    fn test_validate_missing_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = base_config(&temp_dir);
        config.base_dir = temp_dir.path().join("nope");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = base_config(&temp_dir);

        config.archive_suffix = "nupkg".to_string();
        assert!(config.validate().is_err());

        config.archive_suffix = ".".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_project() {
        let temp_dir = TempDir::new().unwrap();
        let config = base_config(&temp_dir);
        assert_eq!(
            config.resolve_project("core-mongo"),
            temp_dir.path().join("core-mongo")
        );
    }

    #[test]
    fn test_from_args_manifest_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let manifest_path = write_manifest(
            &temp_dir,
            r#"
[rebuild]
projects = ["core"]
"#,
        );
        fs::create_dir(temp_dir.path().join("core")).unwrap();

        let args = Args::try_parse_from([
            "rebuilder",
            "--config",
            manifest_path.to_str().unwrap(),
            "rebuild",
        ])
        .unwrap();
        let config = Config::from_args(&args).unwrap();

        assert_eq!(config.projects, vec!["core"]);
        assert_eq!(
            config.base_dir,
            std::fs::canonicalize(temp_dir.path()).unwrap()
        );
    }

    #[test]
    fn test_from_args_cli_projects_override_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let manifest_path = write_manifest(
            &temp_dir,
            r#"
[rebuild]
projects = ["core", "core-mongo"]
"#,
        );

        let args = Args::try_parse_from([
            "rebuilder",
            "--config",
            manifest_path.to_str().unwrap(),
            "rebuild",
            "core-raven",
        ])
        .unwrap();
        let config = Config::from_args(&args).unwrap();

        assert_eq!(config.projects, vec!["core-raven"]);
    }

    #[test]
    fn test_from_args_no_manifest_no_projects() {
        let args = Args::try_parse_from([
            "rebuilder",
            "--config",
            "does-not-exist.toml",
            "rebuild",
        ])
        .unwrap();
        let result = Config::from_args(&args);
        assert!(matches!(result, Err(RebuilderError::Config { .. })));
    }
}
