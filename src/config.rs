//! Configuration management for the flavor-config tool.
//!
//! Handles:
//! - Command-line argument parsing
//! - Flavor manifest discovery

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the flavor-config tool
#[derive(Debug, Parser)]
#[command(name = "flavorcfg")]
#[command(about = "Resolve and validate Android product flavor declarations")]
#[command(version)]
pub struct Args {
    /// Explicit flavor manifest to load instead of discovery
    #[arg(long, help = "Path to a flavor manifest TOML file")]
    pub manifest: Option<PathBuf>,

    /// Log level for the tool
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all declared flavors in declaration order
    List,
    /// Resolve a single flavor by name
    Resolve { name: String },
    /// Validate the manifest's integrity invariants
    Check,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Manifest explicitly set via command line
    pub cli_manifest: Option<PathBuf>,
    /// Candidate manifest locations to search, in priority order
    pub search_paths: Vec<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut search_paths = Vec::new();

        // Workspace manifest: ./flavors.toml
        search_paths.push(std::env::current_dir()?.join("flavors.toml"));

        // User config directory: <config>/android-flavor-config/flavors.toml
        if let Some(config_dir) = dirs::config_dir() {
            search_paths.push(config_dir.join("android-flavor-config").join("flavors.toml"));
        }

        Ok(Config {
            cli_manifest: args.manifest.clone(),
            search_paths,
            log_level: args.log_level.clone(),
        })
    }

    /// The manifest path to load: the explicit CLI path if given, otherwise
    /// the first search-path candidate that exists. `None` means the
    /// built-in declaration.
    pub fn effective_manifest(&self) -> Option<PathBuf> {
        if let Some(path) = &self.cli_manifest {
            return Some(path.clone());
        }

        self.search_paths.iter().find(|p| p.exists()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_manifest(manifest: Option<PathBuf>) -> Args {
        Args {
            manifest,
            log_level: "info".to_string(),
            json: false,
            command: Command::List,
        }
    }

    #[test]
    fn test_cli_manifest_takes_priority() {
        let args = args_with_manifest(Some(PathBuf::from("/tmp/custom.toml")));
        let config = Config::from_args(&args).expect("create config");
        assert_eq!(
            config.effective_manifest(),
            Some(PathBuf::from("/tmp/custom.toml"))
        );
    }

    #[test]
    fn test_search_paths_include_workspace_manifest() {
        let args = args_with_manifest(None);
        let config = Config::from_args(&args).expect("create config");
        assert!(config
            .search_paths
            .iter()
            .any(|p| p.ends_with("flavors.toml")));
    }
}
