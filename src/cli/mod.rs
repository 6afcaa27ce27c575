//! Command-line interface.
//!
//! Running `folio` without a subcommand opens the terminal UI. The
//! subcommands give headless, scriptable access to rendering and content
//! validation.

pub mod check;
pub mod init_config;
pub mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::branding::{APP_BINARY_NAME, APP_DESCRIPTION};
use crate::catalog::{load_catalog, ContentCatalog};
use crate::config::Config;

pub use check::CheckArgs;
pub use init_config::InitConfigArgs;
pub use render::{OutputFormat, RenderArgs};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about = APP_DESCRIPTION, long_about = None)]
pub struct Cli {
    /// TOML content file (overrides the config's content path)
    #[arg(long, global = true, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Append logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Headless command; the terminal UI runs when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Headless commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one frame as Markdown or JSON
    Render(RenderArgs),
    /// Validate content and report the first problem
    Check(CheckArgs),
    /// Write a default config file
    InitConfig(InitConfigArgs),
}

impl Cli {
    /// Path of the config file this run uses.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path(),
        }
    }

    /// Loads the config file, or defaults when it doesn't exist.
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path()?;
        Config::load_from(&path).with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Content file for this run: `--content` wins over the config.
    #[must_use]
    pub fn content_path(&self, config: &Config) -> Option<PathBuf> {
        self.content
            .clone()
            .or_else(|| config.content.catalog.clone())
    }

    /// Log file for this run: `--log-file` wins over the config.
    #[must_use]
    pub fn log_file(&self, config: &Config) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| config.logging.file.clone())
    }
}

/// Loads the content file, or the compiled-in content when `path` is `None`.
pub fn load_content(path: Option<&Path>) -> Result<ContentCatalog> {
    match path {
        Some(path) => load_catalog(path),
        None => ContentCatalog::builtin().context("Built-in content is invalid"),
    }
}
