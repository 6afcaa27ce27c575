//! Writes a default config file, optionally with a starter content file.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::builtin;
use crate::catalog::file::to_toml;
use crate::config::Config;

/// Write a default config file
#[derive(Args, Debug, Clone, Default)]
pub struct InitConfigArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Also write the built-in content as an editable TOML file and point
    /// the config at it
    #[arg(long, value_name = "FILE")]
    pub write_content: Option<PathBuf>,
}

impl InitConfigArgs {
    /// Execute the init-config command
    pub fn execute(&self, config_path: &Path) -> Result<()> {
        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Config file already exists: {} (use --force to overwrite)",
                config_path.display()
            );
        }

        let mut config = Config::new();

        if let Some(content_path) = &self.write_content {
            if content_path.exists() && !self.force {
                anyhow::bail!(
                    "Content file already exists: {} (use --force to overwrite)",
                    content_path.display()
                );
            }
            let toml = to_toml(&builtin::raw_content())?;
            fs::write(content_path, toml)
                .with_context(|| format!("Failed to write content file: {}", content_path.display()))?;
            println!("✓ Wrote content to {}", content_path.display());
            config.content.catalog = Some(content_path.clone());
        }

        config.save_to(config_path)?;
        println!("✓ Wrote config to {}", config_path.display());
        Ok(())
    }
}
