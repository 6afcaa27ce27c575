//! Headless rendering of a single frame.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::catalog::ContentCatalog;
use crate::models::{AppearanceMode, Category};
use crate::render::{to_markdown, ViewTree};
use crate::state::{Headless, Intent, Presenter};

/// Output format for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Markdown document
    #[default]
    Markdown,
    /// The view tree as JSON
    Json,
}

/// Render one frame of the page
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Appearance mode (dark or light)
    #[arg(long, value_name = "MODE", default_value = "dark")]
    pub mode: AppearanceMode,

    /// Active skill category (frontend, backend or tools)
    #[arg(long, value_name = "CATEGORY", default_value = "frontend")]
    pub category: Category,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    /// Builds the frame for the requested state.
    ///
    /// The state is reached the same way the terminal UI reaches it: one
    /// presenter turn starting from dark/frontend.
    pub fn frame(&self, catalog: Arc<ContentCatalog>) -> ViewTree {
        let mut presenter = Presenter::new(catalog, Headless);
        let mut intents = vec![Intent::Select(self.category)];
        if self.mode != presenter.mode() {
            intents.push(Intent::ToggleAppearance);
        }
        presenter.dispatch(intents);
        presenter.frame().clone()
    }

    /// Formats the frame.
    pub fn format(&self, frame: &ViewTree) -> Result<String> {
        match self.format {
            OutputFormat::Markdown => Ok(to_markdown(frame)),
            OutputFormat::Json => frame.to_json().context("Failed to serialize frame"),
        }
    }

    /// Execute the render command
    pub fn execute(&self, catalog: Arc<ContentCatalog>) -> Result<()> {
        let frame = self.frame(catalog);
        let output = self.format(&frame)?;

        match &self.output {
            Some(path) => {
                fs::write(path, &output)
                    .with_context(|| format!("Failed to write output: {}", path.display()))?;
                info!("Rendered {} / {} to {}", self.mode, self.category, path.display());
            }
            None => print!("{output}"),
        }
        Ok(())
    }
}
