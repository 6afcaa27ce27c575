//! Loading the content catalog from a TOML content file.
//!
//! # File Format
//!
//! ```toml
//! [profile]
//! name = "Andy Garcia"
//! role = "Desarrollador Full Stack"
//! contact = "mailto:tuemail@ejemplo.com"
//!
//! [[skills.frontend]]
//! name = "React"
//! color = "#61DAFB"
//! icon = "react"
//!
//! [[projects]]
//! id = 1
//! title = "Plataforma de reservas de canchas - API"
//! repo_link = "https://github.com/AndyGar04/Proyecto-Final-Tup-BackEnd"
//! demo_link = "#"
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use super::{ContentCatalog, RawContent};

/// Parses content from a TOML string and validates it.
pub fn parse_catalog(content: &str) -> Result<ContentCatalog> {
    let raw: RawContent = toml::from_str(content).context("Failed to parse content TOML")?;
    let catalog = ContentCatalog::from_raw(raw).context("Invalid content")?;
    Ok(catalog)
}

/// Reads and validates a content file.
pub fn load_catalog(path: &Path) -> Result<ContentCatalog> {
    info!("Loading content from {}", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;

    parse_catalog(&content).with_context(|| format!("Failed to load content file: {}", path.display()))
}

/// Serializes the raw content to TOML (used to write a starter content file).
pub fn to_toml(raw: &RawContent) -> Result<String> {
    toml::to_string_pretty(raw).context("Failed to serialize content")
}
