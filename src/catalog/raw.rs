//! Unvalidated content as it appears in a content file.
//!
//! The compiled-in content and TOML content files both produce a
//! [`RawContent`], which is turned into records and validated by
//! [`ContentCatalog::from_raw`](super::ContentCatalog::from_raw).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A skill entry before color validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSkill {
    /// Display name
    pub name: String,
    /// Hex color string, must be `#RRGGBB`
    pub color: String,
    /// Icon identifier
    #[serde(default)]
    pub icon: String,
}

impl RawSkill {
    /// Convenience constructor used by the built-in content.
    #[must_use]
    pub fn new(name: &str, color: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// A project entry before link validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProject {
    /// Stable unique identifier
    pub id: u32,
    /// Card title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Technology tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Repository URL, `"#"` or omitted when unavailable
    #[serde(default)]
    pub repo_link: Option<String>,
    /// Demo URL, `"#"` or omitted when unavailable
    #[serde(default)]
    pub demo_link: Option<String>,
    /// Preview image path
    #[serde(default)]
    pub image_ref: String,
}

/// A social link before URL validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSocial {
    /// Display label
    pub label: String,
    /// Icon identifier
    #[serde(default)]
    pub icon: String,
    /// Destination URL
    pub url: String,
}

/// Owner identity and page copy before URL validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    /// Full name
    pub name: String,
    /// Brand mark; defaults to `<name/>`
    #[serde(default)]
    pub brand: Option<String>,
    /// Role headline
    pub role: String,
    /// Greeting badge
    #[serde(default)]
    pub greeting: String,
    /// Hero introduction
    #[serde(default)]
    pub intro: String,
    /// Portrait image path
    #[serde(default)]
    pub portrait: String,
    /// Portrait card title
    #[serde(default)]
    pub card_title: String,
    /// Portrait card caption
    #[serde(default)]
    pub card_caption: String,
    /// About paragraphs
    #[serde(default)]
    pub about: Vec<String>,
    /// Heading above the skills tabs
    #[serde(default = "default_stack_heading")]
    pub stack_heading: String,
    /// Heading of the projects section
    #[serde(default = "default_projects_heading")]
    pub projects_heading: String,
    /// Contact section text
    #[serde(default)]
    pub contact_blurb: String,
    /// Contact call-to-action label
    #[serde(default = "default_contact_label")]
    pub contact_label: String,
    /// Contact destination (usually a `mailto:` URL)
    pub contact: String,
    /// Footer line
    #[serde(default)]
    pub footer: String,
    /// Social links
    #[serde(default)]
    pub socials: Vec<RawSocial>,
}

fn default_stack_heading() -> String {
    "Stack Tecnológico".to_string()
}

fn default_projects_heading() -> String {
    "Proyectos Destacados".to_string()
}

fn default_contact_label() -> String {
    "Enviar Correo".to_string()
}

/// Complete unvalidated content.
///
/// Skills are keyed by category name so that an unknown category in a
/// content file is reported by name instead of as a generic parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContent {
    /// Owner identity and page copy
    pub profile: RawProfile,
    /// Skills grouped by category name
    pub skills: BTreeMap<String, Vec<RawSkill>>,
    /// Projects in display order
    #[serde(default)]
    pub projects: Vec<RawProject>,
}
