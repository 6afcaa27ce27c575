//! Skill records shown in the skills panel.

use serde::Serialize;

use crate::models::RgbColor;

/// A single technology chip in the skills panel.
///
/// Names are unique within their category; the catalog enforces this at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRecord {
    /// Display name (e.g., "React")
    pub name: String,
    /// Brand color used to tint the icon
    pub display_color: RgbColor,
    /// Icon identifier (e.g., "react", "postgresql")
    pub icon_ref: String,
}

impl SkillRecord {
    /// Creates a skill record from an already-validated color.
    #[must_use]
    pub fn new(name: impl Into<String>, display_color: RgbColor, icon_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_color,
            icon_ref: icon_ref.into(),
        }
    }
}
