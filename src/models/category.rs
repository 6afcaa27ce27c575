//! Skill categories used to filter the skills panel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed skill grouping shown as tabs above the skills panel.
///
/// The set is closed: every value a caller can hold is one of the three
/// variants, so selecting a category can never fail at runtime. Strings from
/// content files are checked once, at parse time, through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Client-side technologies
    #[default]
    Frontend,
    /// Server-side technologies
    Backend,
    /// Tooling and workflow
    Tools,
}

/// Error returned when a string does not name a category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}', expected one of: frontend, backend, tools")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 3] = [Category::Frontend, Category::Backend, Category::Tools];

    /// Stable lowercase identifier (`frontend`, `backend`, `tools`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
        }
    }

    /// Label shown on the category tab.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Herramientas",
        }
    }

    /// Position of the category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Frontend => 0,
            Self::Backend => 1,
            Self::Tools => 2,
        }
    }

    /// Next category in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category in tab order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "tools" => Ok(Self::Tools),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_frontend() {
        assert_eq!(Category::default(), Category::Frontend);
    }

    #[test]
    fn test_parse_roundtrip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("design".parse::<Category>().is_err());
        assert!("Frontend".parse::<Category>().is_err()); // case-sensitive
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_next_previous_wrap() {
        assert_eq!(Category::Frontend.next(), Category::Backend);
        assert_eq!(Category::Tools.next(), Category::Frontend);
        assert_eq!(Category::Frontend.previous(), Category::Tools);
        assert_eq!(Category::Backend.previous(), Category::Frontend);
    }

    #[test]
    fn test_tools_label_is_spanish() {
        assert_eq!(Category::Tools.label(), "Herramientas");
        assert_eq!(Category::Frontend.label(), "Frontend");
    }
}
