//! Binary appearance mode shared by every rendered element.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme applied globally (light or dark).
///
/// There is no "unset" value; the application starts in [`AppearanceMode::Dark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    /// Dark text on a light background
    Light,
    /// Light text on a dark background
    #[default]
    Dark,
}

impl AppearanceMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase identifier (`light` or `dark`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppearanceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown appearance mode '{other}', expected light or dark")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(AppearanceMode::default(), AppearanceMode::Dark);
    }

    #[test]
    fn test_flipped() {
        assert_eq!(AppearanceMode::Dark.flipped(), AppearanceMode::Light);
        assert_eq!(AppearanceMode::Light.flipped(), AppearanceMode::Dark);
        assert_eq!(AppearanceMode::Dark.flipped().flipped(), AppearanceMode::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<AppearanceMode>(), Ok(AppearanceMode::Dark));
        assert_eq!("light".parse::<AppearanceMode>(), Ok(AppearanceMode::Light));
        assert!("auto".parse::<AppearanceMode>().is_err());
    }
}
