//! RGB color handling with strict hex parsing.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Pattern every display color must match.
const HEX_PATTERN: &str = r"^#[0-9A-Fa-f]{6}$";

fn hex_regex() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| Regex::new(HEX_PATTERN).expect("hex color pattern is valid"))
}

/// Returns true if `value` is a `#RRGGBB` hex color string.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    hex_regex().is_match(value)
}

/// Error returned when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color '{0}', expected #RRGGBB")]
pub struct InvalidHexColor(pub String);

/// RGB color value with hex string representation.
///
/// Only the exact `#RRGGBB` form is accepted (hex digits in either case).
/// A value of this type is therefore always a valid display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a `#RRGGBB` hex string.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#61DAFB").unwrap();
    /// assert_eq!(color, RgbColor::new(0x61, 0xDA, 0xFB));
    ///
    /// assert!(RgbColor::from_hex("61DAFB").is_err());
    /// assert!(RgbColor::from_hex("#FFF").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, InvalidHexColor> {
        if !is_hex_color(hex) {
            return Err(InvalidHexColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| InvalidHexColor(hex.to_string()))
        };

        Ok(Self::new(channel(1..3)?, channel(3..5)?, channel(5..7)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = InvalidHexColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for RgbColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(RgbColor::from_hex("#FF0000").unwrap(), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hex("#00ff00").unwrap(), RgbColor::new(0, 255, 0));
        assert_eq!(RgbColor::from_hex("#000000").unwrap(), RgbColor::new(0, 0, 0));
    }

    #[test]
    fn test_from_hex_rejects_loose_forms() {
        assert!(RgbColor::from_hex("FF0000").is_err()); // missing '#'
        assert!(RgbColor::from_hex("#FFF").is_err()); // short form
        assert!(RgbColor::from_hex("#FF00000").is_err()); // too long
        assert!(RgbColor::from_hex("#GG0000").is_err()); // not hex
        assert!(RgbColor::from_hex(" #FF0000").is_err()); // whitespace
        assert!(RgbColor::from_hex("").is_err());
    }

    #[test]
    fn test_hex_pattern_compiles() {
        assert!(Regex::new(HEX_PATTERN).is_ok());
        assert!(is_hex_color("#ABCDEF"));
        assert!(!is_hex_color("#ABCDEF\n"));
        assert!(!is_hex_color("#ABCDE"));
    }

    #[test]
    fn test_to_hex_uppercase() {
        let color = RgbColor::from_hex("#61dafb").unwrap();
        assert_eq!(color.to_hex(), "#61DAFB");
        assert!(is_hex_color(&color.to_hex()));
    }

    #[test]
    fn test_error_names_value() {
        let err = RgbColor::from_hex("#12345").unwrap_err();
        assert!(err.to_string().contains("#12345"));
    }

    #[test]
    fn test_serde_as_string() {
        let color = RgbColor::new(0x31, 0x78, 0xC6);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#3178C6\"");

        let back: RgbColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);

        assert!(serde_json::from_str::<RgbColor>("\"3178C6\"").is_err());
    }
}
