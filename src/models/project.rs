//! Project records and their outbound links.

use serde::Serialize;
use std::fmt;
use url::Url;

/// Placeholder used in content files for a link that does not exist yet.
pub const UNAVAILABLE_MARKER: &str = "#";

/// Destination of an outbound link.
///
/// A project may not have a public demo or repository; the renderer shows
/// [`LinkTarget::Unavailable`] as a placeholder rather than treating it as an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "href", rename_all = "lowercase")]
pub enum LinkTarget {
    /// Absolute URL (https, mailto, ...)
    Url(String),
    /// No destination available
    Unavailable,
}

impl LinkTarget {
    /// Parses a raw link from content.
    ///
    /// `"#"` and blank strings become [`LinkTarget::Unavailable`]; anything
    /// else must be an absolute URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::models::LinkTarget;
    ///
    /// assert_eq!(LinkTarget::parse("#").unwrap(), LinkTarget::Unavailable);
    /// assert!(LinkTarget::parse("https://github.com/AndyGar04").is_ok());
    /// assert!(LinkTarget::parse("not a url").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        let raw = raw.trim();
        if raw.is_empty() || raw == UNAVAILABLE_MARKER {
            return Ok(Self::Unavailable);
        }

        Url::parse(raw)?;
        Ok(Self::Url(raw.to_string()))
    }

    /// Returns the URL, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Unavailable => None,
        }
    }

    /// Returns true for [`LinkTarget::Unavailable`].
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}

/// A featured project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    /// Stable identifier, unique across the catalog
    pub id: u32,
    /// Card title
    pub title: String,
    /// Short description
    pub description: String,
    /// Technology tags in display order
    pub tags: Vec<String>,
    /// Source repository link
    pub repo_link: LinkTarget,
    /// Live demo link
    pub demo_link: LinkTarget,
    /// Preview image path
    pub image_ref: String,
}
