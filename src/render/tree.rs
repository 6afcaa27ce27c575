//! The visible output tree produced by the renderer.
//!
//! A `ViewTree` describes what the viewer sees, independent of how it is
//! painted. The terminal front end and the Markdown/JSON exporters all
//! consume the same tree.

use serde::Serialize;

use crate::models::{AppearanceMode, Category, LinkTarget, RgbColor};

/// Navigation anchor identifying a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Anchor {
    /// Implicit top of the page
    #[serde(rename = "top")]
    Top,
    /// Hero section
    #[serde(rename = "inicio")]
    Inicio,
    /// About and skills section
    #[serde(rename = "sobre-mí")]
    SobreMi,
    /// Projects section
    #[serde(rename = "proyectos")]
    Proyectos,
    /// Contact section
    #[serde(rename = "contacto")]
    Contacto,
}

impl Anchor {
    /// Anchors listed in the navigation bar, in order.
    pub const NAV: [Anchor; 4] = [Anchor::Inicio, Anchor::SobreMi, Anchor::Proyectos, Anchor::Contacto];

    /// Section identifier used in `#fragment` links.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Inicio => "inicio",
            Self::SobreMi => "sobre-mí",
            Self::Proyectos => "proyectos",
            Self::Contacto => "contacto",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Inicio => "Inicio",
            Self::SobreMi => "Sobre mí",
            Self::Proyectos => "Proyectos",
            Self::Contacto => "Contacto",
        }
    }
}

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum Href {
    /// In-page section
    Anchor(Anchor),
    /// Outbound destination
    External(String),
    /// Placeholder for a missing destination
    Unavailable,
}

impl From<&LinkTarget> for Href {
    fn from(target: &LinkTarget) -> Self {
        match target {
            LinkTarget::Url(url) => Self::External(url.clone()),
            LinkTarget::Unavailable => Self::Unavailable,
        }
    }
}

/// A rendered link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    /// Visible label
    pub label: String,
    /// Optional icon identifier
    pub icon: Option<String>,
    /// Destination
    pub href: Href,
}

impl LinkView {
    /// Link to an in-page section.
    #[must_use]
    pub fn anchor(label: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            label: label.into(),
            icon: None,
            href: Href::Anchor(anchor),
        }
    }

    /// Outbound link, possibly a placeholder.
    #[must_use]
    pub fn outbound(label: impl Into<String>, icon: impl Into<String>, target: &LinkTarget) -> Self {
        Self {
            label: label.into(),
            icon: Some(icon.into()),
            href: Href::from(target),
        }
    }
}

/// Icon on the theme toggle button.
///
/// Shows the mode the button switches to: a sun while dark, a moon while light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleIcon {
    /// Shown in dark mode
    Sun,
    /// Shown in light mode
    Moon,
}

impl ToggleIcon {
    /// Icon for the given mode.
    #[must_use]
    pub const fn for_mode(mode: AppearanceMode) -> Self {
        match mode {
            AppearanceMode::Dark => Self::Sun,
            AppearanceMode::Light => Self::Moon,
        }
    }

    /// Terminal glyph.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "☀",
            Self::Moon => "☾",
        }
    }
}

/// Fixed navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavBar {
    /// Brand mark
    pub brand: String,
    /// Section links
    pub links: Vec<LinkView>,
    /// Theme toggle icon
    pub toggle: ToggleIcon,
}

/// One category tab above the skills panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    /// Category behind the tab
    pub category: Category,
    /// Tab label
    pub label: String,
    /// Whether this is the active category
    pub active: bool,
}

/// A skill chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillChip {
    /// Skill name
    pub name: String,
    /// Icon tint
    pub color: RgbColor,
    /// Icon identifier
    pub icon: String,
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    /// Project id
    pub id: u32,
    /// Card title
    pub title: String,
    /// Description
    pub description: String,
    /// Technology tags
    pub tags: Vec<String>,
    /// Preview image path
    pub image: String,
    /// Repository link
    pub repo: LinkView,
    /// Demo link
    pub demo: LinkView,
}

/// Content element inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Block {
    /// Small highlighted label
    Badge(String),
    /// Heading (1 = page title)
    Heading {
        /// Heading level, 1-3
        level: u8,
        /// Heading text
        text: String,
    },
    /// Body text
    Paragraph(String),
    /// Image reference
    Image {
        /// Asset path
        src: String,
        /// Alternative text
        alt: String,
    },
    /// Row of links or buttons
    Links(Vec<LinkView>),
    /// Category tab bar
    Tabs(Vec<Tab>),
    /// Skills panel
    Skills(Vec<SkillChip>),
    /// Projects panel
    Projects(Vec<ProjectCard>),
}

/// A page section reachable through an anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section anchor
    pub anchor: Anchor,
    /// Section heading, if any
    pub title: Option<String>,
    /// Section content in order
    pub blocks: Vec<Block>,
}

/// The complete visible page for one (mode, category) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewTree {
    /// Global appearance mode of the page
    pub mode: AppearanceMode,
    /// Navigation bar
    pub nav: NavBar,
    /// Sections in page order
    pub sections: Vec<Section>,
    /// Footer line
    pub footer: String,
}

impl ViewTree {
    /// Returns the section for an anchor.
    #[must_use]
    pub fn section(&self, anchor: Anchor) -> Option<&Section> {
        self.sections.iter().find(|s| s.anchor == anchor)
    }

    /// Returns the chips of the skills panel.
    #[must_use]
    pub fn skills(&self) -> &[SkillChip] {
        self.blocks()
            .find_map(|block| match block {
                Block::Skills(chips) => Some(chips.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Returns the cards of the projects panel.
    #[must_use]
    pub fn projects(&self) -> &[ProjectCard] {
        self.blocks()
            .find_map(|block| match block {
                Block::Projects(cards) => Some(cards.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Returns the category whose tab is marked active.
    #[must_use]
    pub fn active_tab(&self) -> Option<Category> {
        self.blocks().find_map(|block| match block {
            Block::Tabs(tabs) => tabs.iter().find(|t| t.active).map(|t| t.category),
            _ => None,
        })
    }

    /// Serializes the tree as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|s| s.blocks.iter())
    }
}
