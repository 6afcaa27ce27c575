//! Identity and page copy of the portfolio owner.

use serde::Serialize;

use crate::models::LinkTarget;

/// An outbound social profile link (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Display label
    pub label: String,
    /// Icon identifier
    pub icon_ref: String,
    /// Destination
    pub target: LinkTarget,
}

/// Owner identity plus the static copy of each page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Full name shown in the hero section
    pub name: String,
    /// Short brand mark shown in the navigation bar (e.g. `<Andy Garcia/>`)
    pub brand: String,
    /// Role headline below the name
    pub role: String,
    /// Greeting badge above the name
    pub greeting: String,
    /// One-paragraph introduction in the hero section
    pub intro: String,
    /// Portrait image path
    pub portrait_ref: String,
    /// Title on the portrait card
    pub card_title: String,
    /// Caption on the portrait card
    pub card_caption: String,
    /// Paragraphs of the "about" section
    pub about: Vec<String>,
    /// Heading above the skills tabs
    pub stack_heading: String,
    /// Heading of the projects section
    pub projects_heading: String,
    /// Text of the contact section
    pub contact_blurb: String,
    /// Label of the contact call-to-action
    pub contact_label: String,
    /// The single fixed contact destination
    pub contact: LinkTarget,
    /// Social profile links
    pub socials: Vec<SocialLink>,
    /// Footer line
    pub footer: String,
}
