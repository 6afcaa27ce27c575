//! Errors raised while building the content catalog.

use thiserror::Error;

use crate::models::{Category, UnknownCategory};

/// A content record failed validation.
///
/// Catalog construction is the only fallible step of the presentation
/// engine. Every variant is fatal: content is assembled at startup and is
/// never fetched again, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    /// A skill color is not `#RRGGBB`
    #[error("skill '{skill}' in category '{category}' has invalid display color '{value}', expected #RRGGBB")]
    InvalidColor {
        category: Category,
        skill: String,
        value: String,
    },

    /// Two projects share an id
    #[error("duplicate project id {id}: '{first}' and '{second}'")]
    DuplicateProjectId {
        id: u32,
        first: String,
        second: String,
    },

    /// A skill name appears twice in one category
    #[error("duplicate skill '{name}' in category '{category}'")]
    DuplicateSkill { category: Category, name: String },

    /// A category has no skills to show
    #[error("category '{0}' has no skills")]
    EmptyCategory(Category),

    /// Content names a category outside the fixed set
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    /// A project title is blank
    #[error("project {id} has an empty title")]
    EmptyTitle { id: u32 },

    /// A link is neither a URL nor the placeholder marker
    #[error("invalid {field} link '{value}' for {owner}: {reason}")]
    InvalidLink {
        owner: String,
        field: &'static str,
        value: String,
        reason: String,
    },
}
