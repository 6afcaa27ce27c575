//! Data models for the portfolio content and presentation state.
//!
//! Models are independent of rendering and of the terminal front end.

pub mod appearance;
pub mod category;
pub mod profile;
pub mod project;
pub mod rgb;
pub mod skill;

// Re-export all model types
pub use appearance::AppearanceMode;
pub use category::{Category, UnknownCategory};
pub use profile::{Profile, SocialLink};
pub use project::{LinkTarget, ProjectRecord, UNAVAILABLE_MARKER};
pub use rgb::{is_hex_color, InvalidHexColor, RgbColor};
pub use skill::SkillRecord;
