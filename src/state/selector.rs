//! Owner of the active skill category cell.

use tracing::{debug, trace};

use crate::models::Category;

/// Holds the active category of the skills panel.
///
/// Starts at [`Category::Frontend`] and only changes through [`select`](Self::select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategorySelector {
    active: Category,
}

impl CategorySelector {
    /// Creates a selector on the startup category (frontend).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active category.
    #[must_use]
    pub const fn get_active(&self) -> Category {
        self.active
    }

    /// Makes `category` active. Returns whether the active value changed;
    /// selecting the active category again is a no-op.
    pub fn select(&mut self, category: Category) -> bool {
        if self.active == category {
            trace!("category {} already active", category);
            return false;
        }
        debug!("category selected: {} -> {}", self.active, category);
        self.active = category;
        true
    }
}
