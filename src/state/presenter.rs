//! Root controller wiring the state cells, the view root and the renderer.

use std::sync::Arc;

use tracing::{debug, trace};

use super::{AppearanceController, ApplyGlobalMode, CategorySelector, ViewRoot};
use crate::catalog::ContentCatalog;
use crate::models::{AppearanceMode, Category};
use crate::render::{render, ViewTree};

/// A state change requested by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Flip between light and dark
    ToggleAppearance,
    /// Make a skill category active
    Select(Category),
}

/// Owns the presentation state and the current frame.
///
/// All intents of one processing turn go through a single
/// [`dispatch`](Self::dispatch) call, which renders at most once. Intermediate
/// states inside a turn are never rendered.
#[derive(Debug)]
pub struct Presenter<S> {
    catalog: Arc<ContentCatalog>,
    appearance: AppearanceController,
    selector: CategorySelector,
    view_root: ViewRoot<S>,
    frame: ViewTree,
    rendered: (AppearanceMode, Category),
    render_passes: usize,
}

impl<S: ApplyGlobalMode> Presenter<S> {
    /// Starts at dark/frontend, applies the mode to `surface` and renders
    /// the first frame.
    pub fn new(catalog: Arc<ContentCatalog>, surface: S) -> Self {
        let appearance = AppearanceController::new();
        let selector = CategorySelector::new();
        let mode = appearance.get_mode();
        let category = selector.get_active();

        let view_root = ViewRoot::new(surface, mode);
        let frame = render(mode, category, &catalog);

        Self {
            catalog,
            appearance,
            selector,
            view_root,
            frame,
            rendered: (mode, category),
            render_passes: 1,
        }
    }

    /// Applies the intents of one turn in order, then re-renders if the
    /// visible state changed. Returns whether a new frame was produced.
    pub fn dispatch(&mut self, intents: impl IntoIterator<Item = Intent>) -> bool {
        for intent in intents {
            match intent {
                Intent::ToggleAppearance => {
                    self.appearance.toggle();
                    for change in self.appearance.drain_notifications() {
                        self.view_root.apply(change.current);
                    }
                }
                Intent::Select(category) => {
                    self.selector.select(category);
                }
            }
        }

        let state = (self.appearance.get_mode(), self.selector.get_active());
        if state == self.rendered {
            trace!("turn left state unchanged, skipping render");
            return false;
        }

        self.frame = render(state.0, state.1, &self.catalog);
        self.rendered = state;
        self.render_passes += 1;
        debug!("render pass {} ({}, {})", self.render_passes, state.0, state.1);
        true
    }

    /// The most recently rendered frame.
    #[must_use]
    pub const fn frame(&self) -> &ViewTree {
        &self.frame
    }

    /// Current appearance mode.
    #[must_use]
    pub const fn mode(&self) -> AppearanceMode {
        self.appearance.get_mode()
    }

    /// Current skill category.
    #[must_use]
    pub const fn active_category(&self) -> Category {
        self.selector.get_active()
    }

    /// Number of frames rendered so far, including the first.
    #[must_use]
    pub const fn render_passes(&self) -> usize {
        self.render_passes
    }

    /// The rendering surface behind the view root.
    #[must_use]
    pub const fn surface(&self) -> &S {
        self.view_root.surface()
    }

    /// Mode last pushed to the surface.
    #[must_use]
    pub const fn applied_mode(&self) -> AppearanceMode {
        self.view_root.applied()
    }

    /// The content being presented.
    #[must_use]
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }
}
