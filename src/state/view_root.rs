//! Global appearance flag shared by every rendered element.

use crate::models::AppearanceMode;

/// Side effect that applies an appearance mode to the rendering surface.
///
/// Injected into [`ViewRoot`] so the presentation core runs without any
/// rendering environment. Closures taking an [`AppearanceMode`] implement it.
pub trait ApplyGlobalMode {
    /// Makes `mode` the active styling mode of the surface.
    fn apply_global_mode(&mut self, mode: AppearanceMode);
}

impl<F> ApplyGlobalMode for F
where
    F: FnMut(AppearanceMode),
{
    fn apply_global_mode(&mut self, mode: AppearanceMode) {
        self(mode);
    }
}

/// Surface that ignores mode changes (headless rendering, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl ApplyGlobalMode for Headless {
    fn apply_global_mode(&mut self, _mode: AppearanceMode) {}
}

/// Synchronizes the single global appearance flag.
///
/// The flag is one `AppearanceMode` value, so exactly one of light and dark
/// is active at any time. `apply` runs synchronously and finishes before the
/// caller paints the next frame.
#[derive(Debug)]
pub struct ViewRoot<S> {
    surface: S,
    applied: AppearanceMode,
    applications: usize,
}

impl<S: ApplyGlobalMode> ViewRoot<S> {
    /// Wraps `surface` and applies the initial mode immediately.
    pub fn new(mut surface: S, initial: AppearanceMode) -> Self {
        surface.apply_global_mode(initial);
        Self {
            surface,
            applied: initial,
            applications: 1,
        }
    }

    /// Applies `mode` to the surface.
    pub fn apply(&mut self, mode: AppearanceMode) {
        self.surface.apply_global_mode(mode);
        self.applied = mode;
        self.applications += 1;
    }

    /// Mode most recently applied.
    #[must_use]
    pub const fn applied(&self) -> AppearanceMode {
        self.applied
    }

    /// Number of times a mode was pushed to the surface, including the initial one.
    #[must_use]
    pub const fn applications(&self) -> usize {
        self.applications
    }

    /// Read access to the wrapped surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_initial_mode() {
        let mut seen = Vec::new();
        {
            let root = ViewRoot::new(|mode: AppearanceMode| seen.push(mode), AppearanceMode::Dark);
            assert_eq!(root.applied(), AppearanceMode::Dark);
            assert_eq!(root.applications(), 1);
        }
        assert_eq!(seen, vec![AppearanceMode::Dark]);
    }

    #[test]
    fn test_apply_forwards_to_surface() {
        let mut seen = Vec::new();
        {
            let mut root = ViewRoot::new(|mode: AppearanceMode| seen.push(mode), AppearanceMode::Dark);
            root.apply(AppearanceMode::Light);
            root.apply(AppearanceMode::Dark);
            assert_eq!(root.applications(), 3);
        }
        assert_eq!(
            seen,
            vec![AppearanceMode::Dark, AppearanceMode::Light, AppearanceMode::Dark]
        );
    }

    #[test]
    fn test_headless_surface() {
        let mut root = ViewRoot::new(Headless, AppearanceMode::Dark);
        root.apply(AppearanceMode::Light);
        assert_eq!(root.applied(), AppearanceMode::Light);
    }
}
