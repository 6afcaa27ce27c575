//! Theme system for consistent UI colors across dark and light modes.
//!
//! The active theme is owned by [`ThemeSurface`], the surface the view root
//! pushes the global appearance mode into.

use ratatui::style::Color;

use crate::models::AppearanceMode;
use crate::state::ApplyGlobalMode;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, badges and the active tab
    pub accent: Color,
    /// Color for outbound links
    pub link: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text, placeholders and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for bars and elevated elements
    pub surface: Color,

    // State indicators
    /// Active/focused element color
    pub active: Color,
    /// Inactive element color
    pub inactive: Color,
}

impl Theme {
    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            link: Color::LightBlue,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            active: Color::Yellow,
            inactive: Color::Gray,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// Accent colors are darkened to stay readable on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            link: Color::Rgb(0, 90, 180),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),

            active: Color::Rgb(180, 100, 0),
            inactive: Color::Rgb(180, 180, 180),
        }
    }

    /// Theme for an appearance mode.
    #[must_use]
    pub const fn from_mode(mode: AppearanceMode) -> Self {
        match mode {
            AppearanceMode::Dark => Self::dark(),
            AppearanceMode::Light => Self::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(AppearanceMode::default())
    }
}

/// Terminal surface whose palette follows the global appearance mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeSurface {
    /// Palette every widget draws with
    pub theme: Theme,
    /// Mode the palette was built from
    pub mode: AppearanceMode,
}

impl ApplyGlobalMode for ThemeSurface {
    fn apply_global_mode(&mut self, mode: AppearanceMode) {
        self.mode = mode;
        self.theme = Theme::from_mode(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        assert_eq!(theme.primary, Color::Blue);
        // Yellow is unreadable on a white background
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_theme_from_mode() {
        assert_eq!(Theme::from_mode(AppearanceMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(AppearanceMode::Light), Theme::light());
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn test_surface_follows_mode() {
        let mut surface = ThemeSurface::default();
        assert_eq!(surface.mode, AppearanceMode::Dark);

        surface.apply_global_mode(AppearanceMode::Light);
        assert_eq!(surface.theme, Theme::light());

        surface.apply_global_mode(AppearanceMode::Dark);
        assert_eq!(surface.theme, Theme::dark());
    }
}
