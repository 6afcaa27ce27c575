//! Centralized shortcut and action system.
//!
//! Maps key events to actions per context and provides the help text for
//! each binding, so the help overlay always lists what the event loop does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::models::Category;
use crate::render::Anchor;
use crate::state::Intent;

/// Context for the page view.
pub const MAIN_CONTEXT: &str = "main";
/// Context while the help overlay is open.
pub const HELP_CONTEXT: &str = "help";

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === PRESENTATION ===
    /// Flip light and dark
    ToggleTheme,
    /// Make a category active
    SelectCategory(Category),
    /// Activate the category after the current one
    NextCategory,
    /// Activate the category before the current one
    PreviousCategory,

    // === NAVIGATION ===
    /// Scroll to a section anchor
    JumpTo(Anchor),
    /// Scroll to the end of the page
    JumpToBottom,
    /// Scroll up one line
    ScrollUp,
    /// Scroll down one line
    ScrollDown,
    /// Scroll up one screen
    PageUp,
    /// Scroll down one screen
    PageDown,

    // === GENERAL ===
    /// Show or hide the help overlay
    ToggleHelp,
    /// Close the help overlay
    Close,
    /// Leave the application
    Quit,
}

impl Action {
    /// Short description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ToggleTheme => "Toggle light/dark mode",
            Self::SelectCategory(Category::Frontend) => "Show frontend skills",
            Self::SelectCategory(Category::Backend) => "Show backend skills",
            Self::SelectCategory(Category::Tools) => "Show tools",
            Self::NextCategory => "Next skill category",
            Self::PreviousCategory => "Previous skill category",
            Self::JumpTo(Anchor::Top) => "Jump to top",
            Self::JumpTo(Anchor::Inicio) => "Jump to Inicio",
            Self::JumpTo(Anchor::SobreMi) => "Jump to Sobre mí",
            Self::JumpTo(Anchor::Proyectos) => "Jump to Proyectos",
            Self::JumpTo(Anchor::Contacto) => "Jump to Contacto",
            Self::JumpToBottom => "Jump to bottom",
            Self::ScrollUp => "Scroll up",
            Self::ScrollDown => "Scroll down",
            Self::PageUp => "Page up",
            Self::PageDown => "Page down",
            Self::ToggleHelp => "Toggle help",
            Self::Close => "Close",
            Self::Quit => "Quit",
        }
    }

    /// The presentation intent behind this action, if any.
    ///
    /// Relative category moves resolve against `active`.
    #[must_use]
    pub const fn intent(&self, active: Category) -> Option<Intent> {
        match self {
            Self::ToggleTheme => Some(Intent::ToggleAppearance),
            Self::SelectCategory(category) => Some(Intent::Select(*category)),
            Self::NextCategory => Some(Intent::Select(active.next())),
            Self::PreviousCategory => Some(Intent::Select(active.previous())),
            _ => None,
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for characters since the character already carries
    /// the case (terminals disagree on whether `G` or `?` report it).
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            KeyCode::BackTab => KeyModifiers::NONE,
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Human-readable key label.
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
    /// Main-context bindings in registration order, for help text
    ordered: Vec<(KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            ordered: Vec::new(),
        };

        registry.register_main_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    /// Register all shortcuts for the page view.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === PRESENTATION ===
        self.register(ctx, K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register(ctx, K::Char('1'), M::NONE, Action::SelectCategory(Category::Frontend));
        self.register(ctx, K::Char('2'), M::NONE, Action::SelectCategory(Category::Backend));
        self.register(ctx, K::Char('3'), M::NONE, Action::SelectCategory(Category::Tools));
        self.register(ctx, K::Tab, M::NONE, Action::NextCategory);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousCategory);

        // === ANCHORS ===
        self.register(ctx, K::Char('i'), M::NONE, Action::JumpTo(Anchor::Inicio));
        self.register(ctx, K::Char('s'), M::NONE, Action::JumpTo(Anchor::SobreMi));
        self.register(ctx, K::Char('p'), M::NONE, Action::JumpTo(Anchor::Proyectos));
        self.register(ctx, K::Char('c'), M::NONE, Action::JumpTo(Anchor::Contacto));
        self.register(ctx, K::Home, M::NONE, Action::JumpTo(Anchor::Top));
        self.register(ctx, K::Char('g'), M::NONE, Action::JumpTo(Anchor::Top));
        self.register(ctx, K::End, M::NONE, Action::JumpToBottom);
        self.register(ctx, K::Char('G'), M::NONE, Action::JumpToBottom);

        // === SCROLLING ===
        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::PageUp, M::NONE, Action::PageUp);
        self.register(ctx, K::PageDown, M::NONE, Action::PageDown);

        // === GENERAL ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register shortcuts for the help overlay.
    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = HELP_CONTEXT;

        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::PageUp, M::NONE, Action::PageUp);
        self.register(ctx, K::PageDown, M::NONE, Action::PageDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpTo(Anchor::Top));
        self.register(ctx, K::End, M::NONE, Action::JumpToBottom);
        self.register(ctx, K::Char('?'), M::NONE, Action::Close);
        self.register(ctx, K::Esc, M::NONE, Action::Close);
        self.register(ctx, K::Char('q'), M::NONE, Action::Close);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
        if context == MAIN_CONTEXT {
            self.ordered.push((binding, action));
        }
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }

    /// Page-view actions with every key bound to them, in registration order.
    #[must_use]
    pub fn help_entries(&self) -> Vec<(String, Action)> {
        let mut entries: Vec<(Vec<String>, Action)> = Vec::new();
        for (binding, action) in &self.ordered {
            match entries.iter_mut().find(|(_, existing)| existing == action) {
                Some((keys, _)) => keys.push(binding.label()),
                None => entries.push((vec![binding.label()], *action)),
            }
        }
        entries
            .into_iter()
            .map(|(keys, action)| (keys.join(" / "), action))
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(MAIN_CONTEXT, key(KeyCode::Char('t'))),
            Some(Action::ToggleTheme)
        );
        assert_eq!(
            registry.lookup(MAIN_CONTEXT, key(KeyCode::Char('2'))),
            Some(Action::SelectCategory(Category::Backend))
        );
        assert_eq!(
            registry.lookup(MAIN_CONTEXT, key(KeyCode::Char('p'))),
            Some(Action::JumpTo(Anchor::Proyectos))
        );
        assert_eq!(registry.lookup(MAIN_CONTEXT, key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_shifted_characters() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert!(registry.matches(MAIN_CONTEXT, event, Action::JumpToBottom));

        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert!(registry.matches(MAIN_CONTEXT, event, Action::ToggleHelp));

        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(registry.matches(MAIN_CONTEXT, event, Action::PreviousCategory));
    }

    #[test]
    fn test_quit_bindings() {
        let registry = ShortcutRegistry::new();

        assert!(registry.matches(MAIN_CONTEXT, key(KeyCode::Char('q')), Action::Quit));
        assert!(registry.matches(MAIN_CONTEXT, key(KeyCode::Esc), Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(registry.matches(MAIN_CONTEXT, ctrl_c, Action::Quit));
        assert!(registry.matches(HELP_CONTEXT, ctrl_c, Action::Quit));
        // Plain `c` jumps to the contact section instead.
        assert!(registry.matches(
            MAIN_CONTEXT,
            key(KeyCode::Char('c')),
            Action::JumpTo(Anchor::Contacto)
        ));
    }

    #[test]
    fn test_help_context_closes() {
        let registry = ShortcutRegistry::new();
        assert_eq!(registry.lookup(HELP_CONTEXT, key(KeyCode::Esc)), Some(Action::Close));
        assert_eq!(registry.lookup(HELP_CONTEXT, key(KeyCode::Char('t'))), None);
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();
        assert!(registry.matches(MAIN_CONTEXT, key(KeyCode::Char('k')), Action::ScrollUp));
        assert!(registry.matches(MAIN_CONTEXT, key(KeyCode::Char('j')), Action::ScrollDown));
        assert!(registry.matches(MAIN_CONTEXT, key(KeyCode::Char('g')), Action::JumpTo(Anchor::Top)));
    }

    #[test]
    fn test_intents() {
        assert_eq!(
            Action::ToggleTheme.intent(Category::Frontend),
            Some(Intent::ToggleAppearance)
        );
        assert_eq!(
            Action::NextCategory.intent(Category::Tools),
            Some(Intent::Select(Category::Frontend))
        );
        assert_eq!(
            Action::PreviousCategory.intent(Category::Frontend),
            Some(Intent::Select(Category::Tools))
        );
        assert_eq!(Action::ScrollDown.intent(Category::Backend), None);
    }

    #[test]
    fn test_help_entries_group_keys() {
        let entries = ShortcutRegistry::new().help_entries();
        let quit = entries
            .iter()
            .find(|(_, action)| *action == Action::Quit)
            .unwrap();
        assert_eq!(quit.0, "q / Esc / Ctrl+c");
        assert_eq!(entries[0].1, Action::ToggleTheme);
    }
}
