//! Help overlay listing every keyboard shortcut.
//!
//! The content is generated from the [`ShortcutRegistry`], so the overlay
//! always matches the bindings the event loop uses.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use super::Theme;
use crate::branding::APP_DISPLAY_NAME;
use crate::shortcuts::{Action, ShortcutRegistry};

const KEY_COLUMN: usize = 22;

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    entries: Vec<(String, Action)>,
}

impl HelpOverlayState {
    /// Creates the overlay for the bindings in `registry`.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        Self {
            scroll_offset: 0,
            entries: registry.help_entries(),
        }
    }

    fn total_lines(&self) -> usize {
        // header (3) + blank + entries + blank + footer
        self.entries.len() + 6
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines().saturating_sub(1);
    }

    /// Scroll down by a page.
    pub fn page_down(&mut self, visible_height: usize) {
        self.scroll_offset =
            (self.scroll_offset + visible_height).min(self.total_lines().saturating_sub(1));
    }

    /// Scroll up by a page.
    pub const fn page_up(&mut self, visible_height: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height);
    }

    fn content(&self, theme: &Theme) -> Vec<Line<'static>> {
        let rule = "═".repeat(48);
        let mut lines = vec![
            Line::from(Span::styled(rule.clone(), Style::default().fg(theme.primary))),
            Line::from(Span::styled(
                format!("{APP_DISPLAY_NAME} - Keyboard Shortcuts"),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(rule, Style::default().fg(theme.primary))),
            Line::from(""),
        ];

        for (keys, action) in &self.entries {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{keys:<width$}", width = KEY_COLUMN),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(action.description(), Style::default().fg(theme.text)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press '?' or Esc to close • ↑↓ to scroll",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }

    /// Render the help overlay as a centered modal.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let width = (area.width * 70) / 100;
        let height = (area.height * 80) / 100;
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;

        let modal_area = Rect {
            x: x + area.x,
            y: y + area.y,
            width,
            height,
        };
        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let visible_height = content_area.height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(self.content(theme))
            .block(
                Block::default()
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));

        frame.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));

        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines().saturating_sub(visible_height))
                .position(self.scroll_offset);

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_lists_every_entry() {
        let registry = ShortcutRegistry::new();
        let state = HelpOverlayState::new(&registry);
        let content = state.content(&Theme::dark());
        assert_eq!(content.len(), state.total_lines());

        let text: Vec<String> = content.iter().map(ToString::to_string).collect();
        assert!(text.iter().any(|line| line.contains("Toggle light/dark mode")));
        assert!(text.iter().any(|line| line.contains("Jump to Proyectos")));
    }

    #[test]
    fn test_scroll_bounds() {
        let mut state = HelpOverlayState::new(&ShortcutRegistry::new());
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);

        state.scroll_to_bottom();
        let bottom = state.scroll_offset;
        state.scroll_down();
        assert_eq!(state.scroll_offset, bottom);

        state.page_up(5);
        assert_eq!(state.scroll_offset, bottom - 5);
        state.scroll_to_top();
        assert_eq!(state.scroll_offset, 0);
    }
}
