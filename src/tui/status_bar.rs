//! Status bar widget showing the presentation state and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{App, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the active mode, category and scroll position.
    pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let presenter = app.presenter();
        let hints: &[(&str, &str)] = if app.help_open() {
            &[("↑↓", "scroll"), ("?/Esc", "close")]
        } else {
            &[
                ("t", "theme"),
                ("1-3/Tab", "stack"),
                ("i/s/p/c", "jump"),
                ("?", "help"),
                ("q", "quit"),
            ]
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", presenter.mode()),
                Style::default()
                    .fg(theme.background)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", presenter.active_category().label()),
                Style::default().fg(theme.accent),
            ),
            Span::styled(format!("{:>4}% ", app.scroll_percent()), Style::default().fg(theme.text_muted)),
            Span::styled("│", Style::default().fg(theme.text_muted)),
        ];

        for (key, label) in hints {
            spans.push(Span::styled(
                format!(" {key}"),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {label}"), Style::default().fg(theme.text_secondary)));
        }

        let status = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.text_muted))
                .style(Style::default().bg(theme.surface)),
        );

        f.render_widget(status, area);
    }
}
