//! Terminal user interface.
//!
//! This module contains the main TUI loop, the [`App`] state and the widgets
//! that paint the portfolio with Ratatui. Every pending terminal event is
//! handled in one turn, which hands its presentation intents to the
//! presenter in a single dispatch before the next draw.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod help_overlay;
pub mod page;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::catalog::ContentCatalog;
use crate::render::{Anchor, Href};
use crate::shortcuts::{Action, ShortcutRegistry, HELP_CONTEXT, MAIN_CONTEXT};
use crate::state::{Intent, Presenter};

pub use help_overlay::HelpOverlayState;
pub use page::PageView;
pub use status_bar::StatusBar;
pub use theme::{Theme, ThemeSurface};

const TITLE_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 2;
const MOUSE_SCROLL_LINES: usize = 3;

/// Pending scroll target, resolved once the page is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Jump {
    Anchor(Anchor),
    Bottom,
}

/// Application state for the terminal front end.
#[derive(Debug)]
pub struct App {
    presenter: Presenter<ThemeSurface>,
    registry: ShortcutRegistry,
    help: Option<HelpOverlayState>,
    page: PageView,
    /// (content width, render pass) the page was laid out for
    layout_key: Option<(usize, usize)>,
    scroll: usize,
    viewport_height: usize,
    pending_jump: Option<Jump>,
    should_quit: bool,
}

impl App {
    /// Creates the app on the startup state (dark, frontend).
    #[must_use]
    pub fn new(catalog: Arc<ContentCatalog>, show_help: bool) -> Self {
        let registry = ShortcutRegistry::new();
        let help = show_help.then(|| HelpOverlayState::new(&registry));
        Self {
            presenter: Presenter::new(catalog, ThemeSurface::default()),
            registry,
            help,
            page: PageView::default(),
            layout_key: None,
            scroll: 0,
            viewport_height: 0,
            pending_jump: None,
            should_quit: false,
        }
    }

    /// The presenter driving the page.
    #[must_use]
    pub const fn presenter(&self) -> &Presenter<ThemeSurface> {
        &self.presenter
    }

    /// The palette currently applied by the view root.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.presenter.surface().theme
    }

    /// The laid-out page.
    #[must_use]
    pub const fn page(&self) -> &PageView {
        &self.page
    }

    /// First visible page line.
    #[must_use]
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// Whether the help overlay is open.
    #[must_use]
    pub const fn help_open(&self) -> bool {
        self.help.is_some()
    }

    /// Whether the user asked to leave.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// How far down the page the viewport is, 0-100.
    #[must_use]
    pub fn scroll_percent(&self) -> usize {
        let max = self.max_scroll();
        if max == 0 {
            100
        } else {
            self.scroll * 100 / max
        }
    }

    fn max_scroll(&self) -> usize {
        self.page.len().saturating_sub(self.viewport_height)
    }

    /// Handles every event of one turn.
    ///
    /// Presentation intents are collected and dispatched once at the end,
    /// so the turn produces at most one new frame.
    pub fn handle_turn(&mut self, events: impl IntoIterator<Item = Event>) {
        let mut intents = Vec::new();
        // Relative category moves chain within a turn.
        let mut category = self.presenter.active_category();

        for event in events {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let Some(action) = self.lookup(key) else {
                        continue;
                    };
                    if let Some(intent) = action.intent(category) {
                        if let Intent::Select(selected) = intent {
                            category = selected;
                        }
                        intents.push(intent);
                        continue;
                    }
                    self.handle_action(action);
                }
                Event::Mouse(mouse) if self.help.is_none() => match mouse.kind {
                    MouseEventKind::ScrollUp => self.scroll_by(-(MOUSE_SCROLL_LINES as isize)),
                    MouseEventKind::ScrollDown => self.scroll_by(MOUSE_SCROLL_LINES as isize),
                    _ => {}
                },
                _ => {}
            }
            if self.should_quit {
                break;
            }
        }

        if self.presenter.dispatch(intents) {
            debug!(
                "new frame: {} / {}",
                self.presenter.mode(),
                self.presenter.active_category()
            );
        }
    }

    fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let context = if self.help.is_some() {
            HELP_CONTEXT
        } else {
            MAIN_CONTEXT
        };
        self.registry.lookup(context, key)
    }

    fn handle_action(&mut self, action: Action) {
        let page_height = self.viewport_height.max(1);

        if let Some(help) = &mut self.help {
            match action {
                Action::ScrollUp => help.scroll_up(),
                Action::ScrollDown => help.scroll_down(),
                Action::PageUp => help.page_up(page_height),
                Action::PageDown => help.page_down(page_height),
                Action::JumpTo(_) => help.scroll_to_top(),
                Action::JumpToBottom => help.scroll_to_bottom(),
                Action::Close | Action::ToggleHelp => self.help = None,
                Action::Quit => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match action {
            Action::JumpTo(anchor) => self.pending_jump = Some(Jump::Anchor(anchor)),
            Action::JumpToBottom => self.pending_jump = Some(Jump::Bottom),
            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => self.scroll_by(-(page_height as isize)),
            Action::PageDown => self.scroll_by(page_height as isize),
            Action::ToggleHelp => self.help = Some(HelpOverlayState::new(&self.registry)),
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        self.pending_jump = None;
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(self.max_scroll());
    }

    /// Lays the page out for a terminal of `width` x `height` cells and
    /// resolves pending jumps.
    pub fn sync_layout(&mut self, width: u16, height: u16) {
        let content_width = usize::from(width.saturating_sub(2));
        self.viewport_height = usize::from(height.saturating_sub(TITLE_HEIGHT + STATUS_HEIGHT + 2));

        let key = (content_width, self.presenter.render_passes());
        if self.layout_key != Some(key) {
            self.page = PageView::build(self.presenter.frame(), self.theme(), content_width);
            self.layout_key = Some(key);
        }

        if let Some(jump) = self.pending_jump.take() {
            self.scroll = match jump {
                Jump::Anchor(anchor) => self.page.anchor_offset(anchor).unwrap_or(0),
                Jump::Bottom => usize::MAX,
            };
        }
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Lays out and draws one frame.
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    app.sync_layout(size.width, size.height);
    terminal
        .draw(|f| render(f, app))
        .context("Failed to draw frame")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<B: Backend>(app: &mut App, terminal: &mut Terminal<B>, poll_interval: Duration) -> Result<()> {
    info!("terminal UI started");

    loop {
        draw(terminal, app)?;

        if !event::poll(poll_interval)? {
            continue;
        }

        // Drain everything already queued so one turn sees all of it.
        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        app.handle_turn(events);

        if app.should_quit() {
            break;
        }
    }

    info!("terminal UI stopped");
    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, app: &App) {
    let theme = app.theme();

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(f.area());

    render_nav_bar(f, chunks[0], app);
    render_page(f, chunks[1], app);
    StatusBar::render(f, chunks[2], app, theme);

    if let Some(help) = &app.help {
        help.render(f, f.area(), theme);
    }
}

/// Navigation bar: brand, section links with the current one highlighted,
/// and the theme toggle.
fn render_nav_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let nav = &app.presenter.frame().nav;
    let current = app.page.section_at(app.scroll);

    let mut spans = vec![Span::styled(
        format!(" {}  ", nav.brand),
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    )];
    for link in &nav.links {
        let active = matches!(link.href, Href::Anchor(anchor) if Some(anchor) == current);
        let style = if active {
            Style::default().fg(theme.active).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        spans.push(Span::styled(link.label.clone(), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        format!("{} t", nav.toggle.glyph()),
        Style::default().fg(theme.accent),
    ));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted))
            .style(Style::default().bg(theme.surface)),
    );
    f.render_widget(bar, area);
}

fn render_page(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let scroll = u16::try_from(app.scroll).unwrap_or(u16::MAX);

    let page = Paragraph::new(app.page.lines().to_vec())
        .style(Style::default().fg(theme.text).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .scroll((scroll, 0));
    f.render_widget(page, area);
}
