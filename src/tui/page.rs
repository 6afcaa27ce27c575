//! Lays out a view tree as scrollable terminal lines.
//!
//! Text is wrapped to the viewport width up front so that every anchor maps
//! to an exact line offset.

use std::collections::HashMap;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::Theme;
use crate::render::{Anchor, Block, Href, LinkView, ProjectCard, SkillChip, Tab, ViewTree};

const CHIP_GLYPH: &str = "●";
const INDENT: &str = "  ";

/// The laid-out page.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    lines: Vec<Line<'static>>,
    anchors: HashMap<Anchor, usize>,
    width: usize,
}

impl PageView {
    /// Lays out `tree` for a viewport `width` columns wide.
    #[must_use]
    pub fn build(tree: &ViewTree, theme: &Theme, width: usize) -> Self {
        let mut page = Self {
            lines: Vec::new(),
            anchors: HashMap::new(),
            width: width.max(20),
        };
        page.anchors.insert(Anchor::Top, 0);

        for section in &tree.sections {
            page.anchors.insert(section.anchor, page.lines.len());
            if let Some(title) = &section.title {
                page.push_section_title(title, theme);
            }
            for block in &section.blocks {
                page.push_block(block, theme);
            }
            page.blank();
        }

        page.lines.push(Line::from(Span::styled(
            "─".repeat(page.width),
            Style::default().fg(theme.text_muted),
        )));
        page.push_wrapped(&tree.footer, Style::default().fg(theme.text_muted), "");
        page
    }

    /// Styled lines in page order.
    #[must_use]
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Line offset of an anchor.
    #[must_use]
    pub fn anchor_offset(&self, anchor: Anchor) -> Option<usize> {
        self.anchors.get(&anchor).copied()
    }

    /// The navigation anchor whose section contains `offset`.
    #[must_use]
    pub fn section_at(&self, offset: usize) -> Option<Anchor> {
        Anchor::NAV
            .iter()
            .filter_map(|anchor| self.anchor_offset(*anchor).map(|start| (*anchor, start)))
            .filter(|(_, start)| *start <= offset)
            .max_by_key(|(_, start)| *start)
            .map(|(anchor, _)| anchor)
    }

    /// Total number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing was laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text of every line, for tests and debugging.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn push_section_title(&mut self, title: &str, theme: &Theme) {
        self.lines.push(Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )));
        self.lines.push(Line::from(Span::styled(
            "═".repeat(title.chars().count()),
            Style::default().fg(theme.primary),
        )));
        self.blank();
    }

    fn push_block(&mut self, block: &Block, theme: &Theme) {
        match block {
            Block::Badge(text) => {
                self.lines.push(Line::from(Span::styled(
                    format!(" {text} "),
                    Style::default().fg(theme.accent).bg(theme.highlight_bg),
                )));
                self.blank();
            }
            Block::Heading { level, text } => {
                let style = match *level {
                    1 => Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    2 => Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                    _ => Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                };
                self.push_wrapped(text, style, "");
                if *level != 1 {
                    self.blank();
                }
            }
            Block::Paragraph(text) => {
                self.push_wrapped(text, Style::default().fg(theme.text), "");
                self.blank();
            }
            Block::Image { src, alt } => {
                self.lines.push(Line::from(vec![
                    Span::styled("▣ ", Style::default().fg(theme.text_muted)),
                    Span::styled(alt.clone(), Style::default().fg(theme.text_secondary)),
                    Span::styled(format!(" ({src})"), Style::default().fg(theme.text_muted)),
                ]));
                self.blank();
            }
            Block::Links(links) => {
                for link in links {
                    self.lines.push(link_line(link, theme, INDENT));
                }
                self.blank();
            }
            Block::Tabs(tabs) => {
                self.lines.push(tab_line(tabs, theme));
                self.blank();
            }
            Block::Skills(chips) => self.push_chips(chips, theme),
            Block::Projects(cards) => {
                for card in cards {
                    self.push_card(card, theme);
                }
            }
        }
    }

    /// Chips flow left to right and wrap at the viewport width.
    fn push_chips(&mut self, chips: &[SkillChip], theme: &Theme) {
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut used = 0;

        for chip in chips {
            let cell = chip.name.chars().count() + 4;
            if used > 0 && used + cell > self.width {
                self.lines.push(Line::from(std::mem::take(&mut row)));
                used = 0;
            }
            row.push(Span::styled(
                format!("{INDENT}{CHIP_GLYPH} "),
                Style::default().fg(chip.color.to_ratatui_color()),
            ));
            row.push(Span::styled(chip.name.clone(), Style::default().fg(theme.text)));
            used += cell;
        }
        if !row.is_empty() {
            self.lines.push(Line::from(row));
        }
        self.blank();
    }

    fn push_card(&mut self, card: &ProjectCard, theme: &Theme) {
        self.lines.push(Line::from(Span::styled(
            format!("▸ {}", card.title),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )));
        if !card.description.is_empty() {
            self.push_wrapped(&card.description, Style::default().fg(theme.text), INDENT);
        }
        if !card.tags.is_empty() {
            let mut spans = vec![Span::raw(INDENT)];
            for tag in &card.tags {
                spans.push(Span::styled(
                    format!("[{tag}]"),
                    Style::default().fg(theme.accent),
                ));
                spans.push(Span::raw(" "));
            }
            self.lines.push(Line::from(spans));
        }
        self.lines.push(link_line(&card.repo, theme, INDENT));
        self.lines.push(link_line(&card.demo, theme, INDENT));
        self.blank();
    }

    fn push_wrapped(&mut self, text: &str, style: Style, indent: &str) {
        let available = self.width.saturating_sub(indent.chars().count()).max(10);
        for row in wrap(text, available) {
            self.lines
                .push(Line::from(Span::styled(format!("{indent}{row}"), style)));
        }
    }
}

fn link_line(link: &LinkView, theme: &Theme, indent: &str) -> Line<'static> {
    let label = Span::styled(
        format!("{indent}{}", link.label),
        Style::default().fg(theme.text_secondary).add_modifier(Modifier::BOLD),
    );
    let target = match &link.href {
        Href::External(url) => Span::styled(
            format!(" → {url}"),
            Style::default().fg(theme.link).add_modifier(Modifier::UNDERLINED),
        ),
        Href::Anchor(anchor) => {
            Span::styled(format!(" → #{}", anchor.id()), Style::default().fg(theme.link))
        }
        Href::Unavailable => Span::styled(" (unavailable)", Style::default().fg(theme.text_muted)),
    };
    Line::from(vec![label, target])
}

fn tab_line(tabs: &[Tab], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, tab) in tabs.iter().enumerate() {
        let text = format!(" {} {} ", index + 1, tab.label);
        let style = if tab.active {
            Style::default()
                .fg(theme.background)
                .bg(theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.inactive)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Greedy word wrap on character counts.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ContentCatalog;
    use crate::models::{AppearanceMode, Category};
    use crate::render::render;

    fn page(category: Category, width: usize) -> PageView {
        let catalog = ContentCatalog::builtin().unwrap();
        let tree = render(AppearanceMode::Dark, category, &catalog);
        PageView::build(&tree, &Theme::dark(), width)
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("uno dos tres", 7), vec!["uno dos", "tres"]);
        assert_eq!(wrap("   ", 10), Vec::<String>::new());
        assert_eq!(wrap("larguísimo", 4), vec!["larguísimo"]);
    }

    #[test]
    fn test_anchors_in_page_order() {
        let page = page(Category::Frontend, 80);
        let offsets: Vec<usize> = [
            Anchor::Top,
            Anchor::Inicio,
            Anchor::SobreMi,
            Anchor::Proyectos,
            Anchor::Contacto,
        ]
        .iter()
        .map(|anchor| page.anchor_offset(*anchor).unwrap())
        .collect();

        assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(offsets[4] < page.len());
    }

    #[test]
    fn test_section_at() {
        let page = page(Category::Frontend, 80);
        let projects = page.anchor_offset(Anchor::Proyectos).unwrap();
        assert_eq!(page.section_at(projects), Some(Anchor::Proyectos));
        assert_eq!(page.section_at(projects - 1), Some(Anchor::SobreMi));
        assert_eq!(page.section_at(0), Some(Anchor::Inicio));
    }

    #[test]
    fn test_chips_show_active_category() {
        let text = page(Category::Tools, 80).plain_text();
        assert!(text.contains("● Docker"));
        assert!(!text.contains("● React"));
        assert!(text.contains(" 3 Herramientas "));
    }

    #[test]
    fn test_chip_colors() {
        let page = page(Category::Frontend, 80);
        let react = page
            .lines()
            .iter()
            .flat_map(|line| line.spans.windows(2))
            .find(|pair| pair[1].content == "React")
            .map(|pair| pair[0].style.fg)
            .unwrap();
        assert_eq!(react, Some(ratatui::style::Color::Rgb(0x61, 0xDA, 0xFB)));
    }

    #[test]
    fn test_narrow_width_wraps_chips() {
        let wide = page(Category::Frontend, 120);
        let narrow = page(Category::Frontend, 30);
        assert!(narrow.len() > wide.len());
    }

    #[test]
    fn test_placeholder_link() {
        let text = page(Category::Frontend, 80).plain_text();
        assert!(text.contains("Demo (unavailable)"));
        assert!(text.contains("→ mailto:tuemail@ejemplo.com"));
    }
}
