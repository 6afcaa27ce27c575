//! Markdown rendition of a view tree.
//!
//! Output is deterministic: the same tree always produces the same bytes.

use std::fmt::Write;

use super::tree::{Anchor, Block, Href, LinkView, ProjectCard, Section, Tab, ViewTree};

/// Renders the tree as a Markdown document.
///
/// # Examples
///
/// ```
/// use folio::catalog::ContentCatalog;
/// use folio::models::{AppearanceMode, Category};
/// use folio::render::{render, to_markdown};
///
/// let catalog = ContentCatalog::builtin().unwrap();
/// let page = to_markdown(&render(AppearanceMode::Dark, Category::Backend, &catalog));
/// assert!(page.contains("PostgreSQL"));
/// ```
#[must_use]
pub fn to_markdown(tree: &ViewTree) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<!-- mode: {} -->", tree.mode);
    let _ = writeln!(out, "<a id=\"{}\"></a>", Anchor::Top.id());
    out.push('\n');

    let nav = tree
        .nav
        .links
        .iter()
        .map(format_link)
        .collect::<Vec<_>>()
        .join(" · ");
    let _ = writeln!(
        out,
        "**{}** | {} | {} Toggle Dark Mode",
        tree.nav.brand,
        nav,
        tree.nav.toggle.glyph()
    );

    for section in &tree.sections {
        out.push('\n');
        write_section(&mut out, section);
    }

    let _ = writeln!(out, "\n---\n\n{}", tree.footer);
    out
}

fn write_section(out: &mut String, section: &Section) {
    let _ = writeln!(out, "<a id=\"{}\"></a>\n", section.anchor.id());
    if let Some(title) = &section.title {
        let _ = writeln!(out, "## {title}\n");
    }

    for block in &section.blocks {
        match block {
            Block::Badge(text) => {
                let _ = writeln!(out, "`{text}`\n");
            }
            Block::Heading { level, text } => {
                // `##` is reserved for section titles.
                let hashes = match *level {
                    1 => "#",
                    2 => "###",
                    _ => "####",
                };
                let _ = writeln!(out, "{hashes} {text}\n");
            }
            Block::Paragraph(text) => {
                let _ = writeln!(out, "{text}\n");
            }
            Block::Image { src, alt } => {
                let _ = writeln!(out, "![{alt}]({src})\n");
            }
            Block::Links(links) => {
                let row = links.iter().map(format_link).collect::<Vec<_>>().join(" · ");
                let _ = writeln!(out, "{row}\n");
            }
            Block::Tabs(tabs) => {
                let row = tabs.iter().map(format_tab).collect::<Vec<_>>().join(" · ");
                let _ = writeln!(out, "{row}\n");
            }
            Block::Skills(chips) => {
                for chip in chips {
                    let _ = writeln!(out, "- {} `{}`", chip.name, chip.color);
                }
                out.push('\n');
            }
            Block::Projects(cards) => {
                for card in cards {
                    write_project(out, card);
                }
            }
        }
    }
}

fn write_project(out: &mut String, card: &ProjectCard) {
    let _ = writeln!(out, "### {}\n", card.title);
    if !card.image.is_empty() {
        let _ = writeln!(out, "![{}]({})\n", card.title, card.image);
    }
    if !card.description.is_empty() {
        let _ = writeln!(out, "{}\n", card.description);
    }
    if !card.tags.is_empty() {
        let tags = card
            .tags
            .iter()
            .map(|tag| format!("`{tag}`"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{tags}\n");
    }
    let _ = writeln!(out, "{} · {}\n", format_link(&card.repo), format_link(&card.demo));
}

fn format_link(link: &LinkView) -> String {
    match &link.href {
        Href::Anchor(anchor) => format!("[{}](#{})", link.label, anchor.id()),
        Href::External(url) => format!("[{}]({})", link.label, url),
        Href::Unavailable => format!("{} (unavailable)", link.label),
    }
}

fn format_tab(tab: &Tab) -> String {
    if tab.active {
        format!("**[{}]**", tab.label)
    } else {
        tab.label.clone()
    }
}
