//! Pure mapping from presentation state and content to the visible page.
//!
//! [`render`] has no hidden state: the same mode, category and catalog always
//! produce the same [`ViewTree`]. The mode only decides styling (the tree's
//! `mode` and the toggle icon); content selection depends on the category alone.

pub mod markdown;
pub mod tree;

use crate::catalog::ContentCatalog;
use crate::models::{AppearanceMode, Category, Profile, SocialLink};

pub use markdown::to_markdown;
pub use tree::{
    Anchor, Block, Href, LinkView, NavBar, ProjectCard, Section, SkillChip, Tab, ToggleIcon,
    ViewTree,
};

/// Label of the hero button leading to the contact section.
const CONTACT_CTA: &str = "Contactame";
/// Label of the hero button leading to the projects section.
const PROJECTS_CTA: &str = "Ver proyectos";

/// Renders the page for the given state.
///
/// The skills panel shows exactly `catalog.skills_for(category)` and the
/// projects panel shows exactly `catalog.projects()`, both in catalog order.
pub fn render(mode: AppearanceMode, category: Category, catalog: &ContentCatalog) -> ViewTree {
    let profile = catalog.profile();

    ViewTree {
        mode,
        nav: nav_bar(profile, mode),
        sections: vec![
            hero_section(profile),
            about_section(profile, category, catalog),
            projects_section(profile, catalog),
            contact_section(profile),
        ],
        footer: profile.footer.clone(),
    }
}

fn nav_bar(profile: &Profile, mode: AppearanceMode) -> NavBar {
    NavBar {
        brand: profile.brand.clone(),
        links: Anchor::NAV
            .iter()
            .map(|anchor| LinkView::anchor(anchor.label(), *anchor))
            .collect(),
        toggle: ToggleIcon::for_mode(mode),
    }
}

fn hero_section(profile: &Profile) -> Section {
    let mut blocks = Vec::new();
    push_text(&mut blocks, &profile.greeting, Block::Badge);
    blocks.push(Block::Heading {
        level: 1,
        text: profile.name.clone(),
    });
    push_text(&mut blocks, &profile.role, |text| Block::Heading { level: 2, text });
    push_text(&mut blocks, &profile.intro, Block::Paragraph);
    blocks.push(Block::Links(vec![
        LinkView::anchor(CONTACT_CTA, Anchor::Contacto),
        LinkView::anchor(PROJECTS_CTA, Anchor::Proyectos),
    ]));
    push_socials(&mut blocks, profile.socials.iter());

    if !profile.portrait_ref.is_empty() {
        blocks.push(Block::Image {
            src: profile.portrait_ref.clone(),
            alt: profile.name.clone(),
        });
    }
    push_text(&mut blocks, &profile.card_title, |text| Block::Heading { level: 3, text });
    push_text(&mut blocks, &profile.card_caption, Block::Paragraph);

    Section {
        anchor: Anchor::Inicio,
        title: None,
        blocks,
    }
}

fn about_section(profile: &Profile, category: Category, catalog: &ContentCatalog) -> Section {
    let mut blocks: Vec<Block> = profile
        .about
        .iter()
        .map(|paragraph| Block::Paragraph(paragraph.clone()))
        .collect();

    push_text(&mut blocks, &profile.stack_heading, |text| Block::Heading { level: 3, text });

    blocks.push(Block::Tabs(
        Category::ALL
            .iter()
            .map(|tab| Tab {
                category: *tab,
                label: tab.label().to_string(),
                active: *tab == category,
            })
            .collect(),
    ));

    blocks.push(Block::Skills(
        catalog
            .skills_for(category)
            .iter()
            .map(|skill| SkillChip {
                name: skill.name.clone(),
                color: skill.display_color,
                icon: skill.icon_ref.clone(),
            })
            .collect(),
    ));

    Section {
        anchor: Anchor::SobreMi,
        title: Some(Anchor::SobreMi.label().to_string()),
        blocks,
    }
}

fn projects_section(profile: &Profile, catalog: &ContentCatalog) -> Section {
    let cards = catalog
        .projects()
        .iter()
        .map(|project| ProjectCard {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            tags: project.tags.clone(),
            image: project.image_ref.clone(),
            repo: LinkView::outbound("GitHub", "github", &project.repo_link),
            demo: LinkView::outbound("Demo", "external-link", &project.demo_link),
        })
        .collect();

    Section {
        anchor: Anchor::Proyectos,
        title: Some(profile.projects_heading.clone()),
        blocks: vec![Block::Projects(cards)],
    }
}

fn contact_section(profile: &Profile) -> Section {
    let mut blocks = Vec::new();
    push_text(&mut blocks, &profile.contact_blurb, Block::Paragraph);
    blocks.push(Block::Links(vec![LinkView::outbound(
        profile.contact_label.clone(),
        "send",
        &profile.contact,
    )]));
    // The contact row lists the socials in reverse hero order.
    push_socials(&mut blocks, profile.socials.iter().rev());

    Section {
        anchor: Anchor::Contacto,
        title: Some(Anchor::Contacto.label().to_string()),
        blocks,
    }
}

fn push_socials<'a>(blocks: &mut Vec<Block>, socials: impl Iterator<Item = &'a SocialLink>) {
    let links: Vec<LinkView> = socials
        .map(|social| LinkView::outbound(social.label.clone(), social.icon_ref.clone(), &social.target))
        .collect();
    if !links.is_empty() {
        blocks.push(Block::Links(links));
    }
}

/// Skips blank copy so partial content files do not render empty elements.
fn push_text(blocks: &mut Vec<Block>, text: &str, make: impl FnOnce(String) -> Block) {
    if !text.trim().is_empty() {
        blocks.push(make(text.to_string()));
    }
}
