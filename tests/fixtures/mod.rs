//! Shared test fixtures for integration and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use folio::catalog::file::to_toml;
use folio::catalog::{RawContent, RawProfile, RawProject, RawSkill, RawSocial};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Small valid content with one or two records per collection.
#[must_use]
pub fn test_content() -> RawContent {
    let mut skills = BTreeMap::new();
    skills.insert(
        "frontend".to_string(),
        vec![
            RawSkill::new("Elm", "#1293D8", "elm"),
            RawSkill::new("Svelte", "#FF3E00", "svelte"),
        ],
    );
    skills.insert(
        "backend".to_string(),
        vec![RawSkill::new("Rust", "#DEA584", "rust")],
    );
    skills.insert(
        "tools".to_string(),
        vec![RawSkill::new("Git", "#F05032", "git")],
    );

    RawContent {
        profile: RawProfile {
            name: "Ada Lovelace".to_string(),
            brand: None,
            role: "Analytical Engineer".to_string(),
            greeting: "Hola".to_string(),
            intro: "Notes on the analytical engine.".to_string(),
            portrait: "/ada.png".to_string(),
            card_title: "Engine".to_string(),
            card_caption: "Since 1843".to_string(),
            about: vec!["First paragraph.".to_string()],
            stack_heading: "Stack".to_string(),
            projects_heading: "Proyectos".to_string(),
            contact_blurb: "Write to me.".to_string(),
            contact_label: "Email".to_string(),
            contact: "mailto:ada@example.com".to_string(),
            footer: "© 1843 Ada".to_string(),
            socials: vec![RawSocial {
                label: "GitHub".to_string(),
                icon: "github".to_string(),
                url: "https://github.com/ada".to_string(),
            }],
        },
        skills,
        projects: vec![
            RawProject {
                id: 10,
                title: "Bernoulli".to_string(),
                description: "Computes Bernoulli numbers.".to_string(),
                tags: vec!["Engine".to_string()],
                repo_link: Some("https://github.com/ada/bernoulli".to_string()),
                demo_link: Some("#".to_string()),
                image_ref: "/bernoulli.png".to_string(),
            },
            RawProject {
                id: 20,
                title: "Loom".to_string(),
                description: String::new(),
                tags: Vec::new(),
                repo_link: None,
                demo_link: Some("https://loom.example.com".to_string()),
                image_ref: String::new(),
            },
        ],
    }
}

/// Writes content as TOML to `path`.
pub fn write_content_file(content: &RawContent, path: &Path) {
    let toml = to_toml(content).expect("content serializes");
    fs::write(path, toml).expect("content file written");
}

/// Writes content to a fresh temp dir and returns the file path.
///
/// The `TempDir` must be kept alive for as long as the file is used.
pub fn create_temp_content_file(content: &RawContent) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("content.toml");
    write_content_file(content, &path);
    (path, temp_dir)
}

/// Path to a config file that does not exist, so commands run on defaults.
pub fn isolated_config(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("folio-config.toml")
}
