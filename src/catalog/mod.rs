//! Immutable, validated content collections.
//!
//! The catalog is built once at startup, either from the compiled-in content
//! ([`ContentCatalog::builtin`]) or from a TOML content file
//! ([`file::load_catalog`]). Construction validates every record and fails on
//! the first violation; afterwards the catalog is read-only and can be shared
//! freely behind an `Arc`.

pub mod builtin;
pub mod error;
pub mod file;
pub mod raw;

use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;
use url::Url;

use crate::models::{Category, LinkTarget, Profile, ProjectRecord, RgbColor, SkillRecord, SocialLink};

pub use error::CatalogError;
pub use file::load_catalog;
pub use raw::{RawContent, RawProfile, RawProject, RawSkill, RawSocial};

/// Static collections of skills, projects and profile copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    profile: Profile,
    /// Skills indexed by `Category::index()`
    skills: [Vec<SkillRecord>; 3],
    projects: Vec<ProjectRecord>,
}

impl ContentCatalog {
    /// Builds a catalog from already-typed records.
    ///
    /// # Validation
    ///
    /// - every category has at least one skill
    /// - skill names are unique within a category
    /// - project ids are unique across the catalog
    /// - project titles are non-empty
    /// - every link is an absolute URL or unavailable
    ///
    /// Display colors are valid by construction (`RgbColor` only holds
    /// `#RRGGBB` values); hex strings are checked in [`ContentCatalog::from_raw`].
    pub fn new(
        profile: Profile,
        skills: BTreeMap<Category, Vec<SkillRecord>>,
        projects: Vec<ProjectRecord>,
    ) -> Result<Self, CatalogError> {
        let mut by_category: [Vec<SkillRecord>; 3] = Default::default();

        for (category, records) in skills {
            Self::validate_skills(category, &records)?;
            by_category[category.index()] = records;
        }

        for category in Category::ALL {
            if by_category[category.index()].is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }
        }

        Self::validate_projects(&projects)?;
        Self::validate_profile(&profile)?;

        debug!(
            skills = by_category.iter().map(Vec::len).sum::<usize>(),
            projects = projects.len(),
            "content catalog validated"
        );

        Ok(Self {
            profile,
            skills: by_category,
            projects,
        })
    }

    /// Converts raw content into records and validates it.
    pub fn from_raw(raw: RawContent) -> Result<Self, CatalogError> {
        let RawContent {
            profile,
            skills,
            projects,
        } = raw;

        let mut typed_skills = BTreeMap::new();
        for (name, entries) in skills {
            let category: Category = name.parse()?;
            let records = entries
                .into_iter()
                .map(|entry| Self::skill_from_raw(category, entry))
                .collect::<Result<Vec<_>, _>>()?;
            typed_skills.insert(category, records);
        }

        let typed_projects = projects
            .into_iter()
            .map(Self::project_from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(Self::profile_from_raw(profile)?, typed_skills, typed_projects)
    }

    /// Returns the skills of a category, in catalog order.
    #[must_use]
    pub fn skills_for(&self, category: Category) -> &[SkillRecord] {
        &self.skills[category.index()]
    }

    /// Returns every project, unfiltered, in insertion order.
    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Returns the owner profile and page copy.
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Returns the project ids in catalog order.
    #[must_use]
    pub fn project_ids(&self) -> Vec<u32> {
        self.projects.iter().map(|p| p.id).collect()
    }

    fn validate_skills(category: Category, records: &[SkillRecord]) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for record in records {
            if !seen.insert(record.name.as_str()) {
                return Err(CatalogError::DuplicateSkill {
                    category,
                    name: record.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn validate_projects(projects: &[ProjectRecord]) -> Result<(), CatalogError> {
        let mut seen: HashMap<u32, &str> = HashMap::new();
        for project in projects {
            if project.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { id: project.id });
            }
            let owner = format!("project {}", project.id);
            check_link(&owner, "repository", &project.repo_link)?;
            check_link(&owner, "demo", &project.demo_link)?;
            if let Some(first) = seen.insert(project.id, &project.title) {
                return Err(CatalogError::DuplicateProjectId {
                    id: project.id,
                    first: first.to_string(),
                    second: project.title.clone(),
                });
            }
        }
        Ok(())
    }

    fn validate_profile(profile: &Profile) -> Result<(), CatalogError> {
        check_link("profile", "contact", &profile.contact)?;
        for social in &profile.socials {
            check_link(&social.label, "social", &social.target)?;
        }
        Ok(())
    }

    fn skill_from_raw(category: Category, raw: RawSkill) -> Result<SkillRecord, CatalogError> {
        let color = RgbColor::from_hex(&raw.color).map_err(|_| CatalogError::InvalidColor {
            category,
            skill: raw.name.clone(),
            value: raw.color.clone(),
        })?;
        Ok(SkillRecord::new(raw.name, color, raw.icon))
    }

    fn project_from_raw(raw: RawProject) -> Result<ProjectRecord, CatalogError> {
        let owner = format!("project {}", raw.id);
        let repo_link = parse_link(&owner, "repository", raw.repo_link.as_deref())?;
        let demo_link = parse_link(&owner, "demo", raw.demo_link.as_deref())?;

        Ok(ProjectRecord {
            id: raw.id,
            title: raw.title.trim().to_string(),
            description: raw.description.trim().to_string(),
            tags: raw.tags,
            repo_link,
            demo_link,
            image_ref: raw.image_ref,
        })
    }

    fn profile_from_raw(raw: RawProfile) -> Result<Profile, CatalogError> {
        let contact = parse_link("profile", "contact", Some(&raw.contact))?;

        let socials = raw
            .socials
            .into_iter()
            .map(|social| {
                let target = parse_link(&social.label, "social", Some(&social.url))?;
                Ok(SocialLink {
                    label: social.label,
                    icon_ref: social.icon,
                    target,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let brand = raw.brand.unwrap_or_else(|| format!("<{}/>", raw.name));

        Ok(Profile {
            name: raw.name,
            brand,
            role: raw.role,
            greeting: raw.greeting,
            intro: raw.intro,
            portrait_ref: raw.portrait,
            card_title: raw.card_title,
            card_caption: raw.card_caption,
            about: raw.about,
            stack_heading: raw.stack_heading,
            projects_heading: raw.projects_heading,
            contact_blurb: raw.contact_blurb,
            contact_label: raw.contact_label,
            contact,
            socials,
            footer: raw.footer,
        })
    }
}

fn parse_link(owner: &str, field: &'static str, value: Option<&str>) -> Result<LinkTarget, CatalogError> {
    let value = value.unwrap_or_default();
    LinkTarget::parse(value).map_err(|err| CatalogError::InvalidLink {
        owner: owner.to_string(),
        field,
        value: value.to_string(),
        reason: err.to_string(),
    })
}

/// Re-checks a link built outside [`LinkTarget::parse`].
fn check_link(owner: &str, field: &'static str, target: &LinkTarget) -> Result<(), CatalogError> {
    let LinkTarget::Url(value) = target else {
        return Ok(());
    };
    Url::parse(value).map(drop).map_err(|err| CatalogError::InvalidLink {
        owner: owner.to_string(),
        field,
        value: value.clone(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_fixture() -> RawContent {
        builtin::raw_content()
    }

    #[test]
    fn test_from_raw_builtin_content() {
        let catalog = ContentCatalog::from_raw(raw_fixture()).unwrap();
        assert_eq!(catalog.skills_for(Category::Frontend).len(), 7);
        assert_eq!(catalog.skills_for(Category::Backend).len(), 5);
        assert_eq!(catalog.skills_for(Category::Tools).len(), 4);
        assert_eq!(catalog.project_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let mut raw = raw_fixture();
        raw.skills.get_mut("backend").unwrap()[1].color = "#FFF".to_string();

        let err = ContentCatalog::from_raw(raw).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidColor {
                category: Category::Backend,
                skill: "Express".to_string(),
                value: "#FFF".to_string(),
            }
        );
        assert!(err.to_string().contains("Express"));
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let mut raw = raw_fixture();
        raw.projects[2].id = 1;

        let err = ContentCatalog::from_raw(raw).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProjectId { id: 1, .. }));
    }

    #[test]
    fn test_duplicate_skill_in_category_rejected() {
        let mut raw = raw_fixture();
        raw.skills
            .get_mut("tools")
            .unwrap()
            .push(RawSkill::new("Docker", "#2496ED", "docker"));

        let err = ContentCatalog::from_raw(raw).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateSkill {
                category: Category::Tools,
                name: "Docker".to_string(),
            }
        );
    }

    #[test]
    fn test_same_skill_name_across_categories_allowed() {
        let mut raw = raw_fixture();
        raw.skills
            .get_mut("tools")
            .unwrap()
            .push(RawSkill::new("React", "#61DAFB", "react"));

        assert!(ContentCatalog::from_raw(raw).is_ok());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut raw = raw_fixture();
        raw.skills
            .insert("design".to_string(), vec![RawSkill::new("Figma", "#F24E1E", "figma")]);

        let err = ContentCatalog::from_raw(raw).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(_)));
        assert!(err.to_string().contains("design"));
    }

    #[test]
    fn test_missing_category_rejected() {
        let mut raw = raw_fixture();
        raw.skills.remove("tools");

        let err = ContentCatalog::from_raw(raw).unwrap_err();
        assert_eq!(err, CatalogError::EmptyCategory(Category::Tools));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut raw = raw_fixture();
        raw.projects[0].title = "   ".to_string();

        let err = ContentCatalog::from_raw(raw).unwrap_err();
        assert_eq!(err, CatalogError::EmptyTitle { id: 1 });
    }

    #[test]
    fn test_invalid_link_rejected() {
        let mut raw = raw_fixture();
        raw.projects[1].demo_link = Some("vercel app".to_string());

        let err = ContentCatalog::from_raw(raw).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidLink { field: "demo", .. }
        ));
    }

    #[test]
    fn test_placeholder_links_accepted() {
        let mut raw = raw_fixture();
        raw.projects[0].repo_link = None;
        raw.projects[0].demo_link = Some("#".to_string());

        let catalog = ContentCatalog::from_raw(raw).unwrap();
        assert!(catalog.projects()[0].repo_link.is_unavailable());
        assert!(catalog.projects()[0].demo_link.is_unavailable());
    }

    fn typed_parts() -> (Profile, BTreeMap<Category, Vec<SkillRecord>>, Vec<ProjectRecord>) {
        let catalog = ContentCatalog::builtin().unwrap();
        let skills = Category::ALL
            .iter()
            .map(|category| (*category, catalog.skills_for(*category).to_vec()))
            .collect();
        (catalog.profile().clone(), skills, catalog.projects().to_vec())
    }

    #[test]
    fn test_new_rejects_unparsable_project_link() {
        let (profile, skills, mut projects) = typed_parts();
        projects[0].repo_link = LinkTarget::Url("not a url".to_string());

        let err = ContentCatalog::new(profile, skills, projects).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidLink {
                owner: "project 1".to_string(),
                field: "repository",
                value: "not a url".to_string(),
                reason: url::ParseError::RelativeUrlWithoutBase.to_string(),
            }
        );
    }

    #[test]
    fn test_new_rejects_unparsable_profile_links() {
        let (mut profile, skills, projects) = typed_parts();
        profile.contact = LinkTarget::Url("mail me".to_string());
        let err = ContentCatalog::new(profile, skills.clone(), projects.clone()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidLink { field: "contact", .. }));

        let (mut profile, _, _) = typed_parts();
        profile.socials[0].target = LinkTarget::Url("github".to_string());
        let err = ContentCatalog::new(profile, skills, projects).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidLink { field: "social", .. }));
    }

    #[test]
    fn test_new_accepts_unavailable_links() {
        let (profile, skills, mut projects) = typed_parts();
        projects[0].demo_link = LinkTarget::Unavailable;

        assert!(ContentCatalog::new(profile, skills, projects).is_ok());
    }

    #[test]
    fn test_title_and_description_trimmed() {
        let mut raw = raw_fixture();
        raw.projects[0].title = "  Padded Title \n".to_string();
        raw.projects[0].description = "\tPadded description.  ".to_string();

        let catalog = ContentCatalog::from_raw(raw).unwrap();
        assert_eq!(catalog.projects()[0].title, "Padded Title");
        assert_eq!(catalog.projects()[0].description, "Padded description.");
    }

    #[test]
    fn test_brand_defaults_to_name() {
        let mut raw = raw_fixture();
        raw.profile.brand = None;

        let catalog = ContentCatalog::from_raw(raw).unwrap();
        assert_eq!(catalog.profile().brand, "<Andy Garcia/>");
    }
}
