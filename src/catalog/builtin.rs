//! Compiled-in portfolio content.

use std::collections::BTreeMap;

use super::raw::{RawContent, RawProfile, RawProject, RawSkill, RawSocial};
use super::{CatalogError, ContentCatalog};

const GITHUB_PROFILE: &str = "https://github.com/AndyGar04";
const LINKEDIN_PROFILE: &str = "https://www.linkedin.com/in/andy-garcia-programador/";

/// Returns the built-in content before validation.
#[must_use]
pub fn raw_content() -> RawContent {
    let mut skills = BTreeMap::new();
    skills.insert(
        "frontend".to_string(),
        vec![
            RawSkill::new("React", "#61DAFB", "react"),
            RawSkill::new("TypeScript", "#3178C6", "typescript"),
            RawSkill::new("Tailwind", "#06B6D4", "tailwindcss"),
            RawSkill::new("HTML5", "#E34F26", "html5"),
            RawSkill::new("CSS3", "#1572B6", "css3"),
            RawSkill::new("JavaScript", "#F7DF1E", "javascript"),
            RawSkill::new("Vite", "#646CFF", "vite"),
        ],
    );
    skills.insert(
        "backend".to_string(),
        vec![
            RawSkill::new("Node.js", "#339933", "nodedotjs"),
            RawSkill::new("Express", "#000000", "express"),
            RawSkill::new("PostgreSQL", "#4169E1", "postgresql"),
            RawSkill::new("MongoDB", "#47A248", "mongodb"),
            RawSkill::new("JWT Auth", "#D63AFF", "jsonwebtokens"),
        ],
    );
    skills.insert(
        "tools".to_string(),
        vec![
            RawSkill::new("GitHub", "#181717", "github"),
            RawSkill::new("Postman", "#FF6C37", "postman"),
            RawSkill::new("Docker", "#2496ED", "docker"),
            RawSkill::new("Jira", "#0052CC", "jira"),
        ],
    );

    RawContent {
        profile: profile(),
        skills,
        projects: projects(),
    }
}

impl ContentCatalog {
    /// Builds the validated built-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_raw(raw_content())
    }
}

fn profile() -> RawProfile {
    RawProfile {
        name: "Andy Garcia".to_string(),
        brand: Some("<Andy Garcia/>".to_string()),
        role: "Desarrollador Full Stack".to_string(),
        greeting: "¡Bienvenidos a mi Portafolio!".to_string(),
        intro: "Programando y experimentando desde Bahía Blanca, Argentina. \
                Especializado en aplicaciones web funcionales y escalables."
            .to_string(),
        portrait: "/FotoGit.jpg".to_string(),
        card_title: "Programador".to_string(),
        card_caption: "Codeando, sin aflojar!".to_string(),
        about: vec![
            "Soy un desarrollador buscando mejor día a día, terminando este 2025 la carrera de \
             Tecnico Universitario en Programacion, buscando mi primer experiencia laboral."
                .to_string(),
            "Me considero atento, responsable y cuento con la capacidad de resolver problemas de \
             desarrollo de software tanto en el frontend como en el backend."
                .to_string(),
            "Preparado para crear soluciones eficientes y escalables que brinden una experiencia \
             de usuario excepcional."
                .to_string(),
        ],
        stack_heading: "Stack Tecnológico".to_string(),
        projects_heading: "Proyectos Destacados".to_string(),
        contact_blurb: "Estoy disponible para nuevos desafíos ¡Contactame y coordinemos!".to_string(),
        contact_label: "Enviar Correo".to_string(),
        contact: "mailto:tuemail@ejemplo.com".to_string(),
        socials: vec![
            RawSocial {
                label: "GitHub".to_string(),
                icon: "github".to_string(),
                url: GITHUB_PROFILE.to_string(),
            },
            RawSocial {
                label: "LinkedIn".to_string(),
                icon: "linkedin".to_string(),
                url: LINKEDIN_PROFILE.to_string(),
            },
        ],
        footer: "© 2026, Andy Garcia. Tecnico en Programacion. Todos los derechos reservados."
            .to_string(),
    }
}

fn projects() -> Vec<RawProject> {
    vec![
        RawProject {
            id: 1,
            title: "Plataforma de reservas de canchas - API".to_string(),
            description: "Aplicación web para reservar canchas deportivas, gestion de usuarios, canchas"
                .to_string(),
            tags: tags(&["Node.js", "TypeScript", "SQLite", "Express", "JWT"]),
            repo_link: Some("https://github.com/AndyGar04/Proyecto-Final-Tup-BackEnd".to_string()),
            demo_link: Some("https://proyecto-final-tup-back-end.vercel.app/".to_string()),
            image_ref: "/SportManagerBack.jpg".to_string(),
        },
        RawProject {
            id: 2,
            title: "Plataforma de reservas de canchas - Frontend".to_string(),
            description: "Interfaz web para la plataforma de reservas de canchas, con autenticación \
                          y gestión de reservas."
                .to_string(),
            tags: tags(&["React", "TypeScript", "Tailwind CSS", "Vite"]),
            repo_link: Some("https://github.com/AndyGar04/Proyecto-Final-FrontEnd".to_string()),
            demo_link: Some(
                "https://proyecto-final-frontend-one-beta.vercel.app/presentacion".to_string(),
            ),
            image_ref: "/SportManager.jpg".to_string(),
        },
        RawProject {
            id: 3,
            title: "Sistema de gestion de inventarios - Proyecto FullStack".to_string(),
            description: "Aplicación web para gestionar inventarios, con funcionalidades de CRUD y \
                          panel de administración."
                .to_string(),
            tags: tags(&["React", "JavaScript", "Express", "Nginx", "PostgreSQL", "Docker"]),
            repo_link: Some(
                "https://github.com/AndyGar04/ProgramacionIII/tree/main/Proyecto-Final".to_string(),
            ),
            demo_link: Some("#".to_string()),
            image_ref: "/GestionDeStock.jpg".to_string(),
        },
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| (*t).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{is_hex_color, Category};

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(ContentCatalog::builtin().is_ok());
    }

    #[test]
    fn test_every_category_has_skills() {
        let catalog = ContentCatalog::builtin().unwrap();
        for category in Category::ALL {
            let skills = catalog.skills_for(category);
            assert!(!skills.is_empty(), "{category} should have skills");
            for skill in skills {
                assert!(is_hex_color(&skill.display_color.to_hex()));
            }
        }
    }

    #[test]
    fn test_backend_order_preserved() {
        let catalog = ContentCatalog::builtin().unwrap();
        let names: Vec<&str> = catalog
            .skills_for(Category::Backend)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Node.js", "Express", "PostgreSQL", "MongoDB", "JWT Auth"]);
    }

    #[test]
    fn test_third_project_has_no_demo() {
        let catalog = ContentCatalog::builtin().unwrap();
        let project = &catalog.projects()[2];
        assert_eq!(project.id, 3);
        assert!(project.demo_link.is_unavailable());
        assert!(!project.repo_link.is_unavailable());
    }

    #[test]
    fn test_contact_is_mailto() {
        let catalog = ContentCatalog::builtin().unwrap();
        assert_eq!(
            catalog.profile().contact.url(),
            Some("mailto:tuemail@ejemplo.com")
        );
    }
}
