//! Content validation command.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::load_content;
use crate::catalog::ContentCatalog;
use crate::models::Category;

/// Validate content and report the first problem
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Validation errors are returned, which makes the binary exit with 1.
    pub fn execute(&self, content: Option<&Path>) -> Result<()> {
        let catalog = load_content(content)?;
        let source = content.map_or_else(|| "built-in content".to_string(), |p| p.display().to_string());
        println!("✓ {source} is valid: {}", summary(&catalog));
        Ok(())
    }
}

/// One-line description of a catalog.
#[must_use]
pub fn summary(catalog: &ContentCatalog) -> String {
    let skills = Category::ALL
        .iter()
        .map(|category| format!("{} {}", catalog.skills_for(*category).len(), category))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{skills} skills, {} projects", catalog.projects().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_builtin() {
        let catalog = ContentCatalog::builtin().unwrap();
        assert_eq!(
            summary(&catalog),
            "7 frontend, 5 backend, 4 tools skills, 3 projects"
        );
    }
}
