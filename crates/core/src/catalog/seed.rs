//! Default project records bundled at compile time.
//!
//! The catalog is static by design: entries are authored here, validated at
//! load, and never written back. A content store could replace this without
//! touching the filter or lookup paths.

use super::project::Project;

/// Bundled catalog entries, in display order
pub const PROJECTS_JSON: &str = include_str!("defaults/projects.json");

/// Parse the bundled records
pub fn default_projects() -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(PROJECTS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses() {
        let projects = default_projects().unwrap();
        assert_eq!(projects.len(), 11);
    }

    #[test]
    fn test_seed_records_are_complete() {
        for project in default_projects().unwrap() {
            assert!(!project.id.is_empty());
            assert!(!project.title.is_empty());
            assert!(!project.tech_stack.is_empty(), "{} has no tech stack", project.id);
            assert!(!project.tags.is_empty(), "{} has no tags", project.id);
        }
    }
}
