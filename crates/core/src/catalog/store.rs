//! # Project Catalog
//!
//! Read-only store of portfolio projects. The catalog is loaded once at
//! startup, validated, and never mutated afterwards; views receive it by
//! shared reference.

use std::collections::HashSet;

use thiserror::Error;

use super::project::Project;
use super::seed;

/// Catalog load failures. These are data-integrity errors: the process
/// should refuse to start rather than serve an ambiguous catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate project id: {0}")]
    DuplicateId(String),

    #[error("project \"{0}\" has an empty id")]
    EmptyId(String),

    #[error("failed to parse seed data: {0}")]
    Seed(#[from] serde_json::Error),
}

/// The full in-memory collection of project records
#[derive(Debug)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Validate and load an externally supplied sequence of projects.
    ///
    /// Ids must be unique across the catalog so lookups are unambiguous;
    /// duplicates fail fast here instead of silently resolving to whichever
    /// record a scan happens to hit first.
    pub fn load(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if project.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(project.title.clone()));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }
        tracing::debug!("catalog loaded with {} projects", projects.len());
        Ok(Self { projects })
    }

    /// Load the catalog bundled with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load(seed::default_projects()?)
    }

    /// Look up a single project by id. Absence is a lookup-miss, not an
    /// error; callers render a not-found state.
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// All projects in catalog order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Unique tags in order of first appearance, for the filter badges
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for project in &self.projects {
            for tag in &project.tags {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }
}
