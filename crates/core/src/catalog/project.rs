//! # Project Records
//!
//! The immutable portfolio entry. Records are supplied to the catalog at
//! load time and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A highlighted code sample shown on the project detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSnippet {
    /// Caption shown above the sample
    pub title: String,
    /// The code itself, verbatim
    pub code: String,
    /// Syntax-highlighting hint (e.g. "javascript", "html")
    pub language: String,
}

/// A single portfolio entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique, stable identifier; doubles as the detail-page route parameter
    pub id: String,
    /// Display title
    pub title: String,
    /// One-line summary shown on listing cards
    pub short_description: String,
    /// Long-form description shown on the detail page
    pub full_description: String,
    /// Technologies used, in display order; part of the search corpus
    pub tech_stack: Vec<String>,
    /// Category labels for coarse filtering; order only matters for display
    pub tags: Vec<String>,
    /// Card/header image URI, resolved by the presentation layer
    pub thumbnail: String,
    /// Deployed site, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Source repository, if public
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Feature bullet points, in display order
    pub features: Vec<String>,
    /// What was hard about building it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,
    /// What building it taught
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learnings: Option<String>,
    /// Optional highlighted code sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<CodeSnippet>,
}

impl Project {
    /// Whether this project carries `tag` (exact, case-sensitive match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
