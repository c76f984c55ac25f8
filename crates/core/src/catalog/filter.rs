//! # Filter Engine
//!
//! Pure filtering over the catalog. Cheap enough to run on every keystroke:
//! a single linear scan, no allocation beyond the result vector.

use super::project::Project;

/// Filter `projects` by free-text query and selected tag.
///
/// The text predicate is a case-insensitive substring match against the
/// title, short description, and each tech-stack entry; an empty query
/// matches everything. The tag predicate requires exact membership as
/// authored; `None` matches everything. A project is included iff both
/// predicates hold, and catalog order is preserved.
pub fn filter<'a>(
    projects: &'a [Project],
    query: &str,
    tag: Option<&str>,
) -> Vec<&'a Project> {
    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|project| matches_query(project, &needle))
        .filter(|project| tag.map_or(true, |t| project.has_tag(t)))
        .collect()
}

fn matches_query(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(needle)
        || project.short_description.to_lowercase().contains(needle)
        || project
            .tech_stack
            .iter()
            .any(|tech| tech.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, title: &str, tech: &[&str], tags: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            short_description: format!("{title} in one line"),
            full_description: format!("{title} at length"),
            tech_stack: tech.iter().map(|t| t.to_string()).collect(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            thumbnail: String::new(),
            live_url: None,
            github_url: None,
            features: vec![],
            challenges: None,
            learnings: None,
            code_snippet: None,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("a", "Shop", &["React", "Redux"], &["React", "Frontend"]),
            project("b", "Chat", &["Socket.io"], &["Real-time"]),
            project("c", "Game", &["JavaScript"], &["Game", "Frontend"]),
        ]
    }

    fn ids(hits: &[&Project]) -> Vec<String> {
        hits.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_no_tag_is_identity() {
        let projects = sample();
        let hits = filter(&projects, "", None);
        assert_eq!(ids(&hits), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_result_preserves_catalog_order() {
        let projects = sample();
        // "a" and "c" share the tag; "b" in between drops out, order stays a, c
        let hits = filter(&projects, "", Some("Frontend"));
        assert_eq!(ids(&hits), vec!["a", "c"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let projects = sample();
        let upper = ids(&filter(&projects, "REDUX", None));
        let lower = ids(&filter(&projects, "redux", None));
        assert_eq!(upper, lower);
        assert_eq!(upper, vec!["a"]);
    }

    #[test]
    fn test_tag_match_is_exact_and_case_sensitive() {
        let projects = sample();
        assert_eq!(ids(&filter(&projects, "", Some("Game"))), vec!["c"]);
        assert!(filter(&projects, "", Some("game")).is_empty());
        assert!(filter(&projects, "", Some("Gam")).is_empty());
    }

    #[test]
    fn test_query_and_tag_combine_with_and() {
        let projects = sample();
        // Each predicate alone matches something, together they must agree
        assert!(filter(&projects, "redux", Some("Game")).is_empty());
        assert_eq!(ids(&filter(&projects, "redux", Some("React"))), vec!["a"]);

        // AND semantics: combined result is contained in each single-predicate result
        let combined = ids(&filter(&projects, "a", Some("React")));
        let by_query = ids(&filter(&projects, "a", None));
        let by_tag = ids(&filter(&projects, "", Some("React")));
        for id in &combined {
            assert!(by_query.contains(id));
            assert!(by_tag.contains(id));
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let projects = sample();
        let once: Vec<Project> =
            filter(&projects, "a", Some("React")).into_iter().cloned().collect();
        let twice = filter(&once, "a", Some("React"));
        assert_eq!(ids(&twice), once.iter().map(|p| p.id.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn test_no_match_and_empty_catalog() {
        let projects = sample();
        assert!(filter(&projects, "zzz", None).is_empty());
        assert!(filter(&[], "anything", None).is_empty());
    }

    #[test]
    fn test_search_corpus_scenario() {
        // Only "a" has tag React and Redux in its stack
        let projects = sample();
        assert_eq!(ids(&filter(&projects, "redux", None)), vec!["a"]);
        assert_eq!(ids(&filter(&projects, "", Some("React"))), vec!["a"]);
        assert!(filter(&projects, "zzz", None).is_empty());
    }
}
