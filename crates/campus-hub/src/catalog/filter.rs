use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::domain::Project;

/// Keep projects whose title or description contains `query` (case-insensitive)
/// and that carry at least one of `selected_tags`. An empty query or tag set
/// places no restriction. Catalog order is preserved.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    query: &str,
    selected_tags: &BTreeSet<String>,
) -> Vec<&'a Project> {
    let needle = query.to_lowercase();

    projects
        .iter()
        .filter(|project| query.is_empty() || project.mentions(&needle))
        .filter(|project| selected_tags.is_empty() || project.has_any_tag(selected_tags))
        .collect()
}

/// Every tag used across the catalog, deduplicated in first-seen order.
pub fn tag_universe(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    projects
        .iter()
        .flat_map(|project| project.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

/// Search box text plus the active tag chips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub selected_tags: BTreeSet<String>,
}

impl ProjectFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            selected_tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Selects `tag` if inactive, deselects it otherwise. Returns whether the
    /// tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.selected_tags.remove(tag) {
            false
        } else {
            self.selected_tags.insert(tag.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selected_tags.clear();
    }

    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty() && self.selected_tags.is_empty()
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.query, &self.selected_tags)
    }
}

/// Distinguishes the two empty results so callers can pick the right message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum SearchOutcome {
    EmptyCatalog,
    NoMatches,
    Matches(usize),
}

impl SearchOutcome {
    pub fn classify(catalog_size: usize, matched: usize) -> Self {
        match (catalog_size, matched) {
            (0, _) => Self::EmptyCatalog,
            (_, 0) => Self::NoMatches,
            (_, n) => Self::Matches(n),
        }
    }

    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::EmptyCatalog => Some("No projects created yet"),
            Self::NoMatches => Some("No projects found. Try adjusting your search or filters"),
            Self::Matches(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut filter = ProjectFilter::default();
        assert!(filter.toggle_tag("IoT"));
        assert!(filter.selected_tags.contains("IoT"));
        assert!(!filter.toggle_tag("IoT"));
        assert!(filter.is_unrestricted());
    }

    #[test]
    fn clear_resets_query_and_tags() {
        let mut filter = ProjectFilter::new("campus").with_tags(["AI/ML", "IoT"]);
        assert!(!filter.is_unrestricted());
        filter.clear();
        assert_eq!(filter, ProjectFilter::default());
    }

    #[test]
    fn outcome_distinguishes_empty_catalog() {
        assert_eq!(SearchOutcome::classify(0, 0), SearchOutcome::EmptyCatalog);
        assert_eq!(SearchOutcome::classify(6, 0), SearchOutcome::NoMatches);
        assert_eq!(SearchOutcome::classify(6, 2), SearchOutcome::Matches(2));
        assert!(SearchOutcome::Matches(2).message().is_none());
    }
}
