use super::common::*;
use crate::catalog::filter::{filter_projects, tag_universe, ProjectFilter};
use crate::catalog::fixtures::sample_projects;
use std::collections::BTreeSet;

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn unrestricted_filter_returns_full_catalog_in_order() {
    let catalog = sample_projects();
    let result = filter_projects(&catalog, "", &BTreeSet::new());

    let ids: Vec<u32> = result.iter().map(|project| project.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn query_matches_title_or_description_case_insensitively() {
    let catalog = vec![
        project(1, "Campus Navigation", "Wayfinding app", &["AI/ML"]),
        project(2, "Textbook Exchange", "Trade books on CAMPUS", &["Web"]),
        project(3, "Lab Simulator", "Chemistry in AR", &["AR/VR"]),
    ];

    let result = filter_projects(&catalog, "cAmPuS", &BTreeSet::new());

    assert_eq!(
        titles(&result),
        vec!["Campus Navigation".to_string(), "Textbook Exchange".to_string()]
    );
    for project in &result {
        let haystack = format!("{} {}", project.title, project.description).to_lowercase();
        assert!(haystack.contains("campus"));
    }
}

#[test]
fn selected_tags_require_a_non_empty_intersection() {
    let catalog = sample_projects();
    let selected = tags(&["IoT", "Health"]);

    let result = filter_projects(&catalog, "", &selected);

    assert_eq!(
        titles(&result),
        vec![
            "Sustainable Campus Waste Management".to_string(),
            "Mental Health Support App".to_string(),
        ]
    );
    assert!(result.iter().all(|project| project.has_any_tag(&selected)));
}

#[test]
fn query_and_tags_are_combined_with_and() {
    let catalog = sample_projects();

    let result = filter_projects(&catalog, "mobile", &tags(&["UX Design"]));
    assert_eq!(
        titles(&result),
        vec![
            "AI-Powered Campus Navigation System".to_string(),
            "Mental Health Support App".to_string(),
        ]
    );

    let none = filter_projects(&catalog, "mobile", &tags(&["Database"]));
    assert!(none.is_empty());
}

#[test]
fn filtering_is_idempotent() {
    let catalog = sample_projects();
    let selected = tags(&["Web Development", "AI/ML"]);

    let first: Vec<_> = filter_projects(&catalog, "platform", &selected)
        .into_iter()
        .cloned()
        .collect();
    let second = filter_projects(&first, "platform", &selected);

    assert_eq!(second.len(), first.len());
    assert!(second.iter().zip(first.iter()).all(|(a, b)| a.id == b.id));
}

#[test]
fn unknown_tags_and_empty_catalog_yield_nothing() {
    let catalog = sample_projects();
    assert!(filter_projects(&catalog, "", &tags(&["Quantum"])).is_empty());
    assert!(filter_projects(&[], "campus", &BTreeSet::new()).is_empty());
}

#[test]
fn tag_universe_deduplicates_in_first_seen_order() {
    let catalog = vec![
        project(1, "A", "a", &["Mobile", "AI/ML"]),
        project(2, "B", "b", &["IoT", "Mobile"]),
        project(3, "C", "c", &["AI/ML", "Health"]),
    ];

    let universe = tag_universe(&catalog);
    assert_eq!(universe, ["Mobile", "AI/ML", "IoT", "Health"]);
}

#[test]
fn sample_catalog_exposes_fifteen_distinct_tags() {
    let universe = tag_universe(&sample_projects());
    assert_eq!(universe.len(), 15);
    assert_eq!(universe.first().map(String::as_str), Some("Mobile Development"));
}

#[test]
fn project_filter_applies_toggled_tags() {
    let catalog = sample_projects();
    let mut filter = ProjectFilter::default();
    filter.toggle_tag("Education");

    let result = filter.apply(&catalog);
    assert_eq!(titles(&result), vec!["AR Chemistry Lab Simulator".to_string()]);

    filter.toggle_tag("Education");
    assert_eq!(filter.apply(&catalog).len(), catalog.len());
}
