//! End-to-end behavior of the project board through the public catalog facade.

use std::sync::Arc;

use campus_hub::catalog::{
    InMemoryProjectRepository, ProjectCatalogService, ProjectFilter, ProjectId, SearchOutcome,
};

fn service() -> ProjectCatalogService<InMemoryProjectRepository> {
    ProjectCatalogService::new(Arc::new(InMemoryProjectRepository::seeded()))
        .expect("seeded catalog loads")
}

fn ids(filter: &ProjectFilter) -> Vec<u32> {
    service()
        .search(filter)
        .expect("search succeeds")
        .projects
        .iter()
        .map(|project| project.id.0)
        .collect()
}

#[test]
fn toggling_tags_narrows_and_restores_the_board() {
    let mut filter = ProjectFilter::default();
    assert_eq!(ids(&filter), vec![1, 2, 3, 4, 5, 6]);

    filter.toggle_tag("Web Development");
    assert_eq!(ids(&filter), vec![3, 5]);

    filter.toggle_tag("IoT");
    assert_eq!(ids(&filter), vec![2, 3, 5]);

    filter.query = "TEXTBOOK".to_string();
    assert_eq!(ids(&filter), vec![5]);

    filter.clear();
    assert_eq!(ids(&filter), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn unmatched_search_explains_itself() {
    let search = service()
        .search(&ProjectFilter::new("quantum").with_tags(["Health"]))
        .expect("search succeeds");

    assert_eq!(search.outcome, SearchOutcome::NoMatches);
    assert_eq!(
        search.outcome.message(),
        Some("No projects found. Try adjusting your search or filters")
    );
}

#[test]
fn student_posting_detail_uses_contact_fallbacks() {
    let project = service().find(ProjectId(3)).expect("project 3 exists");
    let detail = project.detail();

    assert_eq!(detail.open_slots, 2);
    assert_eq!(detail.progress, 10);
    assert_eq!(
        detail.requirements,
        vec!["No specific requirements listed for this project.".to_string()]
    );
    assert_eq!(detail.contact.name, "Project Admin");
    assert_eq!(detail.contact.email, "admin@university.edu");
}

#[test]
fn admin_board_lists_administrator_postings() {
    let admin: Vec<u32> = service()
        .admin_projects()
        .expect("admin listing")
        .iter()
        .map(|project| project.id.0)
        .collect();

    assert_eq!(admin, vec![1, 2, 4, 6]);
}

#[test]
fn unknown_project_is_not_found() {
    let error = service().find(ProjectId(42)).expect_err("no such project");
    assert!(error.is_not_found());
}
