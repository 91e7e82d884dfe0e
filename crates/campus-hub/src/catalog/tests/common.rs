use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::catalog::domain::{Project, ProjectId, TeamMember};
use crate::catalog::repository::{
    InMemoryProjectRepository, ProjectRepository, RepositoryError,
};
use crate::catalog::service::ProjectCatalogService;

pub(super) fn project(id: u32, title: &str, description: &str, tags: &[&str]) -> Project {
    Project {
        id: ProjectId(id),
        title: title.to_string(),
        description: description.to_string(),
        full_description: None,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        deadline: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        posted_on: NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date"),
        team_size: 4,
        team_members: Vec::new(),
        is_admin: false,
        progress: None,
        requirements: Vec::new(),
        admin_contact: None,
    }
}

pub(super) fn member(name: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: "Developer".to_string(),
        avatar: format!("https://avatars.test/{name}"),
    }
}

pub(super) fn seeded_service() -> Arc<ProjectCatalogService<InMemoryProjectRepository>> {
    Arc::new(
        ProjectCatalogService::new(Arc::new(InMemoryProjectRepository::seeded()))
            .expect("seeded catalog loads"),
    )
}

pub(super) fn titles(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|project| project.title.clone()).collect()
}

pub(super) struct OfflineRepository;

impl ProjectRepository for OfflineRepository {
    fn all(&self) -> Result<Vec<Project>, RepositoryError> {
        Err(RepositoryError::Unavailable("catalog offline".to_string()))
    }

    fn find(&self, _id: ProjectId) -> Result<Option<Project>, RepositoryError> {
        Err(RepositoryError::Unavailable("catalog offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json")
}
