use super::domain::{Project, ProjectId};
use super::fixtures::sample_projects;

/// Read access to the project board. Missing ids are `Ok(None)`, not errors.
pub trait ProjectRepository: Send + Sync {
    fn all(&self) -> Result<Vec<Project>, RepositoryError>;
    fn find(&self, id: ProjectId) -> Result<Option<Project>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Fixed catalog loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Vec<Project>,
}

impl InMemoryProjectRepository {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn seeded() -> Self {
        Self::new(sample_projects())
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn all(&self) -> Result<Vec<Project>, RepositoryError> {
        Ok(self.projects.clone())
    }

    fn find(&self, id: ProjectId) -> Result<Option<Project>, RepositoryError> {
        Ok(self.projects.iter().find(|project| project.id == id).cloned())
    }
}
