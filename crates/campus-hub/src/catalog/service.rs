use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::domain::{Project, ProjectId};
use super::filter::{tag_universe, ProjectFilter, SearchOutcome};
use super::repository::{ProjectRepository, RepositoryError};

/// Catalog facade shared by the HTTP and CLI layers. Build it once and pass it
/// around by `Arc`.
pub struct ProjectCatalogService<R> {
    repository: Arc<R>,
    tags: Vec<String>,
}

impl<R> ProjectCatalogService<R>
where
    R: ProjectRepository + 'static,
{
    /// Loads the catalog once to derive the selectable tag set.
    pub fn new(repository: Arc<R>) -> Result<Self, CatalogServiceError> {
        let tags = tag_universe(&repository.all()?);
        Ok(Self { repository, tags })
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn search(&self, filter: &ProjectFilter) -> Result<CatalogSearch, CatalogServiceError> {
        let catalog = self.repository.all()?;
        let projects: Vec<Project> = filter.apply(&catalog).into_iter().cloned().collect();
        let outcome = SearchOutcome::classify(catalog.len(), projects.len());

        debug!(
            query = %filter.query,
            tags = filter.selected_tags.len(),
            matched = projects.len(),
            "catalog search"
        );

        Ok(CatalogSearch { projects, outcome })
    }

    pub fn find(&self, id: ProjectId) -> Result<Project, CatalogServiceError> {
        match self.repository.find(id)? {
            Some(project) => Ok(project),
            None => {
                warn!(project_id = %id, "project not found");
                Err(CatalogServiceError::NotFound(id))
            }
        }
    }

    /// Postings authored by administrators, in catalog order.
    pub fn admin_projects(&self) -> Result<Vec<Project>, CatalogServiceError> {
        Ok(self
            .repository
            .all()?
            .into_iter()
            .filter(|project| project.is_admin)
            .collect())
    }

    /// Leading entries of the catalog, as highlighted on the landing page.
    pub fn featured(&self, limit: usize) -> Result<Vec<Project>, CatalogServiceError> {
        Ok(self.repository.all()?.into_iter().take(limit).collect())
    }
}

/// Filtered projects plus the classification of an empty result.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSearch {
    pub projects: Vec<Project>,
    pub outcome: SearchOutcome,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("project {0} not found")]
    NotFound(ProjectId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CatalogServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
