//! Project board: postings, faceted search, and the shared catalog service.

pub mod domain;
pub mod filter;
pub mod fixtures;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AdminContact, AdminContactView, Project, ProjectCardView, ProjectDetailView, ProjectId,
    TeamMember,
};
pub use filter::{filter_projects, tag_universe, ProjectFilter, SearchOutcome};
pub use repository::{InMemoryProjectRepository, ProjectRepository, RepositoryError};
pub use router::catalog_router;
pub use service::{CatalogSearch, CatalogServiceError, ProjectCatalogService};
