use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use super::domain::{ProjectCardView, ProjectId};
use super::filter::ProjectFilter;
use super::repository::ProjectRepository;
use super::service::{CatalogServiceError, ProjectCatalogService};

/// Number of postings highlighted on the landing page.
pub const FEATURED_COUNT: usize = 3;

/// Router builder exposing the project board.
pub fn catalog_router<R>(service: Arc<ProjectCatalogService<R>>) -> Router
where
    R: ProjectRepository + 'static,
{
    Router::new()
        .route("/api/v1/projects", get(search_handler::<R>))
        .route("/api/v1/projects/tags", get(tags_handler::<R>))
        .route("/api/v1/projects/featured", get(featured_handler::<R>))
        .route("/api/v1/projects/:project_id", get(detail_handler::<R>))
        .route("/api/v1/admin/projects", get(admin_handler::<R>))
        .with_state(service)
}

/// Search query string. Tags may be comma separated (`?tags=IoT,AI/ML`),
/// repeated (`?tags=IoT&tags=AI/ML`) or both.
#[derive(Debug, Default)]
pub(crate) struct SearchParams {
    pub(crate) q: String,
    pub(crate) tags: Vec<String>,
}

impl SearchParams {
    /// Later `q` values win; unknown keys are ignored.
    pub(crate) fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => params.q = value,
                "tags" => params.tags.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty())
                        .map(str::to_string),
                ),
                _ => {}
            }
        }
        params
    }

    pub(crate) fn into_filter(self) -> ProjectFilter {
        ProjectFilter::new(self.q).with_tags(self.tags)
    }
}

pub(crate) async fn search_handler<R>(
    State(service): State<Arc<ProjectCatalogService<R>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    let filter = SearchParams::from_pairs(pairs).into_filter();
    match service.search(&filter) {
        Ok(search) => {
            let cards: Vec<ProjectCardView> =
                search.projects.iter().map(ProjectCardView::from).collect();
            let payload = json!({
                "outcome": search.outcome,
                "message": search.outcome.message(),
                "projects": cards,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn tags_handler<R>(
    State(service): State<Arc<ProjectCatalogService<R>>>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    let payload = json!({ "tags": service.tags() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn featured_handler<R>(
    State(service): State<Arc<ProjectCatalogService<R>>>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    match service.featured(FEATURED_COUNT) {
        Ok(projects) => {
            let cards: Vec<ProjectCardView> = projects.iter().map(ProjectCardView::from).collect();
            (StatusCode::OK, axum::Json(json!({ "projects": cards }))).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<ProjectCatalogService<R>>>,
    Path(raw_id): Path<String>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    let Ok(project_id) = raw_id.trim().parse::<u32>() else {
        debug!(project_id = %raw_id, "unparsable project id");
        return project_not_found(raw_id);
    };

    match service.find(ProjectId(project_id)) {
        Ok(project) => (StatusCode::OK, axum::Json(project.detail())).into_response(),
        Err(CatalogServiceError::NotFound(id)) => project_not_found(id),
        Err(other) => internal_error(other),
    }
}

fn project_not_found(project_id: impl Serialize) -> Response {
    let payload = json!({
        "error": "project not found",
        "project_id": project_id,
        "back_to": "/projects",
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

pub(crate) async fn admin_handler<R>(
    State(service): State<Arc<ProjectCatalogService<R>>>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    match service.admin_projects() {
        Ok(projects) => {
            let cards: Vec<ProjectCardView> = projects.iter().map(ProjectCardView::from).collect();
            let payload = json!({
                "projects": cards,
                "message": cards.is_empty().then_some("No projects created yet"),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

fn internal_error(error: CatalogServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
