//! # Projects API
//!
//! Listing, tag, and detail endpoints over the project catalog.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use portfolio_core::catalog::Project;
use portfolio_core::listing::{ListingMode, ListingState};

use crate::SharedState;

/// Search/filter constraints for the listing
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListParams {
    /// Free-text search over title, summary, and tech stack
    pub q: Option<String>,
    /// Exact tag to filter by
    pub tag: Option<String>,
}

/// Card-sized view of a project, for the listing grid
#[derive(Serialize, ToSchema)]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub tech_stack: Vec<String>,
    pub tags: Vec<String>,
    pub thumbnail: String,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            short_description: project.short_description.clone(),
            tech_stack: project.tech_stack.clone(),
            tags: project.tags.clone(),
            thumbnail: project.thumbnail.clone(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummary>,
    /// Projects matching the current constraints ("Showing X of Y")
    pub shown: usize,
    /// Size of the full catalog
    pub total: usize,
    /// "idle" with no constraints, "filtered" otherwise
    pub mode: String,
}

#[derive(Serialize, ToSchema)]
pub struct TagListResponse {
    /// Unique tags in order of first appearance
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CodeSnippetResponse {
    pub title: String,
    pub code: String,
    pub language: String,
}

/// Full record, for the detail page
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectDetailResponse {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub tech_stack: Vec<String>,
    pub tags: Vec<String>,
    pub thumbnail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learnings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<CodeSnippetResponse>,
}

impl From<&Project> for ProjectDetailResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            short_description: project.short_description.clone(),
            full_description: project.full_description.clone(),
            tech_stack: project.tech_stack.clone(),
            tags: project.tags.clone(),
            thumbnail: project.thumbnail.clone(),
            live_url: project.live_url.clone(),
            github_url: project.github_url.clone(),
            features: project.features.clone(),
            challenges: project.challenges.clone(),
            learnings: project.learnings.clone(),
            code_snippet: project.code_snippet.as_ref().map(|s| CodeSnippetResponse {
                title: s.title.clone(),
                code: s.code.clone(),
                language: s.language.clone(),
            }),
        }
    }
}

/// Body of the 404 rendered when an id matches nothing
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectNotFoundResponse {
    pub error: String,
    pub id: String,
    /// Where the not-found page links back to
    pub back: String,
}

pub fn project_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_projects))
        .route("/tags", get(list_tags))
        .route("/:id", get(get_project))
}

/// List projects, filtered by free-text query and/or tag
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "projects",
    params(ListParams),
    responses(
        (status = 200, description = "Filtered project listing", body = ProjectListResponse)
    )
)]
pub async fn list_projects(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Json<ProjectListResponse> {
    let listing = ListingState::new(
        params.q.unwrap_or_default(),
        params.tag.filter(|t| !t.is_empty()),
    );
    let hits = listing.apply(&state.catalog);

    let mode = match listing.mode() {
        ListingMode::Idle => "idle",
        ListingMode::Filtered => "filtered",
    };

    Json(ProjectListResponse {
        shown: hits.len(),
        total: state.catalog.len(),
        mode: mode.to_string(),
        projects: hits.into_iter().map(ProjectSummary::from).collect(),
    })
}

/// List the unique tags used across the catalog
#[utoipa::path(
    get,
    path = "/api/v1/projects/tags",
    tag = "projects",
    responses(
        (status = 200, description = "All tags, first-seen order", body = TagListResponse)
    )
)]
pub async fn list_tags(State(state): State<SharedState>) -> Json<TagListResponse> {
    Json(TagListResponse {
        tags: state.catalog.all_tags(),
    })
}

/// Fetch one project by id
#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Full project record", body = ProjectDetailResponse),
        (status = 404, description = "No project with that id", body = ProjectNotFoundResponse)
    )
)]
pub async fn get_project(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectDetailResponse>, (StatusCode, Json<ProjectNotFoundResponse>)> {
    match state.catalog.get(&id) {
        Some(project) => Ok(Json(project.into())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ProjectNotFoundResponse {
                error: "Project Not Found".to_string(),
                id,
                back: "/projects".to_string(),
            }),
        )),
    }
}
