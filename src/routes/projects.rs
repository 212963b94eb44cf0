use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::Local;
use serde::Serialize;

use crate::constants::DEFAULT_SORT_KEY;
use crate::db;
use crate::error::{AppError, Result};
use crate::listing::{self, ListingQuery};
use crate::models::{Category, ProjectView, RewardTier};
use crate::security::session_user;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectView>,
    pub categories: Vec<Category>,
    pub query: Option<String>,
    pub selected_category: Option<String>,
    pub sort_by: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub project: ProjectView,
    pub rewards: Vec<RewardTier>,
    pub user_id: Option<String>,
}

/// Project listing
///
/// Query parameters: `q` (title search), `category` (category id) and
/// `sort_by` (`newest`, `deadline` or `most_funded`; defaults to `newest`).
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListingQuery>,
) -> Result<Json<ProjectListResponse>> {
    let today = Local::now().date_naive();
    let store = db::lock(&state.db)?;

    let projects = listing::list_projects(store.projects(), &params, today);
    tracing::debug!(
        "Listing {} projects (q={:?}, category={:?}, sort_by={:?})",
        projects.len(),
        params.q,
        params.category,
        params.sort_by
    );

    Ok(Json(ProjectListResponse {
        projects,
        categories: store.categories().to_vec(),
        query: params.q,
        selected_category: params.category,
        sort_by: params
            .sort_by
            .unwrap_or_else(|| DEFAULT_SORT_KEY.to_string()),
    }))
}

/// Project detail with its reward tiers
pub async fn project_details(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ProjectDetailResponse>> {
    let today = Local::now().date_naive();
    let user_id = session_user(&headers, &state.config.session_secret_key);
    let store = db::lock(&state.db)?;

    let project = store
        .project(&project_id)
        .ok_or(AppError::ProjectNotFound)?
        .view(today);
    let rewards = store
        .rewards_for_project(&project_id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ProjectDetailResponse {
        project,
        rewards,
        user_id,
    }))
}
