use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::db;
use crate::AppState;

/// Health check endpoint
///
/// Reports whether the store is usable and how many projects it holds.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let projects = match db::lock(&state.db) {
        Ok(store) => Some(store.projects().len()),
        Err(_) => {
            tracing::error!("Health check found the store lock poisoned");
            None
        }
    };

    Json(json!({
        "status": if projects.is_some() { "healthy" } else { "unhealthy" },
        "projects": projects,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
