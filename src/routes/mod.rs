pub mod auth;
pub mod health;
pub mod pledge;
pub mod projects;
pub mod stats;

use axum::{
    routing::{get, post},
    Router,
};

pub use auth::{login, login_form, logout};
pub use health::health_check;
pub use pledge::create_pledge;
pub use projects::{list_projects, project_details};
pub use stats::pledge_stats;

use crate::AppState;

/// Build the application router (without middleware layers)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_projects))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
        .route("/project/:project_id", get(project_details))
        .route("/pledge/:project_id", post(create_pledge))
        .route("/stats", get(pledge_stats))
        .route("/health", get(health_check))
        .with_state(state)
}
