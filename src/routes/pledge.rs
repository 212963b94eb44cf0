use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Redirect,
    Form,
};
use chrono::Local;
use serde::Deserialize;

use crate::constants::ERR_INVALID_AMOUNT;
use crate::db;
use crate::error::{AppError, Result};
use crate::pledging::{self, PledgeDecision, PledgeRequest, Rejection};
use crate::security::session_user;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PledgeForm {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub reward_id: Option<String>,
}

/// Parse the submitted amount; it must be present and a finite number above zero
pub fn parse_amount(raw: Option<&str>) -> Result<f64> {
    match raw.unwrap_or_default().trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(AppError::InvalidInput(ERR_INVALID_AMOUNT.to_string())),
    }
}

/// Pledge to a project
///
/// Returns 401 without a session, 404 for an unknown project and 400 with
/// the rejection reason when a business rule fails. Accepted pledges
/// redirect back to the project page.
pub async fn create_pledge(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<PledgeForm>,
) -> Result<Redirect> {
    let user_id = session_user(&headers, &state.config.session_secret_key)
        .ok_or(AppError::Unauthorized)?;

    let amount = parse_amount(form.amount.as_deref())?;
    let reward_id = form.reward_id.filter(|r| !r.trim().is_empty());

    let request = PledgeRequest {
        user_id,
        project_id: project_id.clone(),
        amount,
        reward_id,
    };

    let db = state.db.clone();
    let decision = tokio::task::spawn_blocking(move || -> Result<PledgeDecision> {
        let mut store = db::lock(&db)?;
        pledging::create_pledge(&mut store, &request, Local::now().naive_local())
    })
    .await??;

    match decision {
        PledgeDecision::Accepted(_) => Ok(Redirect::to(&format!("/project/{}", project_id))),
        PledgeDecision::Rejected(Rejection::ProjectNotFound) => Err(AppError::ProjectNotFound),
        PledgeDecision::Rejected(rejection) => Err(AppError::PledgeRejected(rejection.to_string())),
    }
}
