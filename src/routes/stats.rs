use axum::{extract::State, Json};

use crate::db::{self, PledgeCounts};
use crate::error::Result;
use crate::AppState;

/// Count successful and rejected pledges
pub async fn pledge_stats(State(state): State<AppState>) -> Result<Json<PledgeCounts>> {
    let counts = db::lock(&state.db)?.pledge_counts();
    Ok(Json(counts))
}
