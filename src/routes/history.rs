use axum::{extract::State, routing::get, Json, Router};

use crate::error::Result;
use crate::models::PeriodHistoryEntry;
use crate::routes::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/period-history", get(get_period_history))
        .with_state(state)
}

/// Recorded periods, oldest first. Entries without a start sort first.
pub async fn get_period_history(State(state): State<AppState>) -> Result<Json<Vec<PeriodHistoryEntry>>> {
    let mut history = state.user_data().await?.period_history;
    history.sort_by_key(|entry| entry.start);
    Ok(Json(history))
}
