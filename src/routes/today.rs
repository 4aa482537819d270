use axum::{extract::State, routing::get, Json, Router};
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::guidance::{get_guidance, Guidance};
use crate::models::DailyLog;
use crate::phase::{calculate_phase, PhaseInfo};
use crate::routes::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayView {
    pub date: NaiveDate,
    pub phase: Option<PhaseInfo>,
    pub today_log: Option<DailyLog>,
    pub guidance: Option<Guidance>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/today", get(get_today))
        .with_state(state)
}

async fn get_today(State(state): State<AppState>) -> Result<Json<TodayView>> {
    let data = state.user_data().await?;
    let today = state.clock.today();

    let phase = calculate_phase(&data.profile, today, state.scheme)?;
    let today_log = data.log_for(today).cloned();
    let guidance = phase
        .as_ref()
        .map(|info| get_guidance(info.phase, today_log.as_ref()));

    Ok(Json(TodayView { date: today, phase, today_log, guidance }))
}
