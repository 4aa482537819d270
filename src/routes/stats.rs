use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::error::Result;
use crate::models::Profile;
use crate::routes::AppState;
use crate::stats::{profile_stats, ProfileStats};

#[derive(Serialize)]
pub struct MeResponse {
    profile: Profile,
    stats: ProfileStats,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/me", get(get_me))
        .with_state(state)
}

async fn get_me(State(state): State<AppState>) -> Result<Json<MeResponse>> {
    let data = state.user_data().await?;
    let stats = profile_stats(&data, state.clock.today());

    Ok(Json(MeResponse {
        profile: data.profile,
        stats,
    }))
}
