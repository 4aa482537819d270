use axum::{extract::State, routing::get, Json, Router};

use crate::error::{AppError, Result};
use crate::models::{Profile, ProfileEdit};
use crate::routes::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .with_state(state)
}

async fn get_profile(State(state): State<AppState>) -> Result<Json<Profile>> {
    Ok(Json(state.user_data().await?.profile))
}

/// Applies edited fields over the stored profile. `createdAt` and the rest
/// of the document are kept as they are.
async fn update_profile(
    State(state): State<AppState>,
    Json(body): Json<ProfileEdit>,
) -> Result<Json<Profile>> {
    let mut data = state.user_data().await?;
    data.profile = body
        .apply(&data.profile, state.clock.today())
        .map_err(AppError::Validation)?;
    state.store.save(&data).await?;
    tracing::info!("✏️ Profile updated");

    Ok(Json(data.profile))
}
