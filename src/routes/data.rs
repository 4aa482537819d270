use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::UserData;
use crate::routes::AppState;

#[derive(Deserialize)]
struct ClearQuery {
    #[serde(default)]
    confirm: bool,
    #[serde(default)]
    confirm_again: bool,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/export", get(export_data))
        .route("/import", post(import_data))
        .route("/data", delete(clear_data))
        .with_state(state)
}

pub fn export_file_name(date: chrono::NaiveDate) -> String {
    format!("miriam-cycle-data-{}.json", date)
}

async fn export_data(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let data = state.user_data().await?;
    let body = serde_json::to_string_pretty(&data)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(state.clock.today())
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// Replaces all stored data with the uploaded document. Nothing is written
/// unless the whole body parses.
async fn import_data(State(state): State<AppState>, body: String) -> Result<Json<UserData>> {
    let imported: UserData = serde_json::from_str(&body).map_err(|e| {
        tracing::warn!("⚠️ Import rejected: {}", e);
        AppError::Import("please check the file format".into())
    })?;

    state.store.save(&imported).await?;
    tracing::info!("📥 Data imported, {} daily logs", imported.daily_logs.len());

    Ok(Json(imported))
}

async fn clear_data(
    State(state): State<AppState>,
    Query(query): Query<ClearQuery>,
) -> Result<StatusCode> {
    if !(query.confirm && query.confirm_again) {
        return Err(AppError::ConfirmationRequired(
            "Deleting all data needs confirm=true and confirm_again=true".into(),
        ));
    }

    if state.store.clear().await? {
        tracing::warn!("🗑️ All user data deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
