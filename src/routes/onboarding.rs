use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::error::{AppError, Result};
use crate::models::{ProfileInput, UserData};
use crate::routes::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/onboarding", post(complete_onboarding))
        .with_state(state)
}

async fn complete_onboarding(
    State(state): State<AppState>,
    Json(body): Json<ProfileInput>,
) -> Result<(StatusCode, Json<UserData>)> {
    if state.store.load().await?.is_some() {
        return Err(AppError::Conflict("Onboarding already completed".into()));
    }

    body.validate(state.clock.today()).map_err(AppError::Validation)?;

    let data = UserData::onboard(body.to_profile(Some(state.clock.now())));
    state.store.save(&data).await?;
    tracing::info!("🌱 Onboarding completed, cycle length {}", data.profile.average_cycle_length);

    Ok((StatusCode::CREATED, Json(data)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::phase::PhaseScheme;
    use crate::routes::test_support::{onboarding_body, send, test_app};

    #[tokio::test]
    async fn test_onboarding_creates_user_data() {
        let (app, store) = test_app(PhaseScheme::Fine).await;
        let (status, body) = send(&app, Method::POST, "/onboarding", Some(onboarding_body(10))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["dailyLogs"], json!({}));
        assert_eq!(body["periodHistory"][0]["cycleLength"], json!(null));
        assert_eq!(body["personalPatterns"]["cyclesLogged"], json!(0));
        assert!(body["profile"]["createdAt"].is_string());
        assert!(store.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_onboarding_twice_conflicts() {
        let (app, _) = test_app(PhaseScheme::Fine).await;
        send(&app, Method::POST, "/onboarding", Some(onboarding_body(10))).await;
        let (status, _) = send(&app, Method::POST, "/onboarding", Some(onboarding_body(12))).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_onboarding_rejects_bad_lengths() {
        let (app, store) = test_app(PhaseScheme::Fine).await;
        let mut body = onboarding_body(10);
        body["averageCycleLength"] = json!(5);
        let (status, err) = send(&app, Method::POST, "/onboarding", Some(body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err["error"].as_str().unwrap().contains("averageCycleLength"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_stored_document_allows_onboarding() {
        let (app, store) = test_app(PhaseScheme::Fine).await;
        store.write_raw("]]").await.unwrap();
        let (status, _) = send(&app, Method::POST, "/onboarding", Some(onboarding_body(10))).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}
