use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{DailyLog, DailyLogInput};
use crate::routes::{parse_date, AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedLog {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub log: DailyLog,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/logs", get(list_logs))
        .route("/logs/:date", get(get_log).put(save_log))
        .with_state(state)
}

async fn list_logs(State(state): State<AppState>) -> Result<Json<Vec<DatedLog>>> {
    let data = state.user_data().await?;
    let logs = data
        .daily_logs
        .into_iter()
        .map(|(date, log)| DatedLog { date, log })
        .collect();
    Ok(Json(logs))
}

async fn get_log(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DailyLog>> {
    let date = parse_date(&date)?;
    let data = state.user_data().await?;
    data.log_for(date)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No log for {}", date)))
}

/// Creates or overwrites the log for one date.
async fn save_log(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(body): Json<DailyLogInput>,
) -> Result<Json<DailyLog>> {
    let date = parse_date(&date)?;
    if date > state.clock.today() {
        return Err(AppError::Validation("Cannot log a future date".into()));
    }
    body.validate().map_err(AppError::Validation)?;

    let mut data = state.user_data().await?;
    let log = body.into_log(state.clock.now());
    let replaced = data.daily_logs.insert(date, log.clone()).is_some();
    state.store.save(&data).await?;

    if replaced {
        tracing::info!("📝 Log for {} updated", date);
    } else {
        tracing::info!("📝 Log for {} saved", date);
    }

    Ok(Json(log))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::phase::PhaseScheme;
    use crate::routes::test_support::{onboarding_body, send, test_app};

    fn entry(sleep: f64, mood: &str) -> serde_json::Value {
        json!({ "sleep": sleep, "mood": mood, "energy": "medium", "stress": "low" })
    }

    #[tokio::test]
    async fn test_logging_requires_onboarding() {
        let (app, _) = test_app(PhaseScheme::Fine).await;
        let (status, _) = send(&app, Method::PUT, "/logs/2025-06-15", Some(entry(7.0, "good"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_log_is_overwritten_per_date() {
        let (app, store) = test_app(PhaseScheme::Fine).await;
        send(&app, Method::POST, "/onboarding", Some(onboarding_body(10))).await;

        let (status, first) = send(&app, Method::PUT, "/logs/2025-06-15", Some(entry(7.0, "good"))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(first["timestamp"].is_string());

        let mut second = entry(5.5, "poor");
        second["notes"] = json!("headache");
        send(&app, Method::PUT, "/logs/2025-06-15", Some(second)).await;

        let (status, log) = send(&app, Method::GET, "/logs/2025-06-15", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(log["mood"], json!("poor"));
        assert_eq!(log["sleep"], json!(5.5));
        assert_eq!(log["notes"], json!("headache"));
        assert_eq!(store.load().await.unwrap().unwrap().daily_logs.len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_date() {
        let (app, _) = test_app(PhaseScheme::Fine).await;
        send(&app, Method::POST, "/onboarding", Some(onboarding_body(10))).await;
        send(&app, Method::PUT, "/logs/2025-06-14", Some(entry(8.0, "great"))).await;
        send(&app, Method::PUT, "/logs/2025-06-12", Some(entry(6.0, "okay"))).await;

        let (_, list) = send(&app, Method::GET, "/logs", None).await;
        assert_eq!(list[0]["date"], json!("2025-06-12"));
        assert_eq!(list[1]["date"], json!("2025-06-14"));
        assert_eq!(list[1]["mood"], json!("great"));
    }

    #[tokio::test]
    async fn test_bad_dates_and_values_are_rejected() {
        let (app, _) = test_app(PhaseScheme::Fine).await;
        send(&app, Method::POST, "/onboarding", Some(onboarding_body(10))).await;

        let (status, _) = send(&app, Method::GET, "/logs/15-06-2025", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&app, Method::PUT, "/logs/2025-06-16", Some(entry(7.0, "good"))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&app, Method::PUT, "/logs/2025-06-15", Some(entry(13.0, "good"))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&app, Method::GET, "/logs/2025-06-01", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
