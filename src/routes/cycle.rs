use axum::{extract::State, routing::get, Json, Router};

use crate::calendar::{cycle_calendar, CycleCalendar};
use crate::error::{AppError, Result};
use crate::routes::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/cycle", get(get_cycle_calendar))
        .with_state(state)
}

async fn get_cycle_calendar(State(state): State<AppState>) -> Result<Json<CycleCalendar>> {
    let data = state.user_data().await?;
    data.profile.validate().map_err(AppError::Validation)?;

    let Some(calendar) = cycle_calendar(
        &data.profile,
        &data.daily_logs,
        state.clock.today(),
        state.scheme,
    ) else {
        return Err(AppError::NotFound("No period start recorded".into()));
    };

    Ok(Json(calendar))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::phase::PhaseScheme;
    use crate::routes::test_support::{onboarding_body, send, test_app};

    #[tokio::test]
    async fn test_calendar_marks_today_and_logs() {
        let (app, _) = test_app(PhaseScheme::Fine).await;
        send(&app, Method::POST, "/onboarding", Some(onboarding_body(10))).await;
        let log = json!({ "sleep": 7, "mood": "okay", "energy": "high", "stress": "medium" });
        send(&app, Method::PUT, "/logs/2025-06-14", Some(log)).await;

        let (status, body) = send(&app, Method::GET, "/cycle", None).await;
        assert_eq!(status, StatusCode::OK);

        let days = body["days"].as_array().unwrap();
        assert_eq!(days.len(), 28);
        assert_eq!(days[0]["date"], json!("2025-06-05"));
        assert_eq!(days[9]["hasLog"], json!(true));
        assert_eq!(days[10]["isToday"], json!(true));
        assert_eq!(days[10]["phaseSlug"], json!("follicular"));
        assert_eq!(days[20]["phase"], json!("Early Luteal"));

        assert_eq!(body["ranges"][1], json!({ "phase": "Follicular", "start": 6, "end": 13 }));
        assert_eq!(body["ranges"][4], json!({ "phase": "Late Luteal", "start": 24, "end": 28 }));
    }

    #[tokio::test]
    async fn test_imported_out_of_range_profile_has_no_calendar() {
        let (app, _) = test_app(PhaseScheme::Fine).await;
        let imported = json!({
            "profile": {
                "lastPeriodStart": "2025-06-01", "lastPeriodEnd": "2025-06-05",
                "averageCycleLength": 28, "averagePeriodLength": 4294967295u32, "isIrregular": false
            },
            "dailyLogs": {},
            "periodHistory": [],
            "personalPatterns": { "cyclesLogged": 0, "lastCalculated": null, "sleepNeeds": {}, "energyTrends": {}, "workoutTolerance": {} }
        });
        let (status, _) = send(&app, Method::POST, "/import", Some(imported)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, today) = send(&app, Method::GET, "/today", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(today["phase"].is_null());

        let (status, body) = send(&app, Method::GET, "/cycle", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("averagePeriodLength"));
    }

    #[tokio::test]
    async fn test_calendar_needs_user() {
        let (app, _) = test_app(PhaseScheme::Fine).await;
        let (status, _) = send(&app, Method::GET, "/cycle", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
