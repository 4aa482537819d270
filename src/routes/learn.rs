use axum::{extract::Path, routing::get, Json, Router};

use crate::error::{AppError, Result};
use crate::guides::{all_guides, guide_for, PhaseGuide};
use crate::phase::Phase;

pub fn routes() -> Router {
    Router::new()
        .route("/learn", get(list_guides))
        .route("/learn/:phase", get(get_guide))
}

async fn list_guides() -> Json<Vec<PhaseGuide>> {
    Json(all_guides())
}

async fn get_guide(Path(phase): Path<String>) -> Result<Json<PhaseGuide>> {
    let phase: Phase = phase.parse().map_err(AppError::NotFound)?;
    guide_for(phase)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No guide for {}", phase)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::phase::PhaseScheme;
    use crate::routes::test_support::{send, test_app};

    #[tokio::test]
    async fn test_guides_are_served_without_user_data() {
        let (app, _) = test_app(PhaseScheme::Fine).await;
        let (status, body) = send(&app, Method::GET, "/learn", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);

        let (status, guide) = send(&app, Method::GET, "/learn/early-luteal", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(guide["title"], json!("Early Luteal Phase"));
        assert_eq!(guide["keyTakeaways"].as_array().unwrap().len(), 3);
        assert_eq!(guide["cardBg"], json!("bg-gradient-to-br from-purple-50 to-indigo-100"));

        let sections = guide["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[4]["title"], json!("Meal Timing"));
        assert_eq!(sections[2]["suggestions"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_unknown_phase_is_not_found() {
        let (app, _) = test_app(PhaseScheme::Fine).await;
        let (status, _) = send(&app, Method::GET, "/learn/winter", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::GET, "/learn/luteal", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
