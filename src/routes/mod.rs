use axum::{routing::get, Router};
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{AppError, Result};
use crate::models::UserData;
use crate::phase::PhaseScheme;
use crate::store::UserDataStore;

pub mod cycle;
pub mod data;
pub mod history;
pub mod learn;
pub mod logs;
pub mod onboarding;
pub mod profile;
pub mod stats;
pub mod today;

/// Source of "today" as a UTC calendar date, the key daily logs are stored under.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    #[cfg_attr(not(test), allow(dead_code))]
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Utc::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: UserDataStore,
    pub scheme: PhaseScheme,
    pub clock: Clock,
}

impl AppState {
    /// The stored document, or 404 when onboarding has not happened.
    pub async fn user_data(&self) -> Result<UserData> {
        self.store.load().await?.ok_or_else(AppError::no_user)
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(onboarding::routes(state.clone()))
        .merge(profile::routes(state.clone()))
        .merge(logs::routes(state.clone()))
        .merge(today::routes(state.clone()))
        .merge(cycle::routes(state.clone()))
        .merge(history::routes(state.clone()))
        .merge(stats::routes(state.clone()))
        .merge(learn::routes())
        .merge(data::routes(state))
        .route("/health", get(|| async { "✅ Backend up" }))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (expected YYYY-MM-DD)".into()))
}


#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::Clock;

    #[test]
    fn test_system_clock_uses_utc_date() {
        let before = Utc::now().date_naive();
        let today = Clock::System.today();
        let after = Utc::now().date_naive();
        assert!(today == before || today == after);
    }
}
