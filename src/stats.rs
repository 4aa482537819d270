use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{DailyLog, UserData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub streak: u32,
    pub days_logged: usize,
    pub cycles_tracked: usize,
}

/// Consecutive logged days counted back from `today`.
///
/// An unlogged today is tolerated only when yesterday was logged, but the
/// count itself always starts at today, so that case still yields zero.
pub fn calculate_streak(logs: &BTreeMap<NaiveDate, DailyLog>, today: NaiveDate) -> u32 {
    if logs.is_empty() {
        return 0;
    }

    if !logs.contains_key(&today) {
        let yesterday = today - Duration::days(1);
        if !logs.contains_key(&yesterday) {
            return 0;
        }
    }

    let mut streak = 0;
    let mut current = today;
    while logs.contains_key(&current) {
        streak += 1;
        current -= Duration::days(1);
    }
    streak
}

pub fn profile_stats(data: &UserData, today: NaiveDate) -> ProfileStats {
    ProfileStats {
        streak: calculate_streak(&data.daily_logs, today),
        days_logged: data.daily_logs.len(),
        cycles_tracked: data.period_history.len(),
    }
}
