use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{DailyLog, Profile};
use crate::phase::{phase_for_cycle_day, phase_ranges, Phase, PhaseRange, PhaseScheme};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub cycle_day: u32,
    pub date: NaiveDate,
    pub phase: Phase,
    pub phase_slug: &'static str,
    pub phase_color: &'static str,
    pub phase_icon: &'static str,
    pub is_today: bool,
    pub is_past: bool,
    pub has_log: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleCalendar {
    pub days: Vec<CalendarDay>,
    pub ranges: Vec<PhaseRange>,
}

/// Every day of the active cycle, starting at the last period start.
/// Returns `None` when the profile has no start date or its lengths are out
/// of range, the same rule the phase calculator applies.
pub fn cycle_calendar(
    profile: &Profile,
    logs: &BTreeMap<NaiveDate, DailyLog>,
    today: NaiveDate,
    scheme: PhaseScheme,
) -> Option<CycleCalendar> {
    let start = profile.last_period_start?;
    profile.validate().ok()?;

    let days = (1..=profile.average_cycle_length)
        .map(|cycle_day| {
            let date = start + Duration::days(i64::from(cycle_day) - 1);
            let (phase, _) = phase_for_cycle_day(cycle_day, profile.average_period_length, scheme);
            CalendarDay {
                cycle_day,
                date,
                phase,
                phase_slug: phase.slug(),
                phase_color: phase.calendar_color(),
                phase_icon: phase.icon(),
                is_today: date == today,
                is_past: date < today,
                has_log: logs.contains_key(&date),
            }
        })
        .collect();

    Some(CycleCalendar {
        days,
        ranges: phase_ranges(profile, scheme),
    })
}
