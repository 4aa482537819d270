use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use chrono::{NaiveDate, DateTime, Utc};
use std::collections::BTreeMap;

pub const MIN_CYCLE_LENGTH: u32 = 21;
pub const MAX_CYCLE_LENGTH: u32 = 45;
pub const MIN_PERIOD_LENGTH: u32 = 1;
pub const MAX_PERIOD_LENGTH: u32 = 10;
pub const MAX_SLEEP_HOURS: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub last_period_start: Option<NaiveDate>,
    #[serde(default)]
    pub last_period_end: Option<NaiveDate>,
    pub average_cycle_length: u32,
    pub average_period_length: u32,
    #[serde(default)]
    pub is_irregular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Dates may be absent; only their order is checked.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&self.average_cycle_length) {
            return Err(format!(
                "averageCycleLength must be between {} and {} days",
                MIN_CYCLE_LENGTH, MAX_CYCLE_LENGTH
            ));
        }
        if !(MIN_PERIOD_LENGTH..=MAX_PERIOD_LENGTH).contains(&self.average_period_length) {
            return Err(format!(
                "averagePeriodLength must be between {} and {} days",
                MIN_PERIOD_LENGTH, MAX_PERIOD_LENGTH
            ));
        }
        if self.average_period_length >= self.average_cycle_length {
            return Err("averagePeriodLength must be shorter than averageCycleLength".into());
        }
        if let (Some(start), Some(end)) = (self.last_period_start, self.last_period_end) {
            if end < start {
                return Err("lastPeriodEnd cannot be before lastPeriodStart".into());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub last_period_start: NaiveDate,
    pub last_period_end: NaiveDate,
    #[serde(default = "default_cycle_length")]
    pub average_cycle_length: u32,
    #[serde(default = "default_period_length")]
    pub average_period_length: u32,
    #[serde(default)]
    pub is_irregular: bool,
}

fn default_cycle_length() -> u32 {
    28
}

fn default_period_length() -> u32 {
    5
}

impl ProfileInput {
    pub fn validate(&self, today: NaiveDate) -> Result<(), String> {
        if self.last_period_start > today {
            return Err("lastPeriodStart cannot be in the future".into());
        }
        if self.last_period_end > today {
            return Err("lastPeriodEnd cannot be in the future".into());
        }
        self.to_profile(None).validate()
    }

    pub fn to_profile(&self, created_at: Option<DateTime<Utc>>) -> Profile {
        Profile {
            last_period_start: Some(self.last_period_start),
            last_period_end: Some(self.last_period_end),
            average_cycle_length: self.average_cycle_length,
            average_period_length: self.average_period_length,
            is_irregular: self.is_irregular,
            created_at,
        }
    }
}

/// Body of `PUT /profile`. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEdit {
    pub last_period_start: Option<NaiveDate>,
    pub last_period_end: Option<NaiveDate>,
    pub average_cycle_length: Option<u32>,
    pub average_period_length: Option<u32>,
    pub is_irregular: Option<bool>,
}

impl ProfileEdit {
    pub fn apply(&self, current: &Profile, today: NaiveDate) -> Result<Profile, String> {
        if self.last_period_start.is_some_and(|d| d > today) {
            return Err("lastPeriodStart cannot be in the future".into());
        }
        if self.last_period_end.is_some_and(|d| d > today) {
            return Err("lastPeriodEnd cannot be in the future".into());
        }

        let edited = Profile {
            last_period_start: self.last_period_start.or(current.last_period_start),
            last_period_end: self.last_period_end.or(current.last_period_end),
            average_cycle_length: self.average_cycle_length.unwrap_or(current.average_cycle_length),
            average_period_length: self.average_period_length.unwrap_or(current.average_period_length),
            is_irregular: self.is_irregular.unwrap_or(current.is_irregular),
            created_at: current.created_at,
        };
        edited.validate()?;
        Ok(edited)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Poor,
    Okay,
    Good,
    Great,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    #[serde(default, deserialize_with = "lenient_hours")]
    pub sleep: Option<f64>,
    pub mood: Mood,
    pub energy: Level,
    pub stress: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<WorkoutEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fasting_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Accepts `7.5`, `"7.5"` or `""`. Older documents stored the raw form string;
/// anything that does not parse to a finite number is kept as absent.
fn lenient_hours<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let hours = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(hours.filter(|h| h.is_finite()))
}

/// Body of `PUT /logs/:date`. The timestamp is stamped server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogInput {
    pub sleep: f64,
    pub mood: Mood,
    pub energy: Level,
    pub stress: Level,
    #[serde(default)]
    pub workout: Option<WorkoutEntry>,
    #[serde(default)]
    pub fasting_window: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DailyLogInput {
    pub fn validate(&self) -> Result<(), String> {
        if !self.sleep.is_finite() || self.sleep < 0.0 || self.sleep > MAX_SLEEP_HOURS {
            return Err(format!("sleep must be between 0 and {} hours", MAX_SLEEP_HOURS));
        }
        Ok(())
    }

    pub fn into_log(self, timestamp: DateTime<Utc>) -> DailyLog {
        DailyLog {
            sleep: Some(self.sleep),
            mood: self.mood,
            energy: self.energy,
            stress: self.stress,
            workout: self.workout,
            fasting_window: self.fasting_window,
            notes: self.notes,
            timestamp: Some(timestamp),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodHistoryEntry {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub cycle_length: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalPatterns {
    #[serde(default)]
    pub cycles_logged: u32,
    #[serde(default)]
    pub last_calculated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sleep_needs: BTreeMap<String, Value>,
    #[serde(default)]
    pub energy_trends: BTreeMap<String, Value>,
    #[serde(default)]
    pub workout_tolerance: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub profile: Profile,
    #[serde(default)]
    pub daily_logs: BTreeMap<NaiveDate, DailyLog>,
    #[serde(default)]
    pub period_history: Vec<PeriodHistoryEntry>,
    #[serde(default)]
    pub personal_patterns: PersonalPatterns,
}

impl UserData {
    pub fn onboard(profile: Profile) -> Self {
        let history = PeriodHistoryEntry {
            start: profile.last_period_start,
            end: profile.last_period_end,
            cycle_length: None,
        };
        UserData {
            profile,
            daily_logs: BTreeMap::new(),
            period_history: vec![history],
            personal_patterns: PersonalPatterns::default(),
        }
    }

    pub fn log_for(&self, date: NaiveDate) -> Option<&DailyLog> {
        self.daily_logs.get(&date)
    }
}
