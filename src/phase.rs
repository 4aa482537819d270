//! Cycle phase calculation.
//!
//! Maps the days elapsed since the last period start onto a cycle day and a
//! named phase. Two band layouts exist: `Coarse` with a single luteal phase,
//! and `Fine` which splits luteal at a fixed day 23.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::Profile;

const FOLLICULAR_END: u32 = 13;
const OVULATORY_END: u32 = 16;
// Fixed regardless of cycle length, so Late Luteal is empty for cycles under 24 days.
const EARLY_LUTEAL_END: u32 = 23;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Menstrual,
    Follicular,
    Ovulatory,
    Luteal,
    #[serde(rename = "Early Luteal")]
    EarlyLuteal,
    #[serde(rename = "Late Luteal")]
    LateLuteal,
}

impl Phase {
    pub const FINE: [Phase; 5] = [
        Phase::Menstrual,
        Phase::Follicular,
        Phase::Ovulatory,
        Phase::EarlyLuteal,
        Phase::LateLuteal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Phase::Menstrual => "Menstrual",
            Phase::Follicular => "Follicular",
            Phase::Ovulatory => "Ovulatory",
            Phase::Luteal => "Luteal",
            Phase::EarlyLuteal => "Early Luteal",
            Phase::LateLuteal => "Late Luteal",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Phase::Menstrual => "menstrual",
            Phase::Follicular => "follicular",
            Phase::Ovulatory => "ovulatory",
            Phase::Luteal => "luteal",
            Phase::EarlyLuteal => "early-luteal",
            Phase::LateLuteal => "late-luteal",
        }
    }

    pub fn is_luteal(self) -> bool {
        matches!(self, Phase::Luteal | Phase::EarlyLuteal | Phase::LateLuteal)
    }

    /// Gradient token for the "today" header.
    pub fn color(self) -> &'static str {
        match self {
            Phase::Menstrual => "from-indigo-800 to-purple-900",
            Phase::Follicular => "from-indigo-600 to-purple-700",
            Phase::Ovulatory => "from-orange-500 to-orange-700",
            Phase::Luteal => "from-purple-600 to-indigo-800",
            Phase::EarlyLuteal => "from-purple-600 to-indigo-700",
            Phase::LateLuteal => "from-purple-700 to-indigo-800",
        }
    }

    /// Solid swatch for calendar cells.
    pub fn calendar_color(self) -> &'static str {
        match self {
            Phase::Menstrual => "#8C48AE",
            Phase::Follicular => "#FFDAB9",
            Phase::Ovulatory => "#E08C34",
            Phase::Luteal => "#DEC7DB",
            Phase::EarlyLuteal => "#E9D8E6",
            Phase::LateLuteal => "#D4B5D0",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Phase::Menstrual => "🌑",
            Phase::Follicular => "🌒",
            Phase::Ovulatory => "🌕",
            Phase::Luteal => "🌖",
            Phase::EarlyLuteal => "🌖",
            Phase::LateLuteal => "🌗",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = String;

    /// Accepts display names ("Early Luteal") and slugs ("early-luteal").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(' ', "-");
        [
            Phase::Menstrual,
            Phase::Follicular,
            Phase::Ovulatory,
            Phase::Luteal,
            Phase::EarlyLuteal,
            Phase::LateLuteal,
        ]
        .into_iter()
        .find(|p| p.slug() == wanted)
        .ok_or_else(|| format!("unknown phase: {}", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseScheme {
    Coarse,
    #[default]
    Fine,
}

impl FromStr for PhaseScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coarse" => Ok(PhaseScheme::Coarse),
            "fine" => Ok(PhaseScheme::Fine),
            other => Err(format!("unknown phase scheme: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseInfo {
    pub phase: Phase,
    pub cycle_day: u32,
    pub phase_day: u32,
    pub phase_color: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhaseError {
    #[error("last period start {start} is after {today}")]
    StartInFuture { start: NaiveDate, today: NaiveDate },
}

/// Inclusive cycle-day range of one phase. `start > end` means the band is
/// empty for this profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRange {
    pub phase: Phase,
    pub start: u32,
    pub end: u32,
}

/// Classifies a cycle day, returning the phase and the 1-based day within it.
/// Bands are evaluated in order, so the first matching upper bound wins.
pub fn phase_for_cycle_day(cycle_day: u32, period_length: u32, scheme: PhaseScheme) -> (Phase, u32) {
    if cycle_day <= period_length {
        (Phase::Menstrual, cycle_day)
    } else if cycle_day <= FOLLICULAR_END {
        (Phase::Follicular, cycle_day - period_length)
    } else if cycle_day <= OVULATORY_END {
        (Phase::Ovulatory, cycle_day - FOLLICULAR_END)
    } else {
        match scheme {
            PhaseScheme::Coarse => (Phase::Luteal, cycle_day - OVULATORY_END),
            PhaseScheme::Fine if cycle_day <= EARLY_LUTEAL_END => {
                (Phase::EarlyLuteal, cycle_day - OVULATORY_END)
            }
            PhaseScheme::Fine => (Phase::LateLuteal, cycle_day - EARLY_LUTEAL_END),
        }
    }
}

pub fn phase_ranges(profile: &Profile, scheme: PhaseScheme) -> Vec<PhaseRange> {
    let cycle = profile.average_cycle_length;
    let period = profile.average_period_length;
    let mut ranges = vec![
        PhaseRange { phase: Phase::Menstrual, start: 1, end: period },
        PhaseRange { phase: Phase::Follicular, start: period + 1, end: FOLLICULAR_END },
        PhaseRange { phase: Phase::Ovulatory, start: FOLLICULAR_END + 1, end: OVULATORY_END },
    ];
    match scheme {
        PhaseScheme::Coarse => {
            ranges.push(PhaseRange { phase: Phase::Luteal, start: OVULATORY_END + 1, end: cycle });
        }
        PhaseScheme::Fine => {
            ranges.push(PhaseRange {
                phase: Phase::EarlyLuteal,
                start: OVULATORY_END + 1,
                end: EARLY_LUTEAL_END.min(cycle),
            });
            ranges.push(PhaseRange { phase: Phase::LateLuteal, start: EARLY_LUTEAL_END + 1, end: cycle });
        }
    }
    ranges
}

pub fn cycle_day_on(start: NaiveDate, date: NaiveDate, cycle_length: u32) -> Result<u32, PhaseError> {
    let days_since = (date - start).num_days();
    if days_since < 0 {
        return Err(PhaseError::StartInFuture { start, today: date });
    }
    Ok((days_since % i64::from(cycle_length)) as u32 + 1)
}

/// Current phase for the profile, or `None` when the profile cannot support
/// the calculation yet (no start date, lengths out of range).
pub fn calculate_phase(
    profile: &Profile,
    today: NaiveDate,
    scheme: PhaseScheme,
) -> Result<Option<PhaseInfo>, PhaseError> {
    let Some(start) = profile.last_period_start else {
        return Ok(None);
    };
    if profile.validate().is_err() {
        return Ok(None);
    }

    let cycle_day = cycle_day_on(start, today, profile.average_cycle_length)?;
    let (phase, phase_day) = phase_for_cycle_day(cycle_day, profile.average_period_length, scheme);

    Ok(Some(PhaseInfo {
        phase,
        cycle_day,
        phase_day,
        phase_color: phase.color(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn profile(cycle: u32, period: u32, start: Option<NaiveDate>) -> Profile {
        Profile {
            last_period_start: start,
            last_period_end: start.map(|s| s + Duration::days(i64::from(period) - 1)),
            average_cycle_length: cycle,
            average_period_length: period,
            is_irregular: false,
            created_at: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_missing_start_returns_none() {
        let p = profile(28, 5, None);
        assert_eq!(calculate_phase(&p, today(), PhaseScheme::Fine), Ok(None));
    }

    #[test]
    fn test_invalid_lengths_return_none() {
        let p = profile(0, 5, Some(today()));
        assert_eq!(calculate_phase(&p, today(), PhaseScheme::Fine), Ok(None));
    }

    #[test]
    fn test_follicular_ten_days_in() {
        let p = profile(28, 5, Some(today() - Duration::days(10)));
        let info = calculate_phase(&p, today(), PhaseScheme::Coarse).unwrap().unwrap();
        assert_eq!(info.cycle_day, 11);
        assert_eq!(info.phase, Phase::Follicular);
        assert_eq!(info.phase_day, 6);
    }

    #[test]
    fn test_last_day_of_cycle_is_luteal() {
        let p = profile(28, 5, Some(today() - Duration::days(27)));
        let info = calculate_phase(&p, today(), PhaseScheme::Coarse).unwrap().unwrap();
        assert_eq!(info.cycle_day, 28);
        assert_eq!(info.phase, Phase::Luteal);
        assert_eq!(info.phase_day, 12);

        let fine = calculate_phase(&p, today(), PhaseScheme::Fine).unwrap().unwrap();
        assert_eq!(fine.phase, Phase::LateLuteal);
        assert_eq!(fine.phase_day, 5);
    }

    #[test]
    fn test_cycle_day_wraps() {
        let p = profile(28, 5, Some(today() - Duration::days(28)));
        let info = calculate_phase(&p, today(), PhaseScheme::Fine).unwrap().unwrap();
        assert_eq!(info.cycle_day, 1);
        assert_eq!(info.phase, Phase::Menstrual);
        assert_eq!(info.phase_day, 1);
    }

    #[test]
    fn test_start_in_future_is_rejected() {
        let start = today() + Duration::days(3);
        let p = profile(28, 5, Some(start));
        assert_eq!(
            calculate_phase(&p, today(), PhaseScheme::Fine),
            Err(PhaseError::StartInFuture { start, today: today() })
        );
    }

    #[test]
    fn test_start_today_is_day_one() {
        let p = profile(28, 5, Some(today()));
        let info = calculate_phase(&p, today(), PhaseScheme::Fine).unwrap().unwrap();
        assert_eq!((info.cycle_day, info.phase_day), (1, 1));
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let p = profile(31, 6, Some(today() - Duration::days(45)));
        let a = calculate_phase(&p, today(), PhaseScheme::Fine);
        let b = calculate_phase(&p, today(), PhaseScheme::Fine);
        assert_eq!(a, b);
    }

    #[test]
    fn test_coarse_bands_partition_every_cycle() {
        for cycle in 21..=45 {
            for period in 1..=10 {
                for day in 1..=cycle {
                    let (phase, phase_day) = phase_for_cycle_day(day, period, PhaseScheme::Coarse);
                    let hits: Vec<_> = phase_ranges(&profile(cycle, period, None), PhaseScheme::Coarse)
                        .into_iter()
                        .filter(|r| r.start <= day && day <= r.end)
                        .collect();
                    assert_eq!(hits.len(), 1, "cycle {} period {} day {}", cycle, period, day);
                    assert_eq!(hits[0].phase, phase);
                    assert_eq!(phase_day, day - hits[0].start + 1);
                }
            }
        }
    }

    #[test]
    fn test_fine_late_luteal_empty_for_short_cycles() {
        let p = profile(23, 5, None);
        let ranges = phase_ranges(&p, PhaseScheme::Fine);
        let late = ranges.iter().find(|r| r.phase == Phase::LateLuteal).unwrap();
        assert!(late.start > late.end);
        assert!((1..=23).all(|d| phase_for_cycle_day(d, 5, PhaseScheme::Fine).0 != Phase::LateLuteal));

        let p = profile(21, 5, None);
        let early = phase_ranges(&p, PhaseScheme::Fine)
            .into_iter()
            .find(|r| r.phase == Phase::EarlyLuteal)
            .unwrap();
        assert_eq!((early.start, early.end), (17, 21));
    }

    #[test]
    fn test_fine_split_is_fixed_at_day_23() {
        assert_eq!(phase_for_cycle_day(23, 5, PhaseScheme::Fine), (Phase::EarlyLuteal, 7));
        assert_eq!(phase_for_cycle_day(24, 5, PhaseScheme::Fine), (Phase::LateLuteal, 1));
        assert_eq!(phase_for_cycle_day(40, 5, PhaseScheme::Fine), (Phase::LateLuteal, 17));
    }

    #[test]
    fn test_phase_names_round_trip() {
        for phase in [Phase::Luteal].into_iter().chain(Phase::FINE) {
            assert_eq!(phase.name().parse::<Phase>(), Ok(phase));
            assert_eq!(phase.slug().parse::<Phase>(), Ok(phase));
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, format!("\"{}\"", phase.name()));
        }
        assert!("Winter".parse::<Phase>().is_err());
    }

    #[test]
    fn test_colors_are_stable_per_phase() {
        assert_eq!(Phase::Menstrual.color(), "from-indigo-800 to-purple-900");
        assert_eq!(Phase::LateLuteal.calendar_color(), "#D4B5D0");
    }
}
