// ABOUTME: Metabolic adaptation detection over several weeks of progress history
// ABOUTME: Counts independent stagnation and wellbeing flags and maps them to an adaptation level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metabolic Adaptation Detector
//!
//! Five independent flags are evaluated over the most recent four weeks:
//!
//! 1. Weight stagnant on a loss goal
//! 2. Intake below the sex-specific floor while stagnant
//! 3. Low energy reported on most days, every week
//! 4. Elevated hunger reported on most days, every week
//! 5. Subpar workouts reported in most sessions, every week
//!
//! Self-reported signals only count when present: a week without reports
//! never triggers a flag.
//!
//! Reference: Trexler, E.T., Smith-Ryan, A.E., & Norton, L.E. (2014).
//! Metabolic adaptation to weight loss. *JISSN*, 11, 7.
//! <https://doi.org/10.1186/1550-2783-11-7>

use macrofit_core::models::{
    EnergyLevel, GoalCategory, HungerLevel, Sex, WeeklyProgressRecord, WorkoutQuality,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{AdaptationConfig, EngineConfig};

/// Severity of suspected metabolic adaptation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationLevel {
    /// Fewer than two flags
    None,
    /// Two flags
    Mild,
    /// Three flags
    Moderate,
    /// Four or more flags
    Severe,
}

impl AdaptationLevel {
    /// Level for a number of active flags
    #[must_use]
    pub const fn from_flag_count(count: u8) -> Self {
        match count {
            0 | 1 => Self::None,
            2 => Self::Mild,
            3 => Self::Moderate,
            _ => Self::Severe,
        }
    }

    /// Recommended course of action
    #[must_use]
    pub const fn recommendation(&self) -> &'static str {
        match self {
            Self::None => "No signs of metabolic adaptation. Continue with the current plan.",
            Self::Mild => {
                "Add 1-2 higher-carbohydrate refeed days per week at maintenance calories."
            }
            Self::Moderate => {
                "Take a 2-week diet break at maintenance calories before resuming the deficit."
            }
            Self::Severe => {
                "Start a reverse diet: raise calories gradually over several weeks before resuming a deficit."
            }
        }
    }
}

/// Individual adaptation flags
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdaptationFlags {
    /// Mean absolute weekly change below the stagnation band on a loss goal
    pub weight_stagnant: bool,
    /// Average intake below the sex-specific floor while stagnant
    pub low_calorie_intake: bool,
    /// Low energy on most days of every week
    pub persistent_low_energy: bool,
    /// Hunger elevated on most days of every week
    pub persistent_hunger: bool,
    /// Subpar workouts in most sessions of every week
    pub declining_workout_quality: bool,
}

impl AdaptationFlags {
    /// Number of active flags
    #[must_use]
    pub fn count(&self) -> u8 {
        [
            self.weight_stagnant,
            self.low_calorie_intake,
            self.persistent_low_energy,
            self.persistent_hunger,
            self.declining_workout_quality,
        ]
        .into_iter()
        .map(u8::from)
        .sum()
    }
}

/// Result of metabolic adaptation detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetabolicAdaptationResult {
    /// Severity level
    pub level: AdaptationLevel,
    /// Level is mild or worse
    pub is_adapted: bool,
    /// Each flag individually
    pub flags: AdaptationFlags,
    /// Number of active flags
    pub active_flag_count: u8,
    /// Recommended action
    pub recommendation: String,
    /// Human-readable explanation
    pub reason: String,
    /// Weekly records evaluated
    pub weeks_analyzed: usize,
}

/// Detect metabolic adaptation using the global engine configuration
#[must_use]
pub fn detect_metabolic_adaptation(
    history: &[WeeklyProgressRecord],
    sex: Sex,
    goal: GoalCategory,
) -> MetabolicAdaptationResult {
    detect_metabolic_adaptation_with_config(history, sex, goal, &EngineConfig::global().adaptation)
}

/// Detect metabolic adaptation over the most recent weeks
///
/// Fewer records than the window is an expected state: the result is
/// "none" with an explanatory reason.
#[must_use]
pub fn detect_metabolic_adaptation_with_config(
    history: &[WeeklyProgressRecord],
    sex: Sex,
    goal: GoalCategory,
    config: &AdaptationConfig,
) -> MetabolicAdaptationResult {
    if history.len() < config.window_weeks {
        return MetabolicAdaptationResult {
            level: AdaptationLevel::None,
            is_adapted: false,
            flags: AdaptationFlags::default(),
            active_flag_count: 0,
            recommendation: AdaptationLevel::None.recommendation().to_owned(),
            reason: format!(
                "At least {} weeks of history are needed to assess metabolic adaptation ({} available)",
                config.window_weeks,
                history.len()
            ),
            weeks_analyzed: history.len(),
        };
    }

    let window = &history[history.len() - config.window_weeks..];
    let weeks = window.len() as f64;
    let mean_abs_change = window
        .iter()
        .map(|week| week.weight_change_kg.abs())
        .sum::<f64>()
        / weeks;
    let mean_calories = window.iter().map(|week| week.average_calories).sum::<f64>() / weeks;

    let weight_stagnant = goal.is_loss() && mean_abs_change < config.stagnation_band_kg;
    let flags = AdaptationFlags {
        weight_stagnant,
        low_calorie_intake: weight_stagnant && mean_calories < config.calorie_floor(sex),
        persistent_low_energy: signal_every_week(
            window,
            |week| week.energy_levels.as_deref(),
            |level| *level == EnergyLevel::Low,
            config.signal_majority_fraction,
        ),
        persistent_hunger: signal_every_week(
            window,
            |week| week.hunger_levels.as_deref(),
            HungerLevel::is_elevated,
            config.signal_majority_fraction,
        ),
        declining_workout_quality: signal_every_week(
            window,
            |week| week.workout_qualities.as_deref(),
            WorkoutQuality::is_subpar,
            config.signal_majority_fraction,
        ),
    };

    let active_flag_count = flags.count();
    let level = AdaptationLevel::from_flag_count(active_flag_count);

    debug!(
        level = ?level,
        flags = active_flag_count,
        mean_abs_change,
        mean_calories,
        "Evaluated metabolic adaptation"
    );

    MetabolicAdaptationResult {
        level,
        is_adapted: level >= AdaptationLevel::Mild,
        flags,
        active_flag_count,
        recommendation: level.recommendation().to_owned(),
        reason: describe_flags(&flags, mean_abs_change, mean_calories),
        weeks_analyzed: window.len(),
    }
}

/// Whether a signal is reported on more than `fraction` of entries in every week
///
/// A week with no entries for the signal breaks the streak.
fn signal_every_week<T>(
    window: &[WeeklyProgressRecord],
    entries: impl Fn(&WeeklyProgressRecord) -> Option<&[T]>,
    matches: impl Fn(&T) -> bool,
    fraction: f64,
) -> bool {
    window.iter().all(|week| {
        entries(week).is_some_and(|values| {
            let share = values.iter().filter(|value| matches(value)).count() as f64
                / values.len().max(1) as f64;
            !values.is_empty() && share > fraction
        })
    })
}

fn describe_flags(flags: &AdaptationFlags, mean_abs_change: f64, mean_calories: f64) -> String {
    let mut reasons = Vec::new();
    if flags.weight_stagnant {
        reasons.push(format!(
            "weight stalled ({mean_abs_change:.2} kg/week average change)"
        ));
    }
    if flags.low_calorie_intake {
        reasons.push(format!("low intake ({mean_calories:.0} kcal/day)"));
    }
    if flags.persistent_low_energy {
        reasons.push("persistently low energy".to_owned());
    }
    if flags.persistent_hunger {
        reasons.push("persistent hunger".to_owned());
    }
    if flags.declining_workout_quality {
        reasons.push("declining workout quality".to_owned());
    }
    if reasons.is_empty() {
        "No adaptation signals detected".to_owned()
    } else {
        format!("Detected: {}", reasons.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(AdaptationLevel::from_flag_count(0), AdaptationLevel::None);
        assert_eq!(AdaptationLevel::from_flag_count(1), AdaptationLevel::None);
        assert_eq!(AdaptationLevel::from_flag_count(2), AdaptationLevel::Mild);
        assert_eq!(AdaptationLevel::from_flag_count(3), AdaptationLevel::Moderate);
        assert_eq!(AdaptationLevel::from_flag_count(5), AdaptationLevel::Severe);
    }

    #[test]
    fn test_flag_count() {
        let flags = AdaptationFlags {
            weight_stagnant: true,
            persistent_hunger: true,
            ..AdaptationFlags::default()
        };
        assert_eq!(flags.count(), 2);
    }
}
