// ABOUTME: Weekly progress analysis deciding whether the daily calorie target should change
// ABOUTME: Weekly record builder, adherence-gated adjustment logic, and ratio-preserving goal updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly Progress Analyzer
//!
//! Works on the tail of a user's append-only weekly history. Too little
//! history and unreliable logging are expected states reported through
//! `confidence`, `reason` and `warnings`, never errors.
//!
//! Energy balance uses the classic 7700 kcal per kg of body mass
//! (Wishnofsky, 1958). The estimate is coarse, which is why every
//! adjustment is scaled by adherence and bounded.

use chrono::{Duration, NaiveDate};
use macrofit_core::constants::{
    DAYS_PER_WEEK, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
    KCAL_PER_KG_BODY_WEIGHT,
};
use macrofit_core::errors::{AppError, AppResult};
use macrofit_core::models::{
    DailyLog, GoalCategory, GoalDirection, Macros, WeeklyProgressRecord, WeightTrend,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{EngineConfig, ProgressConfig};
use crate::intelligence::physiological_constants::numeric::{DAYS_PER_LOGGING_WEEK, NEAR_ZERO};

/// Direction of a recommended calorie change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    /// Raise daily calories
    Increase,
    /// Lower daily calories
    Decrease,
    /// Leave calories unchanged
    None,
}

/// How much the recommendation can be trusted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Insufficient or unreliable data
    Low,
    /// Usable data with some gaps
    Medium,
    /// Full window with consistent logging
    High,
}

/// Result of analyzing the recent weekly history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressAnalysis {
    /// A calorie change is recommended
    pub needs_adjustment: bool,
    /// Direction of the change
    pub adjustment_type: AdjustmentType,
    /// Magnitude of the change (kcal/day, 0 when none)
    pub adjustment_amount: f64,
    /// Trust in the recommendation
    pub confidence: Confidence,
    /// Human-readable explanation
    pub reason: String,
    /// Conditions worth surfacing regardless of the recommendation
    pub warnings: Vec<String>,
    /// Goal the history was judged against
    pub goal: GoalCategory,
    /// Number of weekly records analyzed
    pub weeks_analyzed: usize,
    /// Mean weekly weight change over the window (kg)
    pub mean_weekly_change_kg: f64,
    /// Mean calorie adherence over the window (%)
    pub mean_adherence_percent: f64,
    /// Expected weekly change for the goal (kg)
    pub target_weekly_change_kg: f64,
}

impl ProgressAnalysis {
    /// Signed calorie delta: positive to increase, negative to decrease
    #[must_use]
    pub fn signed_adjustment(&self) -> f64 {
        if !self.needs_adjustment {
            return 0.0;
        }
        match self.adjustment_type {
            AdjustmentType::Increase => self.adjustment_amount,
            AdjustmentType::Decrease => -self.adjustment_amount,
            AdjustmentType::None => 0.0,
        }
    }
}

/// Window statistics shared by every decision branch
#[derive(Debug, Clone, Copy)]
struct WindowStats {
    weeks: usize,
    mean_change: f64,
    mean_adherence: f64,
    target_rate: f64,
}

fn window_stats(
    history: &[WeeklyProgressRecord],
    goal: GoalCategory,
    config: &ProgressConfig,
) -> WindowStats {
    let window = &history[history.len().saturating_sub(config.window_weeks)..];
    let count = window.len();
    let (change_sum, adherence_sum) = window.iter().fold((0.0, 0.0), |(change, adherence), week| {
        (
            change + week.weight_change_kg,
            adherence + week.calorie_adherence_percent,
        )
    });
    let divisor = count.max(1) as f64;
    WindowStats {
        weeks: count,
        mean_change: change_sum / divisor,
        mean_adherence: adherence_sum / divisor,
        target_rate: config.weekly_rates.rate_for(goal),
    }
}

/// Daily calories corresponding to a weekly weight deviation, scaled by adherence
fn adjustment_magnitude(weekly_deviation_kg: f64, adherence_percent: f64) -> f64 {
    weekly_deviation_kg.abs() * KCAL_PER_KG_BODY_WEIGHT / DAYS_PER_WEEK
        * (adherence_percent / 100.0).clamp(0.0, 1.0)
}

/// Stagnation and too-fast warnings, independent of any adjustment
fn trend_warnings(stats: &WindowStats, goal: GoalCategory, config: &ProgressConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if !goal.is_active() {
        return warnings;
    }
    if stats.mean_change.abs() < config.stagnation_band_kg {
        warnings.push(format!(
            "Weight has been stagnant ({:+.2} kg/week) despite an active {} goal",
            stats.mean_change,
            if goal.is_loss() { "loss" } else { "gain" }
        ));
    }
    let toward_goal = stats.mean_change.signum() == stats.target_rate.signum();
    if toward_goal
        && stats.mean_change.abs() > config.fast_change_multiple * stats.target_rate.abs()
    {
        warnings.push(format!(
            "Weight is changing faster than planned ({:+.2} kg/week vs {:+.2} kg/week target)",
            stats.mean_change, stats.target_rate
        ));
    }
    warnings
}

/// Analyze weekly progress using the global engine configuration
#[must_use]
pub fn analyze_weekly_progress(
    history: &[WeeklyProgressRecord],
    goal: GoalCategory,
) -> ProgressAnalysis {
    analyze_weekly_progress_with_config(history, goal, &EngineConfig::global().progress)
}

/// Decide whether the daily calorie target should change
///
/// Looks at the most recent `window_weeks` records. Never fails: short
/// history and poor adherence are reported with low confidence.
#[must_use]
pub fn analyze_weekly_progress_with_config(
    history: &[WeeklyProgressRecord],
    goal: GoalCategory,
    config: &ProgressConfig,
) -> ProgressAnalysis {
    let stats = window_stats(history, goal, config);
    let mut analysis = ProgressAnalysis {
        needs_adjustment: false,
        adjustment_type: AdjustmentType::None,
        adjustment_amount: 0.0,
        confidence: Confidence::Low,
        reason: String::new(),
        warnings: Vec::new(),
        goal,
        weeks_analyzed: stats.weeks,
        mean_weekly_change_kg: stats.mean_change,
        mean_adherence_percent: stats.mean_adherence,
        target_weekly_change_kg: stats.target_rate,
    };

    if history.len() < config.min_records {
        analysis.reason = format!(
            "Not enough data yet: {} of {} weekly check-ins recorded. Keep logging to unlock adjustments.",
            history.len(),
            config.min_records
        );
        return analysis;
    }

    analysis.warnings = trend_warnings(&stats, goal, config);

    if stats.mean_adherence < config.min_adherence_percent {
        analysis.warnings.push(format!(
            "Calorie adherence is {:.0}%, below the {:.0}% needed to evaluate the plan",
            stats.mean_adherence, config.min_adherence_percent
        ));
        analysis.reason =
            "Logging is too inconsistent to judge the current target; focus on tracking accurately first"
                .to_owned();
        debug!(
            adherence = stats.mean_adherence,
            "Skipped calorie adjustment: low adherence"
        );
        return analysis;
    }

    let deviation = stats.mean_change - stats.target_rate;
    let confidence = if stats.weeks >= config.window_weeks
        && stats.mean_adherence >= config.high_confidence_adherence_percent
    {
        Confidence::High
    } else {
        Confidence::Medium
    };

    let decision = match goal.direction() {
        GoalDirection::Maintain => decide_maintenance(&stats, config),
        GoalDirection::Loss => decide_loss(&stats, deviation, config),
        GoalDirection::Gain => decide_gain(&stats, deviation, config),
    };

    let Some((adjustment_type, reason, extra_warning)) = decision else {
        analysis.confidence = Confidence::High;
        analysis.reason = format!(
            "On track: {:+.2} kg/week against a {:+.2} kg/week target",
            stats.mean_change, stats.target_rate
        );
        return analysis;
    };
    if let Some(extra) = extra_warning {
        analysis.warnings.push(extra);
    }

    let magnitude = adjustment_magnitude(deviation, stats.mean_adherence).round();
    if magnitude < config.min_adjustment_kcal {
        analysis.confidence = confidence;
        analysis.reason = format!(
            "Deviation from target is small ({magnitude:.0} kcal/day); no adjustment needed"
        );
        return analysis;
    }

    analysis.needs_adjustment = true;
    analysis.adjustment_type = adjustment_type;
    analysis.adjustment_amount = magnitude.min(config.max_adjustment_kcal);
    analysis.confidence = confidence;
    analysis.reason = reason;

    debug!(
        goal = ?goal,
        mean_change = stats.mean_change,
        target = stats.target_rate,
        adjustment = analysis.signed_adjustment(),
        confidence = ?analysis.confidence,
        "Recommended calorie adjustment"
    );
    analysis
}

/// `(direction, reason, extra warning)`; `None` means on track
type Decision = Option<(AdjustmentType, String, Option<String>)>;

fn decide_maintenance(stats: &WindowStats, config: &ProgressConfig) -> Decision {
    if stats.mean_change.abs() <= config.maintenance_band_kg {
        return None;
    }
    if stats.mean_change > 0.0 {
        Some((
            AdjustmentType::Decrease,
            format!(
                "Gaining {:.2} kg/week while maintaining; lowering calories",
                stats.mean_change
            ),
            None,
        ))
    } else {
        Some((
            AdjustmentType::Increase,
            format!(
                "Losing {:.2} kg/week while maintaining; raising calories",
                stats.mean_change.abs()
            ),
            None,
        ))
    }
}

fn is_on_track(stats: &WindowStats, deviation: f64, config: &ProgressConfig) -> bool {
    deviation.abs() / stats.target_rate.abs() * 100.0 < config.on_track_tolerance_percent
}

fn decide_loss(stats: &WindowStats, deviation: f64, config: &ProgressConfig) -> Decision {
    if is_on_track(stats, deviation, config) {
        return None;
    }
    if stats.mean_change > -config.stagnation_band_kg {
        return Some((
            AdjustmentType::Decrease,
            format!(
                "Not losing weight ({:+.2} kg/week); lowering calories",
                stats.mean_change
            ),
            None,
        ));
    }
    if stats.mean_change < config.fast_change_multiple * stats.target_rate {
        return Some((
            AdjustmentType::Increase,
            format!(
                "Losing {:.2} kg/week, much faster than the {:.2} kg/week target; raising calories",
                stats.mean_change.abs(),
                stats.target_rate.abs()
            ),
            Some("Rapid weight loss risks losing muscle mass".to_owned()),
        ));
    }
    if deviation > 0.0 {
        Some((
            AdjustmentType::Decrease,
            format!(
                "Losing {:.2} kg/week, slower than the {:.2} kg/week target; lowering calories",
                stats.mean_change.abs(),
                stats.target_rate.abs()
            ),
            None,
        ))
    } else {
        Some((
            AdjustmentType::Increase,
            format!(
                "Losing {:.2} kg/week, faster than the {:.2} kg/week target; raising calories",
                stats.mean_change.abs(),
                stats.target_rate.abs()
            ),
            None,
        ))
    }
}

fn decide_gain(stats: &WindowStats, deviation: f64, config: &ProgressConfig) -> Decision {
    if is_on_track(stats, deviation, config) {
        return None;
    }
    if stats.mean_change < config.stagnation_band_kg {
        return Some((
            AdjustmentType::Increase,
            format!(
                "Not gaining weight ({:+.2} kg/week); raising calories",
                stats.mean_change
            ),
            None,
        ));
    }
    if stats.mean_change > config.fast_change_multiple * stats.target_rate {
        return Some((
            AdjustmentType::Decrease,
            format!(
                "Gaining {:.2} kg/week, much faster than the {:.2} kg/week target; lowering calories",
                stats.mean_change, stats.target_rate
            ),
            Some("Rapid weight gain is likely to add excess body fat".to_owned()),
        ));
    }
    if deviation < 0.0 {
        Some((
            AdjustmentType::Increase,
            format!(
                "Gaining {:.2} kg/week, slower than the {:.2} kg/week target; raising calories",
                stats.mean_change, stats.target_rate
            ),
            None,
        ))
    } else {
        Some((
            AdjustmentType::Decrease,
            format!(
                "Gaining {:.2} kg/week, faster than the {:.2} kg/week target; lowering calories",
                stats.mean_change, stats.target_rate
            ),
            None,
        ))
    }
}

/// Apply an analysis to the current goals using the global engine configuration
#[must_use]
pub fn apply_adjustment(current: &Macros, analysis: &ProgressAnalysis) -> Macros {
    apply_adjustment_with_config(current, analysis, &EngineConfig::global().progress)
}

/// Apply a calorie adjustment while preserving each macro's share of calories
///
/// New calories never go below the configured floor. Goals are returned
/// unchanged when the analysis recommends nothing.
#[must_use]
pub fn apply_adjustment_with_config(
    current: &Macros,
    analysis: &ProgressAnalysis,
    config: &ProgressConfig,
) -> Macros {
    let delta = analysis.signed_adjustment();
    if delta.abs() < NEAR_ZERO {
        return *current;
    }

    let base_calories = if current.calories > NEAR_ZERO {
        current.calories
    } else {
        current.energy_from_macros()
    };
    let new_calories = (base_calories + delta).max(config.calorie_floor_kcal).round();

    if base_calories <= NEAR_ZERO {
        warn!("Current goals carry no energy; only total calories can be adjusted");
        return Macros::new(new_calories, 0.0, 0.0, 0.0);
    }

    let protein_ratio = current.protein * KCAL_PER_GRAM_PROTEIN / base_calories;
    let carbs_ratio = current.carbs * KCAL_PER_GRAM_CARBS / base_calories;
    let fat_ratio = current.fat * KCAL_PER_GRAM_FAT / base_calories;

    Macros::new(
        new_calories,
        (protein_ratio * new_calories / KCAL_PER_GRAM_PROTEIN).round(),
        (carbs_ratio * new_calories / KCAL_PER_GRAM_CARBS).round(),
        (fat_ratio * new_calories / KCAL_PER_GRAM_FAT).round(),
    )
}

/// Analysis together with the goals before and after applying it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustment {
    /// Weekly progress analysis the new goals follow from
    pub analysis: ProgressAnalysis,
    /// Daily goals before the adjustment
    pub previous_goals: Macros,
    /// Daily goals after the adjustment
    pub new_goals: Macros,
}

/// Analyze the history and adjust the current goals using the global engine configuration
#[must_use]
pub fn adjust_goals(
    current: &Macros,
    history: &[WeeklyProgressRecord],
    goal: GoalCategory,
) -> GoalAdjustment {
    adjust_goals_with_config(current, history, goal, &EngineConfig::global().progress)
}

/// Analyze the history, then apply the recommendation to the current goals
#[must_use]
pub fn adjust_goals_with_config(
    current: &Macros,
    history: &[WeeklyProgressRecord],
    goal: GoalCategory,
    config: &ProgressConfig,
) -> GoalAdjustment {
    let analysis = analyze_weekly_progress_with_config(history, goal, config);
    let new_goals = apply_adjustment_with_config(current, &analysis, config);
    GoalAdjustment {
        analysis,
        previous_goals: *current,
        new_goals,
    }
}

/// Summarize up to seven daily logs into a weekly progress record
///
/// The start weight is `previous_end_weight_kg` when known, otherwise the
/// first weigh-in of the week. Signal arrays are `None` when no day
/// reported that signal.
///
/// # Errors
///
/// Returns an error if more than seven logs are given or the target is not positive
pub fn build_weekly_record(
    week_number: u32,
    start_date: NaiveDate,
    logs: &[DailyLog],
    target_calories: f64,
    workouts_planned: u32,
    previous_end_weight_kg: Option<f64>,
) -> AppResult<WeeklyProgressRecord> {
    build_weekly_record_with_config(
        week_number,
        start_date,
        logs,
        target_calories,
        workouts_planned,
        previous_end_weight_kg,
        &EngineConfig::global().progress,
    )
}

/// Weekly record builder with explicit configuration
///
/// # Errors
///
/// Returns an error if more than seven logs are given or the target is not positive
pub fn build_weekly_record_with_config(
    week_number: u32,
    start_date: NaiveDate,
    logs: &[DailyLog],
    target_calories: f64,
    workouts_planned: u32,
    previous_end_weight_kg: Option<f64>,
    config: &ProgressConfig,
) -> AppResult<WeeklyProgressRecord> {
    if logs.len() > DAYS_PER_LOGGING_WEEK {
        return Err(AppError::invalid_input(format!(
            "A week holds at most {DAYS_PER_LOGGING_WEEK} daily logs, got {}",
            logs.len()
        )));
    }
    if !(target_calories.is_finite() && target_calories > 0.0) {
        return Err(AppError::value_out_of_range(
            "Target calories must be positive",
        ));
    }

    let logged: Vec<&DailyLog> = logs.iter().filter(|log| log.is_logged()).collect();
    let days_logged = logged.len();
    let totals: Macros = logged
        .iter()
        .map(|log| Macros::new(log.calories, log.protein, log.carbs, log.fat))
        .sum();
    let averages = if days_logged == 0 {
        Macros::ZERO
    } else {
        totals.scaled(1.0 / days_logged as f64)
    };

    let mut weigh_ins = logs.iter().filter_map(|log| log.weight_kg);
    let first_weight = weigh_ins.next();
    let last_weight = weigh_ins.last().or(first_weight);
    let start_weight = previous_end_weight_kg.or(first_weight);
    let (start_weight_kg, end_weight_kg) = match (start_weight, last_weight) {
        (Some(start), Some(end)) => (start, end),
        (Some(only), None) | (None, Some(only)) => (only, only),
        (None, None) => (0.0, 0.0),
    };
    let weight_change_kg = end_weight_kg - start_weight_kg;

    let calorie_adherence_percent = if days_logged == 0 {
        0.0
    } else {
        let accuracy = (100.0
            - (averages.calories - target_calories).abs() / target_calories * 100.0)
            .clamp(0.0, 100.0);
        accuracy * days_logged as f64 / DAYS_PER_LOGGING_WEEK as f64
    };

    let workouts_completed = logs.iter().filter(|log| log.workout_completed).count();
    let workout_adherence_percent = if workouts_planned == 0 {
        100.0
    } else {
        (workouts_completed as f64 / f64::from(workouts_planned) * 100.0).min(100.0)
    };

    let end_date = logs
        .iter()
        .map(|log| log.date)
        .max()
        .unwrap_or(start_date)
        .max(start_date + Duration::days(6));

    Ok(WeeklyProgressRecord {
        week_number,
        start_date,
        end_date,
        start_weight_kg,
        end_weight_kg,
        weight_change_kg,
        days_logged: u8::try_from(days_logged).unwrap_or(u8::MAX),
        average_calories: averages.calories,
        target_calories,
        calorie_adherence_percent,
        average_protein: averages.protein,
        average_carbs: averages.carbs,
        average_fat: averages.fat,
        workout_adherence_percent,
        trend: WeightTrend::classify(weight_change_kg, config.stagnation_band_kg),
        energy_levels: collect_signal(logs, |log| log.energy),
        hunger_levels: collect_signal(logs, |log| log.hunger),
        workout_qualities: collect_signal(logs, |log| log.workout_quality),
    })
}

fn collect_signal<T>(logs: &[DailyLog], signal: impl Fn(&DailyLog) -> Option<T>) -> Option<Vec<T>> {
    let values: Vec<T> = logs.iter().filter_map(signal).collect();
    (!values.is_empty()).then_some(values)
}
