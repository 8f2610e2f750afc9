// ABOUTME: Integration tests for weekly progress analysis and calorie adjustment
// ABOUTME: Covers data sufficiency, adherence gating, goal-specific decisions, and macro redistribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Duration;
use macrofit::config::ProgressConfig;
use macrofit::constants::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use macrofit::intelligence::{
    adjust_goals_with_config, analyze_weekly_progress_with_config, apply_adjustment_with_config,
    build_weekly_record_with_config, AdjustmentType, Confidence, ProgressAnalysis,
};
use macrofit::models::{
    DailyLog, EnergyLevel, GoalCategory, HungerLevel, Macros, WeightTrend, WorkoutQuality,
};

mod common;

use common::{history, week_start, weekly_record};

fn analyze(history: &[macrofit::models::WeeklyProgressRecord], goal: GoalCategory) -> ProgressAnalysis {
    analyze_weekly_progress_with_config(history, goal, &ProgressConfig::default())
}

fn percentages(macros: &Macros) -> (f64, f64, f64) {
    (
        macros.protein * KCAL_PER_GRAM_PROTEIN / macros.calories * 100.0,
        macros.carbs * KCAL_PER_GRAM_CARBS / macros.calories * 100.0,
        macros.fat * KCAL_PER_GRAM_FAT / macros.calories * 100.0,
    )
}

fn decision(adjustment_type: AdjustmentType, amount: f64) -> ProgressAnalysis {
    ProgressAnalysis {
        needs_adjustment: true,
        adjustment_type,
        adjustment_amount: amount,
        confidence: Confidence::High,
        reason: String::new(),
        warnings: Vec::new(),
        goal: GoalCategory::ModerateLoss,
        weeks_analyzed: 3,
        mean_weekly_change_kg: 0.0,
        mean_adherence_percent: 90.0,
        target_weekly_change_kg: -0.625,
    }
}

// ============================================================================
// DATA SUFFICIENCY AND ADHERENCE
// ============================================================================

#[test]
fn test_single_week_is_not_enough() {
    common::init_test_logging();
    let analysis = analyze(&history(1, 0.0, 95.0, 2000.0), GoalCategory::ModerateLoss);
    assert!(!analysis.needs_adjustment);
    assert_eq!(analysis.adjustment_type, AdjustmentType::None);
    assert_eq!(analysis.confidence, Confidence::Low);
    assert!(analysis.reason.contains("Not enough data"));
}

#[test]
fn test_low_adherence_blocks_adjustment() {
    let analysis = analyze(&history(3, 0.0, 60.0, 2000.0), GoalCategory::ModerateLoss);
    assert!(!analysis.needs_adjustment);
    assert!(analysis.adjustment_amount.abs() < f64::EPSILON);
    assert!(analysis
        .warnings
        .iter()
        .any(|warning| warning.contains("adherence")));
}

// ============================================================================
// LOSS GOALS
// ============================================================================

#[test]
fn test_stalled_loss_decreases_calories() {
    let analysis = analyze(&history(3, 0.0, 90.0, 2000.0), GoalCategory::ModerateLoss);
    assert!(analysis.needs_adjustment);
    assert_eq!(analysis.adjustment_type, AdjustmentType::Decrease);
    // 0.625 kg/week behind at 90% adherence is ~619 kcal/day, capped
    assert!((analysis.adjustment_amount - 300.0).abs() < f64::EPSILON);
    assert_eq!(analysis.confidence, Confidence::High);
    assert!(analysis.warnings.iter().any(|w| w.contains("stagnant")));
    assert!((analysis.signed_adjustment() + 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_on_track_loss_needs_nothing() {
    let analysis = analyze(&history(3, -0.6, 90.0, 2000.0), GoalCategory::ModerateLoss);
    assert!(!analysis.needs_adjustment);
    assert_eq!(analysis.confidence, Confidence::High);
    assert!(analysis.reason.starts_with("On track"));
}

#[test]
fn test_too_fast_loss_increases_calories_with_warning() {
    let analysis = analyze(&history(3, -1.2, 90.0, 2000.0), GoalCategory::ModerateLoss);
    assert!(analysis.needs_adjustment);
    assert_eq!(analysis.adjustment_type, AdjustmentType::Increase);
    assert!(analysis.warnings.iter().any(|w| w.contains("muscle")));
    assert!(analysis.warnings.iter().any(|w| w.contains("faster than planned")));
}

#[test]
fn test_short_window_gives_medium_confidence() {
    let analysis = analyze(&history(2, 0.0, 80.0, 2000.0), GoalCategory::ModerateLoss);
    assert!(analysis.needs_adjustment);
    assert_eq!(analysis.confidence, Confidence::Medium);
    assert_eq!(analysis.weeks_analyzed, 2);
}

#[test]
fn test_only_recent_weeks_are_analyzed() {
    let mut records = history(5, 0.0, 90.0, 2000.0);
    records[0].weight_change_kg = -2.0;
    records[1].weight_change_kg = -2.0;
    let analysis = analyze(&records, GoalCategory::ModerateLoss);
    assert_eq!(analysis.weeks_analyzed, 3);
    assert!(analysis.mean_weekly_change_kg.abs() < f64::EPSILON);
    assert_eq!(analysis.adjustment_type, AdjustmentType::Decrease);
}

// ============================================================================
// MAINTENANCE AND GAIN GOALS
// ============================================================================

#[test]
fn test_maintenance_within_band_needs_nothing() {
    let analysis = analyze(&history(3, 0.1, 95.0, 2500.0), GoalCategory::Maintenance);
    assert!(!analysis.needs_adjustment);
    assert!(analysis.warnings.is_empty());
}

#[test]
fn test_maintenance_drifting_up_decreases() {
    let analysis = analyze(&history(3, 0.5, 100.0, 2500.0), GoalCategory::Maintenance);
    assert_eq!(analysis.adjustment_type, AdjustmentType::Decrease);
    assert!((analysis.adjustment_amount - 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_maintenance_drifting_down_increases() {
    let analysis = analyze(&history(3, -0.5, 100.0, 2500.0), GoalCategory::Maintenance);
    assert!(analysis.needs_adjustment);
    assert_eq!(analysis.adjustment_type, AdjustmentType::Increase);
    // 0.5 kg/week at full adherence is 550 kcal/day, capped
    assert!((analysis.adjustment_amount - 300.0).abs() < f64::EPSILON);
    assert!((analysis.signed_adjustment() - 300.0).abs() < f64::EPSILON);
    assert!(analysis.reason.contains("Losing"));
}

#[test]
fn test_too_fast_gain_decreases_with_fat_warning() {
    let analysis = analyze(&history(3, 1.0, 90.0, 2800.0), GoalCategory::ModerateGain);
    assert!(analysis.needs_adjustment);
    assert_eq!(analysis.adjustment_type, AdjustmentType::Decrease);
    // 0.625 kg/week ahead at 90% adherence is ~619 kcal/day, capped
    assert!((analysis.adjustment_amount - 300.0).abs() < f64::EPSILON);
    assert!(analysis.warnings.iter().any(|w| w.contains("excess body fat")));
    assert!(analysis.warnings.iter().any(|w| w.contains("faster than planned")));
}

#[test]
fn test_gaining_on_loss_goal_is_not_reported_as_too_fast() {
    let analysis = analyze(&history(3, 1.0, 90.0, 2000.0), GoalCategory::ModerateLoss);
    assert_eq!(analysis.adjustment_type, AdjustmentType::Decrease);
    assert!(!analysis.warnings.iter().any(|w| w.contains("faster than planned")));
}

#[test]
fn test_stalled_gain_increases() {
    let analysis = analyze(&history(3, 0.0, 90.0, 2800.0), GoalCategory::ModerateGain);
    assert_eq!(analysis.adjustment_type, AdjustmentType::Increase);
    assert!(analysis.needs_adjustment);
}

#[test]
fn test_small_deviation_is_not_worth_adjusting() {
    // 0.06 kg/week behind at 72% adherence is ~48 kcal/day
    let analysis = analyze(&history(3, 0.315, 72.0, 2800.0), GoalCategory::ModerateGain);
    assert!(!analysis.needs_adjustment);
    assert_eq!(analysis.confidence, Confidence::Medium);
    assert!(analysis.reason.contains("small"));
}

// ============================================================================
// APPLYING ADJUSTMENTS
// ============================================================================

#[test]
fn test_adjust_goals_applies_analysis_to_current_goals() {
    let current = Macros::new(2000.0, 150.0, 200.0, 67.0);
    let adjustment = adjust_goals_with_config(
        &current,
        &history(3, 0.0, 90.0, 2000.0),
        GoalCategory::ModerateLoss,
        &ProgressConfig::default(),
    );

    assert_eq!(adjustment.previous_goals, current);
    assert_eq!(adjustment.analysis.adjustment_type, AdjustmentType::Decrease);
    assert!((adjustment.new_goals.calories - 1700.0).abs() < f64::EPSILON);
    assert!(adjustment.new_goals.protein < current.protein);
}

#[test]
fn test_adjust_goals_keeps_goals_without_recommendation() {
    let current = Macros::new(2000.0, 150.0, 200.0, 67.0);
    let adjustment = adjust_goals_with_config(
        &current,
        &history(1, 0.0, 95.0, 2000.0),
        GoalCategory::ModerateLoss,
        &ProgressConfig::default(),
    );

    assert!(!adjustment.analysis.needs_adjustment);
    assert_eq!(adjustment.new_goals, current);
}

#[test]
fn test_decrease_preserves_macro_ratios() {
    let current = Macros::new(2000.0, 150.0, 200.0, 67.0);
    let adjusted = apply_adjustment_with_config(
        &current,
        &decision(AdjustmentType::Decrease, 200.0),
        &ProgressConfig::default(),
    );

    assert!((adjusted.calories - 1800.0).abs() < f64::EPSILON);
    let (p0, c0, f0) = percentages(&current);
    let (p1, c1, f1) = percentages(&adjusted);
    assert!((p0 - p1).abs() < 2.0);
    assert!((c0 - c1).abs() < 2.0);
    assert!((f0 - f1).abs() < 2.0);
}

#[test]
fn test_increase_preserves_macro_ratios() {
    let current = Macros::new(2000.0, 150.0, 200.0, 67.0);
    let adjusted = apply_adjustment_with_config(
        &current,
        &decision(AdjustmentType::Increase, 200.0),
        &ProgressConfig::default(),
    );

    assert!((adjusted.calories - 2200.0).abs() < f64::EPSILON);
    assert!(adjusted.protein > current.protein);
    let (p0, _, f0) = percentages(&current);
    let (p1, _, f1) = percentages(&adjusted);
    assert!((p0 - p1).abs() < 2.0);
    assert!((f0 - f1).abs() < 2.0);
}

#[test]
fn test_adjustment_never_goes_below_floor() {
    let current = Macros::new(1300.0, 100.0, 120.0, 45.0);
    let adjusted = apply_adjustment_with_config(
        &current,
        &decision(AdjustmentType::Decrease, 300.0),
        &ProgressConfig::default(),
    );
    assert!((adjusted.calories - 1200.0).abs() < f64::EPSILON);
}

#[test]
fn test_no_adjustment_returns_goals_unchanged() {
    let current = Macros::new(2000.0, 150.0, 200.0, 67.0);
    let mut analysis = decision(AdjustmentType::None, 0.0);
    analysis.needs_adjustment = false;
    let adjusted = apply_adjustment_with_config(&current, &analysis, &ProgressConfig::default());
    assert_eq!(adjusted, current);
}

// ============================================================================
// WEEKLY RECORD CONSTRUCTION
// ============================================================================

#[test]
fn test_record_from_full_week_of_logs() {
    let start = week_start(1);
    let logs: Vec<DailyLog> = (0..7)
        .map(|day| {
            let log = DailyLog::new(start + Duration::days(day), 2000.0, 150.0, 200.0, 67.0)
                .with_wellbeing(EnergyLevel::Normal, HungerLevel::Moderate);
            match day {
                0 => log.with_weight(80.0),
                6 => log.with_weight(79.5),
                1 | 3 | 5 => log.with_workout(Some(WorkoutQuality::Good)),
                _ => log,
            }
        })
        .collect();

    let record =
        build_weekly_record_with_config(1, start, &logs, 2000.0, 3, None, &ProgressConfig::default())
            .unwrap();

    assert_eq!(record.days_logged, 7);
    assert!((record.weight_change_kg + 0.5).abs() < 1e-9);
    assert_eq!(record.trend, WeightTrend::Losing);
    assert!((record.calorie_adherence_percent - 100.0).abs() < 1e-9);
    assert!((record.workout_adherence_percent - 100.0).abs() < 1e-9);
    assert!((record.average_protein - 150.0).abs() < 1e-9);
    assert_eq!(record.end_date, start + Duration::days(6));
    assert_eq!(record.energy_levels.as_ref().map(Vec::len), Some(7));
    assert_eq!(record.workout_qualities.as_ref().map(Vec::len), Some(3));
}

#[test]
fn test_partial_logging_lowers_adherence() {
    let start = week_start(2);
    let logs: Vec<DailyLog> = (0..5)
        .map(|day| DailyLog::new(start + Duration::days(day), 2000.0, 150.0, 200.0, 67.0))
        .collect();

    let record = build_weekly_record_with_config(
        2,
        start,
        &logs,
        2000.0,
        0,
        Some(80.0),
        &ProgressConfig::default(),
    )
    .unwrap();

    assert_eq!(record.days_logged, 5);
    assert!((record.calorie_adherence_percent - 500.0 / 7.0).abs() < 1e-9);
    // No weigh-ins this week: the previous end weight carries over
    assert!(record.weight_change_kg.abs() < f64::EPSILON);
    assert!(record.energy_levels.is_none());
    assert!(record.hunger_levels.is_none());
}

#[test]
fn test_record_rejects_invalid_input() {
    let start = week_start(1);
    let logs: Vec<DailyLog> = (0..8)
        .map(|day| DailyLog::new(start + Duration::days(day), 2000.0, 150.0, 200.0, 67.0))
        .collect();
    let config = ProgressConfig::default();
    assert!(build_weekly_record_with_config(1, start, &logs, 2000.0, 3, None, &config).is_err());
    assert!(build_weekly_record_with_config(1, start, &logs[..7], 0.0, 3, None, &config).is_err());
}

#[test]
fn test_record_feeds_analysis() {
    let records: Vec<_> = (1..=3)
        .map(|week| weekly_record(week, -0.6, 92.0, 1900.0))
        .collect();
    let analysis = analyze(&records, GoalCategory::ModerateLoss);
    assert!(!analysis.needs_adjustment);
    assert!((analysis.mean_adherence_percent - 92.0).abs() < 1e-9);
}
