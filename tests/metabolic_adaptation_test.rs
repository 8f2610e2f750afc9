// ABOUTME: Integration tests for metabolic adaptation detection
// ABOUTME: Covers flag counting, sex-specific floors, absent self-reports, and short histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macrofit::config::AdaptationConfig;
use macrofit::intelligence::{detect_metabolic_adaptation_with_config, AdaptationLevel};
use macrofit::models::{GoalCategory, HungerLevel, Sex, WeeklyProgressRecord};

mod common;

use common::{history, with_distress_signals};

fn distressed_history(weeks: u32, average_calories: f64) -> Vec<WeeklyProgressRecord> {
    history(weeks, 0.0, 90.0, average_calories)
        .into_iter()
        .map(with_distress_signals)
        .collect()
}

#[test]
fn test_all_signals_is_severe() {
    common::init_test_logging();
    let result = detect_metabolic_adaptation_with_config(
        &distressed_history(4, 1300.0),
        Sex::Female,
        GoalCategory::ModerateLoss,
        &AdaptationConfig::default(),
    );

    assert_eq!(result.level, AdaptationLevel::Severe);
    assert!(result.is_adapted);
    assert_eq!(result.active_flag_count, 5);
    assert!(result.flags.low_calorie_intake);
    assert!(result.recommendation.contains("reverse diet"));
    assert_eq!(result.weeks_analyzed, 4);
}

#[test]
fn test_missing_self_reports_never_trigger() {
    let result = detect_metabolic_adaptation_with_config(
        &history(4, 0.0, 90.0, 1300.0),
        Sex::Female,
        GoalCategory::ModerateLoss,
        &AdaptationConfig::default(),
    );

    assert!(result.flags.weight_stagnant);
    assert!(result.flags.low_calorie_intake);
    assert!(!result.flags.persistent_low_energy);
    assert!(!result.flags.persistent_hunger);
    assert!(!result.flags.declining_workout_quality);
    assert_eq!(result.level, AdaptationLevel::Mild);
}

#[test]
fn test_calorie_floor_depends_on_sex() {
    let records = history(4, 0.0, 90.0, 1600.0);
    let config = AdaptationConfig::default();

    let female =
        detect_metabolic_adaptation_with_config(&records, Sex::Female, GoalCategory::RapidLoss, &config);
    let male =
        detect_metabolic_adaptation_with_config(&records, Sex::Male, GoalCategory::RapidLoss, &config);

    assert!(!female.flags.low_calorie_intake);
    assert!(male.flags.low_calorie_intake);
    assert_eq!(female.level, AdaptationLevel::None);
    assert_eq!(male.level, AdaptationLevel::Mild);
}

#[test]
fn test_one_quiet_week_breaks_persistent_signal() {
    let mut records = distressed_history(4, 2000.0);
    records[2].hunger_levels = Some(vec![HungerLevel::Satisfied; 7]);
    records[3].energy_levels = None;

    let result = detect_metabolic_adaptation_with_config(
        &records,
        Sex::Male,
        GoalCategory::ModerateLoss,
        &AdaptationConfig::default(),
    );

    assert!(!result.flags.persistent_hunger);
    assert!(!result.flags.persistent_low_energy);
    assert!(result.flags.declining_workout_quality);
    assert!(result.flags.weight_stagnant);
    assert_eq!(result.level, AdaptationLevel::Mild);
}

#[test]
fn test_stagnation_ignored_outside_loss_goals() {
    let result = detect_metabolic_adaptation_with_config(
        &history(4, 0.0, 90.0, 1300.0),
        Sex::Female,
        GoalCategory::Maintenance,
        &AdaptationConfig::default(),
    );
    assert!(!result.flags.weight_stagnant);
    assert!(!result.flags.low_calorie_intake);
    assert_eq!(result.level, AdaptationLevel::None);
    assert!(!result.is_adapted);
}

#[test]
fn test_short_history_reports_none() {
    let result = detect_metabolic_adaptation_with_config(
        &distressed_history(3, 1300.0),
        Sex::Female,
        GoalCategory::ModerateLoss,
        &AdaptationConfig::default(),
    );
    assert_eq!(result.level, AdaptationLevel::None);
    assert_eq!(result.active_flag_count, 0);
    assert!(result.reason.contains("At least 4 weeks"));
}

#[test]
fn test_only_latest_weeks_count() {
    let mut records = distressed_history(4, 1300.0);
    let mut older = common::weekly_record(0, -0.8, 90.0, 1300.0);
    older.energy_levels = None;
    records.insert(0, older);

    let result = detect_metabolic_adaptation_with_config(
        &records,
        Sex::Female,
        GoalCategory::ModerateLoss,
        &AdaptationConfig::default(),
    );
    assert_eq!(result.weeks_analyzed, 4);
    assert_eq!(result.level, AdaptationLevel::Severe);
}
