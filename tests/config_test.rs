// ABOUTME: Integration tests for engine configuration loading
// ABOUTME: Validates defaults, environment overrides, parse errors, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macrofit::config::{ConfigError, EngineConfig};
use macrofit::errors::{AppError, ErrorCode};
use macrofit::models::{GoalCategory, Sex};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    env::remove_var("MACROFIT_SCALING_MAX_ITERATIONS");
    let config = EngineConfig::load().unwrap();

    assert_eq!(config.scaling.max_iterations, 200);
    assert_eq!(config.scaling.last_meal_max_iterations, 300);
    assert!((config.scaling.convergence_tolerance - 0.01).abs() < f64::EPSILON);
    assert_eq!(config.progress.window_weeks, 3);
    assert!((config.progress.calorie_floor_kcal - 1200.0).abs() < f64::EPSILON);
    assert!((config.nutrition.macronutrients.carbs_min_g - 100.0).abs() < f64::EPSILON);
    assert!((config.nutrition.macronutrients.fat_min_g - 40.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    env::set_var("MACROFIT_SCALING_MAX_ITERATIONS", "50");
    env::set_var("MACROFIT_ADAPTATION_FEMALE_CALORIE_FLOOR", "1500");

    let config = EngineConfig::load().unwrap();

    env::remove_var("MACROFIT_SCALING_MAX_ITERATIONS");
    env::remove_var("MACROFIT_ADAPTATION_FEMALE_CALORIE_FLOOR");

    assert_eq!(config.scaling.max_iterations, 50);
    assert_eq!(config.scaling.iteration_budget(false), 50);
    assert_eq!(config.scaling.iteration_budget(true), 300);
    assert!((config.adaptation.calorie_floor(Sex::Female) - 1500.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    env::set_var("MACROFIT_PROGRESS_WINDOW_WEEKS", "three");
    let result = EngineConfig::load();
    env::remove_var("MACROFIT_PROGRESS_WINDOW_WEEKS");

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("MACROFIT_PROGRESS_WINDOW_WEEKS"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    env::set_var("MACROFIT_SCALING_DAMPING", "1.5");
    let result = EngineConfig::load();
    env::remove_var("MACROFIT_SCALING_DAMPING");

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_override_is_an_env_error() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    env::set_var(
        "MACROFIT_SCALING_MAX_ITERATIONS",
        OsString::from_vec(vec![0x66, 0xff, 0x6f]),
    );
    let result = EngineConfig::load();
    env::remove_var("MACROFIT_SCALING_MAX_ITERATIONS");

    let error = result.unwrap_err();
    assert!(matches!(error, ConfigError::EnvVar(_)));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_validation_failure_maps_to_config_invalid() {
    env::set_var("MACROFIT_SCALING_DAMPING", "1.5");
    let result = EngineConfig::load();
    env::remove_var("MACROFIT_SCALING_DAMPING");

    let error = AppError::from(result.unwrap_err());
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.source.is_some());
    assert!(!error.code.is_client_error());
}

#[test]
fn test_weekly_rates_follow_goal_direction() {
    let rates = EngineConfig::default().progress.weekly_rates;
    assert!(rates.rate_for(GoalCategory::RapidLoss) < rates.rate_for(GoalCategory::ModerateLoss));
    assert!(rates.rate_for(GoalCategory::Maintenance).abs() < f64::EPSILON);
    assert!(rates.rate_for(GoalCategory::RapidGain) > rates.rate_for(GoalCategory::ModerateGain));
}
