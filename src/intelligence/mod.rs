// ABOUTME: Intelligence module for target calculation, meal scaling, and progress analysis
// ABOUTME: Re-exports the public entry points of each calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure, synchronous calculators. Every function is a deterministic function
//! of its explicit inputs plus the engine configuration, so independent calls
//! can run on any thread without coordination.
//!
//! Data flows one way: `nutrition_calculator` produces daily and per-meal
//! targets consumed by `meal_scaler` and `fit_ranker`; logged days feed
//! `weekly_progress`, whose history feeds `metabolic_adaptation`.

/// Ranks candidate meals by fit to a target
pub mod fit_ranker;
/// Scales a meal's ingredient quantities to a macro target
pub mod meal_scaler;
/// Detects metabolic adaptation over several weeks
pub mod metabolic_adaptation;
/// Daily energy and macro targets
pub mod nutrition_calculator;
/// Hard physiological bounds and numerical guards
pub mod physiological_constants;
/// Weekly progress analysis and calorie adjustment
pub mod weekly_progress;

pub use fit_ranker::{
    calculate_fit_score, rank_meals_by_fit, rank_meals_by_fit_with_config, RankedMeal,
    MAX_FIT_SCORE,
};
pub use meal_scaler::{
    max_relative_error, relative_error, scale_meal_to_target, scale_meal_to_target_with_config,
    ScaledMeal, ScalingMode,
};
pub use metabolic_adaptation::{
    detect_metabolic_adaptation, detect_metabolic_adaptation_with_config, AdaptationFlags,
    AdaptationLevel, MetabolicAdaptationResult,
};
pub use nutrition_calculator::{
    calculate_activity_multiplier, calculate_katch_mcardle, calculate_lean_body_mass,
    calculate_macro_split, calculate_mifflin_st_jeor, calculate_target_calories, calculate_tdee,
    compute_daily_targets, compute_daily_targets_with_config, compute_remaining_meal_target,
    compute_weighted_meal_target, BmrFormula, DailyTargets, ExpenditureModel, MacroPercentages,
    MacroSplit, UserProfile,
};
pub use weekly_progress::{
    adjust_goals, adjust_goals_with_config, analyze_weekly_progress,
    analyze_weekly_progress_with_config, apply_adjustment, apply_adjustment_with_config,
    build_weekly_record, build_weekly_record_with_config, AdjustmentType, Confidence,
    GoalAdjustment, ProgressAnalysis,
};
