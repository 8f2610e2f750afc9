// ABOUTME: Daily target and per-meal target commands for macrofit-cli
// ABOUTME: Reads profiles and macro totals from JSON and prints computed targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use macrofit::errors::AppResult;
use macrofit::intelligence::{
    compute_daily_targets, compute_remaining_meal_target, compute_weighted_meal_target,
    UserProfile,
};
use macrofit::models::Macros;

use crate::helpers::json::{print_json, read_json};

/// Daily targets for a profile
pub fn targets(profile_path: &Path) -> AppResult<()> {
    let profile: UserProfile = read_json(profile_path)?;
    print_json(&compute_daily_targets(&profile)?)
}

/// Target for the next meal, split evenly or by weights
pub fn meal_target(
    daily_path: &Path,
    logged_path: &Path,
    meals_remaining: u32,
    weights: Option<&[f64]>,
) -> AppResult<()> {
    let daily: Macros = read_json(daily_path)?;
    let logged: Macros = read_json(logged_path)?;
    let target = match weights {
        Some(weights) => compute_weighted_meal_target(&daily, &logged, weights)?,
        None => compute_remaining_meal_target(&daily, &logged, meals_remaining)?,
    };
    print_json(&target)
}
