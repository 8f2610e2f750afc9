// ABOUTME: Meal scaling and ranking commands for macrofit-cli
// ABOUTME: Loads the ingredient catalog, templates, and target from JSON and prints results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use macrofit::catalog::InMemoryCatalog;
use macrofit::errors::AppResult;
use macrofit::intelligence::{rank_meals_by_fit, scale_meal_to_target};
use macrofit::models::{MacroTarget, MealTemplate};
use tracing::info;

use crate::helpers::json::{print_json, read_json};

/// Scale a single meal
pub fn scale(meal_path: &Path, target_path: &Path, catalog_path: &Path) -> AppResult<()> {
    let meal: MealTemplate = read_json(meal_path)?;
    let target: MacroTarget = read_json(target_path)?;
    let catalog: InMemoryCatalog = read_json(catalog_path)?;

    let scaled = scale_meal_to_target(&meal, &target, &catalog)?;
    info!(
        meal = %meal.name,
        mode = ?scaled.mode,
        max_error = scaled.max_relative_error,
        "Scaled meal"
    );
    print_json(&scaled)
}

/// Rank candidate meals
pub fn rank(meals_path: &Path, target_path: &Path, catalog_path: &Path) -> AppResult<()> {
    let meals: Vec<MealTemplate> = read_json(meals_path)?;
    let target: MacroTarget = read_json(target_path)?;
    let catalog: InMemoryCatalog = read_json(catalog_path)?;

    let ranked = rank_meals_by_fit(&meals, &target, &catalog)?;
    info!(
        candidates = ranked.len(),
        catalog_size = catalog.len(),
        "Ranked meals"
    );
    print_json(&ranked)
}
