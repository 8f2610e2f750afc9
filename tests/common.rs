// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, a small ingredient catalog, meals, and weekly histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `macrofit`

use std::sync::Once;

use chrono::{Duration, NaiveDate};
use macrofit::catalog::InMemoryCatalog;
use macrofit::models::{
    EnergyLevel, HungerLevel, Ingredient, IngredientCategory, IngredientReference, Macros,
    MealTemplate, WeeklyProgressRecord, WeightTrend, WorkoutQuality,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Catalog with two mixed ingredients, a lean protein, and water
///
/// - `ingredient_a`: 200 kcal, 15 g protein, 20 g carbs, 5 g fat per 100 g
/// - `ingredient_b`: 200 kcal, 10 g protein, 20 g carbs, 10 g fat per 100 g
pub fn test_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with(Ingredient::new(
            "ingredient_a",
            "Ingredient A",
            IngredientCategory::Protein,
            Macros::new(200.0, 15.0, 20.0, 5.0),
        ))
        .with(Ingredient::new(
            "ingredient_b",
            "Ingredient B",
            IngredientCategory::Carbohydrate,
            Macros::new(200.0, 10.0, 20.0, 10.0),
        ))
        .with(Ingredient::new(
            "chicken_breast",
            "Chicken breast",
            IngredientCategory::Protein,
            Macros::new(165.0, 31.0, 0.0, 3.6),
        ))
        .with(Ingredient::new(
            "water",
            "Water",
            IngredientCategory::Beverage,
            Macros::ZERO,
        ))
}

/// Aggregate macros of [`two_ingredient_meal`]
pub const TWO_INGREDIENT_BASE: Macros = Macros::new(500.0, 30.0, 50.0, 20.0);

/// 100 g of A plus 150 g of B: 500 kcal, 30 g protein, 50 g carbs, 20 g fat
pub fn two_ingredient_meal() -> MealTemplate {
    MealTemplate::new(
        "Two ingredient bowl",
        vec![
            IngredientReference::new("ingredient_a", 100.0),
            IngredientReference::new("ingredient_b", 150.0),
        ],
        TWO_INGREDIENT_BASE,
    )
}

/// A Monday to anchor weekly dates
pub fn week_start(week_number: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap() + Duration::weeks(i64::from(week_number) - 1)
}

/// Weekly record with the given weight change, adherence and intake
pub fn weekly_record(
    week_number: u32,
    weight_change_kg: f64,
    calorie_adherence_percent: f64,
    average_calories: f64,
) -> WeeklyProgressRecord {
    let start_weight_kg = 80.0;
    WeeklyProgressRecord {
        week_number,
        start_date: week_start(week_number),
        end_date: week_start(week_number) + Duration::days(6),
        start_weight_kg,
        end_weight_kg: start_weight_kg + weight_change_kg,
        weight_change_kg,
        days_logged: 7,
        average_calories,
        target_calories: average_calories,
        calorie_adherence_percent,
        average_protein: 150.0,
        average_carbs: 150.0,
        average_fat: 50.0,
        workout_adherence_percent: 100.0,
        trend: WeightTrend::classify(weight_change_kg, 0.1),
        energy_levels: None,
        hunger_levels: None,
        workout_qualities: None,
    }
}

/// History of identical weeks
pub fn history(
    weeks: u32,
    weight_change_kg: f64,
    calorie_adherence_percent: f64,
    average_calories: f64,
) -> Vec<WeeklyProgressRecord> {
    (1..=weeks)
        .map(|week| {
            weekly_record(
                week,
                weight_change_kg,
                calorie_adherence_percent,
                average_calories,
            )
        })
        .collect()
}

/// Attach daily reports of low energy, strong hunger, and poor workouts
pub fn with_distress_signals(mut record: WeeklyProgressRecord) -> WeeklyProgressRecord {
    record.energy_levels = Some(vec![EnergyLevel::Low; 7]);
    record.hunger_levels = Some(vec![HungerLevel::Hungry; 7]);
    record.workout_qualities = Some(vec![WorkoutQuality::Poor; 4]);
    record
}
