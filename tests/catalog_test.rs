// ABOUTME: Integration tests for the ingredient catalog and JSON input formats
// ABOUTME: Validates catalog deserialization and templates built from catalog entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macrofit::catalog::{template_from_ingredients, InMemoryCatalog, IngredientCatalog};
use macrofit::models::{IngredientReference, MacroTarget, MealTemplate};
use serde_json::json;

mod common;

#[test]
fn test_catalog_deserializes_from_array() {
    let catalog: InMemoryCatalog = serde_json::from_value(json!([
        {
            "id": "oats",
            "name": "Rolled oats",
            "category": "carbohydrate",
            "per_100": {"calories": 380.0, "protein": 13.0, "carbs": 67.0, "fat": 7.0}
        },
        {
            "id": "whey",
            "name": "Whey protein",
            "per_100": {"calories": 400.0, "protein": 80.0, "carbs": 8.0, "fat": 6.0}
        }
    ]))
    .unwrap();

    assert_eq!(catalog.len(), 2);
    assert!((catalog.get("whey").unwrap().per_100.protein - 80.0).abs() < f64::EPSILON);
    assert!(catalog.get("rice").is_none());
}

#[test]
fn test_template_macros_derived_from_ingredients() {
    let template = template_from_ingredients(
        "Bowl",
        vec![
            IngredientReference::new("ingredient_a", 100.0),
            IngredientReference::new("ingredient_b", 150.0),
        ],
        &common::test_catalog(),
    )
    .unwrap();

    assert!(template.has_ingredient_detail());
    assert_eq!(template.macros, common::TWO_INGREDIENT_BASE);
}

#[test]
fn test_meal_and_target_json_defaults() {
    let meal: MealTemplate = serde_json::from_value(json!({
        "id": "7b0f1f5e-2d1c-4c7a-9c55-3f1e6b2a9d10",
        "name": "Leftovers",
        "macros": {"calories": 500.0, "protein": 30.0, "carbs": 50.0, "fat": 20.0}
    }))
    .unwrap();
    assert!(!meal.has_ingredient_detail());
    assert!(!meal.is_custom);

    let target: MacroTarget = serde_json::from_value(json!({
        "calories": 600.0, "protein": 40.0, "carbs": 60.0, "fat": 20.0
    }))
    .unwrap();
    assert!(!target.is_last_meal);
}
