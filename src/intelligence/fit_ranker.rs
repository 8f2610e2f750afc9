// ABOUTME: Ranks candidate meals by how well their scaled macros fit a target
// ABOUTME: Parallel scaling with rayon, weighted deviation fit score, and stable descending sort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macrofit_core::errors::AppResult;
use macrofit_core::models::{MacroKind, MacroTarget, Macros, MealTemplate};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::IngredientCatalog;
use crate::config::{EngineConfig, FitWeights, ScalingConfig};
use crate::intelligence::meal_scaler::{
    relative_error, scale_meal_to_target_with_config, ScaledMeal,
};

/// Best possible fit score
pub const MAX_FIT_SCORE: f64 = 100.0;

/// A candidate meal with its scaled form and fit score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMeal {
    /// The meal as supplied, unscaled
    pub original: MealTemplate,
    /// The meal scaled to the target
    pub scaled: ScaledMeal,
    /// Fit score, 0-100 (higher is better)
    pub fit_score: f64,
    /// Position in the input list
    pub input_index: usize,
}

/// Fit score: 100 minus the weighted relative deviation of each macro, clamped to 0-100
#[must_use]
pub fn calculate_fit_score(achieved: &Macros, target: &Macros, weights: &FitWeights) -> f64 {
    let weighted_deviation: f64 = MacroKind::ALL
        .iter()
        .map(|kind| {
            weights.weight(*kind) * relative_error(achieved.get(*kind), target.get(*kind))
        })
        .sum();
    weighted_deviation
        .mul_add(-MAX_FIT_SCORE, MAX_FIT_SCORE)
        .clamp(0.0, MAX_FIT_SCORE)
}

/// Rank meals by fit using the global engine configuration
///
/// # Errors
///
/// Returns `ResourceNotFound` if any meal references an ingredient missing from the catalog
pub fn rank_meals_by_fit<C: IngredientCatalog + ?Sized>(
    meals: &[MealTemplate],
    target: &MacroTarget,
    catalog: &C,
) -> AppResult<Vec<RankedMeal>> {
    rank_meals_by_fit_with_config(meals, target, catalog, &EngineConfig::global().scaling)
}

/// Scale every meal to the target and order by fit score, best first
///
/// Scores use the macros derived from the rounded ingredient quantities.
/// Ties keep input order. Every input meal appears in the output.
///
/// # Errors
///
/// Returns `ResourceNotFound` if any meal references an ingredient missing from the catalog
pub fn rank_meals_by_fit_with_config<C: IngredientCatalog + ?Sized>(
    meals: &[MealTemplate],
    target: &MacroTarget,
    catalog: &C,
    config: &ScalingConfig,
) -> AppResult<Vec<RankedMeal>> {
    let goal = target.sanitized().macros();

    let mut ranked = meals
        .par_iter()
        .enumerate()
        .map(|(input_index, meal)| {
            let scaled = scale_meal_to_target_with_config(meal, target, catalog, config)?;
            let fit_score =
                calculate_fit_score(&scaled.ingredient_macros, &goal, &config.fit_weights);
            Ok(RankedMeal {
                original: meal.clone(),
                scaled,
                fit_score,
                input_index,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    // Stable sort: equal scores keep input order
    ranked.sort_by(|a, b| b.fit_score.total_cmp(&a.fit_score));

    debug!(
        candidates = ranked.len(),
        best_score = ranked.first().map(|meal| meal.fit_score),
        "Ranked meals by fit"
    );

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_fit_scores_100() {
        let macros = Macros::new(600.0, 40.0, 60.0, 20.0);
        let score = calculate_fit_score(&macros, &macros, &FitWeights::default());
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_calorie_deviation_weighted_most() {
        let target = Macros::new(600.0, 40.0, 60.0, 20.0);
        let calories_off = Macros::new(660.0, 40.0, 60.0, 20.0);
        let fat_off = Macros::new(600.0, 40.0, 60.0, 22.0);
        let weights = FitWeights::default();
        // 10% off on each: 100 - 0.4 * 10 = 96, 100 - 0.15 * 10 = 98.5
        assert!((calculate_fit_score(&calories_off, &target, &weights) - 96.0).abs() < 1e-9);
        assert!((calculate_fit_score(&fat_off, &target, &weights) - 98.5).abs() < 1e-9);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let target = Macros::new(600.0, 40.0, 60.0, 20.0);
        let wild = Macros::new(6000.0, 400.0, 600.0, 200.0);
        assert!(calculate_fit_score(&wild, &target, &FitWeights::default()).abs() < f64::EPSILON);
    }
}
