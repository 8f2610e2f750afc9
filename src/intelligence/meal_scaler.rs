// ABOUTME: Meal scaling optimizer that fits ingredient quantities to a four-macro target
// ABOUTME: Minimax multiplier search, legacy proportional mode, and last-meal exact matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Scaler
//!
//! Scales every ingredient of a meal by one multiplier `m` so the meal's
//! calories, protein, carbohydrate and fat land as close as possible to a
//! target. The objective is the **maximum** relative error across the four
//! macros, so no single macro can drift while the others look fine.
//!
//! # Algorithm
//!
//! 1. `m0 = target.calories / base.calories` (1 when the base has no calories,
//!    0 for an all-zero target such as a fully eaten day)
//! 2. Damped ratio following: `m <- m * (d * avg(target_i / achieved_i) + (1 - d))`
//!    with `d = 0.3`, keeping the best candidate seen, until the worst error
//!    drops below the tolerance or the iteration budget runs out
//! 3. The closed-form minimax point `m* = 2 / (min r_i + max r_i)` with
//!    `r_i = base_i / target_i` is evaluated as a final candidate
//! 4. Quantities are rounded to whole units and macros recomputed from them
//!
//! Templates without ingredient detail fall back to a single calorie ratio
//! applied to the stored macros. For the day's last meal the reported macros
//! are set to the target exactly; `ingredient_macros` keeps the values
//! derived from the rounded quantities so any residual gap stays visible.

use std::ops::ControlFlow;

use macrofit_core::errors::AppResult;
use macrofit_core::models::{IngredientReference, MacroKind, MacroTarget, Macros, MealTemplate};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::catalog::{aggregate_macros, resolve_ingredients, IngredientCatalog, ResolvedIngredient};
use crate::config::{EngineConfig, ScalingConfig};
use crate::intelligence::physiological_constants::numeric::NEAR_ZERO;

/// How a meal was scaled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScalingMode {
    /// Per-ingredient quantities searched for the minimax multiplier
    IngredientOptimized,
    /// No ingredient detail: stored macros scaled by the calorie ratio
    LegacyProportional,
}

/// A meal scaled against a target
///
/// Ephemeral value: shown or consumed, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaledMeal {
    /// The template with scaled quantities and the macros they add up to
    pub template: MealTemplate,
    /// Target the meal was scaled for
    pub target: MacroTarget,
    /// Scaling path taken
    pub mode: ScalingMode,
    /// Multiplier applied to every ingredient quantity (or to the stored macros)
    pub multiplier: f64,
    /// Macros presented to the user; equal to the target for the last meal
    pub reported: Macros,
    /// Macros recomputed from the rounded ingredient quantities
    pub ingredient_macros: Macros,
    /// Search iterations used (0 for the legacy path)
    pub iterations: u32,
    /// Worst relative error of `ingredient_macros` against the target
    pub max_relative_error: f64,
    /// `max_relative_error` is within the convergence tolerance
    pub converged: bool,
    /// Reported macros were pinned to the target (last meal)
    pub exact_match: bool,
    /// The target had at least one non-zero macro
    pub scaled_for_target: bool,
}

impl ScaledMeal {
    /// Scaled ingredient quantities
    #[must_use]
    pub fn ingredients(&self) -> &[IngredientReference] {
        &self.template.ingredients
    }
}

/// Relative error of one quantity: `|achieved - target| / target`, 0 when the target is zero
#[must_use]
pub fn relative_error(achieved: f64, target: f64) -> f64 {
    if target.abs() < NEAR_ZERO {
        0.0
    } else {
        (achieved - target).abs() / target.abs()
    }
}

/// Worst relative error across the four macros
#[must_use]
pub fn max_relative_error(achieved: &Macros, target: &Macros) -> f64 {
    MacroKind::ALL
        .iter()
        .map(|kind| relative_error(achieved.get(*kind), target.get(*kind)))
        .fold(0.0, f64::max)
}

/// Mean of `target_i / achieved_i` over macros where both are non-zero
fn average_correction_ratio(achieved: &Macros, target: &Macros) -> f64 {
    let (sum, count) = MacroKind::ALL
        .iter()
        .map(|kind| (achieved.get(*kind), target.get(*kind)))
        .filter(|(achieved, target)| achieved.abs() >= NEAR_ZERO && target.abs() >= NEAR_ZERO)
        .fold((0.0, 0_u32), |(sum, count), (achieved, target)| {
            (sum + target / achieved, count + 1)
        });
    if count == 0 {
        1.0
    } else {
        sum / f64::from(count)
    }
}

/// Closed-form multiplier minimizing `max_i |m * r_i - 1|`
///
/// Only macros with a non-zero base and target constrain the optimum; the
/// others contribute a constant error.
fn minimax_multiplier(base: &Macros, target: &Macros) -> Option<f64> {
    let ratios = MacroKind::ALL
        .iter()
        .map(|kind| (base.get(*kind), target.get(*kind)))
        .filter(|(base, target)| *base >= NEAR_ZERO && *target >= NEAR_ZERO)
        .map(|(base, target)| base / target);
    let (min, max) = ratios.fold(None, |bounds: Option<(f64, f64)>, ratio| {
        Some(bounds.map_or((ratio, ratio), |(min, max)| (min.min(ratio), max.max(ratio))))
    })?;
    Some(2.0 / (min + max))
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    multiplier: f64,
    max_error: f64,
}

impl Candidate {
    fn evaluate(multiplier: f64, base: &Macros, target: &Macros) -> Self {
        Self {
            multiplier,
            max_error: max_relative_error(&base.scaled(multiplier), target),
        }
    }

    fn better_of(self, other: Self) -> Self {
        if self.max_error < other.max_error {
            self
        } else {
            other
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SearchState {
    multiplier: f64,
    best: Candidate,
    iterations: u32,
}

#[derive(Debug, Clone, Copy)]
struct SearchOutcome {
    best: Candidate,
    iterations: u32,
}

/// Damped ratio-following search, folded over the iteration budget
fn search_multiplier(
    base: &Macros,
    target: &Macros,
    budget: u32,
    config: &ScalingConfig,
) -> SearchOutcome {
    let initial = if base.calories.abs() < NEAR_ZERO {
        1.0
    } else {
        target.calories / base.calories
    };
    let start = SearchState {
        multiplier: initial,
        best: Candidate {
            multiplier: initial,
            max_error: f64::INFINITY,
        },
        iterations: 0,
    };

    let flow = (0..budget).try_fold(start, |state, _| {
        let current = Candidate::evaluate(state.multiplier, base, target);
        let best = current.better_of(state.best);
        let iterations = state.iterations + 1;
        trace!(
            iteration = iterations,
            multiplier = state.multiplier,
            max_error = current.max_error,
            "Meal scaling step"
        );

        if current.max_error < config.convergence_tolerance {
            return ControlFlow::Break(SearchState {
                multiplier: state.multiplier,
                best,
                iterations,
            });
        }

        let achieved = base.scaled(state.multiplier);
        let correction = config
            .damping
            .mul_add(average_correction_ratio(&achieved, target), 1.0 - config.damping);
        let next = state.multiplier * correction;

        // Fixed point of the damped update: further steps cannot improve
        if (next - state.multiplier).abs() <= f64::EPSILON * state.multiplier.abs().max(1.0) {
            return ControlFlow::Break(SearchState {
                multiplier: next,
                best,
                iterations,
            });
        }

        ControlFlow::Continue(SearchState {
            multiplier: next,
            best,
            iterations,
        })
    });

    let (ControlFlow::Break(state) | ControlFlow::Continue(state)) = flow;

    let best = minimax_multiplier(base, target)
        .map(|multiplier| Candidate::evaluate(multiplier, base, target))
        .map_or(state.best, |closed_form| closed_form.better_of(state.best));

    SearchOutcome {
        best,
        iterations: state.iterations,
    }
}

/// Scale a meal to a target using the global engine configuration
///
/// # Errors
///
/// Returns `ResourceNotFound` if an ingredient id is missing from the catalog
pub fn scale_meal_to_target<C: IngredientCatalog + ?Sized>(
    meal: &MealTemplate,
    target: &MacroTarget,
    catalog: &C,
) -> AppResult<ScaledMeal> {
    scale_meal_to_target_with_config(meal, target, catalog, &EngineConfig::global().scaling)
}

/// Scale a meal to a target
///
/// Never fails on numerical grounds: an exhausted budget returns the best
/// multiplier found together with its error. Negative targets and
/// quantities are clamped to zero.
///
/// # Errors
///
/// Returns `ResourceNotFound` if an ingredient id is missing from the catalog
pub fn scale_meal_to_target_with_config<C: IngredientCatalog + ?Sized>(
    meal: &MealTemplate,
    target: &MacroTarget,
    catalog: &C,
    config: &ScalingConfig,
) -> AppResult<ScaledMeal> {
    let target = target.sanitized();

    if meal.has_ingredient_detail() {
        let resolved = resolve_ingredients(&meal.ingredients, catalog)?;
        Ok(scale_ingredients(meal, &resolved, &target, config))
    } else {
        Ok(scale_legacy(meal, &target, config))
    }
}

fn scale_ingredients(
    meal: &MealTemplate,
    resolved: &[ResolvedIngredient<'_>],
    target: &MacroTarget,
    config: &ScalingConfig,
) -> ScaledMeal {
    let goal = target.macros();
    let base = aggregate_macros(resolved);

    let outcome = search_multiplier(
        &base,
        &goal,
        config.iteration_budget(target.is_last_meal),
        config,
    );
    let (multiplier, iterations) = (outcome.best.multiplier, outcome.iterations);

    let ingredients: Vec<IngredientReference> = resolved
        .iter()
        .map(|item| {
            IngredientReference::new(
                item.ingredient.id.clone(),
                (item.amount * multiplier).round().max(0.0),
            )
        })
        .collect();
    let ingredient_macros: Macros = resolved
        .iter()
        .zip(&ingredients)
        .map(|(item, scaled)| item.ingredient.macros_for(scaled.amount))
        .sum();

    let result = finish(
        meal,
        ingredients,
        *target,
        ScalingMode::IngredientOptimized,
        multiplier,
        ingredient_macros,
        iterations,
        config,
    );
    debug!(
        meal = %meal.name,
        multiplier = result.multiplier,
        iterations = result.iterations,
        max_error = result.max_relative_error,
        exact_match = result.exact_match,
        "Scaled meal at ingredient level"
    );
    result
}

fn scale_legacy(meal: &MealTemplate, target: &MacroTarget, config: &ScalingConfig) -> ScaledMeal {
    let base = meal.macros.sanitized();
    let multiplier = if base.calories.abs() < NEAR_ZERO {
        1.0
    } else {
        target.calories / base.calories
    };

    let result = finish(
        meal,
        Vec::new(),
        *target,
        ScalingMode::LegacyProportional,
        multiplier,
        base.scaled(multiplier),
        0,
        config,
    );
    debug!(
        meal = %meal.name,
        multiplier = result.multiplier,
        max_error = result.max_relative_error,
        "Scaled meal without ingredient detail (proportional mode)"
    );
    result
}

#[allow(clippy::too_many_arguments)]
fn finish(
    meal: &MealTemplate,
    ingredients: Vec<IngredientReference>,
    target: MacroTarget,
    mode: ScalingMode,
    multiplier: f64,
    ingredient_macros: Macros,
    iterations: u32,
    config: &ScalingConfig,
) -> ScaledMeal {
    let goal = target.macros();
    let scaled_for_target = !goal.is_zero();
    let exact_match = target.is_last_meal;
    let reported = if exact_match { goal } else { ingredient_macros };
    let max_error = max_relative_error(&ingredient_macros, &goal);

    let mut template = meal.clone();
    template.ingredients = ingredients;
    template.macros = ingredient_macros;

    ScaledMeal {
        template,
        target,
        mode,
        multiplier,
        reported,
        ingredient_macros,
        iterations,
        max_relative_error: max_error,
        converged: max_error < config.convergence_tolerance,
        exact_match,
        scaled_for_target,
    }
}
