// ABOUTME: Meal scaling configuration for the multiplier search and fit scoring
// ABOUTME: Iteration budgets, convergence tolerance, damping, and fit-score weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macrofit_core::models::MacroKind;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Meal scaler and fit ranker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingConfig {
    /// Iteration budget for an ordinary meal
    pub max_iterations: u32,
    /// Iteration budget for the last meal of the day
    pub last_meal_max_iterations: u32,
    /// Stop once the worst relative error drops below this fraction (0.01 = 1 %)
    pub convergence_tolerance: f64,
    /// Weight given to the averaged target/achieved ratio on each step
    pub damping: f64,
    /// Relative weight of each macro in the fit score
    pub fit_weights: FitWeights,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            last_meal_max_iterations: 300,
            convergence_tolerance: 0.01,
            damping: 0.3,
            fit_weights: FitWeights::default(),
        }
    }
}

impl ScalingConfig {
    /// Iteration budget for a target
    #[must_use]
    pub const fn iteration_budget(&self, is_last_meal: bool) -> u32 {
        if is_last_meal {
            self.last_meal_max_iterations
        } else {
            self.max_iterations
        }
    }

    /// Validate scaling settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for empty budgets, out-of-range tolerance or damping,
    /// or fit weights that do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 || self.last_meal_max_iterations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "iteration budgets must be positive",
            ));
        }
        if !(self.convergence_tolerance > 0.0 && self.convergence_tolerance < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "convergence_tolerance must be in (0, 1)",
            ));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::ValueOutOfRange("damping must be in (0, 1]"));
        }
        self.fit_weights.validate()
    }
}

/// Fit-score weights; calories and protein dominate
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FitWeights {
    /// Calories weight (0.4)
    pub calories: f64,
    /// Protein weight (0.3)
    pub protein: f64,
    /// Carbohydrate weight (0.15)
    pub carbs: f64,
    /// Fat weight (0.15)
    pub fat: f64,
}

impl Default for FitWeights {
    fn default() -> Self {
        Self {
            calories: 0.4,
            protein: 0.3,
            carbs: 0.15,
            fat: 0.15,
        }
    }
}

impl FitWeights {
    /// Weight for a single macro
    #[must_use]
    pub const fn weight(&self, kind: MacroKind) -> f64 {
        match kind {
            MacroKind::Calories => self.calories,
            MacroKind::Protein => self.protein,
            MacroKind::Carbs => self.carbs,
            MacroKind::Fat => self.fat,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if MacroKind::ALL.iter().any(|kind| self.weight(*kind) < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "fit weights must not be negative",
            ));
        }
        let sum: f64 = MacroKind::ALL.iter().map(|kind| self.weight(*kind)).sum();
        if (sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights("fit weights must sum to 1.0"));
        }
        Ok(())
    }
}
