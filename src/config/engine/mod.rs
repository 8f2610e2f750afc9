// ABOUTME: Engine configuration tree for target calculation, meal scaling, and progress analysis
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! # Module Structure
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - BMR formulas, activity multipliers, goal offsets, macro split
//! - `scaling` - Meal scaler iteration budgets and fit-score weights
//! - `progress` - Weekly progress thresholds and adjustment bounds
//! - `adaptation` - Metabolic adaptation window and calorie floors

pub mod adaptation;
pub mod error;
pub mod nutrition;
pub mod progress;
pub mod scaling;

pub use adaptation::AdaptationConfig;
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, ExerciseBoostConfig, GoalOffsetsConfig,
    MacronutrientConfig, NeatConfig, NutritionConfig,
};
pub use progress::{ProgressConfig, WeeklyRateTable};
pub use scaling::{FitWeights, ScalingConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Daily target calculation
    pub nutrition: NutritionConfig,
    /// Meal scaling and fit ranking
    pub scaling: ScalingConfig,
    /// Weekly progress analysis
    pub progress: ProgressConfig,
    /// Metabolic adaptation detection
    pub adaptation: AdaptationConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` reported by any section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.scaling.validate()?;
        self.progress.validate()?;
        self.adaptation.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Nutrition overrides
        Self::apply_env_var(
            "MACROFIT_NUTRITION_MINIMUM_BMR",
            &mut self.nutrition.bmr.minimum_bmr,
        )?;
        Self::apply_env_var(
            "MACROFIT_NUTRITION_CARBS_MIN_G",
            &mut self.nutrition.macronutrients.carbs_min_g,
        )?;
        Self::apply_env_var(
            "MACROFIT_NUTRITION_FAT_MIN_G",
            &mut self.nutrition.macronutrients.fat_min_g,
        )?;
        Self::apply_env_var(
            "MACROFIT_NUTRITION_FAT_MAX_PERCENT",
            &mut self.nutrition.macronutrients.fat_max_percent,
        )?;

        // Scaling overrides
        Self::apply_env_var(
            "MACROFIT_SCALING_MAX_ITERATIONS",
            &mut self.scaling.max_iterations,
        )?;
        Self::apply_env_var(
            "MACROFIT_SCALING_LAST_MEAL_MAX_ITERATIONS",
            &mut self.scaling.last_meal_max_iterations,
        )?;
        Self::apply_env_var(
            "MACROFIT_SCALING_CONVERGENCE_TOLERANCE",
            &mut self.scaling.convergence_tolerance,
        )?;
        Self::apply_env_var("MACROFIT_SCALING_DAMPING", &mut self.scaling.damping)?;

        // Progress overrides
        Self::apply_env_var(
            "MACROFIT_PROGRESS_WINDOW_WEEKS",
            &mut self.progress.window_weeks,
        )?;
        Self::apply_env_var(
            "MACROFIT_PROGRESS_MIN_ADHERENCE_PERCENT",
            &mut self.progress.min_adherence_percent,
        )?;
        Self::apply_env_var(
            "MACROFIT_PROGRESS_MAX_ADJUSTMENT_KCAL",
            &mut self.progress.max_adjustment_kcal,
        )?;
        Self::apply_env_var(
            "MACROFIT_PROGRESS_CALORIE_FLOOR_KCAL",
            &mut self.progress.calorie_floor_kcal,
        )?;

        // Adaptation overrides
        Self::apply_env_var(
            "MACROFIT_ADAPTATION_WINDOW_WEEKS",
            &mut self.adaptation.window_weeks,
        )?;
        Self::apply_env_var(
            "MACROFIT_ADAPTATION_FEMALE_CALORIE_FLOOR",
            &mut self.adaptation.female_calorie_floor,
        )?;
        Self::apply_env_var(
            "MACROFIT_ADAPTATION_MALE_CALORIE_FLOOR",
            &mut self.adaptation.male_calorie_floor,
        )?;

        Ok(self)
    }
}
