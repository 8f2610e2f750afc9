// ABOUTME: Configuration module for engine tuning constants and thresholds
// ABOUTME: Re-exports the engine configuration tree, its error type, and the global accessor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the macrofit engine
//!
//! Every tunable constant used by the calculators lives in [`EngineConfig`].
//! Defaults encode the product's nutrition policy; environment variables with
//! the `MACROFIT_` prefix override selected values at load time.

/// Engine configuration tree (nutrition, scaling, progress, adaptation)
pub mod engine;

pub use engine::{
    ActivityFactorsConfig, AdaptationConfig, BmrConfig, ConfigError, EngineConfig,
    ExerciseBoostConfig, FitWeights, GoalOffsetsConfig, MacronutrientConfig, NeatConfig,
    NutritionConfig, ProgressConfig, ScalingConfig, WeeklyRateTable,
};
