// ABOUTME: Metabolic adaptation detector configuration
// ABOUTME: Window size, sex-specific calorie floors, and self-report majority threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macrofit_core::models::Sex;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Metabolic adaptation detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationConfig {
    /// Number of most recent weeks evaluated (also the minimum history)
    pub window_weeks: usize,
    /// Mean absolute weekly change below this counts as stagnant (kg/week)
    pub stagnation_band_kg: f64,
    /// Low-intake floor for female users (kcal/day)
    pub female_calorie_floor: f64,
    /// Low-intake floor for male users (kcal/day)
    pub male_calorie_floor: f64,
    /// A signal is present in a week when more than this share of entries match
    pub signal_majority_fraction: f64,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            window_weeks: 4,
            stagnation_band_kg: 0.1,
            female_calorie_floor: 1400.0,
            male_calorie_floor: 1800.0,
            signal_majority_fraction: 0.5,
        }
    }
}

impl AdaptationConfig {
    /// Calorie floor for a sex
    #[must_use]
    pub const fn calorie_floor(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Female => self.female_calorie_floor,
            Sex::Male => self.male_calorie_floor,
        }
    }

    /// Validate adaptation settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an empty window or an out-of-range majority fraction
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange("window_weeks must be positive"));
        }
        if !(self.signal_majority_fraction > 0.0 && self.signal_majority_fraction < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "signal_majority_fraction must be in (0, 1)",
            ));
        }
        if self.female_calorie_floor <= 0.0 || self.male_calorie_floor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("calorie floors must be positive"));
        }
        Ok(())
    }
}
