// ABOUTME: Weekly progress configuration for adherence gating and calorie adjustments
// ABOUTME: Target weekly weight-change rates, deviation thresholds, and adjustment bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macrofit_core::models::GoalCategory;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Target weekly weight change (kg/week) per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyRateTable {
    /// Rapid loss (about -0.875 kg/week)
    pub rapid_loss_kg: f64,
    /// Moderate loss (about -0.625 kg/week)
    pub moderate_loss_kg: f64,
    /// Maintenance (0)
    pub maintenance_kg: f64,
    /// Moderate gain (about +0.375 kg/week)
    pub moderate_gain_kg: f64,
    /// Rapid gain (about +0.625 kg/week)
    pub rapid_gain_kg: f64,
}

impl Default for WeeklyRateTable {
    fn default() -> Self {
        Self {
            rapid_loss_kg: -0.875,
            moderate_loss_kg: -0.625,
            maintenance_kg: 0.0,
            moderate_gain_kg: 0.375,
            rapid_gain_kg: 0.625,
        }
    }
}

impl WeeklyRateTable {
    /// Target weekly change for a goal
    #[must_use]
    pub const fn rate_for(&self, goal: GoalCategory) -> f64 {
        match goal {
            GoalCategory::RapidLoss => self.rapid_loss_kg,
            GoalCategory::ModerateLoss => self.moderate_loss_kg,
            GoalCategory::Maintenance => self.maintenance_kg,
            GoalCategory::ModerateGain => self.moderate_gain_kg,
            GoalCategory::RapidGain => self.rapid_gain_kg,
        }
    }
}

/// Weekly progress analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Target rate per goal
    pub weekly_rates: WeeklyRateTable,
    /// Number of most recent weeks analyzed
    pub window_weeks: usize,
    /// Fewer records than this is the "insufficient data" state
    pub min_records: usize,
    /// Below this mean adherence no adjustment is recommended (%)
    pub min_adherence_percent: f64,
    /// Mean adherence at or above which a full window yields high confidence (%)
    pub high_confidence_adherence_percent: f64,
    /// Deviation below this share of the target rate counts as on track (%)
    pub on_track_tolerance_percent: f64,
    /// Absolute band around zero for maintenance (kg/week)
    pub maintenance_band_kg: f64,
    /// Mean change inside this band counts as stagnant (kg/week)
    pub stagnation_band_kg: f64,
    /// Change faster than this multiple of the target rate is too fast
    pub fast_change_multiple: f64,
    /// Adjustments below this are noise and suppressed (kcal/day)
    pub min_adjustment_kcal: f64,
    /// Largest single adjustment (kcal/day)
    pub max_adjustment_kcal: f64,
    /// Adjusted calories never go below this (kcal/day)
    pub calorie_floor_kcal: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            weekly_rates: WeeklyRateTable::default(),
            window_weeks: 3,
            min_records: 2,
            min_adherence_percent: 70.0,
            high_confidence_adherence_percent: 85.0,
            on_track_tolerance_percent: 15.0,
            maintenance_band_kg: 0.2,
            stagnation_band_kg: 0.1,
            fast_change_multiple: 1.5,
            min_adjustment_kcal: 50.0,
            max_adjustment_kcal: 300.0,
            calorie_floor_kcal: 1200.0,
        }
    }
}

impl ProgressConfig {
    /// Validate progress settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when windows, percentages, or adjustment bounds are inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = &self.weekly_rates;
        if !(rates.rapid_loss_kg <= rates.moderate_loss_kg
            && rates.moderate_loss_kg < 0.0
            && rates.moderate_gain_kg > 0.0
            && rates.moderate_gain_kg <= rates.rapid_gain_kg)
        {
            return Err(ConfigError::InvalidRange(
                "weekly rates must be negative for loss goals and positive for gain goals",
            ));
        }
        if self.min_records < 2 || self.window_weeks < self.min_records {
            return Err(ConfigError::InvalidRange(
                "window_weeks must be >= min_records >= 2",
            ));
        }
        if !(0.0..=100.0).contains(&self.min_adherence_percent)
            || !(0.0..=100.0).contains(&self.high_confidence_adherence_percent)
        {
            return Err(ConfigError::ValueOutOfRange(
                "adherence thresholds must be between 0 and 100",
            ));
        }
        if self.min_adjustment_kcal <= 0.0 || self.min_adjustment_kcal > self.max_adjustment_kcal
        {
            return Err(ConfigError::InvalidRange(
                "adjustment bounds must satisfy 0 < min <= max",
            ));
        }
        if self.fast_change_multiple <= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fast_change_multiple must be greater than 1.0",
            ));
        }
        if self.calorie_floor_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_floor_kcal must be positive",
            ));
        }
        Ok(())
    }
}
