// ABOUTME: Nutrition configuration for energy expenditure and daily macro targets
// ABOUTME: Configures BMR formulas, activity and NEAT multipliers, goal offsets, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Target calculation configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Lean-mass BMR: Katch & `McArdle` (1996), Nutrition, Weight Control, and Exercise
//! - Activity factors: `McArdle` et al. (2010), Exercise Physiology
//! - NEAT: Levine (2002) DOI: 10.1053/beem.2002.0227
//! - Protein in a deficit: Helms et al. (2014) DOI: 10.1186/1550-2783-11-20

use macrofit_core::models::{GoalCategory, GoalDirection, OccupationType};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Target calculation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Bucketed activity multipliers keyed by weekly training frequency
    pub activity_factors: ActivityFactorsConfig,
    /// Non-exercise activity multipliers for the advanced expenditure model
    pub neat: NeatConfig,
    /// Exercise multipliers layered on top of NEAT in the advanced model
    pub exercise_boost: ExerciseBoostConfig,
    /// Calorie offset per goal
    pub goal_offsets: GoalOffsetsConfig,
    /// Protein / fat / carbohydrate split
    pub macronutrients: MacronutrientConfig,
}

/// BMR calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Katch-McArdle intercept (370)
    pub katch_constant: f64,
    /// Katch-McArdle lean mass coefficient (21.6)
    pub katch_lean_mass_coef: f64,
    /// Safety floor for any BMR result (kcal/day)
    pub minimum_bmr: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            katch_constant: 370.0,
            katch_lean_mass_coef: 21.6,
            minimum_bmr: 1000.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// No training days: 1.2
    pub sedentary: f64,
    /// 1-2 training days/week: 1.375
    pub lightly_active: f64,
    /// 3-5 training days/week: 1.55
    pub moderately_active: f64,
    /// 6-7 training days/week: 1.725
    pub very_active: f64,
    /// More than 7 sessions/week (doubles): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Bucketed multiplier for a weekly training frequency
    #[must_use]
    pub const fn factor_for_training_days(&self, days_per_week: u8) -> f64 {
        match days_per_week {
            0 => self.sedentary,
            1..=2 => self.lightly_active,
            3..=5 => self.moderately_active,
            6..=7 => self.very_active,
            _ => self.extra_active,
        }
    }
}

/// Non-exercise activity thermogenesis multipliers
///
/// Step bands are upper bounds (exclusive) for each multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeatConfig {
    /// Below this step count: sedentary NEAT
    pub sedentary_steps_max: u32,
    /// Below this step count: low NEAT
    pub low_steps_max: u32,
    /// Below this step count: moderate NEAT
    pub moderate_steps_max: u32,
    /// Below this step count: high NEAT, otherwise very high
    pub high_steps_max: u32,
    /// Sedentary NEAT multiplier (1.2)
    pub sedentary_factor: f64,
    /// Low NEAT multiplier (1.3)
    pub low_factor: f64,
    /// Moderate NEAT multiplier (1.4)
    pub moderate_factor: f64,
    /// High NEAT multiplier (1.5)
    pub high_factor: f64,
    /// Very high NEAT multiplier (1.6)
    pub very_high_factor: f64,
    /// Desk job multiplier
    pub desk_factor: f64,
    /// Standing job multiplier
    pub standing_factor: f64,
    /// Active job multiplier
    pub active_factor: f64,
    /// Heavy manual job multiplier
    pub manual_factor: f64,
}

impl Default for NeatConfig {
    fn default() -> Self {
        Self {
            sedentary_steps_max: 5_000,
            low_steps_max: 7_500,
            moderate_steps_max: 10_000,
            high_steps_max: 12_500,
            sedentary_factor: 1.2,
            low_factor: 1.3,
            moderate_factor: 1.4,
            high_factor: 1.5,
            very_high_factor: 1.6,
            desk_factor: 1.2,
            standing_factor: 1.3,
            active_factor: 1.45,
            manual_factor: 1.6,
        }
    }
}

impl NeatConfig {
    /// NEAT multiplier for an average daily step count
    #[must_use]
    pub const fn factor_for_steps(&self, steps: u32) -> f64 {
        if steps < self.sedentary_steps_max {
            self.sedentary_factor
        } else if steps < self.low_steps_max {
            self.low_factor
        } else if steps < self.moderate_steps_max {
            self.moderate_factor
        } else if steps < self.high_steps_max {
            self.high_factor
        } else {
            self.very_high_factor
        }
    }

    /// NEAT multiplier for an occupation
    #[must_use]
    pub const fn factor_for_occupation(&self, occupation: OccupationType) -> f64 {
        match occupation {
            OccupationType::Desk => self.desk_factor,
            OccupationType::Standing => self.standing_factor,
            OccupationType::Active => self.active_factor,
            OccupationType::Manual => self.manual_factor,
        }
    }
}

/// Exercise-specific multipliers applied on top of NEAT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseBoostConfig {
    /// No training (1.0)
    pub none: f64,
    /// 1-2 days/week (1.05)
    pub light: f64,
    /// 3-5 days/week (1.1)
    pub moderate: f64,
    /// 6-7 days/week (1.15)
    pub high: f64,
    /// More than 7 sessions/week (1.2)
    pub extreme: f64,
}

impl Default for ExerciseBoostConfig {
    fn default() -> Self {
        Self {
            none: 1.0,
            light: 1.05,
            moderate: 1.1,
            high: 1.15,
            extreme: 1.2,
        }
    }
}

impl ExerciseBoostConfig {
    /// Exercise multiplier for a weekly training frequency
    #[must_use]
    pub const fn boost_for_training_days(&self, days_per_week: u8) -> f64 {
        match days_per_week {
            0 => self.none,
            1..=2 => self.light,
            3..=5 => self.moderate,
            6..=7 => self.high,
            _ => self.extreme,
        }
    }
}

/// Calorie offset (percent of TDEE) per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalOffsetsConfig {
    /// Rapid loss: -20 %
    pub rapid_loss_percent: f64,
    /// Moderate loss: -15 %
    pub moderate_loss_percent: f64,
    /// Maintenance: 0 %
    pub maintenance_percent: f64,
    /// Moderate gain: +10 %
    pub moderate_gain_percent: f64,
    /// Rapid gain: +15 %
    pub rapid_gain_percent: f64,
}

impl Default for GoalOffsetsConfig {
    fn default() -> Self {
        Self {
            rapid_loss_percent: -20.0,
            moderate_loss_percent: -15.0,
            maintenance_percent: 0.0,
            moderate_gain_percent: 10.0,
            rapid_gain_percent: 15.0,
        }
    }
}

impl GoalOffsetsConfig {
    /// Offset percentage for a goal
    #[must_use]
    pub const fn offset_percent(&self, goal: GoalCategory) -> f64 {
        match goal {
            GoalCategory::RapidLoss => self.rapid_loss_percent,
            GoalCategory::ModerateLoss => self.moderate_loss_percent,
            GoalCategory::Maintenance => self.maintenance_percent,
            GoalCategory::ModerateGain => self.moderate_gain_percent,
            GoalCategory::RapidGain => self.rapid_gain_percent,
        }
    }
}

/// Macronutrient split configuration
///
/// Protein is assigned first, fat second as a share of calories, and
/// carbohydrate absorbs the remainder. The carbohydrate and fat floors are
/// hard minimums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein per kg body weight in a deficit
    pub protein_loss_g_per_kg: f64,
    /// Protein per kg body weight at maintenance
    pub protein_maintenance_g_per_kg: f64,
    /// Protein per kg body weight in a surplus
    pub protein_gain_g_per_kg: f64,
    /// Protein per kg lean mass in a deficit
    pub protein_loss_g_per_kg_lean: f64,
    /// Protein per kg lean mass at maintenance
    pub protein_maintenance_g_per_kg_lean: f64,
    /// Protein per kg lean mass in a surplus
    pub protein_gain_g_per_kg_lean: f64,
    /// Fat share of calories before adjustments (%)
    pub fat_base_percent: f64,
    /// Extra fat share in a deficit (%)
    pub fat_deficit_bonus_percent: f64,
    /// Extra fat share for female users (%)
    pub fat_female_bonus_percent: f64,
    /// Upper bound on the fat share (%)
    pub fat_max_percent: f64,
    /// Hard carbohydrate floor (g/day)
    pub carbs_min_g: f64,
    /// Hard fat floor (g/day)
    pub fat_min_g: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_loss_g_per_kg: 2.2,
            protein_maintenance_g_per_kg: 1.8,
            protein_gain_g_per_kg: 2.0,
            protein_loss_g_per_kg_lean: 2.6,
            protein_maintenance_g_per_kg_lean: 2.2,
            protein_gain_g_per_kg_lean: 2.4,
            fat_base_percent: 25.0,
            fat_deficit_bonus_percent: 3.0,
            fat_female_bonus_percent: 2.0,
            fat_max_percent: 30.0,
            carbs_min_g: 100.0,
            fat_min_g: 40.0,
        }
    }
}

impl MacronutrientConfig {
    /// Protein factor (g/kg) for a goal direction, per kg of body weight or lean mass
    #[must_use]
    pub const fn protein_factor(&self, direction: GoalDirection, per_lean_mass: bool) -> f64 {
        match (direction, per_lean_mass) {
            (GoalDirection::Loss, false) => self.protein_loss_g_per_kg,
            (GoalDirection::Maintain, false) => self.protein_maintenance_g_per_kg,
            (GoalDirection::Gain, false) => self.protein_gain_g_per_kg,
            (GoalDirection::Loss, true) => self.protein_loss_g_per_kg_lean,
            (GoalDirection::Maintain, true) => self.protein_maintenance_g_per_kg_lean,
            (GoalDirection::Gain, true) => self.protein_gain_g_per_kg_lean,
        }
    }
}

impl NutritionConfig {
    /// Validate nutrition settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when multipliers, percentages, or floors are out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        if !(factors.sedentary < factors.lightly_active
            && factors.lightly_active < factors.moderately_active
            && factors.moderately_active < factors.very_active
            && factors.very_active < factors.extra_active)
        {
            return Err(ConfigError::InvalidRange(
                "activity factors must be strictly ascending",
            ));
        }
        if factors.sedentary < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be at least 1.0",
            ));
        }

        let neat = &self.neat;
        if !(neat.sedentary_steps_max < neat.low_steps_max
            && neat.low_steps_max < neat.moderate_steps_max
            && neat.moderate_steps_max < neat.high_steps_max)
        {
            return Err(ConfigError::InvalidRange(
                "NEAT step bands must be strictly ascending",
            ));
        }

        let offsets = &self.goal_offsets;
        if !(offsets.rapid_loss_percent <= offsets.moderate_loss_percent
            && offsets.moderate_loss_percent <= offsets.maintenance_percent
            && offsets.maintenance_percent <= offsets.moderate_gain_percent
            && offsets.moderate_gain_percent <= offsets.rapid_gain_percent)
        {
            return Err(ConfigError::InvalidRange(
                "goal calorie offsets must ascend from rapid loss to rapid gain",
            ));
        }
        if offsets.rapid_loss_percent <= -50.0 || offsets.rapid_gain_percent >= 50.0 {
            return Err(ConfigError::ValueOutOfRange(
                "goal calorie offsets must stay within +/-50%",
            ));
        }

        let macros = &self.macronutrients;
        if macros.fat_base_percent <= 0.0 || macros.fat_max_percent >= 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fat percentages must be between 0 and 100",
            ));
        }
        if macros.fat_base_percent > macros.fat_max_percent {
            return Err(ConfigError::InvalidRange(
                "fat_base_percent must be <= fat_max_percent",
            ));
        }
        if macros.carbs_min_g < 0.0 || macros.fat_min_g < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "macro floors must not be negative",
            ));
        }
        if self.bmr.minimum_bmr < 0.0 {
            return Err(ConfigError::ValueOutOfRange("minimum_bmr must not be negative"));
        }

        Ok(())
    }
}
