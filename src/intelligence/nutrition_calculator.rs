// ABOUTME: Daily energy and macro target calculation using peer-reviewed formulas
// ABOUTME: BMR, TDEE (bucketed or NEAT-based), goal offsets, macro split, and per-meal targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Derives a user's basal and total daily energy expenditure, the daily
//! calorie and macro goals for their body-weight goal, and the per-meal
//! remaining target handed to the meal scaler.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Katch, F.I., & `McArdle`, W.D. (1996). *Nutrition, Weight Control, and Exercise*.
//!
//! - Levine, J.A. (2002). Non-exercise activity thermogenesis (NEAT).
//!   *Best Practice & Research Clinical Endocrinology & Metabolism*, 16(4), 679-702.
//!   <https://doi.org/10.1053/beem.2002.0227>
//!
//! - Helms, E.R., et al. (2014). Evidence-based recommendations for natural bodybuilding
//!   contest preparation. *JISSN*, 11, 20. <https://doi.org/10.1186/1550-2783-11-20>

use macrofit_core::constants::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use macrofit_core::errors::{AppError, AppResult};
use macrofit_core::models::{GoalCategory, GoalDirection, MacroTarget, Macros, NeatSource, Sex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{
    BmrConfig, EngineConfig, GoalOffsetsConfig, MacronutrientConfig, NutritionConfig,
};
use crate::intelligence::physiological_constants::body_measurements::{
    MAX_AGE_YEARS, MAX_BODY_FAT_PERCENT, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS,
    MIN_BODY_FAT_PERCENT,
};
use crate::intelligence::physiological_constants::numeric::NEAR_ZERO;

/// BMR equation used for a calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// Mifflin-St Jeor (weight, height, age, sex)
    MifflinStJeor,
    /// Katch-McArdle (lean body mass)
    KatchMcArdle,
}

/// Expenditure model used to turn BMR into TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpenditureModel {
    /// Single multiplier bucketed by weekly training frequency
    Bucketed,
    /// NEAT multiplier times an exercise boost
    Advanced,
}

/// User biometrics and lifestyle inputs for target calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Biological sex
    pub sex: Sex,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Training sessions per week
    pub training_days_per_week: u8,
    /// Body-weight goal
    pub goal: GoalCategory,
    /// Body fat percentage, when measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Step count or occupation; selects the advanced expenditure model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neat_source: Option<NeatSource>,
}

impl UserProfile {
    /// Create a profile using the bucketed model and no body composition data
    #[must_use]
    pub const fn new(
        sex: Sex,
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        training_days_per_week: u8,
        goal: GoalCategory,
    ) -> Self {
        Self {
            sex,
            weight_kg,
            height_cm,
            age,
            training_days_per_week,
            goal,
            body_fat_percent: None,
            neat_source: None,
        }
    }

    /// Attach a body fat measurement
    #[must_use]
    pub const fn with_body_fat(mut self, body_fat_percent: f64) -> Self {
        self.body_fat_percent = Some(body_fat_percent);
        self
    }

    /// Attach a NEAT source, enabling the advanced expenditure model
    #[must_use]
    pub const fn with_neat(mut self, neat_source: NeatSource) -> Self {
        self.neat_source = Some(neat_source);
        self
    }
}

/// Macronutrient percentage breakdown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

impl MacroPercentages {
    /// Calorie share of each macro, relative to the stated calories
    ///
    /// Falls back to the energy implied by the gram amounts when the stated
    /// calories are zero. All shares are zero for an empty macro set.
    #[must_use]
    pub fn of(macros: &Macros) -> Self {
        let calories = if macros.calories > NEAR_ZERO {
            macros.calories
        } else {
            macros.energy_from_macros()
        };
        if calories <= NEAR_ZERO {
            return Self {
                protein_percent: 0.0,
                carbs_percent: 0.0,
                fat_percent: 0.0,
            };
        }
        Self {
            protein_percent: macros.protein * KCAL_PER_GRAM_PROTEIN / calories * 100.0,
            carbs_percent: macros.carbs * KCAL_PER_GRAM_CARBS / calories * 100.0,
            fat_percent: macros.fat * KCAL_PER_GRAM_FAT / calories * 100.0,
        }
    }
}

/// Protein / fat / carbohydrate split for a calorie goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    /// Resulting macros; calories are the goal unless a floor raised them
    pub macros: Macros,
    /// A carbohydrate or fat floor overrode the arithmetic result
    pub floors_enforced: bool,
}

/// Complete daily target calculation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Basal Metabolic Rate (BMR) in kcal/day
    pub bmr: f64,
    /// Equation used for the BMR
    pub bmr_formula: BmrFormula,
    /// Total Daily Energy Expenditure (TDEE) in kcal/day
    pub tdee: f64,
    /// Model used for the TDEE
    pub expenditure_model: ExpenditureModel,
    /// Multiplier applied to the BMR
    pub activity_multiplier: f64,
    /// Lean body mass, when body fat was supplied (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lean_body_mass_kg: Option<f64>,
    /// Goal the targets were computed for
    pub goal: GoalCategory,
    /// TDEE after the goal offset, before macro floors (kcal/day)
    pub nominal_calories: f64,
    /// Daily macro goals
    pub macros: Macros,
    /// Calorie share of each macro
    pub macro_percentages: MacroPercentages,
    /// A carbohydrate or fat floor raised the split above the nominal calories
    pub floors_enforced: bool,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<f64> {
    validate_measurements(weight_kg, height_cm, age)?;

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    let bmr = weight_component + height_component + age_component + sex_constant;

    Ok(bmr.max(config.minimum_bmr))
}

/// Lean body mass from weight and body fat percentage
///
/// # Errors
///
/// Returns an error if weight or body fat are out of valid ranges
pub fn calculate_lean_body_mass(weight_kg: f64, body_fat_percent: f64) -> AppResult<f64> {
    if !(weight_kg > 0.0 && weight_kg <= MAX_WEIGHT_KG) {
        return Err(AppError::invalid_input(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if !(MIN_BODY_FAT_PERCENT..=MAX_BODY_FAT_PERCENT).contains(&body_fat_percent) {
        return Err(AppError::invalid_input(
            "Body fat must be between 3% and 70%",
        ));
    }
    Ok(weight_kg * (1.0 - body_fat_percent / 100.0))
}

/// Calculate Basal Metabolic Rate using the Katch-McArdle equation
///
/// Formula: BMR = 370 + (21.6 x `lean_body_mass_kg`)
///
/// # Errors
///
/// Returns an error if lean body mass is not positive
pub fn calculate_katch_mcardle(lean_body_mass_kg: f64, config: &BmrConfig) -> AppResult<f64> {
    if !(lean_body_mass_kg > 0.0 && lean_body_mass_kg.is_finite()) {
        return Err(AppError::invalid_input("Lean body mass must be positive"));
    }
    let bmr = config
        .katch_lean_mass_coef
        .mul_add(lean_body_mass_kg, config.katch_constant);
    Ok(bmr.max(config.minimum_bmr))
}

/// Multiplier turning BMR into TDEE
///
/// Without a NEAT source the multiplier is bucketed by weekly training
/// frequency. With one, non-exercise activity and exercise are estimated
/// separately and multiplied together.
#[must_use]
pub fn calculate_activity_multiplier(
    training_days_per_week: u8,
    neat_source: Option<NeatSource>,
    config: &NutritionConfig,
) -> (f64, ExpenditureModel) {
    match neat_source {
        None => (
            config
                .activity_factors
                .factor_for_training_days(training_days_per_week),
            ExpenditureModel::Bucketed,
        ),
        Some(source) => {
            let neat = match source {
                NeatSource::DailySteps(steps) => config.neat.factor_for_steps(steps),
                NeatSource::Occupation(occupation) => {
                    config.neat.factor_for_occupation(occupation)
                }
            };
            let boost = config
                .exercise_boost
                .boost_for_training_days(training_days_per_week);
            (neat * boost, ExpenditureModel::Advanced)
        }
    }
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x activity multiplier
///
/// # Errors
///
/// Returns an error if BMR or the multiplier is not positive
pub fn calculate_tdee(bmr: f64, activity_multiplier: f64) -> AppResult<f64> {
    if bmr <= 0.0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }
    if activity_multiplier <= 0.0 {
        return Err(AppError::invalid_input(
            "Activity multiplier must be positive",
        ));
    }
    Ok(bmr * activity_multiplier)
}

/// Daily calorie goal: TDEE shifted by the goal's percentage offset
#[must_use]
pub fn calculate_target_calories(tdee: f64, goal: GoalCategory, config: &GoalOffsetsConfig) -> f64 {
    tdee * (1.0 + config.offset_percent(goal) / 100.0)
}

/// Split a calorie goal into protein, fat, and carbohydrate
///
/// Protein comes first (g/kg of body weight, or of lean mass when known),
/// fat second as a share of calories, carbohydrate absorbs the remainder.
/// The carbohydrate and fat floors always win over the arithmetic.
#[must_use]
pub fn calculate_macro_split(
    calories: f64,
    weight_kg: f64,
    lean_body_mass_kg: Option<f64>,
    sex: Sex,
    goal: GoalCategory,
    config: &MacronutrientConfig,
) -> MacroSplit {
    let direction = goal.direction();
    let protein_g = lean_body_mass_kg.map_or_else(
        || weight_kg * config.protein_factor(direction, false),
        |lbm| lbm * config.protein_factor(direction, true),
    );

    let mut fat_percent = config.fat_base_percent;
    if direction == GoalDirection::Loss {
        fat_percent += config.fat_deficit_bonus_percent;
    }
    if sex == Sex::Female {
        fat_percent += config.fat_female_bonus_percent;
    }
    let fat_percent = fat_percent.min(config.fat_max_percent);
    let fat_g = calories * fat_percent / 100.0 / KCAL_PER_GRAM_FAT;

    let carbs_g = fat_g.mul_add(
        -KCAL_PER_GRAM_FAT,
        protein_g.mul_add(-KCAL_PER_GRAM_PROTEIN, calories),
    ) / KCAL_PER_GRAM_CARBS;

    let floored_carbs = carbs_g.max(config.carbs_min_g);
    let floored_fat = fat_g.max(config.fat_min_g);
    let floors_enforced = floored_carbs > carbs_g || floored_fat > fat_g;

    let mut macros = Macros::new(calories, protein_g, floored_carbs, floored_fat);
    if floors_enforced {
        macros.calories = macros.energy_from_macros();
    }

    MacroSplit {
        macros,
        floors_enforced,
    }
}

/// Compute daily targets using the global engine configuration
///
/// # Errors
///
/// Returns an error if the profile is outside physiological ranges
pub fn compute_daily_targets(profile: &UserProfile) -> AppResult<DailyTargets> {
    compute_daily_targets_with_config(profile, &EngineConfig::global().nutrition)
}

/// Compute daily targets
///
/// This is the main entry point combining BMR, TDEE, goal offset, and macro split.
///
/// # Errors
///
/// Returns an error if the profile is outside physiological ranges
pub fn compute_daily_targets_with_config(
    profile: &UserProfile,
    config: &NutritionConfig,
) -> AppResult<DailyTargets> {
    validate_measurements(profile.weight_kg, profile.height_cm, profile.age)?;

    let lean_body_mass_kg = profile
        .body_fat_percent
        .map(|body_fat| calculate_lean_body_mass(profile.weight_kg, body_fat))
        .transpose()?;

    let (bmr, bmr_formula) = match lean_body_mass_kg {
        Some(lbm) => (
            calculate_katch_mcardle(lbm, &config.bmr)?,
            BmrFormula::KatchMcArdle,
        ),
        None => (
            calculate_mifflin_st_jeor(
                profile.weight_kg,
                profile.height_cm,
                profile.age,
                profile.sex,
                &config.bmr,
            )?,
            BmrFormula::MifflinStJeor,
        ),
    };

    let (activity_multiplier, expenditure_model) = calculate_activity_multiplier(
        profile.training_days_per_week,
        profile.neat_source,
        config,
    );
    let tdee = calculate_tdee(bmr, activity_multiplier)?;
    let nominal_calories = calculate_target_calories(tdee, profile.goal, &config.goal_offsets);

    let split = calculate_macro_split(
        nominal_calories,
        profile.weight_kg,
        lean_body_mass_kg,
        profile.sex,
        profile.goal,
        &config.macronutrients,
    );

    debug!(
        bmr,
        tdee,
        calories = split.macros.calories,
        formula = ?bmr_formula,
        model = ?expenditure_model,
        floors_enforced = split.floors_enforced,
        "Computed daily targets"
    );

    Ok(DailyTargets {
        bmr,
        bmr_formula,
        tdee,
        expenditure_model,
        activity_multiplier,
        lean_body_mass_kg,
        goal: profile.goal,
        nominal_calories,
        macros: split.macros,
        macro_percentages: MacroPercentages::of(&split.macros),
        floors_enforced: split.floors_enforced,
    })
}

/// Target for the next meal, with the remainder split evenly
///
/// The final remaining slot (`meals_remaining == 1`) receives the full
/// remainder and is flagged as the last meal.
///
/// # Errors
///
/// Returns an error if no meals remain
pub fn compute_remaining_meal_target(
    daily: &Macros,
    logged: &Macros,
    meals_remaining: u32,
) -> AppResult<MacroTarget> {
    if meals_remaining == 0 {
        return Err(AppError::invalid_input(
            "At least one meal must remain to compute a meal target",
        ));
    }
    let remaining = daily.saturating_sub(*logged);
    let share = remaining.scaled(1.0 / f64::from(meals_remaining));
    Ok(MacroTarget::new(share, meals_remaining == 1))
}

/// Target for the next meal, with the remainder split by distribution weights
///
/// `remaining_weights` holds one weight per remaining meal slot, the next
/// meal first. A single remaining slot is the last meal and receives the
/// full remainder regardless of its weight.
///
/// # Errors
///
/// Returns an error if no weights are given or any weight is not positive and finite
pub fn compute_weighted_meal_target(
    daily: &Macros,
    logged: &Macros,
    remaining_weights: &[f64],
) -> AppResult<MacroTarget> {
    let Some(next_weight) = remaining_weights.first().copied() else {
        return Err(AppError::invalid_input(
            "At least one meal must remain to compute a meal target",
        ));
    };
    if remaining_weights
        .iter()
        .any(|weight| !(weight.is_finite() && *weight > 0.0))
    {
        return Err(AppError::invalid_input(
            "Meal distribution weights must be positive and finite",
        ));
    }

    let remaining = daily.saturating_sub(*logged);
    if remaining_weights.len() == 1 {
        return Ok(MacroTarget::new(remaining, true));
    }
    let total: f64 = remaining_weights.iter().sum();
    Ok(MacroTarget::new(remaining.scaled(next_weight / total), false))
}

fn validate_measurements(weight_kg: f64, height_cm: f64, age: u32) -> AppResult<()> {
    if !(weight_kg > 0.0 && weight_kg <= MAX_WEIGHT_KG) {
        return Err(AppError::invalid_input(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if !(height_cm > 0.0 && height_cm <= MAX_HEIGHT_CM) {
        return Err(AppError::invalid_input(
            "Height must be between 0 and 300 cm",
        ));
    }
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age) {
        return Err(AppError::invalid_input(
            "Age must be between 10 and 120 years (Mifflin-St Jeor formula validated for ages 10+)",
        ));
    }
    Ok(())
}
