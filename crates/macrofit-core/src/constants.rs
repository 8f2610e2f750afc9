// ABOUTME: Energy density constants for macronutrients and body mass
// ABOUTME: Atwater factors and the kcal-per-kilogram body weight equivalent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy constants
//!
//! Atwater general factors are used for every macro-to-calorie conversion.

/// Energy in one gram of protein (kcal)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy in one gram of carbohydrate (kcal)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy in one gram of fat (kcal)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Approximate energy content of one kilogram of body weight change (kcal)
pub const KCAL_PER_KG_BODY_WEIGHT: f64 = 7700.0;

/// Days per week, used to convert weekly energy balance to a daily figure
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Ingredient macro values are expressed per this many units (grams / ml)
pub const NUTRITION_REFERENCE_UNITS: f64 = 100.0;
