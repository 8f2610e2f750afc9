// ABOUTME: Nutrition models for meal templates, ingredients, and macro targets
// ABOUTME: Macros, Ingredient, IngredientReference, MealTemplate, and MacroTarget definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN, NUTRITION_REFERENCE_UNITS,
};

/// One of the four tracked macro quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroKind {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrate (g)
    Carbs,
    /// Fat (g)
    Fat,
}

impl MacroKind {
    /// All macros in canonical order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];
}

/// Aggregate macro quantities: calories (kcal) plus protein, carbs and fat (grams)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl Macros {
    /// All quantities zero
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new macro set
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Read a single macro
    #[must_use]
    pub const fn get(&self, kind: MacroKind) -> f64 {
        match kind {
            MacroKind::Calories => self.calories,
            MacroKind::Protein => self.protein,
            MacroKind::Carbs => self.carbs,
            MacroKind::Fat => self.fat,
        }
    }

    /// Apply a function to every quantity
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.calories), f(self.protein), f(self.carbs), f(self.fat))
    }

    /// Multiply every quantity by `factor`
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        self.map(|value| value * factor)
    }

    /// Component-wise subtraction floored at zero
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        Self::new(
            (self.calories - other.calories).max(0.0),
            (self.protein - other.protein).max(0.0),
            (self.carbs - other.carbs).max(0.0),
            (self.fat - other.fat).max(0.0),
        )
    }

    /// Replace negative and non-finite quantities with zero
    #[must_use]
    pub fn sanitized(self) -> Self {
        self.map(|value| if value.is_finite() { value.max(0.0) } else { 0.0 })
    }

    /// Whether every quantity is (numerically) zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        MacroKind::ALL
            .iter()
            .all(|kind| self.get(*kind).abs() < f64::EPSILON)
    }

    /// Calories implied by the gram quantities (Atwater 4/4/9)
    #[must_use]
    pub fn energy_from_macros(&self) -> f64 {
        self.fat.mul_add(
            KCAL_PER_GRAM_FAT,
            self.protein
                .mul_add(KCAL_PER_GRAM_PROTEIN, self.carbs * KCAL_PER_GRAM_CARBS),
        )
    }
}

impl Add for Macros {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.calories + rhs.calories,
            self.protein + rhs.protein,
            self.carbs + rhs.carbs,
            self.fat + rhs.fat,
        )
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Ingredient category for catalog grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Meat, fish, eggs, legumes and other protein sources
    Protein,
    /// Grains, bread, pasta, potatoes
    Carbohydrate,
    /// Oils, butter, nuts, seeds
    Fat,
    /// Vegetables and greens
    Vegetable,
    /// Fruit
    Fruit,
    /// Milk, yogurt, cheese
    Dairy,
    /// Drinks, including water
    Beverage,
    /// Sauces, spices and anything uncategorised
    #[default]
    Other,
}

/// Catalog entry: macro values per 100 units (grams or millilitres)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Stable catalog key
    pub id: String,
    /// Display name
    pub name: String,
    /// Grouping category
    #[serde(default)]
    pub category: IngredientCategory,
    /// Macros contained in 100 units
    pub per_100: Macros,
}

impl Ingredient {
    /// Create a catalog entry
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: IngredientCategory,
        per_100: Macros,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            per_100,
        }
    }

    /// Macros contributed by `amount` units of this ingredient
    #[must_use]
    pub fn macros_for(&self, amount: f64) -> Macros {
        self.per_100.scaled(amount / NUTRITION_REFERENCE_UNITS)
    }
}

/// Quantity of a catalog ingredient used in a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientReference {
    /// Catalog key
    pub ingredient_id: String,
    /// Amount in units (grams / ml), never negative once sanitized
    pub amount: f64,
}

impl IngredientReference {
    /// Create a reference
    #[must_use]
    pub fn new(ingredient_id: impl Into<String>, amount: f64) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            amount,
        }
    }

    /// Amount clamped to a finite, non-negative value
    #[must_use]
    pub fn sanitized_amount(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount.max(0.0)
        } else {
            0.0
        }
    }
}

/// A meal as stored: ingredient quantities plus aggregate macros
///
/// When `ingredients` is non-empty the aggregate macros equal the sum of the
/// per-ingredient contributions. Templates without ingredient detail are
/// "legacy" and can only be scaled proportionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTemplate {
    /// Unique template identifier
    pub id: Uuid,
    /// Meal name
    pub name: String,
    /// Ingredient quantities (possibly empty)
    #[serde(default)]
    pub ingredients: Vec<IngredientReference>,
    /// Aggregate macros
    pub macros: Macros,
    /// Created by the user rather than shipped with the product
    #[serde(default)]
    pub is_custom: bool,
    /// Visible to every user
    #[serde(default)]
    pub is_global: bool,
}

impl MealTemplate {
    /// Create a template from ingredient references and their aggregate macros
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<IngredientReference>,
        macros: Macros,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ingredients,
            macros,
            is_custom: false,
            is_global: false,
        }
    }

    /// Create a legacy template that only stores aggregate macros
    #[must_use]
    pub fn legacy(name: impl Into<String>, macros: Macros) -> Self {
        Self::new(name, Vec::new(), macros)
    }

    /// Use a specific identifier
    #[must_use]
    pub const fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Mark as user-created
    #[must_use]
    pub const fn with_custom(mut self, is_custom: bool) -> Self {
        self.is_custom = is_custom;
        self
    }

    /// Mark as globally visible
    #[must_use]
    pub const fn with_global(mut self, is_global: bool) -> Self {
        self.is_global = is_global;
        self
    }

    /// Whether the template carries per-ingredient detail
    #[must_use]
    pub fn has_ingredient_detail(&self) -> bool {
        !self.ingredients.is_empty()
    }
}

/// Macro target for a single scaling call
///
/// All fields are non-negative. Produced fresh for every call and never
/// mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTarget {
    /// Target energy (kcal)
    pub calories: f64,
    /// Target protein (g)
    pub protein: f64,
    /// Target carbohydrate (g)
    pub carbs: f64,
    /// Target fat (g)
    pub fat: f64,
    /// Final meal slot of the day: absorbs the exact remainder
    #[serde(default)]
    pub is_last_meal: bool,
}

impl MacroTarget {
    /// Create a target; negative or non-finite components are clamped to zero
    #[must_use]
    pub fn new(macros: Macros, is_last_meal: bool) -> Self {
        let clean = macros.sanitized();
        Self {
            calories: clean.calories,
            protein: clean.protein,
            carbs: clean.carbs,
            fat: clean.fat,
            is_last_meal,
        }
    }

    /// Target quantities as a `Macros` value
    #[must_use]
    pub const fn macros(&self) -> Macros {
        Macros::new(self.calories, self.protein, self.carbs, self.fat)
    }

    /// Copy with every component clamped to a finite, non-negative value
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self::new(self.macros(), self.is_last_meal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_contribution_is_per_hundred_units() {
        let oats = Ingredient::new(
            "oats",
            "Rolled oats",
            IngredientCategory::Carbohydrate,
            Macros::new(380.0, 13.0, 67.0, 7.0),
        );
        let macros = oats.macros_for(50.0);
        assert!((macros.calories - 190.0).abs() < 1e-9);
        assert!((macros.carbs - 33.5).abs() < 1e-9);
    }

    #[test]
    fn test_target_clamps_negative_components() {
        let target = MacroTarget::new(Macros::new(-10.0, 30.0, f64::NAN, 12.0), false);
        assert!(target.calories.abs() < f64::EPSILON);
        assert!(target.carbs.abs() < f64::EPSILON);
        assert!((target.protein - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_saturating_sub_never_negative() {
        let daily = Macros::new(2000.0, 150.0, 200.0, 60.0);
        let eaten = Macros::new(2100.0, 100.0, 250.0, 20.0);
        let remaining = daily.saturating_sub(eaten);
        assert_eq!(remaining, Macros::new(0.0, 50.0, 0.0, 40.0));
    }

    #[test]
    fn test_energy_from_macros_uses_atwater_factors() {
        let macros = Macros::new(0.0, 10.0, 10.0, 10.0);
        assert!((macros.energy_from_macros() - 170.0).abs() < 1e-9);
    }
}
