// ABOUTME: Read-only ingredient catalog interface and ingredient reference resolution
// ABOUTME: IngredientCatalog trait, in-memory catalog, and ResolvedIngredient conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient catalog
//!
//! The catalog is an external, read-only collaborator: the engine looks up
//! per-100-unit macro values by id and never mutates it. Any map-like store
//! can serve as a catalog by implementing [`IngredientCatalog`].

use std::collections::HashMap;

use macrofit_core::errors::{AppError, AppResult};
use macrofit_core::models::{Ingredient, IngredientReference, Macros, MealTemplate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Read-only lookup from ingredient id to catalog entry
pub trait IngredientCatalog: Sync {
    /// Look up an ingredient by id
    fn get(&self, ingredient_id: &str) -> Option<&Ingredient>;
}

impl IngredientCatalog for HashMap<String, Ingredient> {
    fn get(&self, ingredient_id: &str) -> Option<&Ingredient> {
        Self::get(self, ingredient_id)
    }
}

/// Catalog held in memory, keyed by ingredient id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Ingredient>", into = "Vec<Ingredient>")]
pub struct InMemoryCatalog {
    entries: HashMap<String, Ingredient>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn insert(&mut self, ingredient: Ingredient) {
        self.entries.insert(ingredient.id.clone(), ingredient);
    }

    /// Add an entry, builder style
    #[must_use]
    pub fn with(mut self, ingredient: Ingredient) -> Self {
        self.insert(ingredient);
        self
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IngredientCatalog for InMemoryCatalog {
    fn get(&self, ingredient_id: &str) -> Option<&Ingredient> {
        self.entries.get(ingredient_id)
    }
}

impl FromIterator<Ingredient> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = Ingredient>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|ingredient| (ingredient.id.clone(), ingredient))
                .collect(),
        }
    }
}

impl From<Vec<Ingredient>> for InMemoryCatalog {
    fn from(ingredients: Vec<Ingredient>) -> Self {
        ingredients.into_iter().collect()
    }
}

impl From<InMemoryCatalog> for Vec<Ingredient> {
    fn from(catalog: InMemoryCatalog) -> Self {
        let mut ingredients: Self = catalog.entries.into_values().collect();
        ingredients.sort_by(|a, b| a.id.cmp(&b.id));
        ingredients
    }
}

/// An ingredient reference joined with its catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIngredient<'a> {
    /// Catalog entry
    pub ingredient: &'a Ingredient,
    /// Quantity in units, clamped to be non-negative
    pub amount: f64,
}

impl ResolvedIngredient<'_> {
    /// Macros contributed at the stored amount
    #[must_use]
    pub fn macros(&self) -> Macros {
        self.ingredient.macros_for(self.amount)
    }
}

/// Join ingredient references with their catalog entries
///
/// Negative or non-finite amounts are clamped to zero.
///
/// # Errors
///
/// Returns `ResourceNotFound` when a referenced id is missing from the catalog
pub fn resolve_ingredients<'a, C: IngredientCatalog + ?Sized>(
    references: &[IngredientReference],
    catalog: &'a C,
) -> AppResult<Vec<ResolvedIngredient<'a>>> {
    references
        .iter()
        .map(|reference| {
            let ingredient = catalog.get(&reference.ingredient_id).ok_or_else(|| {
                AppError::not_found(format!("Ingredient '{}'", reference.ingredient_id))
            })?;
            let amount = reference.sanitized_amount();
            if (amount - reference.amount).abs() > f64::EPSILON || reference.amount.is_nan() {
                warn!(
                    ingredient_id = %reference.ingredient_id,
                    amount = reference.amount,
                    "Clamped invalid ingredient amount to {}", amount
                );
            }
            Ok(ResolvedIngredient { ingredient, amount })
        })
        .collect()
}

/// Sum of per-ingredient contributions
#[must_use]
pub fn aggregate_macros(resolved: &[ResolvedIngredient<'_>]) -> Macros {
    resolved.iter().map(ResolvedIngredient::macros).sum()
}

/// Build a template whose aggregate macros are derived from its ingredients
///
/// # Errors
///
/// Returns `ResourceNotFound` when a referenced id is missing from the catalog
pub fn template_from_ingredients<C: IngredientCatalog + ?Sized>(
    name: impl Into<String>,
    references: Vec<IngredientReference>,
    catalog: &C,
) -> AppResult<MealTemplate> {
    let macros = aggregate_macros(&resolve_ingredients(&references, catalog)?);
    Ok(MealTemplate::new(name, references, macros))
}

#[cfg(test)]
mod tests {
    use super::*;
    use macrofit_core::errors::ErrorCode;
    use macrofit_core::models::IngredientCategory;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with(Ingredient::new(
                "rice",
                "White rice, cooked",
                IngredientCategory::Carbohydrate,
                Macros::new(130.0, 2.7, 28.0, 0.3),
            ))
            .with(Ingredient::new(
                "chicken",
                "Chicken breast",
                IngredientCategory::Protein,
                Macros::new(165.0, 31.0, 0.0, 3.6),
            ))
    }

    #[test]
    fn test_unknown_ingredient_is_not_found() {
        let references = vec![IngredientReference::new("tofu", 100.0)];
        let error = resolve_ingredients(&references, &catalog()).unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_negative_amount_clamped_to_zero() {
        let references = vec![IngredientReference::new("rice", -50.0)];
        let catalog = catalog();
        let resolved = resolve_ingredients(&references, &catalog).unwrap();
        assert!(resolved[0].amount.abs() < f64::EPSILON);
        assert!(resolved[0].macros().is_zero());
    }

    #[test]
    fn test_template_aggregate_matches_contributions() {
        let template = template_from_ingredients(
            "Chicken and rice",
            vec![
                IngredientReference::new("chicken", 150.0),
                IngredientReference::new("rice", 200.0),
            ],
            &catalog(),
        )
        .unwrap();
        assert!((template.macros.calories - 507.5).abs() < 1e-9);
        assert!((template.macros.protein - 51.9).abs() < 1e-9);
    }

    #[test]
    fn test_hash_map_is_a_catalog() {
        let map: HashMap<String, Ingredient> = Vec::from(catalog())
            .into_iter()
            .map(|ingredient| (ingredient.id.clone(), ingredient))
            .collect();
        let resolved =
            resolve_ingredients(&[IngredientReference::new("chicken", 100.0)], &map).unwrap();
        assert_eq!(resolved.len(), 1);
    }
}
