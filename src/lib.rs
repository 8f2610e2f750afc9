// ABOUTME: Main library entry point for the macrofit nutrition engine
// ABOUTME: Daily targets, meal scaling, fit ranking, weekly progress, and adaptation detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macrofit
//!
//! An in-process computational library that turns user biometrics and
//! logged intake into daily macro targets, scales meals to hit per-meal
//! targets, and revises the calorie target from weekly progress.
//!
//! ## Components
//!
//! - **Target calculator**: BMR, TDEE, goal offsets, macro split, per-meal targets
//! - **Meal scaler**: minimax multiplier search over ingredient quantities
//! - **Fit ranker**: scales candidate meals in parallel and orders them by fit
//! - **Weekly progress analyzer**: adherence-gated calorie adjustments
//! - **Metabolic adaptation detector**: multi-week stagnation and wellbeing flags
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use macrofit::catalog::InMemoryCatalog;
//! use macrofit::intelligence::{compute_remaining_meal_target, scale_meal_to_target};
//! use macrofit::models::{Macros, MealTemplate};
//!
//! # fn main() -> macrofit::errors::AppResult<()> {
//! let catalog = InMemoryCatalog::new();
//! let daily = Macros::new(2200.0, 160.0, 230.0, 70.0);
//! let eaten = Macros::new(1400.0, 100.0, 150.0, 45.0);
//! let target = compute_remaining_meal_target(&daily, &eaten, 1)?;
//!
//! let meal = MealTemplate::legacy("Leftovers", Macros::new(600.0, 40.0, 60.0, 20.0));
//! let scaled = scale_meal_to_target(&meal, &target, &catalog)?;
//! assert!(scaled.exact_match);
//! # Ok(())
//! # }
//! ```

/// Ingredient catalog interface and reference resolution
pub mod catalog;

/// Engine configuration with defaults, environment overrides, and validation
pub mod config;

/// Calculators: targets, meal scaling, ranking, progress, adaptation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use macrofit_core::{constants, errors, models};
