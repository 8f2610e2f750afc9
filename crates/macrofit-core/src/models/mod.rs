// ABOUTME: Core data models for the macrofit engine
// ABOUTME: Re-exports nutrition, profile, and progress data structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain, serializable data handed into and returned from the engine. None of
//! these types own persistence: callers load them from their store and pass
//! them in by reference.
//!
//! - `MealTemplate`, `IngredientReference`, `Ingredient`: meal composition
//! - `Macros`, `MacroTarget`: aggregate quantities and per-meal targets
//! - `Sex`, `GoalCategory`, `NeatSource`: user profile inputs
//! - `DailyLog`, `WeeklyProgressRecord`: longitudinal history

mod nutrition;
mod profile;
mod progress;

pub use nutrition::{
    Ingredient, IngredientCategory, IngredientReference, MacroKind, MacroTarget, Macros,
    MealTemplate,
};
pub use profile::{GoalCategory, GoalDirection, NeatSource, OccupationType, Sex};
pub use progress::{
    DailyLog, EnergyLevel, HungerLevel, WeeklyProgressRecord, WeightTrend, WorkoutQuality,
};
