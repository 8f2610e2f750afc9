// ABOUTME: Core types and constants for the macrofit nutrition engine
// ABOUTME: Foundation crate with error handling, nutrition models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macrofit Core
//!
//! Foundation crate providing shared types and constants for the macrofit
//! engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities and body-mass energy equivalents
//! - **models**: Meals, ingredients, macro targets and weekly progress records

/// Unified error handling system with standard error codes
pub mod errors;

/// Physical constants shared by every calculation
pub mod constants;

/// Core data models (`Macros`, `MealTemplate`, `WeeklyProgressRecord`, ...)
pub mod models;
