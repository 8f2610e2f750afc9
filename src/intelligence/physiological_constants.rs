// ABOUTME: Physiological validation ranges and fixed thresholds for the nutrition engine
// ABOUTME: Body measurement bounds, body fat limits, and numerical guards used across calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants
//!
//! Tunable policy lives in `EngineConfig`; the values here are hard
//! validation bounds that no configuration should relax.

/// Accepted ranges for user body measurements
///
/// References:
/// - Mifflin, M.D., et al. (1990). Validation population for the BMR equation
/// - Jackson, A.S. & Pollock, M.L. (1985). Practical assessment of body composition
pub mod body_measurements {
    /// Upper bound on body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;

    /// Upper bound on height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;

    /// Youngest age the BMR equations are validated for
    pub const MIN_AGE_YEARS: u32 = 10;

    /// Oldest accepted age
    pub const MAX_AGE_YEARS: u32 = 120;

    /// Lowest plausible body fat (essential fat, %)
    pub const MIN_BODY_FAT_PERCENT: f64 = 3.0;

    /// Highest accepted body fat (%)
    pub const MAX_BODY_FAT_PERCENT: f64 = 70.0;
}

/// Numerical guards shared by the optimizer and the analyzers
pub mod numeric {
    /// Values with a magnitude below this are treated as zero
    pub const NEAR_ZERO: f64 = 1e-9;

    /// Days in a logging week
    pub const DAYS_PER_LOGGING_WEEK: usize = 7;
}
