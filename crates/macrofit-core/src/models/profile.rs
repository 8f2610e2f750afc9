// ABOUTME: User profile enums shared by target calculation and progress analysis
// ABOUTME: Sex, goal category, goal direction, and non-exercise activity sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Biological sex for BMR constants and sex-specific thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
}

/// Body-weight goal selected by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    /// Aggressive deficit
    RapidLoss,
    /// Sustainable deficit
    ModerateLoss,
    /// Energy balance
    Maintenance,
    /// Lean surplus
    ModerateGain,
    /// Aggressive surplus
    RapidGain,
}

/// Direction implied by a goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    /// Calorie deficit
    Loss,
    /// Calorie balance
    Maintain,
    /// Calorie surplus
    Gain,
}

impl GoalCategory {
    /// All goals, deficit to surplus
    pub const ALL: [Self; 5] = [
        Self::RapidLoss,
        Self::ModerateLoss,
        Self::Maintenance,
        Self::ModerateGain,
        Self::RapidGain,
    ];

    /// Direction of the energy balance for this goal
    #[must_use]
    pub const fn direction(&self) -> GoalDirection {
        match self {
            Self::RapidLoss | Self::ModerateLoss => GoalDirection::Loss,
            Self::Maintenance => GoalDirection::Maintain,
            Self::ModerateGain | Self::RapidGain => GoalDirection::Gain,
        }
    }

    /// Loss goals
    #[must_use]
    pub const fn is_loss(&self) -> bool {
        matches!(self.direction(), GoalDirection::Loss)
    }

    /// Any goal other than maintenance
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.direction(), GoalDirection::Maintain)
    }
}

/// Occupation type used to estimate non-exercise activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OccupationType {
    /// Seated most of the day
    Desk,
    /// On feet most of the day (retail, teaching)
    Standing,
    /// Walking and carrying (nursing, hospitality)
    Active,
    /// Heavy manual labour (construction, farming)
    Manual,
}

/// Source used to estimate NEAT in the advanced expenditure model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NeatSource {
    /// Average daily step count
    DailySteps(u32),
    /// Occupation type
    Occupation(OccupationType),
}
