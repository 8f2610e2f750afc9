// ABOUTME: Longitudinal progress models for weekly calorie adjustment
// ABOUTME: DailyLog, WeeklyProgressRecord, weight trend, and self-reported wellbeing signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-reported energy level for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    /// Tired, sluggish
    Low,
    /// Normal
    Normal,
    /// Energetic
    High,
}

/// Self-reported hunger level for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HungerLevel {
    /// Satisfied between meals
    Satisfied,
    /// Some hunger, manageable
    Moderate,
    /// Frequently hungry
    Hungry,
    /// Persistently hungry
    VeryHungry,
}

impl HungerLevel {
    /// Hungry or very hungry
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::Hungry | Self::VeryHungry)
    }
}

/// Self-reported workout quality for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutQuality {
    /// Weak session
    Poor,
    /// Mediocre session
    Ok,
    /// Solid session
    Good,
    /// Personal-best territory
    Great,
}

impl WorkoutQuality {
    /// Poor or merely ok
    #[must_use]
    pub const fn is_subpar(&self) -> bool {
        matches!(self, Self::Poor | Self::Ok)
    }
}

/// Weekly weight trend classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightTrend {
    /// Weight went down by more than the stability band
    Losing,
    /// Weight change within the stability band
    Stable,
    /// Weight went up by more than the stability band
    Gaining,
}

impl WeightTrend {
    /// Classify a weekly change (kg) against a symmetric stability band (kg)
    #[must_use]
    pub fn classify(weekly_change_kg: f64, stable_band_kg: f64) -> Self {
        if weekly_change_kg < -stable_band_kg {
            Self::Losing
        } else if weekly_change_kg > stable_band_kg {
            Self::Gaining
        } else {
            Self::Stable
        }
    }
}

/// One day of logged intake, weight and wellbeing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Calendar date
    pub date: NaiveDate,
    /// Morning weigh-in, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Logged energy (kcal); zero means nothing was logged
    #[serde(default)]
    pub calories: f64,
    /// Logged protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Logged carbohydrate (g)
    #[serde(default)]
    pub carbs: f64,
    /// Logged fat (g)
    #[serde(default)]
    pub fat: f64,
    /// A planned workout was completed on this day
    #[serde(default)]
    pub workout_completed: bool,
    /// Self-reported energy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyLevel>,
    /// Self-reported hunger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunger: Option<HungerLevel>,
    /// Self-reported workout quality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_quality: Option<WorkoutQuality>,
}

impl DailyLog {
    /// Create a log entry with intake only
    #[must_use]
    pub const fn new(date: NaiveDate, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            date,
            weight_kg: None,
            calories,
            protein,
            carbs,
            fat,
            workout_completed: false,
            energy: None,
            hunger: None,
            workout_quality: None,
        }
    }

    /// Attach a weigh-in
    #[must_use]
    pub const fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Mark a completed workout with its quality
    #[must_use]
    pub const fn with_workout(mut self, quality: Option<WorkoutQuality>) -> Self {
        self.workout_completed = true;
        self.workout_quality = quality;
        self
    }

    /// Attach energy and hunger self-reports
    #[must_use]
    pub const fn with_wellbeing(mut self, energy: EnergyLevel, hunger: HungerLevel) -> Self {
        self.energy = Some(energy);
        self.hunger = Some(hunger);
        self
    }

    /// Whether any intake was logged
    #[must_use]
    pub fn is_logged(&self) -> bool {
        self.calories > 0.0
    }
}

/// Summary of one elapsed week
///
/// Appended once per week to a user's ordered history and never mutated
/// afterwards. The optional signal arrays are `None` when nothing was reported;
/// absence never counts as a triggered condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgressRecord {
    /// 1-based week index since the plan started
    pub week_number: u32,
    /// First day of the week
    pub start_date: NaiveDate,
    /// Last day of the week
    pub end_date: NaiveDate,
    /// Weight at the start of the week (kg)
    pub start_weight_kg: f64,
    /// Weight at the end of the week (kg)
    pub end_weight_kg: f64,
    /// `end - start` (kg)
    pub weight_change_kg: f64,
    /// Days with logged intake (0-7)
    pub days_logged: u8,
    /// Mean logged energy over logged days (kcal)
    pub average_calories: f64,
    /// Daily calorie goal in force during the week (kcal)
    pub target_calories: f64,
    /// Calorie adherence (0-100 %)
    pub calorie_adherence_percent: f64,
    /// Mean logged protein (g)
    pub average_protein: f64,
    /// Mean logged carbohydrate (g)
    pub average_carbs: f64,
    /// Mean logged fat (g)
    pub average_fat: f64,
    /// Workouts completed / planned (0-100 %)
    pub workout_adherence_percent: f64,
    /// Derived trend classification
    pub trend: WeightTrend,
    /// Daily energy self-reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_levels: Option<Vec<EnergyLevel>>,
    /// Daily hunger self-reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunger_levels: Option<Vec<HungerLevel>>,
    /// Per-session workout quality self-reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_qualities: Option<Vec<WorkoutQuality>>,
}
