// ABOUTME: Weekly progress, calorie adjustment, and metabolic adaptation commands for macrofit-cli
// ABOUTME: Reads weekly history from JSON and prints analyses and adjusted goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use macrofit::errors::AppResult;
use macrofit::intelligence::{adjust_goals, analyze_weekly_progress, detect_metabolic_adaptation};
use macrofit::models::{GoalCategory, Macros, Sex, WeeklyProgressRecord};

use crate::helpers::json::{print_json, read_json};

/// Analyze weekly progress
pub fn analyze(history_path: &Path, goal: GoalCategory) -> AppResult<()> {
    let history: Vec<WeeklyProgressRecord> = read_json(history_path)?;
    print_json(&analyze_weekly_progress(&history, goal))
}

/// Analyze weekly progress and apply the result to the current goals
pub fn adjust(goals_path: &Path, history_path: &Path, goal: GoalCategory) -> AppResult<()> {
    let previous_goals: Macros = read_json(goals_path)?;
    let history: Vec<WeeklyProgressRecord> = read_json(history_path)?;
    print_json(&adjust_goals(&previous_goals, &history, goal))
}

/// Metabolic adaptation check
pub fn adaptation(history_path: &Path, sex: Sex, goal: GoalCategory) -> AppResult<()> {
    let history: Vec<WeeklyProgressRecord> = read_json(history_path)?;
    print_json(&detect_metabolic_adaptation(&history, sex, goal))
}
