// ABOUTME: Macrofit CLI - JSON-in / JSON-out wrapper around the nutrition engine
// ABOUTME: Exposes daily targets, meal scaling, ranking, progress analysis, and adaptation checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily targets for a profile
//! macrofit-cli targets --profile profile.json
//!
//! # Target for the next meal (two meals left today)
//! macrofit-cli meal-target --daily daily.json --logged logged.json --meals-remaining 2
//!
//! # Scale one meal, or rank several, against a target
//! macrofit-cli scale --meal meal.json --target target.json --catalog catalog.json
//! macrofit-cli rank --meals meals.json --target target.json --catalog catalog.json
//!
//! # Weekly progress and calorie adjustment
//! macrofit-cli analyze --history history.json --goal moderate-loss
//! macrofit-cli adjust --goals goals.json --history history.json --goal moderate-loss
//!
//! # Metabolic adaptation check
//! macrofit-cli adaptation --history history.json --sex female --goal moderate-loss
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use macrofit::config::EngineConfig;
use macrofit::errors::{AppError, AppResult};
use macrofit::logging::LoggingConfig;
use macrofit::models::{GoalCategory, Sex};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "macrofit-cli",
    about = "Macrofit nutrition engine CLI",
    long_about = "Reads JSON inputs, runs one engine operation, and prints the JSON result on stdout."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute BMR, TDEE and daily macro goals for a user profile
    Targets {
        /// User profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Compute the macro target for the next meal of the day
    MealTarget {
        /// Daily macro goals JSON file
        #[arg(long)]
        daily: PathBuf,

        /// Macros already logged today JSON file
        #[arg(long)]
        logged: PathBuf,

        /// Meals left today, including the next one
        #[arg(long, default_value = "1")]
        meals_remaining: u32,

        /// Distribution weights for the remaining meals (comma-separated, next meal first)
        #[arg(long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,
    },

    /// Scale one meal to a macro target
    Scale {
        /// Meal template JSON file
        #[arg(long)]
        meal: PathBuf,

        /// Macro target JSON file
        #[arg(long)]
        target: PathBuf,

        /// Ingredient catalog JSON file (array of ingredients)
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Scale candidate meals to a target and rank them by fit
    Rank {
        /// Meal templates JSON file (array)
        #[arg(long)]
        meals: PathBuf,

        /// Macro target JSON file
        #[arg(long)]
        target: PathBuf,

        /// Ingredient catalog JSON file (array of ingredients)
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Analyze weekly progress history
    Analyze {
        /// Weekly progress records JSON file (array, oldest first)
        #[arg(long)]
        history: PathBuf,

        /// Body-weight goal
        #[arg(long, value_enum)]
        goal: GoalArg,
    },

    /// Analyze weekly progress and apply the recommended adjustment to the current goals
    Adjust {
        /// Current daily macro goals JSON file
        #[arg(long)]
        goals: PathBuf,

        /// Weekly progress records JSON file (array, oldest first)
        #[arg(long)]
        history: PathBuf,

        /// Body-weight goal
        #[arg(long, value_enum)]
        goal: GoalArg,
    },

    /// Check weekly history for signs of metabolic adaptation
    Adaptation {
        /// Weekly progress records JSON file (array, oldest first)
        #[arg(long)]
        history: PathBuf,

        /// Biological sex
        #[arg(long, value_enum)]
        sex: SexArg,

        /// Body-weight goal
        #[arg(long, value_enum)]
        goal: GoalArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GoalArg {
    RapidLoss,
    ModerateLoss,
    Maintenance,
    ModerateGain,
    RapidGain,
}

impl From<GoalArg> for GoalCategory {
    fn from(goal: GoalArg) -> Self {
        match goal {
            GoalArg::RapidLoss => Self::RapidLoss,
            GoalArg::ModerateLoss => Self::ModerateLoss,
            GoalArg::Maintenance => Self::Maintenance,
            GoalArg::ModerateGain => Self::ModerateGain,
            GoalArg::RapidGain => Self::RapidGain,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(sex: SexArg) -> Self {
        match sex {
            SexArg::Male => Self::Male,
            SexArg::Female => Self::Female,
        }
    }
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    debug!("Macrofit CLI");

    // Reject bad MACROFIT_* overrides instead of silently using defaults
    EngineConfig::load()?;

    match cli.command {
        Command::Targets { profile } => commands::planning::targets(&profile),
        Command::MealTarget {
            daily,
            logged,
            meals_remaining,
            weights,
        } => commands::planning::meal_target(&daily, &logged, meals_remaining, weights.as_deref()),
        Command::Scale {
            meal,
            target,
            catalog,
        } => commands::meals::scale(&meal, &target, &catalog),
        Command::Rank {
            meals,
            target,
            catalog,
        } => commands::meals::rank(&meals, &target, &catalog),
        Command::Analyze { history, goal } => commands::progress::analyze(&history, goal.into()),
        Command::Adjust {
            goals,
            history,
            goal,
        } => commands::progress::adjust(&goals, &history, goal.into()),
        Command::Adaptation { history, sex, goal } => {
            commands::progress::adaptation(&history, sex.into(), goal.into())
        }
    }
}
