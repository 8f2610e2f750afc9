// ABOUTME: Command modules for macrofit-cli
// ABOUTME: Planning (targets), meal (scale, rank), and progress (analyze, adjust, adaptation) commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod meals;
pub mod planning;
pub mod progress;
