// ABOUTME: Helper modules for macrofit-cli
// ABOUTME: JSON file input and stdout output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod json;
