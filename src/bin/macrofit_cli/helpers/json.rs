// ABOUTME: JSON input/output helpers for macrofit-cli
// ABOUTME: Reads typed values from files and prints pretty JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use macrofit::errors::{AppError, AppResult, ErrorCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::StorageError,
            format!("Failed to read {}: {e}", path.display()),
        )
        .with_source(e)
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("Failed to parse {}: {e}", path.display()),
        )
        .with_source(e)
    })
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
