// ABOUTME: Integration tests for logging configuration
// ABOUTME: Validates environment-driven format, level, and service metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macrofit::logging::{LogFormat, LoggingConfig, SERVICE_NAME};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location);
    assert!(config.include_thread);

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");
}

#[test]
#[serial]
fn test_logging_config_defaults_without_env() {
    for name in [
        "RUST_LOG",
        "LOG_FORMAT",
        "ENVIRONMENT",
        "SERVICE_NAME",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_THREAD",
    ] {
        env::remove_var(name);
    }

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, SERVICE_NAME);
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_pretty_format_and_verbose_level() {
    env::set_var("LOG_FORMAT", "pretty");
    let config = LoggingConfig::from_env().with_level("trace");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.level, "trace");
    env::remove_var("LOG_FORMAT");
}

#[test]
#[serial]
fn test_pretty_format_installs_subscriber() {
    env::remove_var("RUST_LOG");
    let config = LoggingConfig {
        format: LogFormat::Pretty,
        level: "warn".into(),
        ..LoggingConfig::default()
    };
    assert!(config.init().is_ok());
    // Only one global subscriber per process
    assert!(config.init().is_err());
}
