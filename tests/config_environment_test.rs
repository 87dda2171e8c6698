// ABOUTME: Unit tests for environment-driven evaluation configuration
// ABOUTME: Validates defaults, parsing, range checks, and error reporting for env variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ruffier_index::config::environment::{PRECISION_ENV_VAR, PULSE_VALIDATION_ENV_VAR};
use ruffier_index::config::{ConfigError, Environment, EvaluationConfig, LogLevel, PulseValidation};
use serial_test::serial;
use std::env;

fn clear_evaluation_env() {
    env::remove_var(PRECISION_ENV_VAR);
    env::remove_var(PULSE_VALIDATION_ENV_VAR);
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
    assert_eq!(LogLevel::Warn.to_string(), "warn");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
fn test_pulse_validation_parsing() {
    assert_eq!(PulseValidation::parse(" Strict "), Some(PulseValidation::Strict));
    assert_eq!(PulseValidation::parse("lenient"), Some(PulseValidation::Lenient));
    assert_eq!(PulseValidation::parse("paranoid"), None);
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_evaluation_env();
    let config = EvaluationConfig::from_env().unwrap();
    assert_eq!(config, EvaluationConfig::default());
    assert_eq!(config.precision, 1);
    assert_eq!(config.pulse_validation, PulseValidation::Lenient);
}

#[test]
#[serial]
fn test_values_read_from_env() {
    clear_evaluation_env();
    env::set_var(PRECISION_ENV_VAR, "3");
    env::set_var(PULSE_VALIDATION_ENV_VAR, "STRICT");

    let config = EvaluationConfig::from_env().unwrap();
    assert_eq!(config.precision, 3);
    assert_eq!(config.pulse_validation, PulseValidation::Strict);

    clear_evaluation_env();
}

#[test]
#[serial]
fn test_unparsable_precision_is_reported() {
    clear_evaluation_env();
    env::set_var(PRECISION_ENV_VAR, "two");

    let err = EvaluationConfig::from_env().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Parse { key, ref value, .. } if key == PRECISION_ENV_VAR && value == "two"
    ));

    clear_evaluation_env();
}

#[test]
#[serial]
fn test_unknown_validation_mode_is_reported() {
    clear_evaluation_env();
    env::set_var(PULSE_VALIDATION_ENV_VAR, "paranoid");

    let err = EvaluationConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("'paranoid'"));

    clear_evaluation_env();
}

#[test]
#[serial]
fn test_precision_above_maximum_is_rejected() {
    clear_evaluation_env();
    env::set_var(PRECISION_ENV_VAR, "7");

    let err = EvaluationConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));

    clear_evaluation_env();
}

#[test]
fn test_validate_on_built_config() {
    assert!(EvaluationConfig::strict().validate().is_ok());
    assert!(EvaluationConfig::default()
        .with_precision(EvaluationConfig::MAX_PRECISION + 1)
        .validate()
        .is_err());
}
