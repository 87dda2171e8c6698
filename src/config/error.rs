// ABOUTME: Configuration error types for environment-driven evaluation settings
// ABOUTME: Defines error variants for unparsable values, out-of-range values, and env access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable present but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse a configuration value
    #[error("Parse error for {key}: '{value}' is not {expected}")]
    Parse {
        /// Environment variable name
        key: &'static str,
        /// Raw value that failed to parse
        value: String,
        /// Description of the accepted values
        expected: &'static str,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),
}
