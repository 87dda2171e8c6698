// ABOUTME: Environment-based configuration for Ruffier evaluation and runtime settings
// ABOUTME: Parses precision, pulse validation mode, log level, and deployment environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `RUFFIER_INDEX_PRECISION` | `0`..=`6` | `1` |
//! | `RUFFIER_PULSE_VALIDATION` | `lenient`, `strict` | `lenient` |

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Environment variable holding the number of decimals used to render the index
pub const PRECISION_ENV_VAR: &str = "RUFFIER_INDEX_PRECISION";

/// Environment variable selecting the pulse validation mode
pub const PULSE_VALIDATION_ENV_VAR: &str = "RUFFIER_PULSE_VALIDATION";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// How pulse counts are checked before evaluation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PulseValidation {
    /// Accept any count; the index formula is applied as-is
    #[default]
    Lenient,
    /// Reject counts outside `0..=60` beats per 15-second window
    Strict,
}

impl PulseValidation {
    /// Parse a mode name (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Mode name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for PulseValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings applied by a `RuffierEvaluator`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationConfig {
    /// Decimal places used when rendering the index
    pub precision: usize,
    /// Pulse validation mode
    pub pulse_validation: PulseValidation,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            pulse_validation: PulseValidation::default(),
        }
    }
}

impl EvaluationConfig {
    /// One decimal renders every index exactly, since `(S - 200) / 10` has at most one
    pub const DEFAULT_PRECISION: usize = 1;

    /// Largest accepted rendering precision
    pub const MAX_PRECISION: usize = 6;

    /// Strict-validation configuration with default precision
    #[must_use]
    pub fn strict() -> Self {
        Self {
            pulse_validation: PulseValidation::Strict,
            ..Self::default()
        }
    }

    /// Replace the rendering precision
    ///
    /// The value is not range-checked here; call [`Self::validate`] or build
    /// the evaluator with `RuffierEvaluator::try_new`.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed or is
    /// out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = env_var_opt(PRECISION_ENV_VAR)? {
            config.precision = raw.trim().parse().map_err(|_| ConfigError::Parse {
                key: PRECISION_ENV_VAR,
                value: raw,
                expected: "a non-negative integer",
            })?;
        }

        if let Some(raw) = env_var_opt(PULSE_VALIDATION_ENV_VAR)? {
            config.pulse_validation =
                PulseValidation::parse(&raw).ok_or_else(|| ConfigError::Parse {
                    key: PULSE_VALIDATION_ENV_VAR,
                    value: raw,
                    expected: "'lenient' or 'strict'",
                })?;
        }

        config.validate()?;
        info!(
            precision = config.precision,
            pulse_validation = %config.pulse_validation,
            "Evaluation configuration loaded"
        );
        Ok(config)
    }

    /// Check that every setting is within its accepted range
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the precision exceeds
    /// [`Self::MAX_PRECISION`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > Self::MAX_PRECISION {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{PRECISION_ENV_VAR} must be at most {}, got {}",
                Self::MAX_PRECISION,
                self.precision
            )));
        }
        Ok(())
    }
}

/// Read an optional environment variable, treating "not present" as `None`
fn env_var_opt(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
