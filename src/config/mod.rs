// ABOUTME: Configuration module for evaluation settings loaded from the environment
// ABOUTME: Exposes EvaluationConfig, PulseValidation, Environment, LogLevel, and ConfigError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Environment-only configuration: there are no configuration files.
//!
//! - **environment**: `EvaluationConfig` and the `Environment` / `LogLevel` enums
//! - **error**: `ConfigError` for malformed environment variables

/// Evaluation settings and environment enums
pub mod environment;

/// Configuration error types
pub mod error;

pub use environment::{Environment, EvaluationConfig, LogLevel, PulseValidation};
pub use error::ConfigError;
