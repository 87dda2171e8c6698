// ABOUTME: Error types for Ruffier index evaluation
// ABOUTME: Defines RuffierError variants and stable error codes with user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! An age outside the rubric is an expected outcome, not a failure of the
//! calculation: it surfaces as [`RuffierError::AgeOutOfRange`] and renders as
//! the fixed "no data for that age" message.

use crate::constants::{age_bands, messages, pulse_limits};
use crate::models::PulseStage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes for evaluation outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Age below the youngest band of the rubric
    AgeOutOfRange,
    /// Pulse count rejected by strict validation
    InvalidPulse,
}

impl ErrorCode {
    /// Stable string form, identical to the serialized representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AgeOutOfRange => "AGE_OUT_OF_RANGE",
            Self::InvalidPulse => "INVALID_PULSE",
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AgeOutOfRange => "The rubric defines no threshold for this age",
            Self::InvalidPulse => "A pulse count is outside the plausible range",
        }
    }
}

/// Errors produced while evaluating a Ruffier test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuffierError {
    /// No unsatisfactory threshold exists for this age
    #[error("no Ruffier threshold for age {age} (minimum age is {min})", min = age_bands::MIN_AGE)]
    AgeOutOfRange {
        /// Age that was requested
        age: u32,
    },

    /// A pulse count failed strict validation
    #[error(
        "{stage} pulse of {value} beats is outside 0..={max}",
        max = pulse_limits::MAX_PULSE_PER_WINDOW
    )]
    InvalidPulse {
        /// Which of the three readings was rejected
        stage: PulseStage,
        /// Rejected count
        value: i32,
    },
}

impl RuffierError {
    /// Error code for structured output
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::AgeOutOfRange { .. } => ErrorCode::AgeOutOfRange,
            Self::InvalidPulse { .. } => ErrorCode::InvalidPulse,
        }
    }

    /// Message shown to the person taking the test
    ///
    /// For `AgeOutOfRange` this is exactly [`messages::NO_DATA_FOR_AGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::AgeOutOfRange { .. } => messages::NO_DATA_FOR_AGE.to_owned(),
            Self::InvalidPulse { .. } => self.to_string(),
        }
    }
}

/// Result alias used across the workspace
pub type RuffierResult<T> = Result<T, RuffierError>;
