// ABOUTME: Output format abstraction for rendering Ruffier evaluation outcomes
// ABOUTME: Supports plain text (default), JSON, and TOON (token-efficient for LLMs)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Renders the outcome of an evaluation, success or error, in the format a
//! caller asks for.
//!
//! ## Supported Formats
//!
//! - **Text**: The two-line report shown to the person tested
//! - **JSON**: Structured assessment, universal compatibility
//! - **TOON**: Token-efficient format optimized for LLM input (`toon` feature, on by default)
//!
//! ## Usage
//!
//! ```rust
//! use ruffier_index::formatters::{format_outcome, OutputFormat};
//! use ruffier_index::intelligence::evaluate;
//!
//! let outcome = evaluate(12, 18, 14, 15);
//! let output = format_outcome(&outcome, OutputFormat::Text, 1)?;
//! assert_eq!(output.data, "Your Ruffier index: -2.4\nHeart efficiency: High.");
//! # Ok::<(), ruffier_index::formatters::FormatError>(())
//! ```

use crate::intelligence::RuffierAssessment;
use ruffier_core::{ErrorCode, RuffierResult};
use serde::Serialize;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text report (default)
    #[default]
    Text,
    /// JSON format - universal compatibility
    Json,
    /// TOON format - Token-Oriented Object Notation for LLM efficiency
    Toon,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "toon" => Self::Toon,
            _ => Self::Text,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
            // TOON doesn't have an official MIME type yet, use vendor prefix
            Self::Toon => "application/vnd.toon",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

/// Structured body used for failed evaluations
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Stable error code
    pub error: ErrorCode,
    /// Message shown to the person tested
    pub message: String,
}

/// Render an evaluation outcome in the requested format
///
/// Text output follows the report layout with `precision` decimals for the
/// index; a failed evaluation renders its user message (for an age below the
/// rubric, exactly "There is no data for that age."). JSON and TOON output
/// serialize the full assessment, or an [`ErrorBody`] on failure.
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization or TOON encoding fails, or if
/// TOON is requested without the `toon` feature.
pub fn format_outcome(
    outcome: &RuffierResult<RuffierAssessment>,
    format: OutputFormat,
    precision: usize,
) -> Result<FormattedOutput, FormatError> {
    let data = match (format, outcome) {
        (OutputFormat::Text, Ok(assessment)) => assessment.render(precision),
        (OutputFormat::Text, Err(err)) => err.user_message(),
        (_, Ok(assessment)) => encode(assessment, format)?,
        (_, Err(err)) => encode(
            &ErrorBody {
                error: err.code(),
                message: err.user_message(),
            },
            format,
        )?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Serialize data as JSON or TOON
fn encode<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Toon => encode_toon(data),
        OutputFormat::Json | OutputFormat::Text => {
            serde_json::to_string(data).map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })
        }
    }
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    // Convert to serde_json::Value first, then to TOON
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format: OutputFormat::Toon,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Toon,
    })
}

#[cfg(not(feature = "toon"))]
#[allow(clippy::unnecessary_wraps)]
fn encode_toon<T: Serialize>(_data: &T) -> Result<String, FormatError> {
    Err(FormatError {
        message: "TOON output requires the `toon` feature".to_owned(),
        format: OutputFormat::Toon,
    })
}
