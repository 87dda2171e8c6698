// ABOUTME: Core types and constants for Ruffier cardiovascular fitness index evaluation
// ABOUTME: Foundation crate with error handling, rubric constants, messages, and value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ruffier Core
//!
//! Foundation crate providing shared types and constants for Ruffier index
//! evaluation. This crate is designed to change infrequently; the calculation
//! pipeline itself lives in the `ruffier_index` crate.
//!
//! ## Modules
//!
//! - **errors**: `RuffierError` and `ErrorCode`
//! - **constants**: Rubric constants and the fixed guidance message table
//! - **models**: `PulseReading`, `AgeGroup`, and `FitnessLevel` value types

/// Error types shared by every evaluation stage
pub mod errors;

/// Rubric constants and fixed user-facing messages
pub mod constants;

/// Value types flowing through the evaluation pipeline
pub mod models;

pub use errors::{ErrorCode, RuffierError, RuffierResult};
pub use models::{AgeGroup, FitnessLevel, PulseReading, PulseStage};
