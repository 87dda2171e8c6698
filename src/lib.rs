// ABOUTME: Main library entry point for Ruffier cardiovascular fitness index evaluation
// ABOUTME: Computes the index from pulse counts and classifies it against age-banded thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ruffier Index
//!
//! Scores the Ruffier squat test. Three pulse counts taken over 15 seconds
//! (at rest, right after 30 squats, after a short recovery) give the index
//!
//! ```text
//! IR = (4 x (P1 + P2 + P3) - 200) / 10
//! ```
//!
//! which is classified against an age-dependent threshold into one of five
//! heart efficiency levels with fixed guidance text.
//!
//! ## Architecture
//!
//! - **intelligence**: The pure evaluation pipeline (index, threshold, classification)
//! - **config**: Environment-driven evaluation settings
//! - **formatters**: Text, JSON, and TOON rendering of outcomes
//! - **logging**: Optional `tracing` subscriber setup
//!
//! Value types, errors, and the message table live in the `ruffier-core` crate
//! and are re-exported here.
//!
//! ## Example Usage
//!
//! ```rust
//! use ruffier_index::intelligence::{evaluate, evaluate_text};
//! use ruffier_index::FitnessLevel;
//!
//! let assessment = evaluate(54, 80, 60, 10)?;
//! assert_eq!(assessment.level, FitnessLevel::Unsatisfactory);
//! assert_eq!(
//!     evaluate_text(54, 80, 60, 10),
//!     "Your Ruffier index: 57.6\nHeart efficiency: Low.\nGo see your doctor ASAP!"
//! );
//! # Ok::<(), ruffier_index::RuffierError>(())
//! ```

/// Configuration management loaded from the environment
pub mod config;

/// Output format abstraction (text, JSON, TOON)
pub mod formatters;

/// Ruffier evaluation pipeline
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use ruffier_core::{constants, errors, models};
pub use ruffier_core::{
    AgeGroup, ErrorCode, FitnessLevel, PulseReading, PulseStage, RuffierError, RuffierResult,
};
