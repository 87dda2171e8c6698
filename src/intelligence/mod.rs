// ABOUTME: Ruffier evaluation pipeline: index formula, age threshold, classification, orchestration
// ABOUTME: Pure, stateless functions composed left-to-right from pulse counts to guidance text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! ```text
//! (P1, P2, P3) --compute_index--> index ---+
//!                                           +--classify--> FitnessLevel --> guidance
//! age ------threshold_for_age--> U --------+
//! ```
//!
//! Every stage is a pure function; [`evaluate`] composes them and
//! [`evaluate_text`] renders the result the way it is shown to the person
//! taking the test.

/// Leaf calculations: index formula and age threshold
pub mod algorithms;

/// Threshold-to-level classification
pub mod classifier;

/// Orchestration and report rendering
pub mod evaluator;

pub use algorithms::{compute_index, threshold_for_age};
pub use classifier::classify;
pub use evaluator::{evaluate, evaluate_text, RuffierAssessment, RuffierEvaluator};
