// ABOUTME: Leaf calculations of the Ruffier pipeline: index formula and age threshold lookup
// ABOUTME: Pure functions with no shared state, safe to call from any thread
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Module
//!
//! The two leaves of the evaluation pipeline. Both are pure: the index depends
//! only on the three pulse counts, the threshold only on the age.
//!
//! # Example
//!
//! ```rust
//! use ruffier_index::intelligence::algorithms::{compute_index, threshold_for_age};
//!
//! let index = compute_index(10, 20, 15);
//! assert!((index - -2.0).abs() < f64::EPSILON);
//! assert_eq!(threshold_for_age(10).ok(), Some(19.5));
//! ```

/// Age-banded unsatisfactory threshold lookup
pub mod age_threshold;
/// Ruffier index formula
pub mod ruffier;

pub use age_threshold::threshold_for_age;
pub use ruffier::compute_index;
