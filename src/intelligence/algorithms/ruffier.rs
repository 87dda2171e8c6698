// ABOUTME: Ruffier index formula computed from three 15-second pulse counts
// ABOUTME: IR = (4 x (P1 + P2 + P3) - 200) / 10, exact integer sum with full-precision result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ruffier_core::PulseReading;

/// Compute the Ruffier index from the three pulse counts
///
/// `S = 4 x (P1 + P2 + P3)` is the sum of the readings in beats per minute and
/// the index is `(S - 200) / 10`. Lower is better; a sum of exactly 200 bpm
/// gives an index of zero.
///
/// No validation is performed here: negative or implausible counts still give
/// a well-defined index. Callers wanting bounds checks use a strict
/// [`RuffierEvaluator`](crate::intelligence::RuffierEvaluator).
///
/// # Example
///
/// ```rust
/// use ruffier_index::intelligence::algorithms::compute_index;
///
/// // S = 4 x 194 = 776 -> (776 - 200) / 10
/// assert!((compute_index(54, 80, 60) - 57.6).abs() < 1e-9);
/// ```
#[must_use]
pub fn compute_index(p1: i32, p2: i32, p3: i32) -> f64 {
    PulseReading::new(p1, p2, p3).ruffier_index()
}
