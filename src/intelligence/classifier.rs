// ABOUTME: Classifies a Ruffier index against an age threshold into one of five levels
// ABOUTME: Half-open bands anchored at U: cut points belong to the better level except U itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ruffier_core::constants::level_offsets;
use ruffier_core::FitnessLevel;

/// Classify an index against the unsatisfactory threshold `U`
///
/// ```text
/// index <  U - 14.5           -> Perfect        (4)
/// U - 14.5 <= index < U - 9   -> Good           (3)
/// U - 9    <= index < U - 4   -> Satisfactory   (2)
/// U - 4    <= index < U       -> Weak           (1)
/// U        <= index           -> Unsatisfactory (0)
/// ```
///
/// Bands are checked from the strictest down so each boundary value lands in
/// exactly one band. A NaN index compares false everywhere and falls through
/// to `Unsatisfactory`.
#[must_use]
pub fn classify(index: f64, threshold: f64) -> FitnessLevel {
    if index < threshold - level_offsets::GOOD {
        FitnessLevel::Perfect
    } else if index < threshold - level_offsets::SATISFACTORY {
        FitnessLevel::Good
    } else if index < threshold - level_offsets::WEAK {
        FitnessLevel::Satisfactory
    } else if index < threshold {
        FitnessLevel::Weak
    } else {
        FitnessLevel::Unsatisfactory
    }
}

/// Lowest index (inclusive) that still falls into `level` for threshold `U`
///
/// `Perfect` has no lower bound and yields `None`.
#[must_use]
pub fn lower_bound(level: FitnessLevel, threshold: f64) -> Option<f64> {
    match level {
        FitnessLevel::Unsatisfactory => Some(threshold),
        FitnessLevel::Weak => Some(threshold - level_offsets::WEAK),
        FitnessLevel::Satisfactory => Some(threshold - level_offsets::SATISFACTORY),
        FitnessLevel::Good => Some(threshold - level_offsets::GOOD),
        FitnessLevel::Perfect => None,
    }
}
