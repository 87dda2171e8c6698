// ABOUTME: Age-dependent unsatisfactory threshold lookup for the Ruffier rubric
// ABOUTME: Two-year bands from age 7 stepping down by 1.5, open-ended at 15+ (15.0)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ruffier_core::{AgeGroup, RuffierResult};

/// Resolve the unsatisfactory threshold `U` for an age
///
/// | Age | 7-8 | 9-10 | 11-12 | 13-14 | 15+ |
/// |-----|-----|------|-------|-------|-----|
/// | U   | 21  | 19.5 | 18    | 16.5  | 15  |
///
/// Any age of 15 or more belongs to the last band.
///
/// # Errors
///
/// Returns `RuffierError::AgeOutOfRange` for ages below 7; the rubric has no
/// data for younger children.
pub fn threshold_for_age(age: u32) -> RuffierResult<f64> {
    AgeGroup::from_age(age).map(|group| group.unsatisfactory_threshold())
}
