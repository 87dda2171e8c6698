// ABOUTME: Unit tests for classifying a Ruffier index against an age threshold
// ABOUTME: Pins half-open boundary behavior at every cut point of the rubric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use ruffier_index::intelligence::classifier::{classify, lower_bound};
use ruffier_index::FitnessLevel;

/// Threshold for ages 7-8
const U_AGE_7: f64 = 21.0;

#[test]
fn test_boundaries_for_youngest_band() {
    let cases = [
        (21.0, 0),
        (20.999, 1),
        (17.0, 1),
        (16.999, 2),
        (12.0, 2),
        (11.999, 3),
        (6.5, 3),
        (6.499, 4),
    ];
    for (index, ordinal) in cases {
        assert_eq!(
            classify(index, U_AGE_7).ordinal(),
            ordinal,
            "index {index} at U = {U_AGE_7}"
        );
    }
}

#[test]
fn test_extreme_indices() {
    assert_eq!(classify(57.6, 19.5), FitnessLevel::Unsatisfactory);
    assert_eq!(classify(-2.4, 15.0), FitnessLevel::Perfect);
    assert_eq!(classify(f64::MAX, 15.0), FitnessLevel::Unsatisfactory);
    assert_eq!(classify(f64::MIN, 15.0), FitnessLevel::Perfect);
}

#[test]
fn test_boundaries_for_open_band() {
    // U = 15: cut points at 15, 11, 6, and 0.5
    assert_eq!(classify(15.0, 15.0), FitnessLevel::Unsatisfactory);
    assert_eq!(classify(11.0, 15.0), FitnessLevel::Weak);
    assert_eq!(classify(6.0, 15.0), FitnessLevel::Satisfactory);
    assert_eq!(classify(0.5, 15.0), FitnessLevel::Good);
    assert_eq!(classify(0.4, 15.0), FitnessLevel::Perfect);
}

#[test]
fn test_lower_bound_classifies_into_its_own_level() {
    for threshold in [21.0, 19.5, 18.0, 16.5, 15.0] {
        for level in FitnessLevel::ALL {
            if let Some(bound) = lower_bound(level, threshold) {
                assert_eq!(classify(bound, threshold), level);
            }
        }
    }
    assert_eq!(lower_bound(FitnessLevel::Perfect, 21.0), None);
}

#[test]
fn test_classification_is_monotonic() {
    let mut previous = FitnessLevel::Perfect;
    for step in 0_i32..=400 {
        let index = f64::from(step).mul_add(0.1, -10.0);
        let level = classify(index, 18.0);
        assert!(level <= previous, "level rose at index {index}");
        previous = level;
    }
}
