// ABOUTME: Integration tests for the full Ruffier evaluation pipeline
// ABOUTME: Covers end-to-end scenarios, report text, strict pulse validation, and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use ruffier_index::config::{ConfigError, EvaluationConfig};
use ruffier_index::constants::messages::{GUIDANCE, NO_DATA_FOR_AGE};
use ruffier_index::intelligence::{evaluate, evaluate_text, RuffierEvaluator};
use ruffier_index::{AgeGroup, FitnessLevel, PulseReading, PulseStage, RuffierError};

#[test]
fn test_unfit_ten_year_old() {
    let assessment = evaluate(54, 80, 60, 10).unwrap();

    assert_eq!(assessment.index, 57.6);
    assert_eq!(assessment.threshold, 19.5);
    assert_eq!(assessment.age_group, AgeGroup::Ages9To10);
    assert_eq!(assessment.level, FitnessLevel::Unsatisfactory);
    assert_eq!(assessment.ordinal(), 0);
    assert_eq!(assessment.guidance, "Low.\nGo see your doctor ASAP!");
}

#[test]
fn test_fit_adolescent() {
    let assessment = evaluate(12, 18, 14, 15).unwrap();

    assert_eq!(assessment.index, -2.4);
    assert_eq!(assessment.threshold, 15.0);
    assert_eq!(assessment.level, FitnessLevel::Perfect);
    assert_eq!(assessment.ordinal(), 4);
    assert_eq!(assessment.guidance, "High.");
}

#[test]
fn test_report_text_layout() {
    assert_eq!(
        evaluate_text(54, 80, 60, 10),
        "Your Ruffier index: 57.6\nHeart efficiency: Low.\nGo see your doctor ASAP!"
    );
    assert_eq!(
        evaluate_text(12, 18, 14, 15),
        "Your Ruffier index: -2.4\nHeart efficiency: High."
    );
    assert_eq!(
        evaluate_text(10, 20, 15, 8),
        "Your Ruffier index: -2.0\nHeart efficiency: High."
    );
}

#[test]
fn test_no_data_for_young_children_regardless_of_pulses() {
    for (p1, p2, p3) in [(54, 80, 60), (12, 18, 14), (0, 0, 0), (-5, 300, 7)] {
        assert_eq!(evaluate_text(p1, p2, p3, 5), "There is no data for that age.");
        assert_eq!(evaluate_text(p1, p2, p3, 5), NO_DATA_FOR_AGE);
        assert_eq!(
            evaluate(p1, p2, p3, 5),
            Err(RuffierError::AgeOutOfRange { age: 5 })
        );
    }
}

#[test]
fn test_every_level_reachable_with_its_guidance() {
    // Age 15 (U = 15); index = (4 * sum - 200) / 10
    // sum 88 -> 15.2, sum 78 -> 11.2, sum 66 -> 6.4, sum 52 -> 0.8, sum 51 -> 0.4
    let by_sum = [
        (88, FitnessLevel::Unsatisfactory),
        (78, FitnessLevel::Weak),
        (66, FitnessLevel::Satisfactory),
        (52, FitnessLevel::Good),
        (51, FitnessLevel::Perfect),
    ];
    for (sum, level) in by_sum {
        let assessment = evaluate(sum, 0, 0, 15).unwrap();
        assert_eq!(assessment.level, level, "sum {sum}");
        assert_eq!(
            assessment.guidance,
            GUIDANCE[usize::from(level.ordinal())]
        );
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    let first = evaluate(17, 29, 21, 12);
    let second = evaluate(17, 29, 21, 12);
    assert_eq!(first, second);
    assert_eq!(evaluate_text(17, 29, 21, 12), evaluate_text(17, 29, 21, 12));
}

#[test]
fn test_lenient_evaluator_accepts_implausible_pulses() {
    let evaluator = RuffierEvaluator::default();
    let assessment = evaluator
        .evaluate(&PulseReading::new(-10, 90, 0), 11)
        .unwrap();
    // 4 * 80 = 320 -> 12.0, within [U - 9, U - 4) for U = 18
    assert_eq!(assessment.index, 12.0);
    assert_eq!(assessment.level, FitnessLevel::Satisfactory);
}

#[test]
fn test_strict_evaluator_rejects_out_of_range_pulses() {
    let evaluator = RuffierEvaluator::new(EvaluationConfig::strict());

    assert_eq!(
        evaluator.evaluate(&PulseReading::new(-1, 20, 15), 10),
        Err(RuffierError::InvalidPulse {
            stage: PulseStage::BeforeExertion,
            value: -1,
        })
    );
    assert_eq!(
        evaluator.evaluate(&PulseReading::new(10, 61, 15), 10),
        Err(RuffierError::InvalidPulse {
            stage: PulseStage::AfterExertion,
            value: 61,
        })
    );
    assert_eq!(
        evaluator.report(&PulseReading::new(10, 20, 99), 10),
        "after-recovery pulse of 99 beats is outside 0..=60"
    );
}

#[test]
fn test_strict_evaluator_accepts_limits() {
    let evaluator = RuffierEvaluator::new(EvaluationConfig::strict());
    assert!(evaluator.evaluate(&PulseReading::new(0, 60, 0), 10).is_ok());
    assert_eq!(
        evaluator.report(&PulseReading::new(54, 80, 60), 5),
        "after-exertion pulse of 80 beats is outside 0..=60"
    );
    assert_eq!(
        evaluator.report(&PulseReading::new(14, 25, 16), 5),
        NO_DATA_FOR_AGE
    );
}

#[test]
fn test_report_precision_follows_config() {
    let evaluator = RuffierEvaluator::new(EvaluationConfig::default().with_precision(3));
    assert_eq!(
        evaluator.report(&PulseReading::new(12, 18, 14), 15),
        "Your Ruffier index: -2.400\nHeart efficiency: High."
    );

    let whole = RuffierEvaluator::new(EvaluationConfig::default().with_precision(0));
    assert_eq!(
        whole.report(&PulseReading::new(20, 30, 25), 15),
        "Your Ruffier index: 10\nHeart efficiency: Average.\nIt might be worth additional tests at the doctor."
    );
}

#[test]
fn test_display_uses_default_precision() {
    let assessment = evaluate(54, 80, 60, 10).unwrap();
    assert_eq!(assessment.to_string(), evaluate_text(54, 80, 60, 10));
}

#[test]
fn test_try_new_rejects_precision_above_maximum() {
    let config = EvaluationConfig::default().with_precision(EvaluationConfig::MAX_PRECISION + 1);
    let err = RuffierEvaluator::try_new(config).unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));

    let evaluator = RuffierEvaluator::try_new(
        EvaluationConfig::strict().with_precision(EvaluationConfig::MAX_PRECISION),
    )
    .unwrap();
    assert_eq!(evaluator.config().precision, EvaluationConfig::MAX_PRECISION);
}
