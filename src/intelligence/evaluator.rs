// ABOUTME: Orchestrates a full Ruffier evaluation from pulse counts and age to guidance text
// ABOUTME: Composes index, age threshold, and classification; renders the user-facing report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{ConfigError, EvaluationConfig, PulseValidation};
use crate::intelligence::algorithms::compute_index;
use crate::intelligence::classifier::classify;
use ruffier_core::constants::messages::{HEART_EFFICIENCY_PREFIX, INDEX_PREFIX};
use ruffier_core::constants::pulse_limits::MAX_PULSE_PER_WINDOW;
use ruffier_core::{AgeGroup, FitnessLevel, PulseReading, RuffierError, RuffierResult};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Outcome of a successful Ruffier evaluation
///
/// Carries both pieces of information a caller renders: the numeric index and
/// the qualitative level with its guidance text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuffierAssessment {
    /// Pulse counts the evaluation was computed from
    pub reading: PulseReading,
    /// Age of the person tested
    pub age: u32,
    /// Ruffier index at full precision
    pub index: f64,
    /// Age band the threshold came from
    pub age_group: AgeGroup,
    /// Unsatisfactory threshold for the age band
    pub threshold: f64,
    /// Classified fitness level
    pub level: FitnessLevel,
    /// Fixed guidance text for the level
    pub guidance: &'static str,
}

impl RuffierAssessment {
    /// Integer level, 0 (worst) to 4 (best)
    #[must_use]
    pub const fn ordinal(&self) -> u8 {
        self.level.ordinal()
    }

    /// Two-line report: index with `precision` decimals, then heart efficiency
    ///
    /// ```text
    /// Your Ruffier index: 57.6
    /// Heart efficiency: Low.
    /// Go see your doctor ASAP!
    /// ```
    #[must_use]
    pub fn render(&self, precision: usize) -> String {
        format!(
            "{INDEX_PREFIX}{index:.precision$}\n{HEART_EFFICIENCY_PREFIX}{guidance}",
            index = self.index,
            guidance = self.guidance,
        )
    }
}

impl fmt::Display for RuffierAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(EvaluationConfig::DEFAULT_PRECISION))
    }
}

/// Runs evaluations under an [`EvaluationConfig`]
///
/// The evaluator holds only immutable configuration, so one instance can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RuffierEvaluator {
    config: EvaluationConfig,
}

impl RuffierEvaluator {
    /// Create an evaluator with the given configuration
    ///
    /// The configuration is not checked; use [`Self::try_new`] for values that
    /// did not come from [`EvaluationConfig::from_env`].
    #[must_use]
    pub const fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    /// Create an evaluator after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the precision exceeds
    /// [`EvaluationConfig::MAX_PRECISION`].
    pub fn try_new(config: EvaluationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate one test
    ///
    /// # Errors
    ///
    /// - `RuffierError::AgeOutOfRange` if the age is below the rubric
    /// - `RuffierError::InvalidPulse` if strict validation rejects a count
    pub fn evaluate(&self, reading: &PulseReading, age: u32) -> RuffierResult<RuffierAssessment> {
        if self.config.pulse_validation == PulseValidation::Strict {
            Self::validate_reading(reading)?;
        }

        let index = compute_index(reading.p1, reading.p2, reading.p3);

        let age_group = AgeGroup::from_age(age).inspect_err(|_| {
            debug!(age, "No Ruffier threshold for age, skipping classification");
        })?;
        let threshold = age_group.unsatisfactory_threshold();
        let level = classify(index, threshold);

        debug!(
            p1 = reading.p1,
            p2 = reading.p2,
            p3 = reading.p3,
            age,
            index,
            threshold,
            level = %level,
            "Ruffier test evaluated"
        );

        Ok(RuffierAssessment {
            reading: *reading,
            age,
            index,
            age_group,
            threshold,
            level,
            guidance: level.guidance(),
        })
    }

    /// Evaluate one test and render the user-facing text
    ///
    /// Errors are folded into their user message; an age below the rubric
    /// yields exactly "There is no data for that age.".
    #[must_use]
    pub fn report(&self, reading: &PulseReading, age: u32) -> String {
        match self.evaluate(reading, age) {
            Ok(assessment) => assessment.render(self.config.precision),
            Err(err) => err.user_message(),
        }
    }

    fn validate_reading(reading: &PulseReading) -> RuffierResult<()> {
        for (stage, value) in reading.stages() {
            if !(0..=MAX_PULSE_PER_WINDOW).contains(&value) {
                warn!(stage = %stage, value, "Rejected implausible pulse count");
                return Err(RuffierError::InvalidPulse { stage, value });
            }
        }
        Ok(())
    }
}

/// Evaluate a Ruffier test with the default (lenient) configuration
///
/// # Errors
///
/// Returns `RuffierError::AgeOutOfRange` if `age` is below 7.
///
/// # Example
///
/// ```rust
/// use ruffier_index::intelligence::evaluate;
/// use ruffier_index::FitnessLevel;
///
/// let assessment = evaluate(12, 18, 14, 15)?;
/// assert_eq!(assessment.level, FitnessLevel::Perfect);
/// assert_eq!(assessment.guidance, "High.");
/// # Ok::<(), ruffier_index::RuffierError>(())
/// ```
pub fn evaluate(p1: i32, p2: i32, p3: i32, age: u32) -> RuffierResult<RuffierAssessment> {
    RuffierEvaluator::default().evaluate(&PulseReading::new(p1, p2, p3), age)
}

/// Evaluate a Ruffier test and return the rendered report text
///
/// ```rust
/// use ruffier_index::intelligence::evaluate_text;
///
/// assert_eq!(evaluate_text(54, 80, 60, 5), "There is no data for that age.");
/// ```
#[must_use]
pub fn evaluate_text(p1: i32, p2: i32, p3: i32, age: u32) -> String {
    RuffierEvaluator::default().report(&PulseReading::new(p1, p2, p3), age)
}
