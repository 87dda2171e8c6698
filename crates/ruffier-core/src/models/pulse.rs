// ABOUTME: Pulse reading model for the three counts of a Ruffier test
// ABOUTME: Counts are beats over a 15-second window before, after, and following recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::index::{BPM_MULTIPLIER, IDEAL_TOTAL_BPM, TABLE_DIVISOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moment of the test at which a pulse was counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PulseStage {
    /// P1: at rest, before the squats
    BeforeExertion,
    /// P2: immediately after the squats
    AfterExertion,
    /// P3: after a short recovery pause
    AfterRecovery,
}

impl PulseStage {
    /// All stages in test order
    pub const ALL: [Self; 3] = [Self::BeforeExertion, Self::AfterExertion, Self::AfterRecovery];

    /// Short label used in logs and error messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeExertion => "before-exertion",
            Self::AfterExertion => "after-exertion",
            Self::AfterRecovery => "after-recovery",
        }
    }
}

impl fmt::Display for PulseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three 15-second pulse counts of one test
///
/// No ordering between the counts is enforced; P2 is usually the highest but a
/// reading with `p2 < p1` is still a valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PulseReading {
    /// P1: count before exertion
    pub p1: i32,
    /// P2: count immediately after exertion
    pub p2: i32,
    /// P3: count after a short recovery
    pub p3: i32,
}

impl PulseReading {
    /// Build a reading from the three counts
    #[must_use]
    pub const fn new(p1: i32, p2: i32, p3: i32) -> Self {
        Self { p1, p2, p3 }
    }

    /// Count taken at the given stage
    #[must_use]
    pub const fn at(&self, stage: PulseStage) -> i32 {
        match stage {
            PulseStage::BeforeExertion => self.p1,
            PulseStage::AfterExertion => self.p2,
            PulseStage::AfterRecovery => self.p3,
        }
    }

    /// Iterate over `(stage, count)` pairs in test order
    pub fn stages(&self) -> impl Iterator<Item = (PulseStage, i32)> + '_ {
        PulseStage::ALL.into_iter().map(move |stage| (stage, self.at(stage)))
    }

    /// Sum of the three counts scaled to beats per minute: `S = 4 * (P1 + P2 + P3)`
    ///
    /// Widened to `i64` so any combination of `i32` counts is exact.
    #[must_use]
    pub fn total_bpm(&self) -> i64 {
        BPM_MULTIPLIER * (i64::from(self.p1) + i64::from(self.p2) + i64::from(self.p3))
    }

    /// Ruffier index: `(S - 200) / 10`
    ///
    /// No validation is performed; negative counts give a well-defined,
    /// if meaningless, index.
    #[must_use]
    pub fn ruffier_index(&self) -> f64 {
        (self.total_bpm() - IDEAL_TOTAL_BPM) as f64 / TABLE_DIVISOR
    }
}

impl From<(i32, i32, i32)> for PulseReading {
    fn from((p1, p2, p3): (i32, i32, i32)) -> Self {
        Self::new(p1, p2, p3)
    }
}
