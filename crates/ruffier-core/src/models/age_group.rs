// ABOUTME: Age bands of the Ruffier reference table and their unsatisfactory thresholds
// ABOUTME: Maps integer ages onto five bands with an open-ended adolescent band at 15+
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::age_bands::{
    BAND_WIDTH_YEARS, BASE_THRESHOLD, MIN_AGE, OPEN_BAND_AGE, OPEN_BAND_THRESHOLD, THRESHOLD_STEP,
};
use crate::errors::{RuffierError, RuffierResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Age band of the reference table
///
/// The unsatisfactory threshold starts at 21.0 for ages 7-8 and drops by 1.5
/// every two years until the open-ended 15+ band at 15.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// Ages 7 and 8
    Ages7To8,
    /// Ages 9 and 10
    Ages9To10,
    /// Ages 11 and 12
    Ages11To12,
    /// Ages 13 and 14
    Ages13To14,
    /// Ages 15 and above
    Ages15Plus,
}

impl AgeGroup {
    /// All bands from youngest to oldest
    pub const ALL: [Self; 5] = [
        Self::Ages7To8,
        Self::Ages9To10,
        Self::Ages11To12,
        Self::Ages13To14,
        Self::Ages15Plus,
    ];

    /// Resolve the band containing `age`
    ///
    /// # Errors
    ///
    /// Returns `RuffierError::AgeOutOfRange` for ages below 7.
    pub const fn from_age(age: u32) -> RuffierResult<Self> {
        if age < MIN_AGE {
            return Err(RuffierError::AgeOutOfRange { age });
        }
        let group = match (age - MIN_AGE) / BAND_WIDTH_YEARS {
            0 => Self::Ages7To8,
            1 => Self::Ages9To10,
            2 => Self::Ages11To12,
            3 => Self::Ages13To14,
            _ => Self::Ages15Plus,
        };
        Ok(group)
    }

    /// Zero-based position of the band, youngest first
    #[must_use]
    pub const fn band_index(&self) -> u32 {
        match self {
            Self::Ages7To8 => 0,
            Self::Ages9To10 => 1,
            Self::Ages11To12 => 2,
            Self::Ages13To14 => 3,
            Self::Ages15Plus => 4,
        }
    }

    /// Index value at or above which fitness is rated unsatisfactory
    #[must_use]
    pub fn unsatisfactory_threshold(&self) -> f64 {
        match self {
            Self::Ages15Plus => OPEN_BAND_THRESHOLD,
            closed => THRESHOLD_STEP.mul_add(-f64::from(closed.band_index()), BASE_THRESHOLD),
        }
    }

    /// Inclusive age bounds; the upper bound is `None` for the open band
    #[must_use]
    pub const fn age_range(&self) -> (u32, Option<u32>) {
        match self {
            Self::Ages15Plus => (OPEN_BAND_AGE, None),
            closed => {
                let lower = MIN_AGE + closed.band_index() * BAND_WIDTH_YEARS;
                (lower, Some(lower + BAND_WIDTH_YEARS - 1))
            }
        }
    }

    /// Table heading for this band
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ages7To8 => "7-8",
            Self::Ages9To10 => "9-10",
            Self::Ages11To12 => "11-12",
            Self::Ages13To14 => "13-14",
            Self::Ages15Plus => "15+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
