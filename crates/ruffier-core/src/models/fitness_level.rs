// ABOUTME: Ordinal fitness level produced by classifying a Ruffier index
// ABOUTME: Five levels from Unsatisfactory (0) to Perfect (4) with fixed guidance text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages::GUIDANCE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heart efficiency level, ordered from worst to best
///
/// Variant names follow the rubric table; the guidance shown to the user uses
/// its own wording (a `Weak` result reads "Satisfactory.").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// Level 0: index at or above the unsatisfactory threshold
    Unsatisfactory,
    /// Level 1: within 4 points below the threshold
    Weak,
    /// Level 2: between 4 and 9 points below the threshold
    Satisfactory,
    /// Level 3: between 9 and 14.5 points below the threshold
    Good,
    /// Level 4: more than 14.5 points below the threshold
    Perfect,
}

impl FitnessLevel {
    /// All levels from worst to best
    pub const ALL: [Self; 5] = [
        Self::Unsatisfactory,
        Self::Weak,
        Self::Satisfactory,
        Self::Good,
        Self::Perfect,
    ];

    /// Integer level, 0 (worst) to 4 (best)
    #[must_use]
    pub const fn ordinal(&self) -> u8 {
        match self {
            Self::Unsatisfactory => 0,
            Self::Weak => 1,
            Self::Satisfactory => 2,
            Self::Good => 3,
            Self::Perfect => 4,
        }
    }

    /// Level for an integer ordinal
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Unsatisfactory),
            1 => Some(Self::Weak),
            2 => Some(Self::Satisfactory),
            3 => Some(Self::Good),
            4 => Some(Self::Perfect),
            _ => None,
        }
    }

    /// Fixed guidance text for this level
    #[must_use]
    pub const fn guidance(&self) -> &'static str {
        GUIDANCE[self.ordinal() as usize]
    }

    /// Rubric name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unsatisfactory => "unsatisfactory",
            Self::Weak => "weak",
            Self::Satisfactory => "satisfactory",
            Self::Good => "good",
            Self::Perfect => "perfect",
        }
    }

    /// Parse a rubric name (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "unsatisfactory" => Some(Self::Unsatisfactory),
            "weak" => Some(Self::Weak),
            "satisfactory" => Some(Self::Satisfactory),
            "good" => Some(Self::Good),
            "perfect" => Some(Self::Perfect),
            _ => None,
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
