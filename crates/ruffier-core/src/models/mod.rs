// ABOUTME: Value types for Ruffier evaluation re-exported at the crate root
// ABOUTME: Contains PulseReading, PulseStage, AgeGroup, and FitnessLevel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pulse counts taken during the test
mod pulse;

/// Age bands of the reference table
mod age_group;

/// Ordinal fitness classification
mod fitness_level;

pub use age_group::AgeGroup;
pub use fitness_level::FitnessLevel;
pub use pulse::{PulseReading, PulseStage};
