// ABOUTME: Ruffier rubric constants and the fixed user-facing message table
// ABOUTME: Pure data organized by domain: index formula, age bands, level offsets, messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants for the Ruffier test.
//!
//! Children count their pulse for 15 seconds; the three counts are scaled to
//! beats per minute and compared with an ideal total of 200 bpm. Tables are
//! traditionally expressed in tenths, which gives the index
//! `IR = (4 * (P1 + P2 + P3) - 200) / 10`.

/// Index formula constants
pub mod index {
    /// Multiplier converting a 15-second count into beats per minute
    pub const BPM_MULTIPLIER: i64 = 4;

    /// Ideal sum of the three readings in beats per minute
    pub const IDEAL_TOTAL_BPM: i64 = 200;

    /// Divisor used by the reference tables
    pub const TABLE_DIVISOR: f64 = 10.0;

    /// Length of the counting window in seconds
    pub const WINDOW_SECONDS: u32 = 15;
}

/// Age-band thresholds of the reference table
///
/// ```text
/// Age group:       7-8    9-10   11-12  13-14  15+
/// Unsatisfactory:  >=21   >=19.5 >=18   >=16.5 >=15
/// ```
pub mod age_bands {
    /// Youngest age covered by the rubric
    pub const MIN_AGE: u32 = 7;

    /// Age at which the open-ended adolescent band starts
    pub const OPEN_BAND_AGE: u32 = 15;

    /// Width of each closed band in years
    pub const BAND_WIDTH_YEARS: u32 = 2;

    /// Unsatisfactory threshold for the youngest band (ages 7-8)
    pub const BASE_THRESHOLD: f64 = 21.0;

    /// Threshold decrease per band
    pub const THRESHOLD_STEP: f64 = 1.5;

    /// Unsatisfactory threshold of the open-ended band (ages 15+)
    pub const OPEN_BAND_THRESHOLD: f64 = 15.0;
}

/// Distances of each level's lower cut point below the unsatisfactory threshold U
///
/// "Unsatisfactory" sits 4 points above "Weak", "Weak" 5 points above
/// "Satisfactory", and "Satisfactory" 5.5 points above "Good".
pub mod level_offsets {
    /// `U - 4`: lowest index still rated Weak
    pub const WEAK: f64 = 4.0;

    /// `U - 9`: lowest index still rated Satisfactory
    pub const SATISFACTORY: f64 = 9.0;

    /// `U - 14.5`: lowest index still rated Good; anything below is Perfect
    pub const GOOD: f64 = 14.5;
}

/// Pulse plausibility limits used by strict validation
pub mod pulse_limits {
    /// Highest accepted count per 15-second window (240 bpm)
    pub const MAX_PULSE_PER_WINDOW: i32 = 60;
}

/// Fixed user-facing messages
///
/// These strings are a stable contract: callers localizing or formatting
/// results match on them.
pub mod messages {
    /// Prefix placed before the rendered index
    pub const INDEX_PREFIX: &str = "Your Ruffier index: ";

    /// Prefix placed before the guidance text
    pub const HEART_EFFICIENCY_PREFIX: &str = "Heart efficiency: ";

    /// Message returned when the rubric has no threshold for the age
    pub const NO_DATA_FOR_AGE: &str = "There is no data for that age.";

    /// Guidance text indexed by fitness level ordinal (0 = worst, 4 = best)
    pub const GUIDANCE: [&str; 5] = [
        "Low.\nGo see your doctor ASAP!",
        "Satisfactory.\nGo see your doctor!",
        "Average.\nIt might be worth additional tests at the doctor.",
        "Higher than average.",
        "High.",
    ];
}
