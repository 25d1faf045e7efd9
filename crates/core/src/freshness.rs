//! Coffee freshness grading.
//!
//! Freshness is a function of two discretised axes: minutes since the pot
//! was brewed ([`TimeBucket`]) and how much of the canister is left
//! ([`FillBucket`]). The label comes from [`QUALITY_MATRIX`], a fixed
//! 6×6 grid where each older time bucket shifts the row one grade worse.

use std::fmt;

use serde::Serialize;

use crate::breakpoints::{classify, Direction};
use crate::types::UnixSeconds;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Qualitative freshness grade, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Freshness {
    Amazing,
    Awesome,
    Great,
    Decent,
    Average,
    Risky,
    Shady,
    Shitty,
    #[serde(rename = "Don't")]
    Dont,
}

impl Freshness {
    /// The label exactly as it appears in notifications.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amazing => "Amazing",
            Self::Awesome => "Awesome",
            Self::Great => "Great",
            Self::Decent => "Decent",
            Self::Average => "Average",
            Self::Risky => "Risky",
            Self::Shady => "Shady",
            Self::Shitty => "Shitty",
            Self::Dont => "Don't",
        }
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Fill axis
// ---------------------------------------------------------------------------

/// Fill level bucket, fullest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillBucket {
    /// 90% or more.
    Full,
    /// 70% up to 90%.
    Plenty,
    /// 50% up to 70%.
    Half,
    /// 30% up to 50%.
    Partial,
    /// 15% up to 30%.
    Little,
    /// Below 15%.
    Dregs,
}

impl FillBucket {
    pub const COUNT: usize = 6;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Full,
        Self::Plenty,
        Self::Half,
        Self::Partial,
        Self::Little,
        Self::Dregs,
    ];

    /// Bucket the fill ratio against [`FILL_BREAKPOINTS`].
    pub fn from_ratio(fill_ratio: f64) -> Self {
        Self::ALL[classify(&FILL_BREAKPOINTS, fill_ratio, Direction::Descending)]
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Lower bounds of each fill bucket except the last, descending.
pub const FILL_BREAKPOINTS: [f64; FillBucket::COUNT - 1] = [0.90, 0.70, 0.50, 0.30, 0.15];

// ---------------------------------------------------------------------------
// Time axis
// ---------------------------------------------------------------------------

/// Minutes-since-brew bucket, freshest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    /// Under 5 minutes (including brews stamped in the future).
    JustBrewed,
    /// 5 to 45 minutes.
    Recent,
    /// 45 to 90 minutes.
    Hour,
    /// 90 to 120 minutes.
    Couple,
    /// 120 to 240 minutes.
    Old,
    /// 240 minutes or more.
    Stale,
}

impl TimeBucket {
    pub const COUNT: usize = 6;

    pub const ALL: [Self; Self::COUNT] = [
        Self::JustBrewed,
        Self::Recent,
        Self::Hour,
        Self::Couple,
        Self::Old,
        Self::Stale,
    ];

    /// Bucket elapsed minutes against [`MINUTE_BREAKPOINTS`].
    pub fn from_elapsed_minutes(minutes: f64) -> Self {
        Self::ALL[classify(&MINUTE_BREAKPOINTS, minutes, Direction::Ascending)]
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Upper bounds (exclusive) of each time bucket except the last, ascending.
pub const MINUTE_BREAKPOINTS: [f64; TimeBucket::COUNT - 1] = [5.0, 45.0, 90.0, 120.0, 240.0];

// ---------------------------------------------------------------------------
// Matrix
// ---------------------------------------------------------------------------

use Freshness::*;

/// Rows are [`TimeBucket`]s, columns are [`FillBucket`]s.
///
/// ```text
///            >90%     >70%     >50%     >30%     >15%     <15%
/// <5m        Amazing  Awesome  Great    Decent   Average  Risky
/// <45m       Awesome  Great    Decent   Average  Risky    Shady
/// <90m       Great    Decent   Average  Risky    Shady    Shitty
/// <120m      Decent   Average  Risky    Shady    Shitty   Don't
/// <240m      Average  Risky    Shady    Shitty   Don't    Don't
/// >=240m     Risky    Shady    Shitty   Don't    Don't    Don't
/// ```
pub const QUALITY_MATRIX: [[Freshness; FillBucket::COUNT]; TimeBucket::COUNT] = [
    [Amazing, Awesome, Great, Decent, Average, Risky],
    [Awesome, Great, Decent, Average, Risky, Shady],
    [Great, Decent, Average, Risky, Shady, Shitty],
    [Decent, Average, Risky, Shady, Shitty, Dont],
    [Average, Risky, Shady, Shitty, Dont, Dont],
    [Risky, Shady, Shitty, Dont, Dont, Dont],
];

/// Look up the grade for an already bucketed reading.
pub fn grade(time: TimeBucket, fill: FillBucket) -> Freshness {
    QUALITY_MATRIX[time.index()][fill.index()]
}

/// Grade a reading brewed at `brew_timestamp`, as seen at `now`.
///
/// A brew timestamp in the future yields negative elapsed time, which lands
/// in the freshest time bucket. The elapsed time saturates instead of
/// overflowing for timestamps near the `i64` limits.
pub fn evaluate_freshness(
    brew_timestamp: UnixSeconds,
    fill_ratio: f64,
    now: UnixSeconds,
) -> Freshness {
    let elapsed_minutes = now.saturating_sub(brew_timestamp) as f64 / 60.0;
    let fill = FillBucket::from_ratio(fill_ratio);
    let time = TimeBucket::from_elapsed_minutes(elapsed_minutes);
    grade(time, fill)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: UnixSeconds = 1_700_000_000;

    fn minutes_ago(minutes: i64) -> UnixSeconds {
        NOW - minutes * 60
    }

    // -- evaluate_freshness ---------------------------------------------------

    #[test]
    fn full_and_fresh_is_amazing() {
        assert_eq!(evaluate_freshness(minutes_ago(2), 0.95, NOW), Amazing);
    }

    #[test]
    fn dregs_after_five_hours_is_dont() {
        let label = evaluate_freshness(minutes_ago(300), 0.10, NOW);
        assert_eq!(label, Dont);
        assert_eq!(label.to_string(), "Don't");
    }

    #[test]
    fn future_brew_counts_as_freshest() {
        assert_eq!(evaluate_freshness(NOW + 600, 0.95, NOW), Amazing);
    }

    #[test]
    fn extreme_timestamps_do_not_overflow() {
        assert_eq!(evaluate_freshness(i64::MIN, 0.95, NOW), Risky);
        assert_eq!(evaluate_freshness(i64::MAX, 0.95, NOW), Amazing);
        assert_eq!(evaluate_freshness(i64::MIN, 0.95, i64::MAX), Risky);
    }

    #[test]
    fn five_minutes_exactly_moves_to_second_row() {
        assert_eq!(evaluate_freshness(minutes_ago(5), 0.95, NOW), Awesome);
    }

    #[test]
    fn partial_minutes_are_not_truncated() {
        // 4m59s is still under five minutes.
        assert_eq!(evaluate_freshness(NOW - 299, 0.95, NOW), Amazing);
    }

    #[test]
    fn mid_range_reading() {
        // 60 minutes, 55% full.
        assert_eq!(evaluate_freshness(minutes_ago(60), 0.55, NOW), Average);
    }

    // -- buckets --------------------------------------------------------------

    #[test]
    fn fill_bucket_boundaries() {
        assert_eq!(FillBucket::from_ratio(1.0), FillBucket::Full);
        assert_eq!(FillBucket::from_ratio(0.90), FillBucket::Full);
        assert_eq!(FillBucket::from_ratio(0.89999), FillBucket::Plenty);
        assert_eq!(FillBucket::from_ratio(0.15), FillBucket::Little);
        assert_eq!(FillBucket::from_ratio(0.0), FillBucket::Dregs);
    }

    #[test]
    fn time_bucket_boundaries() {
        assert_eq!(TimeBucket::from_elapsed_minutes(4.0), TimeBucket::JustBrewed);
        assert_eq!(TimeBucket::from_elapsed_minutes(5.0), TimeBucket::Recent);
        assert_eq!(TimeBucket::from_elapsed_minutes(239.9), TimeBucket::Old);
        assert_eq!(TimeBucket::from_elapsed_minutes(241.0), TimeBucket::Stale);
    }

    #[test]
    fn bucket_order_matches_matrix_axes() {
        for (i, bucket) in FillBucket::ALL.iter().enumerate() {
            assert_eq!(bucket.index(), i);
        }
        for (i, bucket) in TimeBucket::ALL.iter().enumerate() {
            assert_eq!(bucket.index(), i);
        }
    }

    // -- matrix ---------------------------------------------------------------

    #[test]
    fn each_row_shifts_one_grade_worse() {
        for row in 1..TimeBucket::COUNT {
            for col in 0..FillBucket::COUNT - 1 {
                assert_eq!(
                    QUALITY_MATRIX[row][col],
                    QUALITY_MATRIX[row - 1][col + 1],
                    "row {row} col {col}"
                );
            }
        }
    }

    #[test]
    fn corners() {
        assert_eq!(grade(TimeBucket::JustBrewed, FillBucket::Full), Amazing);
        assert_eq!(grade(TimeBucket::JustBrewed, FillBucket::Dregs), Risky);
        assert_eq!(grade(TimeBucket::Stale, FillBucket::Full), Risky);
        assert_eq!(grade(TimeBucket::Stale, FillBucket::Dregs), Dont);
    }

    #[test]
    fn labels_serialize_verbatim() {
        assert_eq!(serde_json::to_string(&Dont).unwrap(), r#""Don't""#);
        assert_eq!(serde_json::to_string(&Shitty).unwrap(), r#""Shitty""#);
    }

    #[test]
    fn repeated_evaluation_agrees() {
        let a = evaluate_freshness(minutes_ago(100), 0.33, NOW);
        let b = evaluate_freshness(minutes_ago(100), 0.33, NOW);
        assert_eq!(a, b);
    }
}
