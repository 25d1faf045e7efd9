//! Ordinal bucketing of a continuous value against ordered breakpoints.

/// Which way the breakpoints are ordered and how a value matches one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Breakpoints run high to low; a value matches the first breakpoint
    /// it is greater than or equal to.
    Descending,
    /// Breakpoints run low to high; a value matches the first breakpoint
    /// it is strictly below.
    Ascending,
}

/// Return the bucket index of `value` in `[0, breakpoints.len()]`.
///
/// The index of the first matching breakpoint is the bucket; a value that
/// matches none falls into the overflow bucket `breakpoints.len()`. The
/// caller is responsible for ordering `breakpoints` to suit `direction`.
pub fn classify(breakpoints: &[f64], value: f64, direction: Direction) -> usize {
    breakpoints
        .iter()
        .position(|&bp| match direction {
            Direction::Descending => value >= bp,
            Direction::Ascending => value < bp,
        })
        .unwrap_or(breakpoints.len())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
