//! Fill-level status sentences shown in the notification body.
//!
//! Thresholds are checked from fullest to emptiest and the first match wins.
//! Note the mix of inclusive and exclusive bounds: `>= 0.95`, `>= 0.75`,
//! `> 0.5`, `> 0.3`, `>= 0.17`.

/// 95% or more.
pub const MSG_FRESH_POT: &str = "Some fresh-brewed coffee is waiting for you at the kitchen!";

/// 75% up to 95%.
pub const MSG_LOTS_LEFT: &str = "Lots of delicious, mysterious liquid left. Go get it.";

/// Above 50% up to 75%.
pub const MSG_OVER_HALF: &str =
    "More than half the can is still left! Go get some of that mysterious liquid.";

/// Above 30% up to 50%.
pub const MSG_GOOD_AMOUNT: &str =
    "There's still a good amount of coffee left. Go get it before someone else!";

/// 17% up to 30%.
pub const MSG_RUNNING_LOW: &str =
    "Coffee availability is approaching dangerously low levels. Be fast or get whooshed.";

/// Below 17%.
pub const MSG_LOW: &str = "Coffee availability level is low. Approach at your own risk.";

/// Every message [`determine_message`] can return, fullest first.
pub const ALL_MESSAGES: &[&str] = &[
    MSG_FRESH_POT,
    MSG_LOTS_LEFT,
    MSG_OVER_HALF,
    MSG_GOOD_AMOUNT,
    MSG_RUNNING_LOW,
    MSG_LOW,
];

/// Pick the status sentence for a fill ratio.
pub fn determine_message(fill_ratio: f64) -> &'static str {
    if fill_ratio >= 0.95 {
        MSG_FRESH_POT
    } else if fill_ratio >= 0.75 {
        MSG_LOTS_LEFT
    } else if fill_ratio > 0.5 {
        MSG_OVER_HALF
    } else if fill_ratio > 0.3 {
        MSG_GOOD_AMOUNT
    } else if fill_ratio >= 0.17 {
        MSG_RUNNING_LOW
    } else {
        MSG_LOW
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
