//! Brewbot domain logic.
//!
//! Pure, synchronous building blocks that turn one coffee canister reading
//! into the values shown in a status notification:
//!
//! - [`breakpoints`] — maps a continuous value onto an ordinal bucket.
//! - [`freshness`] — time-since-brew × fill-level quality matrix.
//! - [`status_message`] — fill-level → human-readable sentence.
//! - [`clock`] — injectable wall clock so freshness stays deterministic.

pub mod breakpoints;
pub mod clock;
pub mod error;
pub mod freshness;
pub mod status_message;
pub mod types;

pub use breakpoints::{classify, Direction};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CoreError;
pub use freshness::{evaluate_freshness, FillBucket, Freshness, TimeBucket};
pub use status_message::determine_message;
pub use types::{SensorEvent, UnixSeconds};
