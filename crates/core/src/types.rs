use serde::Deserialize;

use crate::error::CoreError;

/// Seconds since the Unix epoch, UTC.
pub type UnixSeconds = i64;

/// A single reading from the canister sensor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SensorEvent {
    /// When the current pot was brewed.
    pub timestamp: UnixSeconds,
    /// Fill ratio of the canister, `0.0` (empty) to `1.0` (full).
    pub measure: f64,
}

impl SensorEvent {
    /// Parse an event from its JSON trigger body.
    ///
    /// The fill ratio is not range-checked; JSON itself rules out NaN and
    /// infinities.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Fill level expressed as a percentage (`measure * 100`).
    pub fn fill_percent(&self) -> f64 {
        self.measure * 100.0
    }
}
