use serde::{Deserialize, Serialize};

/// Whole-unit breakdown of the time left until the next anniversary cutoff,
/// truncated toward zero at each unit boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingTime {
    pub days: i64,
    /// 0-23
    pub hours: i64,
    /// 0-59
    pub minutes: i64,
    /// 0-59
    pub seconds: i64,
}

/// A single evaluation of the countdown: how many anniversaries have been
/// celebrated so far, and how long until the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownResult {
    pub occurrences: u32,
    pub days_remaining: i64,
    pub hours_remaining: i64,
    pub minutes_remaining: i64,
    pub seconds_remaining: i64,
}

/// How close the next anniversary is. Drives the hero styling and the
/// midnight confetti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownPhase {
    /// More than 1 day to the cutoff
    Distant,
    /// 1 day or less, but more than 1 hour
    Approaching,
    /// 1 hour or less
    Imminent,
    /// The anniversary day itself, or past the eve cutoff
    Celebrating,
}

impl Default for CountdownPhase {
    fn default() -> Self {
        Self::Distant
    }
}
