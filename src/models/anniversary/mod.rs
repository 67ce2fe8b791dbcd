// Anniversary model
// A fixed month/day recurrence plus the date counting begins

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnniversaryError {
    #[error("month {0} is out of range (expected 1-12)")]
    MonthOutOfRange(u32),
    #[error("day {day} is not valid for month {month}")]
    DayOutOfRange { month: u32, day: u32 },
}

/// A yearly recurrence point: a fixed (month, day) pair.
///
/// Feb 29 is a valid anniversary; it simply has no occurrence in common
/// years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnniversaryDate {
    month: u32,
    day: u32,
}

impl AnniversaryDate {
    pub fn new(month: u32, day: u32) -> Result<Self, AnniversaryError> {
        if !(1..=12).contains(&month) {
            return Err(AnniversaryError::MonthOutOfRange(month));
        }
        // 2020 is a leap year, so every representable month/day pair
        // (including Feb 29) exists in it.
        if NaiveDate::from_ymd_opt(2020, month, day).is_none() {
            return Err(AnniversaryError::DayOutOfRange { month, day });
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The concrete occurrence of this anniversary in `year`, if the date
    /// exists in that year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// Whether `date` falls on this anniversary.
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

/// An anniversary together with the initial occurrence date where counting
/// begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anniversary {
    pub date: AnniversaryDate,
    pub first_observed: NaiveDate,
}

impl Anniversary {
    pub fn new(date: AnniversaryDate, first_observed: NaiveDate) -> Self {
        Self {
            date,
            first_observed,
        }
    }
}

impl Default for Anniversary {
    fn default() -> Self {
        // The original tribute: October 4th, first celebrated in 2021.
        Self {
            date: AnniversaryDate { month: 10, day: 4 },
            first_observed: NaiveDate::from_ymd_opt(2021, 10, 4)
                .unwrap_or(NaiveDate::MIN),
        }
    }
}
