// Date utility functions

use chrono::{DateTime, NaiveTime, TimeZone};

/// The evening cutoff the countdown runs to: one minute before midnight.
pub fn midnight_cutoff() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap()
}

pub fn is_same_day<Tz: TimeZone>(date1: &DateTime<Tz>, date2: &DateTime<Tz>) -> bool {
    date1.date_naive() == date2.date_naive()
}
