use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::models::anniversary::{Anniversary, AnniversaryDate};
use crate::utils::date::midnight_cutoff;

use super::models::{CountdownPhase, CountdownResult, RemainingTime};

/// A leap-day anniversary can skip up to eight consecutive years around a
/// skipped century leap (Feb 2096 -> Feb 2104), so nine candidate years
/// always contain a target.
const MAX_TARGET_SCAN_YEARS: i32 = 9;

/// Count how many occurrences of `date` fall within
/// `[first_observed, today]` inclusive.
///
/// An explicit per-year scan rather than a closed form, so the inclusive
/// bounds and missing leap days behave exactly as expected.
pub fn count_occurrences(
    date: AnniversaryDate,
    first_observed: NaiveDate,
    today: NaiveDate,
) -> u32 {
    if today < first_observed {
        return 0;
    }

    let mut count = 0;
    for year in first_observed.year()..=today.year() {
        if let Some(occurrence) = date.in_year(year) {
            if occurrence >= first_observed && occurrence <= today {
                count += 1;
            }
        }
    }
    count
}

/// The instant the countdown runs to: 23:59:00 on the eve of the
/// anniversary, in this year or the first following year whose target has
/// not already passed.
///
/// Targeting the eve rather than midnight is deliberate: it lets the shell
/// flip into its midnight-surprise state a minute early.
pub fn next_target<Tz: TimeZone>(date: AnniversaryDate, now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let start_year = now.year();
    for offset in 0..MAX_TARGET_SCAN_YEARS {
        if let Some(target) = eve_cutoff_in(&tz, date, start_year + offset) {
            if target >= *now {
                return target;
            }
        }
    }
    // Unreachable for any valid anniversary; stay total regardless.
    now.clone()
}

/// Whole-unit breakdown of the duration from `now` to the next target.
pub fn time_until_next<Tz: TimeZone>(date: AnniversaryDate, now: &DateTime<Tz>) -> RemainingTime {
    let target = next_target(date, now);
    let remaining = target.signed_duration_since(now.clone());
    RemainingTime {
        days: remaining.num_hours() / 24,
        hours: remaining.num_hours() % 24,
        minutes: remaining.num_minutes() % 60,
        seconds: remaining.num_seconds() % 60,
    }
}

/// Evaluate the full countdown for one reference instant.
pub fn evaluate<Tz: TimeZone>(anniversary: &Anniversary, now: &DateTime<Tz>) -> CountdownResult {
    let remaining = time_until_next(anniversary.date, now);
    CountdownResult {
        occurrences: count_occurrences(
            anniversary.date,
            anniversary.first_observed,
            now.date_naive(),
        ),
        days_remaining: remaining.days,
        hours_remaining: remaining.hours,
        minutes_remaining: remaining.minutes,
        seconds_remaining: remaining.seconds,
    }
}

/// Classify how close the next anniversary is.
pub fn phase<Tz: TimeZone>(date: AnniversaryDate, now: &DateTime<Tz>) -> CountdownPhase {
    let today = now.date_naive();
    if date.matches(today) {
        return CountdownPhase::Celebrating;
    }
    // Past the eve cutoff the target has already rolled a year ahead, so
    // the last minute before midnight is detected directly.
    if let Some(tomorrow) = today.succ_opt() {
        if date.matches(tomorrow) && now.time() >= midnight_cutoff() {
            return CountdownPhase::Celebrating;
        }
    }

    let remaining = next_target(date, now).signed_duration_since(now.clone());
    if remaining.num_hours() < 1 {
        CountdownPhase::Imminent
    } else if remaining.num_hours() < 24 {
        CountdownPhase::Approaching
    } else {
        CountdownPhase::Distant
    }
}

fn eve_cutoff_in<Tz: TimeZone>(tz: &Tz, date: AnniversaryDate, year: i32) -> Option<DateTime<Tz>> {
    let eve = date.in_year(year)?.pred_opt()?;
    let cutoff = eve.and_time(midnight_cutoff());
    // earliest() resolves DST ambiguity; a nonexistent local time skips to
    // the next candidate year.
    tz.from_local_datetime(&cutoff).earliest()
}

/// Evaluates the anniversary countdown and remembers the last result, so
/// the shell only re-renders when a displayed unit ticks over.
///
/// Single writer: the presentation layer polls `refresh` once per second.
pub struct CountdownService {
    anniversary: Anniversary,
    last_result: Option<CountdownResult>,
}

impl CountdownService {
    pub fn new(anniversary: Anniversary) -> Self {
        Self {
            anniversary,
            last_result: None,
        }
    }

    pub fn anniversary(&self) -> &Anniversary {
        &self.anniversary
    }

    pub fn last_result(&self) -> Option<CountdownResult> {
        self.last_result
    }

    /// Recompute the countdown, returning `Some` only when the displayed
    /// value changed since the previous refresh.
    pub fn refresh<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Option<CountdownResult> {
        let computed = evaluate(&self.anniversary, now);
        if self.last_result != Some(computed) {
            self.last_result = Some(computed);
            return Some(computed);
        }
        None
    }

    pub fn phase<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> CountdownPhase {
        phase(self.anniversary.date, now)
    }

    pub fn set_anniversary(&mut self, anniversary: Anniversary) {
        if self.anniversary != anniversary {
            log::info!(
                "countdown anniversary changed to {:02}-{:02} (first observed {})",
                anniversary.date.month(),
                anniversary.date.day(),
                anniversary.first_observed
            );
            self.anniversary = anniversary;
            self.last_result = None;
        }
    }
}
