//! Passive weekly summary ("glance") shown outside the main UI.
//!
//! # Responsibility
//! - Count listings released this week.
//! - Compute the slice expiration at the end of the local week.
//! - Format the summary subtitle.
//!
//! # Invariants
//! - The expiration is always strictly after `now`, on a Sunday at 23:59:59
//!   local time, and a full week ahead when `now` is itself a Sunday.
//! - Unwritten store slots never count as recent.

use crate::config::DEFAULT_RECENT_WINDOW_DAYS;
use crate::store::record_store::RecordStore;
use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveTime, Offset, TimeZone, Utc};

const END_OF_WEEK_TIME: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => panic!("23:59:59 is a valid time of day"),
};

/// One summary slice published to the passive surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlanceSlice {
    pub subtitle: String,
    pub expiration: DateTime<Utc>,
}

/// Passive summary surface.
pub trait GlanceSink {
    /// Maximum number of slices the surface accepts in one reload.
    fn slice_limit(&self) -> usize {
        1
    }
    /// Removes every previously published slice.
    fn clear_slices(&mut self);
    /// Replaces prior slices with `slice`.
    fn replace_slices(&mut self, slice: GlanceSlice);
}

/// Counts records released within the default weekly window (`0..=6` days).
pub fn count_recent(store: &RecordStore) -> usize {
    count_recent_within(store, DEFAULT_RECENT_WINDOW_DAYS)
}

pub fn count_recent_within(store: &RecordStore, window_days: u32) -> usize {
    store
        .iter()
        .filter(|(_, record)| record.age.is_within(window_days))
        .count()
}

/// Next Sunday 23:59:59 in `now`'s time zone, never today.
pub fn next_weekly_expiration<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let weekday = now.weekday().num_days_from_sunday();
    let days_until_sunday = match (7 - weekday) % 7 {
        0 => 7,
        days => days,
    };
    let date = now.date_naive() + Duration::days(i64::from(days_until_sunday));
    let local = date.and_time(END_OF_WEEK_TIME);

    let tz = now.timezone();
    match tz.from_local_datetime(&local) {
        LocalResult::Single(at) => at,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Local time skipped by a DST jump: keep the current offset.
            let offset = now.offset().fix().local_minus_utc();
            tz.from_utc_datetime(&(local - Duration::seconds(i64::from(offset))))
        }
    }
}

/// Subtitle text: "1 new app this week" or "<n> new apps this week".
pub fn build_summary_message(count: usize) -> String {
    if count == 1 {
        "1 new app this week".to_string()
    } else {
        format!("{count} new apps this week")
    }
}

/// Builds the slice published at shutdown.
pub fn summarize<Tz: TimeZone>(
    store: &RecordStore,
    now: &DateTime<Tz>,
    window_days: u32,
) -> GlanceSlice {
    GlanceSlice {
        subtitle: build_summary_message(count_recent_within(store, window_days)),
        expiration: next_weekly_expiration(now).with_timezone(&Utc),
    }
}
