use chrono::{DateTime, Datelike, Duration, FixedOffset, TimeZone, Timelike, Utc, Weekday};
use storefront_core::glance::{count_recent_within, summarize};
use storefront_core::{
    build_summary_message, count_recent, next_weekly_expiration, Age, Record, RecordStore,
};

fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<FixedOffset> {
    FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .unwrap()
}

fn assert_end_of_sunday(at: &DateTime<FixedOffset>) {
    assert_eq!(at.weekday(), Weekday::Sun);
    assert_eq!((at.hour(), at.minute(), at.second()), (23, 59, 59));
}

#[test]
fn wednesday_expires_on_upcoming_sunday() {
    // 2026-10-21 is a Wednesday.
    let now = local(2026, 10, 21, 9, 30, 0);

    let expiration = next_weekly_expiration(&now);

    assert_end_of_sunday(&expiration);
    assert_eq!(expiration.date_naive(), now.date_naive() + Duration::days(4));
    assert!(expiration > now);
    assert!(expiration - now <= Duration::days(6) + Duration::hours(24));
}

#[test]
fn sunday_expires_a_full_week_later() {
    let now = local(2026, 10, 25, 23, 59, 59);

    let expiration = next_weekly_expiration(&now);

    assert_end_of_sunday(&expiration);
    assert_eq!(expiration - now, Duration::days(7));
}

#[test]
fn sunday_morning_still_skips_to_next_week() {
    let now = local(2026, 10, 25, 0, 0, 1);

    let expiration = next_weekly_expiration(&now);

    assert_eq!(expiration.date_naive(), now.date_naive() + Duration::days(7));
}

#[test]
fn every_weekday_maps_to_the_following_sunday() {
    // Monday 2026-10-19 through Sunday 2026-10-25.
    for offset in 0..7 {
        let now = local(2026, 10, 19, 12, 0, 0) + Duration::days(offset);
        let expiration = next_weekly_expiration(&now);
        assert_end_of_sunday(&expiration);
        let days_ahead = (expiration.date_naive() - now.date_naive()).num_days();
        assert!((1..=7).contains(&days_ahead), "offset {offset}: {days_ahead}");
    }
}

#[test]
fn expiration_is_computed_in_the_caller_time_zone() {
    // Saturday 22:00 UTC is already Sunday in UTC+3.
    let utc_now = Utc.with_ymd_and_hms(2026, 10, 24, 22, 0, 0).single().unwrap();
    let plus_three = utc_now.with_timezone(&FixedOffset::east_opt(3 * 3600).unwrap());

    let from_utc = next_weekly_expiration(&utc_now);
    let from_plus_three = next_weekly_expiration(&plus_three);

    assert_eq!(from_utc.date_naive().day(), 25);
    assert_eq!(from_plus_three.date_naive().day(), 1);
    assert_eq!(from_plus_three.month(), 11);
}

#[test]
fn summary_message_pluralizes() {
    assert_eq!(build_summary_message(0), "0 new apps this week");
    assert_eq!(build_summary_message(1), "1 new app this week");
    assert_eq!(build_summary_message(5), "5 new apps this week");
}

#[test]
fn count_recent_uses_zero_to_six_day_window() {
    let mut store = RecordStore::new();
    let ages = [
        Age::Days(0),
        Age::Days(6),
        Age::Days(7),
        Age::Unknown,
        Age::Days(3),
        Age::Days(100),
    ];
    for (slot, age) in (0_i64..).zip(ages) {
        store
            .write(slot, Record::new("n", "a", "d", 0, age))
            .unwrap();
    }

    assert_eq!(count_recent(&store), 3);
    assert_eq!(count_recent_within(&store, 7), 4);
}

#[test]
fn summarize_builds_subtitle_and_utc_expiration() {
    let mut store = RecordStore::new();
    store
        .write(0, Record::new("n", "a", "d", 0, Age::Days(1)))
        .unwrap();
    let now = local(2026, 10, 21, 9, 30, 0);

    let slice = summarize(&store, &now, 6);

    assert_eq!(slice.subtitle, "1 new app this week");
    assert_eq!(slice.expiration, next_weekly_expiration(&now).with_timezone(&Utc));
}
