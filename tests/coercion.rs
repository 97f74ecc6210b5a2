use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{NaiveDate, TimeZone, Utc};
use timecast::{Absent, Coercible, SqlTimestamp, from_date, from_long, from_sql_timestamp};

const APRIL_25: i64 = 893462400000;

fn april_25() -> SystemTime {
    UNIX_EPOCH + Duration::from_millis(APRIL_25 as u64)
}

#[test]
fn absent_is_absent_everywhere() {
    assert_eq!(Absent.to_epoch_millis(), None);
    assert_eq!(Absent.to_calendar_date(), None);
    assert_eq!(Absent.to_datetime(), None);
    assert_eq!(Absent.to_iso_string(), None);
    assert_eq!(Absent.to_sql_timestamp(), None);

    let nothing: Option<i64> = None;
    assert_eq!(nothing.to_epoch_millis(), None);
    assert_eq!(nothing.to_calendar_date(), None);
    assert_eq!(nothing.to_datetime(), None);
    assert_eq!(nothing.to_iso_string(), None);
    assert_eq!(nothing.to_sql_timestamp(), None);
}

#[test]
fn present_options_behave_like_their_content() {
    assert_eq!(Some(APRIL_25).to_epoch_millis(), Some(APRIL_25));
    assert_eq!(Some("1998-04-25").to_epoch_millis(), Some(APRIL_25));
    assert_eq!(Some(Some(APRIL_25)).to_sql_timestamp(), Some(SqlTimestamp::new(APRIL_25)));
}

#[test]
fn epoch_values() {
    assert_eq!(APRIL_25.to_epoch_millis(), Some(APRIL_25));
    assert_eq!(
        APRIL_25.to_datetime(),
        Some(Utc.with_ymd_and_hms(1998, 4, 25, 0, 0, 0).unwrap())
    );
    assert_eq!(APRIL_25.to_iso_string().as_deref(), Some("1998-04-25T00:00:00.000Z"));
    assert_eq!(APRIL_25.to_sql_timestamp(), Some(SqlTimestamp::new(APRIL_25)));
    assert_eq!(APRIL_25.to_calendar_date(), Some(april_25()));
}

#[test]
fn small_integers_are_widened() {
    assert_eq!(86_400_000i32.to_epoch_millis(), Some(86_400_000i64));
    assert_eq!(86_400_000i32.to_iso_string().as_deref(), Some("1970-01-02T00:00:00.000Z"));
    assert_eq!((-1i32).to_sql_timestamp(), Some(SqlTimestamp::new(-1)));
}

#[test]
fn epochs_beyond_the_calendar_keep_their_millis() {
    assert_eq!(i64::MAX.to_epoch_millis(), Some(i64::MAX));
    assert_eq!(i64::MAX.to_sql_timestamp(), Some(SqlTimestamp::new(i64::MAX)));
    assert_eq!(i64::MAX.to_datetime(), None);
    assert_eq!(i64::MAX.to_iso_string(), None);
    assert_eq!(from_long(i64::MIN), None);
}

#[test]
fn canonical_date_time() {
    let instant = Utc.with_ymd_and_hms(1998, 4, 25, 10, 30, 15).unwrap()
        + chrono::Duration::milliseconds(123);
    assert_eq!(instant.to_datetime(), Some(instant));
    assert_eq!(instant.to_epoch_millis(), Some(893500215123));
    assert_eq!(instant.to_iso_string().as_deref(), Some("1998-04-25T10:30:15.123Z"));
    assert_eq!(instant.to_sql_timestamp(), Some(SqlTimestamp::new(893500215123)));
    assert_eq!(
        instant.to_calendar_date(),
        Some(UNIX_EPOCH + Duration::from_millis(893500215123))
    );
}

#[test]
fn calendar_values() {
    let date = april_25();
    assert_eq!(date.to_epoch_millis(), Some(APRIL_25));
    assert_eq!(date.to_datetime(), from_long(APRIL_25));
    assert_eq!(from_date(date), from_long(APRIL_25));
    assert_eq!(date.to_iso_string().as_deref(), Some("1998-04-25T00:00:00.000Z"));
    assert_eq!(date.to_sql_timestamp(), Some(SqlTimestamp::new(APRIL_25)));
}

#[test]
fn calendar_values_lose_sub_millisecond_precision() {
    let date = UNIX_EPOCH + Duration::from_micros(1500);
    assert_eq!(date.to_epoch_millis(), Some(1));
    assert_eq!(date.to_calendar_date(), Some(UNIX_EPOCH + Duration::from_millis(1)));

    // before the epoch partial milliseconds count towards the past
    let date = UNIX_EPOCH - Duration::from_micros(1500);
    assert_eq!(date.to_epoch_millis(), Some(-2));
    assert_eq!(date.to_iso_string().as_deref(), Some("1969-12-31T23:59:59.998Z"));
}

#[test]
fn wrapped_timestamps() {
    let timestamp = SqlTimestamp::new(APRIL_25);
    assert_eq!(timestamp.to_sql_timestamp(), Some(timestamp));
    assert_eq!(timestamp.to_epoch_millis(), Some(APRIL_25));
    assert_eq!(timestamp.to_datetime(), from_long(APRIL_25));
    assert_eq!(from_sql_timestamp(timestamp), from_long(APRIL_25));
    assert_eq!(timestamp.to_calendar_date(), Some(april_25()));
    assert_eq!(timestamp.to_string(), "1998-04-25T00:00:00.000Z");
}

#[test]
fn wrapped_timestamps_serialize_as_bare_millis() {
    let timestamp = SqlTimestamp::new(APRIL_25);
    let json = serde_json::to_string(&timestamp).unwrap();
    assert_eq!(json, "893462400000");
    assert_eq!(serde_json::from_str::<SqlTimestamp>(&json).unwrap(), timestamp);

    let negative: SqlTimestamp = serde_json::from_str("-1").unwrap();
    assert_eq!(negative.millis(), -1);
    assert!(serde_json::from_str::<SqlTimestamp>(r#"{"millis": 1}"#).is_err());
}

#[test]
fn text_goes_through_the_parser() {
    let text = "1998-04-25T00:00:00.000Z";
    assert_eq!(text.to_datetime(), from_long(APRIL_25));
    assert_eq!(text.to_epoch_millis(), Some(APRIL_25));
    assert_eq!(text.to_sql_timestamp(), Some(SqlTimestamp::new(APRIL_25)));
    assert_eq!(text.to_calendar_date(), Some(april_25()));
    assert_eq!(String::from(text).to_iso_string().as_deref(), Some(text));

    let garbage = String::from("not-a-date");
    assert_eq!(garbage.to_epoch_millis(), None);
    assert_eq!(garbage.to_calendar_date(), None);
    assert_eq!(garbage.to_datetime(), None);
    assert_eq!(garbage.to_iso_string(), None);
    assert_eq!(garbage.to_sql_timestamp(), None);
}

#[test]
fn naive_values_are_read_as_utc() {
    let date = NaiveDate::from_ymd_opt(1998, 4, 25).unwrap();
    assert_eq!(date.to_epoch_millis(), Some(APRIL_25));
    let wall_clock = date.and_hms_opt(10, 30, 0).unwrap();
    assert_eq!(wall_clock.to_epoch_millis(), Some(893500200000));
}

#[test]
fn iso_strings_look_the_same_whatever_the_source() {
    let expected = Some(String::from("1998-04-25T00:00:00.000Z"));
    assert_eq!(APRIL_25.to_iso_string(), expected);
    assert_eq!(SqlTimestamp::new(APRIL_25).to_iso_string(), expected);
    assert_eq!(april_25().to_iso_string(), expected);
    assert_eq!("1998-04-25".to_iso_string(), expected);
    assert_eq!("Sat, 25 Apr 1998 02:00:00 +0200".to_iso_string(), expected);
}

#[test]
fn epoch_seconds_round_towards_the_past() {
    assert_eq!(APRIL_25.to_epoch_secs(), Some(893462400));
    assert_eq!(1999i64.to_epoch_secs(), Some(1));
    assert_eq!((-1i64).to_epoch_secs(), Some(-1));
    assert_eq!(Absent.to_epoch_secs(), None);
}
