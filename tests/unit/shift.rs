use chrono::NaiveTime;
use roster_backend::services::shifts_service::{shift_duration_minutes, validate_shift_times};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn day_shift_duration() {
    assert_eq!(shift_duration_minutes(t(9, 0), t(17, 30), false), 510);
}

#[test]
fn night_shift_duration_wraps_midnight() {
    // 22:00 -> 06:00 spans midnight: 8 hours, not -16
    assert_eq!(shift_duration_minutes(t(22, 0), t(6, 0), true), 480);
}

#[test]
fn night_shift_within_one_day_measures_normally() {
    // A shift flagged night but ending before midnight needs no wraparound
    assert_eq!(shift_duration_minutes(t(18, 0), t(23, 0), true), 300);
}

#[test]
fn rejects_start_after_end_for_day_shifts() {
    assert!(validate_shift_times(t(17, 0), t(9, 0), 30, false).is_err());
    assert!(validate_shift_times(t(9, 0), t(9, 0), 0, false).is_err());
}

#[test]
fn allows_inverted_times_for_night_shifts() {
    assert!(validate_shift_times(t(22, 0), t(6, 0), 60, true).is_ok());
}

#[test]
fn break_must_be_shorter_than_shift() {
    // 22:00-06:00 night shift is 480 minutes: a 480-minute break consumes
    // the whole shift, 470 still leaves working time
    assert!(validate_shift_times(t(22, 0), t(6, 0), 480, true).is_err());
    assert!(validate_shift_times(t(22, 0), t(6, 0), 470, true).is_ok());

    assert!(validate_shift_times(t(9, 0), t(10, 0), 60, false).is_err());
    assert!(validate_shift_times(t(9, 0), t(10, 0), 59, false).is_ok());
}

#[test]
fn rejects_negative_break() {
    assert!(validate_shift_times(t(9, 0), t(17, 0), -1, false).is_err());
}
