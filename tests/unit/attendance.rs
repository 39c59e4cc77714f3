use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use roster_backend::db::enums::AttendanceStatus;
use roster_backend::services::attendance_service::{derive_status, validate_check_times};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn shift_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap()
}

fn check_in(h: u32, m: u32, s: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, h, m, s).unwrap()
}

#[test]
fn on_time_check_in_is_present() {
    let status = derive_status(AttendanceStatus::Absent, check_in(8, 9, 0), date(), shift_start());
    assert_eq!(status, AttendanceStatus::Present);
}

#[test]
fn grace_boundary_is_still_present() {
    // Exactly ten minutes after the scheduled start is not late
    let status = derive_status(AttendanceStatus::Absent, check_in(8, 10, 0), date(), shift_start());
    assert_eq!(status, AttendanceStatus::Present);
}

#[test]
fn one_second_past_grace_is_late() {
    let status = derive_status(AttendanceStatus::Absent, check_in(8, 10, 1), date(), shift_start());
    assert_eq!(status, AttendanceStatus::Late);
}

#[test]
fn eleven_minutes_is_late() {
    let status = derive_status(AttendanceStatus::Absent, check_in(8, 11, 0), date(), shift_start());
    assert_eq!(status, AttendanceStatus::Late);
}

#[test]
fn early_check_in_is_present() {
    let status = derive_status(AttendanceStatus::Absent, check_in(7, 30, 0), date(), shift_start());
    assert_eq!(status, AttendanceStatus::Present);
}

#[test]
fn leave_status_is_sticky() {
    // A staff member marked on leave stays on leave no matter the timing
    let status = derive_status(AttendanceStatus::Leave, check_in(8, 30, 0), date(), shift_start());
    assert_eq!(status, AttendanceStatus::Leave);
}

#[test]
fn derivation_overrides_caller_supplied_status() {
    let status = derive_status(AttendanceStatus::HalfDay, check_in(8, 5, 0), date(), shift_start());
    assert_eq!(status, AttendanceStatus::Present);
}

#[test]
fn check_out_must_not_precede_check_in() {
    let in_at = check_in(8, 0, 0);
    let out_at = check_in(7, 0, 0);
    assert!(validate_check_times(Some(in_at), Some(out_at)).is_err());
    assert!(validate_check_times(Some(in_at), Some(check_in(16, 0, 0))).is_ok());
    assert!(validate_check_times(Some(in_at), None).is_ok());
    assert!(validate_check_times(None, None).is_ok());
}
