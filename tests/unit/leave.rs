use chrono::NaiveDate;
use roster_backend::db::enums::LeaveStatus;
use roster_backend::services::leaves_service::ranges_overlap;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn contained_range_overlaps() {
    // Approved Jan 1-10; Jan 5-7 sits inside it
    assert!(ranges_overlap(
        d(2024, 1, 1),
        d(2024, 1, 10),
        d(2024, 1, 5),
        d(2024, 1, 7)
    ));
}

#[test]
fn adjacent_range_does_not_overlap() {
    // Jan 11-15 starts the day after Jan 1-10 ends
    assert!(!ranges_overlap(
        d(2024, 1, 1),
        d(2024, 1, 10),
        d(2024, 1, 11),
        d(2024, 1, 15)
    ));
}

#[test]
fn shared_boundary_day_overlaps() {
    // Inclusive ranges: sharing a single day counts
    assert!(ranges_overlap(
        d(2024, 1, 1),
        d(2024, 1, 10),
        d(2024, 1, 10),
        d(2024, 1, 12)
    ));
}

#[test]
fn partial_overlap_counts() {
    assert!(ranges_overlap(
        d(2024, 1, 5),
        d(2024, 1, 15),
        d(2024, 1, 1),
        d(2024, 1, 6)
    ));
}

#[test]
fn pending_can_be_resolved_any_way() {
    assert!(LeaveStatus::Pending.can_transition_to(LeaveStatus::Approved));
    assert!(LeaveStatus::Pending.can_transition_to(LeaveStatus::Rejected));
    assert!(LeaveStatus::Pending.can_transition_to(LeaveStatus::Cancelled));
}

#[test]
fn approved_can_only_be_cancelled() {
    assert!(LeaveStatus::Approved.can_transition_to(LeaveStatus::Cancelled));
    assert!(!LeaveStatus::Approved.can_transition_to(LeaveStatus::Rejected));
    assert!(!LeaveStatus::Approved.can_transition_to(LeaveStatus::Pending));
    assert!(!LeaveStatus::Approved.can_transition_to(LeaveStatus::Approved));
}

#[test]
fn resolved_states_are_final() {
    for terminal in [LeaveStatus::Rejected, LeaveStatus::Cancelled] {
        for target in [
            LeaveStatus::Pending,
            LeaveStatus::Approved,
            LeaveStatus::Rejected,
            LeaveStatus::Cancelled,
        ] {
            assert!(!terminal.can_transition_to(target));
        }
    }
}
