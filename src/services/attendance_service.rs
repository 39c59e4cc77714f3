use diesel::prelude::*;

use crate::{
    db::enums::AttendanceStatus,
    db::models::attendance::{Attendance, NewAttendance},
    db::repositories::{
        assignments::AssignmentsRepo, attendance::AttendanceRepo, shifts::ShiftsRepo,
        staff::StaffRepo,
    },
    error::AppError,
};

/// Check-ins more than this many minutes after the scheduled start count as late.
pub const LATE_GRACE_MINUTES: i64 = 10;

/// Derive the attendance status from check-in timing. "leave" is sticky and
/// never overwritten; everything else resolves to present or late based on
/// the scheduled shift start on the assignment's date.
pub fn derive_status(
    current: AttendanceStatus,
    check_in: chrono::DateTime<chrono::Utc>,
    date: chrono::NaiveDate,
    shift_start: chrono::NaiveTime,
) -> AttendanceStatus {
    if current == AttendanceStatus::Leave {
        return AttendanceStatus::Leave;
    }

    let scheduled_start = date.and_time(shift_start).and_utc();
    if check_in > scheduled_start + chrono::Duration::minutes(LATE_GRACE_MINUTES) {
        AttendanceStatus::Late
    } else {
        AttendanceStatus::Present
    }
}

pub fn validate_check_times(
    check_in: Option<chrono::DateTime<chrono::Utc>>,
    check_out: Option<chrono::DateTime<chrono::Utc>>,
) -> Result<(), AppError> {
    if let (Some(in_at), Some(out_at)) = (check_in, check_out) {
        if in_at > out_at {
            return Err(AppError::validation(
                "Check-in time must be before check-out time",
            ));
        }
    }
    Ok(())
}

pub struct AttendanceService;

impl AttendanceService {
    pub fn list(
        conn: &mut PgConnection,
        staff_code: Option<&str>,
        status: Option<AttendanceStatus>,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<Attendance>, AppError> {
        let list = AttendanceRepo::list_filtered(conn, staff_code, status, start_date, end_date)?;
        Ok(list)
    }

    pub fn get_by_id(conn: &mut PgConnection, attendance_id: i32) -> Result<Attendance, AppError> {
        let attendance = AttendanceRepo::find_by_id(conn, attendance_id)?
            .ok_or_else(|| AppError::not_found("Attendance record"))?;
        Ok(attendance)
    }

    // Resolves the (staff, assignment) pair every workflow action starts
    // from, rejecting assignments that belong to someone else.
    fn resolve_pair(
        conn: &mut PgConnection,
        staff_code: &str,
        assignment_id: i32,
    ) -> Result<(i32, crate::db::models::assignment::ShiftAssignment), AppError> {
        let staff = StaffRepo::find_by_staff_id(conn, staff_code)?
            .ok_or_else(|| AppError::not_found("Staff member"))?;
        let assignment = AssignmentsRepo::find_by_id(conn, assignment_id)?
            .ok_or_else(|| AppError::not_found("Shift assignment"))?;

        if assignment.staff_member_id != staff.id {
            return Err(AppError::validation(
                "This shift is not assigned to this staff member",
            ));
        }

        Ok((staff.id, assignment))
    }

    /// Check-in keeps exactly one attendance row per (staff, assignment,
    /// assignment date): the row is created on first check-in, a second
    /// check-in is rejected, and the status is re-derived on every write.
    pub fn check_in(
        conn: &mut PgConnection,
        staff_code: &str,
        assignment_id: i32,
    ) -> Result<Attendance, AppError> {
        let (staff_member_id, assignment) = Self::resolve_pair(conn, staff_code, assignment_id)?;
        let shift = ShiftsRepo::find_by_id(conn, assignment.shift_id)?
            .ok_or_else(|| AppError::not_found("Shift"))?;

        let now = chrono::Utc::now();

        conn.transaction::<Attendance, AppError, _>(|conn| {
            let existing =
                AttendanceRepo::find_by_key(conn, staff_member_id, assignment.id, assignment.date)?;

            match existing {
                None => {
                    let status = derive_status(
                        AttendanceStatus::Absent,
                        now,
                        assignment.date,
                        shift.start_time,
                    );
                    let new_attendance = NewAttendance {
                        staff_member_id,
                        shift_assignment_id: assignment.id,
                        date: assignment.date,
                        status,
                        check_in_time: Some(now),
                        check_out_time: None,
                        notes: None,
                    };
                    Ok(AttendanceRepo::insert(conn, &new_attendance)?)
                }
                Some(attendance) if attendance.check_in_time.is_some() => Err(
                    AppError::state_transition("You have already checked in for this shift"),
                ),
                Some(attendance) => {
                    let status =
                        derive_status(attendance.status, now, assignment.date, shift.start_time);
                    Ok(AttendanceRepo::set_check_in(conn, attendance.id, now, status)?)
                }
            }
        })
    }

    pub fn check_out(
        conn: &mut PgConnection,
        staff_code: &str,
        assignment_id: i32,
    ) -> Result<Attendance, AppError> {
        let (staff_member_id, assignment) = Self::resolve_pair(conn, staff_code, assignment_id)?;

        let now = chrono::Utc::now();

        conn.transaction::<Attendance, AppError, _>(|conn| {
            let attendance =
                AttendanceRepo::find_by_key(conn, staff_member_id, assignment.id, assignment.date)?;

            let attendance = match attendance {
                Some(found) if found.check_in_time.is_some() => found,
                _ => {
                    return Err(AppError::state_transition(
                        "You need to check in before checking out",
                    ));
                }
            };

            if attendance.check_out_time.is_some() {
                return Err(AppError::state_transition(
                    "You have already checked out for this shift",
                ));
            }

            validate_check_times(attendance.check_in_time, Some(now))?;

            Ok(AttendanceRepo::set_check_out(conn, attendance.id, now)?)
        })
    }

    /// Direct updates go through the same derivation step as check-in, so a
    /// caller-supplied status other than "leave" cannot stick once a
    /// check-in time exists.
    pub fn update(
        conn: &mut PgConnection,
        attendance_id: i32,
        req: &crate::routes::attendance::UpdateAttendanceRequest,
    ) -> Result<Attendance, AppError> {
        let existing = AttendanceRepo::find_by_id(conn, attendance_id)?
            .ok_or_else(|| AppError::not_found("Attendance record"))?;

        let requested = req.status.unwrap_or(existing.status);
        let notes = req.notes.clone().or(existing.notes);

        let status = match existing.check_in_time {
            Some(check_in) if requested != AttendanceStatus::Leave => {
                let assignment = AssignmentsRepo::find_by_id(conn, existing.shift_assignment_id)?
                    .ok_or_else(|| AppError::not_found("Shift assignment"))?;
                let shift = ShiftsRepo::find_by_id(conn, assignment.shift_id)?
                    .ok_or_else(|| AppError::not_found("Shift"))?;
                derive_status(requested, check_in, existing.date, shift.start_time)
            }
            _ => requested,
        };

        let updated = AttendanceRepo::update_fields(conn, attendance_id, status, notes.as_deref())?;
        Ok(updated)
    }

    pub fn delete(conn: &mut PgConnection, attendance_id: i32) -> Result<(), AppError> {
        let _existing = AttendanceRepo::find_by_id(conn, attendance_id)?
            .ok_or_else(|| AppError::not_found("Attendance record"))?;
        AttendanceRepo::delete_by_id(conn, attendance_id)?;
        Ok(())
    }
}
