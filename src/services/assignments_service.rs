use diesel::prelude::*;

use crate::{
    db::models::api::error_codes,
    db::models::assignment::{NewShiftAssignment, ShiftAssignment, ShiftAssignmentDetail},
    db::repositories::{
        assignments::AssignmentsRepo, shifts::ShiftsRepo, staff::StaffRepo,
    },
    error::AppError,
};

pub struct AssignmentsService;

impl AssignmentsService {
    pub fn list(
        conn: &mut PgConnection,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
        staff_code: Option<&str>,
        role_id: Option<i32>,
        active: Option<bool>,
    ) -> Result<Vec<ShiftAssignment>, AppError> {
        let list = AssignmentsRepo::list_filtered(conn, start_date, end_date, staff_code, role_id, active)?;
        Ok(list)
    }

    pub fn get_by_id(
        conn: &mut PgConnection,
        assignment_id: i32,
    ) -> Result<ShiftAssignment, AppError> {
        let assignment = AssignmentsRepo::find_by_id(conn, assignment_id)?
            .ok_or_else(|| AppError::not_found("Shift assignment"))?;
        Ok(assignment)
    }

    pub fn schedule(
        conn: &mut PgConnection,
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    ) -> Result<Vec<ShiftAssignmentDetail>, AppError> {
        let details = AssignmentsRepo::list_details_in_range(conn, from, to)?;
        Ok(details)
    }

    /// Creating an active assignment runs the one-active-per-(staff, date)
    /// pre-check and the insert in one transaction; the partial unique index
    /// on (staff_member_id, date) is the backstop against races.
    pub fn create(
        conn: &mut PgConnection,
        req: &crate::routes::assignments::CreateAssignmentRequest,
    ) -> Result<ShiftAssignment, AppError> {
        let staff = StaffRepo::find_by_id(conn, req.staff_member_id)?
            .ok_or_else(|| AppError::not_found("Staff member"))?;
        let _shift = ShiftsRepo::find_by_id(conn, req.shift_id)?
            .ok_or_else(|| AppError::not_found("Shift"))?;

        let is_active = req.is_active.unwrap_or(true);

        let result = conn.transaction::<ShiftAssignment, AppError, _>(|conn| {
            if is_active && AssignmentsRepo::has_active_conflict(conn, staff.id, req.date, None)? {
                return Err(AppError::conflict_with_code(
                    "Staff member already has a shift assignment on this date",
                    Some("date".to_string()),
                    error_codes::ASSIGNMENT_CONFLICT,
                ));
            }

            let new_assignment = NewShiftAssignment {
                staff_member_id: staff.id,
                shift_id: req.shift_id,
                date: req.date,
                is_active,
            };
            Ok(AssignmentsRepo::insert(conn, &new_assignment)?)
        });

        result.map_err(Self::map_unique_violation)
    }

    /// Updates re-run the conflict check (excluding the row itself) because
    /// an update may reactivate a historical row.
    pub fn update(
        conn: &mut PgConnection,
        assignment_id: i32,
        req: &crate::routes::assignments::UpdateAssignmentRequest,
    ) -> Result<ShiftAssignment, AppError> {
        let existing = AssignmentsRepo::find_by_id(conn, assignment_id)?
            .ok_or_else(|| AppError::not_found("Shift assignment"))?;

        let shift_id = req.shift_id.unwrap_or(existing.shift_id);
        let date = req.date.unwrap_or(existing.date);
        let is_active = req.is_active.unwrap_or(existing.is_active);

        if let Some(new_shift) = req.shift_id {
            ShiftsRepo::find_by_id(conn, new_shift)?
                .ok_or_else(|| AppError::not_found("Shift"))?;
        }

        let result = conn.transaction::<ShiftAssignment, AppError, _>(|conn| {
            if is_active
                && AssignmentsRepo::has_active_conflict(
                    conn,
                    existing.staff_member_id,
                    date,
                    Some(existing.id),
                )?
            {
                return Err(AppError::conflict_with_code(
                    "Staff member already has a shift assignment on this date",
                    Some("date".to_string()),
                    error_codes::ASSIGNMENT_CONFLICT,
                ));
            }

            Ok(AssignmentsRepo::update_fields(
                conn,
                assignment_id,
                shift_id,
                date,
                is_active,
            )?)
        });

        result.map_err(Self::map_unique_violation)
    }

    pub fn delete(conn: &mut PgConnection, assignment_id: i32) -> Result<(), AppError> {
        let _existing = AssignmentsRepo::find_by_id(conn, assignment_id)?
            .ok_or_else(|| AppError::not_found("Shift assignment"))?;
        AssignmentsRepo::delete_by_id(conn, assignment_id)?;
        Ok(())
    }

    // The unique index fires when two writers pass the pre-check at once;
    // surface it as the same conflict the pre-check reports.
    fn map_unique_violation(err: AppError) -> AppError {
        match err {
            AppError::Database(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            )) => AppError::conflict_with_code(
                "Staff member already has a shift assignment on this date",
                Some("date".to_string()),
                error_codes::ASSIGNMENT_CONFLICT,
            ),
            other => other,
        }
    }
}
