use diesel::prelude::*;

use crate::{
    db::enums::LeaveStatus,
    db::models::leave::{LeaveRequest, NewLeaveRequest},
    db::repositories::{assignments::AssignmentsRepo, leaves::LeavesRepo, staff::StaffRepo},
    error::AppError,
    services::context::RequestContext,
};

/// Inclusive date-range overlap: a.start <= b.end AND a.end >= b.start.
pub fn ranges_overlap(
    a_start: chrono::NaiveDate,
    a_end: chrono::NaiveDate,
    b_start: chrono::NaiveDate,
    b_end: chrono::NaiveDate,
) -> bool {
    a_start <= b_end && a_end >= b_start
}

pub struct LeavesService;

impl LeavesService {
    // Runs the inclusive-overlap rule against the staff member's approved
    // requests, excluding the row being written when it already exists.
    fn check_no_approved_overlap(
        conn: &mut PgConnection,
        staff_member: i32,
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        let approved = LeavesRepo::list_approved_for_staff(conn, staff_member, exclude_id)?;
        if approved
            .iter()
            .any(|existing| ranges_overlap(existing.start_date, existing.end_date, from, to))
        {
            return Err(AppError::validation(
                "There is already an approved leave that overlaps with this period",
            ));
        }
        Ok(())
    }

    pub fn list(
        conn: &mut PgConnection,
        staff_code: Option<&str>,
        status: Option<LeaveStatus>,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        let list = LeavesRepo::list_filtered(conn, staff_code, status, start_date, end_date)?;
        Ok(list)
    }

    pub fn get_by_id(conn: &mut PgConnection, request_id: i32) -> Result<LeaveRequest, AppError> {
        let request = LeavesRepo::find_by_id(conn, request_id)?
            .ok_or_else(|| AppError::not_found("Leave request"))?;
        Ok(request)
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &crate::routes::leaves::CreateLeaveRequest,
    ) -> Result<LeaveRequest, AppError> {
        let staff = StaffRepo::find_by_id(conn, req.staff_member_id)?
            .ok_or_else(|| AppError::not_found("Staff member"))?;

        if req.start_date > req.end_date {
            return Err(AppError::validation(
                "Start date must be before or equal to end date",
            ));
        }

        // A request that overlaps an already-approved leave is rejected up
        // front rather than sitting in the queue only to fail at approval.
        Self::check_no_approved_overlap(conn, staff.id, req.start_date, req.end_date, None)?;

        let new_request = NewLeaveRequest {
            staff_member_id: staff.id,
            leave_type: req.leave_type,
            start_date: req.start_date,
            end_date: req.end_date,
            reason: req.reason.clone(),
            status: LeaveStatus::Pending,
        };
        let created = LeavesRepo::insert(conn, &new_request)?;
        Ok(created)
    }

    /// Edits are only allowed while a request is still pending; processed
    /// requests are part of the approval history.
    pub fn update(
        conn: &mut PgConnection,
        request_id: i32,
        req: &crate::routes::leaves::UpdateLeaveRequest,
    ) -> Result<LeaveRequest, AppError> {
        let existing = LeavesRepo::find_by_id(conn, request_id)?
            .ok_or_else(|| AppError::not_found("Leave request"))?;

        if existing.status != LeaveStatus::Pending {
            return Err(AppError::state_transition(
                "Only pending requests can be edited",
            ));
        }

        let leave_type = req.leave_type.unwrap_or(existing.leave_type);
        let start_date = req.start_date.unwrap_or(existing.start_date);
        let end_date = req.end_date.unwrap_or(existing.end_date);
        let reason = req.reason.clone().or(existing.reason);

        if start_date > end_date {
            return Err(AppError::validation(
                "Start date must be before or equal to end date",
            ));
        }
        Self::check_no_approved_overlap(
            conn,
            existing.staff_member_id,
            start_date,
            end_date,
            Some(existing.id),
        )?;

        let updated = LeavesRepo::update_fields(
            conn,
            request_id,
            leave_type,
            start_date,
            end_date,
            reason.as_deref(),
        )?;
        Ok(updated)
    }

    /// Approval and its cascade commit together: the status write and the
    /// bulk deactivation of in-range assignments either both happen or
    /// neither does.
    pub fn approve(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        request_id: i32,
    ) -> Result<LeaveRequest, AppError> {
        conn.transaction::<LeaveRequest, AppError, _>(|conn| {
            let request = LeavesRepo::find_by_id(conn, request_id)?
                .ok_or_else(|| AppError::not_found("Leave request"))?;

            if !request.status.can_transition_to(LeaveStatus::Approved) {
                return Err(AppError::state_transition(
                    "This request has already been processed",
                ));
            }

            // The approved set may have changed since the request was filed
            Self::check_no_approved_overlap(
                conn,
                request.staff_member_id,
                request.start_date,
                request.end_date,
                Some(request.id),
            )?;

            let approved =
                LeavesRepo::set_status(conn, request_id, LeaveStatus::Approved, Some(ctx.user_id))?;

            let deactivated = AssignmentsRepo::deactivate_in_range(
                conn,
                request.staff_member_id,
                request.start_date,
                request.end_date,
            )?;
            tracing::info!(
                leave_request_id = request_id,
                deactivated,
                "Approved leave request and deactivated overlapping assignments"
            );

            Ok(approved)
        })
    }

    pub fn reject(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        request_id: i32,
    ) -> Result<LeaveRequest, AppError> {
        let request = LeavesRepo::find_by_id(conn, request_id)?
            .ok_or_else(|| AppError::not_found("Leave request"))?;

        if !request.status.can_transition_to(LeaveStatus::Rejected) {
            return Err(AppError::state_transition(
                "This request has already been processed",
            ));
        }

        let rejected =
            LeavesRepo::set_status(conn, request_id, LeaveStatus::Rejected, Some(ctx.user_id))?;
        Ok(rejected)
    }

    pub fn cancel(conn: &mut PgConnection, request_id: i32) -> Result<LeaveRequest, AppError> {
        let request = LeavesRepo::find_by_id(conn, request_id)?
            .ok_or_else(|| AppError::not_found("Leave request"))?;

        if !request.status.can_transition_to(LeaveStatus::Cancelled) {
            return Err(AppError::state_transition(
                "This request cannot be cancelled",
            ));
        }

        let cancelled =
            LeavesRepo::set_status(conn, request_id, LeaveStatus::Cancelled, request.approved_by)?;
        Ok(cancelled)
    }

    pub fn delete(conn: &mut PgConnection, request_id: i32) -> Result<(), AppError> {
        let _existing = LeavesRepo::find_by_id(conn, request_id)?
            .ok_or_else(|| AppError::not_found("Leave request"))?;
        LeavesRepo::delete_by_id(conn, request_id)?;
        Ok(())
    }
}
