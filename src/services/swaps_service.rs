use diesel::prelude::*;

use crate::{
    db::enums::SwapStatus,
    db::models::swap::{NewShiftSwapRequest, ShiftSwapRequest},
    db::repositories::{assignments::AssignmentsRepo, staff::StaffRepo, swaps::SwapsRepo},
    error::AppError,
};

pub struct SwapsService;

impl SwapsService {
    pub fn list(
        conn: &mut PgConnection,
        staff_code: Option<&str>,
        status: Option<SwapStatus>,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<ShiftSwapRequest>, AppError> {
        // An unknown staff code matches no requests rather than erroring,
        // mirroring the other list filters.
        let staff_member = match staff_code {
            Some(code) => match StaffRepo::find_by_staff_id(conn, code)? {
                Some(staff) => Some(staff.id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let list = SwapsRepo::list_filtered(conn, staff_member, status, start_date, end_date)?;
        Ok(list)
    }

    pub fn get_by_id(
        conn: &mut PgConnection,
        request_id: i32,
    ) -> Result<ShiftSwapRequest, AppError> {
        let request = SwapsRepo::find_by_id(conn, request_id)?
            .ok_or_else(|| AppError::not_found("Shift swap request"))?;
        Ok(request)
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &crate::routes::swaps::CreateSwapRequest,
    ) -> Result<ShiftSwapRequest, AppError> {
        let assignment = AssignmentsRepo::find_by_id(conn, req.requester_assignment_id)?
            .ok_or_else(|| AppError::not_found("Shift assignment"))?;
        let recipient = StaffRepo::find_by_id(conn, req.recipient_id)?
            .ok_or_else(|| AppError::not_found("Recipient staff member"))?;

        if assignment.staff_member_id == recipient.id {
            return Err(AppError::validation(
                "Requester and recipient cannot be the same staff member",
            ));
        }
        if !assignment.is_active {
            return Err(AppError::validation(
                "Requester must have an active shift assignment",
            ));
        }

        let new_request = NewShiftSwapRequest {
            requester_assignment_id: assignment.id,
            recipient_id: recipient.id,
            status: SwapStatus::Pending,
            reason: req.reason.clone(),
        };
        let created = SwapsRepo::insert(conn, &new_request)?;
        Ok(created)
    }

    /// The swap is one atomic unit: both assignment rows trade their shift
    /// references and the request is marked approved, or nothing changes.
    pub fn approve(
        conn: &mut PgConnection,
        request_id: i32,
    ) -> Result<ShiftSwapRequest, AppError> {
        conn.transaction::<ShiftSwapRequest, AppError, _>(|conn| {
            let request = SwapsRepo::find_by_id(conn, request_id)?
                .ok_or_else(|| AppError::not_found("Shift swap request"))?;

            if !request.status.can_transition_to(SwapStatus::Approved) {
                return Err(AppError::state_transition(
                    "This request has already been processed",
                ));
            }

            let requester_assignment =
                AssignmentsRepo::find_by_id(conn, request.requester_assignment_id)?
                    .ok_or_else(|| AppError::not_found("Shift assignment"))?;

            // The assignment may have been deactivated (e.g. by a leave
            // approval) since the request was filed; a swap must not
            // resurrect retired schedule state.
            if !requester_assignment.is_active {
                return Err(AppError::state_transition(
                    "The requester's shift assignment is no longer active",
                ));
            }

            // At most one active assignment can exist per staff member and
            // date, so this lookup is unambiguous.
            let recipient_assignment = AssignmentsRepo::find_active_for_staff_on_date(
                conn,
                request.recipient_id,
                requester_assignment.date,
            )?
            .ok_or_else(|| {
                AppError::validation("Recipient does not have a shift assignment on this date")
            })?;

            let requester_shift = requester_assignment.shift_id;
            let recipient_shift = recipient_assignment.shift_id;

            AssignmentsRepo::set_shift(conn, requester_assignment.id, recipient_shift)?;
            AssignmentsRepo::set_shift(conn, recipient_assignment.id, requester_shift)?;

            let approved = SwapsRepo::mark_approved(conn, request_id, recipient_assignment.id)?;
            tracing::info!(
                swap_request_id = request_id,
                requester_assignment_id = requester_assignment.id,
                recipient_assignment_id = recipient_assignment.id,
                "Approved shift swap"
            );

            Ok(approved)
        })
    }

    pub fn reject(
        conn: &mut PgConnection,
        request_id: i32,
    ) -> Result<ShiftSwapRequest, AppError> {
        let request = SwapsRepo::find_by_id(conn, request_id)?
            .ok_or_else(|| AppError::not_found("Shift swap request"))?;

        if !request.status.can_transition_to(SwapStatus::Rejected) {
            return Err(AppError::state_transition(
                "This request has already been processed",
            ));
        }

        let rejected = SwapsRepo::set_status(conn, request_id, SwapStatus::Rejected)?;
        Ok(rejected)
    }

    pub fn delete(conn: &mut PgConnection, request_id: i32) -> Result<(), AppError> {
        let _existing = SwapsRepo::find_by_id(conn, request_id)?
            .ok_or_else(|| AppError::not_found("Shift swap request"))?;
        SwapsRepo::delete_by_id(conn, request_id)?;
        Ok(())
    }
}
