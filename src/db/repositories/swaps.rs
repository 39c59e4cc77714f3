use diesel::prelude::*;

use crate::db::enums::SwapStatus;
use crate::db::models::swap::{NewShiftSwapRequest, ShiftSwapRequest};

pub struct SwapsRepo;

impl SwapsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_request: &NewShiftSwapRequest,
    ) -> Result<ShiftSwapRequest, diesel::result::Error> {
        diesel::insert_into(crate::schema::shift_swap_requests::table)
            .values(new_request)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        request_id: i32,
    ) -> Result<Option<ShiftSwapRequest>, diesel::result::Error> {
        use crate::schema::shift_swap_requests::dsl::*;
        shift_swap_requests
            .filter(id.eq(request_id))
            .first::<ShiftSwapRequest>(conn)
            .optional()
    }

    /// Filterable list; `staff_member` matches either side of the swap
    /// (the requester through their assignment, or the recipient directly),
    /// and the date range applies to the requester assignment's date.
    pub fn list_filtered(
        conn: &mut PgConnection,
        staff_member: Option<i32>,
        wanted_status: Option<SwapStatus>,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<ShiftSwapRequest>, diesel::result::Error> {
        use crate::schema::{shift_assignments, shift_swap_requests};

        let mut query = shift_swap_requests::table
            .inner_join(
                shift_assignments::table
                    .on(shift_swap_requests::requester_assignment_id.eq(shift_assignments::id)),
            )
            .select(ShiftSwapRequest::as_select())
            .into_boxed();

        if let Some(member) = staff_member {
            query = query.filter(
                shift_assignments::staff_member_id
                    .eq(member)
                    .or(shift_swap_requests::recipient_id.eq(member)),
            );
        }
        if let Some(wanted) = wanted_status {
            query = query.filter(shift_swap_requests::status.eq(wanted));
        }
        if let Some(from) = start_date {
            query = query.filter(shift_assignments::date.ge(from));
        }
        if let Some(to) = end_date {
            query = query.filter(shift_assignments::date.le(to));
        }

        query
            .order(shift_swap_requests::created_at.desc())
            .load::<ShiftSwapRequest>(conn)
    }

    pub fn mark_approved(
        conn: &mut PgConnection,
        request_id: i32,
        recipient_assignment: i32,
    ) -> Result<ShiftSwapRequest, diesel::result::Error> {
        use crate::schema::shift_swap_requests::dsl::*;
        diesel::update(shift_swap_requests.filter(id.eq(request_id)))
            .set((
                recipient_assignment_id.eq(Some(recipient_assignment)),
                status.eq(SwapStatus::Approved),
                updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }

    pub fn set_status(
        conn: &mut PgConnection,
        request_id: i32,
        new_status: SwapStatus,
    ) -> Result<ShiftSwapRequest, diesel::result::Error> {
        use crate::schema::shift_swap_requests::dsl::*;
        diesel::update(shift_swap_requests.filter(id.eq(request_id)))
            .set((status.eq(new_status), updated_at.eq(chrono::Utc::now())))
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        request_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::shift_swap_requests::dsl::*;
        diesel::delete(shift_swap_requests.filter(id.eq(request_id))).execute(conn)
    }
}
