use diesel::prelude::*;

use crate::db::enums::LeaveStatus;
use crate::db::models::leave::{LeaveRequest, NewLeaveRequest};

pub struct LeavesRepo;

impl LeavesRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_request: &NewLeaveRequest,
    ) -> Result<LeaveRequest, diesel::result::Error> {
        diesel::insert_into(crate::schema::leave_requests::table)
            .values(new_request)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        request_id: i32,
    ) -> Result<Option<LeaveRequest>, diesel::result::Error> {
        use crate::schema::leave_requests::dsl::*;
        leave_requests
            .filter(id.eq(request_id))
            .first::<LeaveRequest>(conn)
            .optional()
    }

    pub fn list_filtered(
        conn: &mut PgConnection,
        staff_code: Option<&str>,
        leave_status: Option<LeaveStatus>,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<LeaveRequest>, diesel::result::Error> {
        use crate::schema::{leave_requests, staff_members};

        let mut query = leave_requests::table
            .inner_join(staff_members::table)
            .select(LeaveRequest::as_select())
            .into_boxed();

        if let Some(staff) = staff_code {
            query = query.filter(staff_members::staff_id.eq(staff.to_string()));
        }
        if let Some(wanted) = leave_status {
            query = query.filter(leave_requests::status.eq(wanted));
        }
        // A range filter keeps any request that touches the window
        if let Some(from) = start_date {
            query = query.filter(leave_requests::end_date.ge(from));
        }
        if let Some(to) = end_date {
            query = query.filter(leave_requests::start_date.le(to));
        }

        query
            .order(leave_requests::start_date.desc())
            .load::<LeaveRequest>(conn)
    }

    /// The staff member's approved requests, minus the excluded row. The
    /// overlap rule itself runs in the service layer.
    pub fn list_approved_for_staff(
        conn: &mut PgConnection,
        staff_member: i32,
        exclude_id: Option<i32>,
    ) -> Result<Vec<LeaveRequest>, diesel::result::Error> {
        use crate::schema::leave_requests::dsl::*;
        let mut query = leave_requests
            .filter(staff_member_id.eq(staff_member))
            .filter(status.eq(LeaveStatus::Approved))
            .into_boxed();
        if let Some(excluded) = exclude_id {
            query = query.filter(id.ne(excluded));
        }
        query.load::<LeaveRequest>(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        request_id: i32,
        leave_kind: crate::db::enums::LeaveType,
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
        reason_text: Option<&str>,
    ) -> Result<LeaveRequest, diesel::result::Error> {
        use crate::schema::leave_requests::dsl::*;
        diesel::update(leave_requests.filter(id.eq(request_id)))
            .set((
                leave_type.eq(leave_kind),
                start_date.eq(from),
                end_date.eq(to),
                reason.eq(reason_text),
                updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }

    pub fn set_status(
        conn: &mut PgConnection,
        request_id: i32,
        new_status: LeaveStatus,
        approver: Option<i32>,
    ) -> Result<LeaveRequest, diesel::result::Error> {
        use crate::schema::leave_requests::dsl::*;
        diesel::update(leave_requests.filter(id.eq(request_id)))
            .set((
                status.eq(new_status),
                approved_by.eq(approver),
                updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        request_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::leave_requests::dsl::*;
        diesel::delete(leave_requests.filter(id.eq(request_id))).execute(conn)
    }
}
