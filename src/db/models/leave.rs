use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::{LeaveStatus, LeaveType};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::leave_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LeaveRequest {
    pub id: i32,
    pub staff_member_id: i32,
    pub leave_type: LeaveType,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub approved_by: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leave_requests)]
pub struct NewLeaveRequest {
    pub staff_member_id: i32,
    pub leave_type: LeaveType,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub reason: Option<String>,
    pub status: LeaveStatus,
}
