use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::AttendanceStatus;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::attendances)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Attendance {
    pub id: i32,
    pub staff_member_id: i32,
    pub shift_assignment_id: i32,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: Option<chrono::DateTime<chrono::Utc>>,
    pub check_out_time: Option<chrono::DateTime<chrono::Utc>>,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::attendances)]
pub struct NewAttendance {
    pub staff_member_id: i32,
    pub shift_assignment_id: i32,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: Option<chrono::DateTime<chrono::Utc>>,
    pub check_out_time: Option<chrono::DateTime<chrono::Utc>>,
    pub notes: Option<String>,
}
