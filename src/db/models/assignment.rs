use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::shift_assignments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShiftAssignment {
    pub id: i32,
    pub staff_member_id: i32,
    pub shift_id: i32,
    pub date: chrono::NaiveDate,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shift_assignments)]
pub struct NewShiftAssignment {
    pub staff_member_id: i32,
    pub shift_id: i32,
    pub date: chrono::NaiveDate,
    pub is_active: bool,
}

// Assignment joined with the staff/shift display fields the schedule view wants
#[derive(Serialize)]
pub struct ShiftAssignmentDetail {
    #[serde(flatten)]
    pub assignment: ShiftAssignment,
    pub staff_id: String,
    pub staff_name: String,
    pub shift_name: String,
    pub shift_start: chrono::NaiveTime,
    pub shift_end: chrono::NaiveTime,
}
