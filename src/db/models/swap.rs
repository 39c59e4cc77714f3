use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::SwapStatus;

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::shift_swap_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShiftSwapRequest {
    pub id: i32,
    pub requester_assignment_id: i32,
    pub recipient_assignment_id: Option<i32>,
    pub recipient_id: i32,
    pub status: SwapStatus,
    pub reason: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shift_swap_requests)]
pub struct NewShiftSwapRequest {
    pub requester_assignment_id: i32,
    pub recipient_id: i32,
    pub status: SwapStatus,
    pub reason: Option<String>,
}
