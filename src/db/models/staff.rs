use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::staff_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StaffMember {
    pub id: i32,
    pub user_id: i32,
    pub staff_id: String,
    pub department_id: Option<i32>,
    pub role_id: i32,
    pub phone_number: String,
    pub address: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::staff_members)]
pub struct NewStaffMember {
    pub user_id: i32,
    pub staff_id: String,
    pub department_id: Option<i32>,
    pub role_id: i32,
    pub phone_number: String,
    pub address: Option<String>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::staff_members)]
pub struct StaffMemberChangeset {
    pub staff_id: Option<String>,
    pub department_id: Option<Option<i32>>,
    pub role_id: Option<i32>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// Staff row joined with the display fields list endpoints want
#[derive(Serialize)]
pub struct StaffMemberDetail {
    #[serde(flatten)]
    pub staff: StaffMember,
    pub name: String,
    pub email: String,
    pub role_name: String,
    pub department_name: Option<String>,
}
