use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::departments)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::departments)]
pub struct DepartmentChangeset {
    pub name: Option<String>,
    pub description: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
