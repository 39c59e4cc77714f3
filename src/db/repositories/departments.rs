use diesel::prelude::*;

use crate::db::models::department::{Department, DepartmentChangeset, NewDepartment};

pub struct DepartmentsRepo;

impl DepartmentsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_department: &NewDepartment,
    ) -> Result<Department, diesel::result::Error> {
        diesel::insert_into(crate::schema::departments::table)
            .values(new_department)
            .get_result(conn)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Department>, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        departments.order(name.asc()).load::<Department>(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        department_id: i32,
    ) -> Result<Option<Department>, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        departments
            .filter(id.eq(department_id))
            .first::<Department>(conn)
            .optional()
    }

    pub fn name_exists_excluding(
        conn: &mut PgConnection,
        department_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        let mut query = departments
            .filter(name.eq(department_name))
            .select(id)
            .into_boxed();
        if let Some(excluded) = exclude_id {
            query = query.filter(id.ne(excluded));
        }
        query
            .first::<i32>(conn)
            .optional()
            .map(|found| found.is_some())
    }

    pub fn update(
        conn: &mut PgConnection,
        department_id: i32,
        changes: &DepartmentChangeset,
    ) -> Result<Department, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        diesel::update(departments.filter(id.eq(department_id)))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        department_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::departments::dsl::*;
        diesel::delete(departments.filter(id.eq(department_id))).execute(conn)
    }
}
