use diesel::prelude::*;

use crate::db::models::staff::{NewStaffMember, StaffMember, StaffMemberChangeset, StaffMemberDetail};

pub struct StaffRepo;

impl StaffRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_staff: &NewStaffMember,
    ) -> Result<StaffMember, diesel::result::Error> {
        diesel::insert_into(crate::schema::staff_members::table)
            .values(new_staff)
            .get_result(conn)
    }

    pub fn list_detailed(
        conn: &mut PgConnection,
        department_id: Option<i32>,
        role_id: Option<i32>,
    ) -> Result<Vec<StaffMemberDetail>, diesel::result::Error> {
        use crate::schema::{departments, roles, staff_members, users};

        let mut query = staff_members::table
            .inner_join(users::table)
            .inner_join(roles::table)
            .left_join(departments::table)
            .select((
                StaffMember::as_select(),
                users::name,
                users::email,
                roles::name,
                departments::name.nullable(),
            ))
            .into_boxed();

        if let Some(dept) = department_id {
            query = query.filter(staff_members::department_id.eq(dept));
        }
        if let Some(role) = role_id {
            query = query.filter(staff_members::role_id.eq(role));
        }

        let rows = query
            .order(users::name.asc())
            .load::<(StaffMember, String, String, String, Option<String>)>(conn)?;

        Ok(rows
            .into_iter()
            .map(
                |(staff, name, email, role_name, department_name)| StaffMemberDetail {
                    staff,
                    name,
                    email,
                    role_name,
                    department_name,
                },
            )
            .collect())
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        staff_member_id: i32,
    ) -> Result<Option<StaffMember>, diesel::result::Error> {
        use crate::schema::staff_members::dsl::*;
        staff_members
            .filter(id.eq(staff_member_id))
            .first::<StaffMember>(conn)
            .optional()
    }

    pub fn find_by_staff_id(
        conn: &mut PgConnection,
        staff_code: &str,
    ) -> Result<Option<StaffMember>, diesel::result::Error> {
        use crate::schema::staff_members::dsl::*;
        staff_members
            .filter(staff_id.eq(staff_code))
            .first::<StaffMember>(conn)
            .optional()
    }

    pub fn find_by_user_id(
        conn: &mut PgConnection,
        user: i32,
    ) -> Result<Option<StaffMember>, diesel::result::Error> {
        use crate::schema::staff_members::dsl::*;
        staff_members
            .filter(user_id.eq(user))
            .first::<StaffMember>(conn)
            .optional()
    }

    pub fn staff_id_exists_excluding(
        conn: &mut PgConnection,
        staff_code: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::staff_members::dsl::*;
        let mut query = staff_members
            .filter(staff_id.eq(staff_code))
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
        staff_member_id: i32,
        changes: &StaffMemberChangeset,
    ) -> Result<StaffMember, diesel::result::Error> {
        use crate::schema::staff_members::dsl::*;
        diesel::update(staff_members.filter(id.eq(staff_member_id)))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        staff_member_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::staff_members::dsl::*;
        diesel::delete(staff_members.filter(id.eq(staff_member_id))).execute(conn)
    }

    // Department deletion nulls out staff references instead of cascading
    pub fn clear_department(
        conn: &mut PgConnection,
        department: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::staff_members::dsl::*;
        diesel::update(staff_members.filter(department_id.eq(department)))
            .set((
                department_id.eq(None::<i32>),
                updated_at.eq(chrono::Utc::now()),
            ))
            .execute(conn)
    }
}
