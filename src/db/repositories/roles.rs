use diesel::prelude::*;

use crate::db::models::role::{NewRole, Role, RoleChangeset};

pub struct RolesRepo;

impl RolesRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_role: &NewRole,
    ) -> Result<Role, diesel::result::Error> {
        diesel::insert_into(crate::schema::roles::table)
            .values(new_role)
            .get_result(conn)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Role>, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        roles.order(name.asc()).load::<Role>(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        role_id: i32,
    ) -> Result<Option<Role>, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        roles.filter(id.eq(role_id)).first::<Role>(conn).optional()
    }

    pub fn name_exists_excluding(
        conn: &mut PgConnection,
        role_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        let mut query = roles
            .filter(name.eq(role_name))
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
        role_id: i32,
        changes: &RoleChangeset,
    ) -> Result<Role, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        diesel::update(roles.filter(id.eq(role_id)))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        role_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::roles::dsl::*;
        diesel::delete(roles.filter(id.eq(role_id))).execute(conn)
    }
}
