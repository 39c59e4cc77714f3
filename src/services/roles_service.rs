use diesel::prelude::*;

use crate::{
    db::models::api::error_codes,
    db::models::role::{NewRole, Role, RoleChangeset},
    db::repositories::roles::RolesRepo,
    error::AppError,
};

pub struct RolesService;

impl RolesService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Role>, AppError> {
        let list = RolesRepo::list(conn)?;
        Ok(list)
    }

    pub fn get_by_id(conn: &mut PgConnection, role_id: i32) -> Result<Role, AppError> {
        let role =
            RolesRepo::find_by_id(conn, role_id)?.ok_or_else(|| AppError::not_found("Role"))?;
        Ok(role)
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &crate::routes::roles::CreateRoleRequest,
    ) -> Result<Role, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Role name cannot be empty"));
        }
        if RolesRepo::name_exists_excluding(conn, &req.name, None)? {
            return Err(AppError::conflict_with_code(
                "Role name must be unique",
                Some("name".to_string()),
                error_codes::ROLE_NAME_EXISTS,
            ));
        }

        let new_role = NewRole {
            name: req.name.clone(),
            description: req.description.clone(),
        };
        let created = RolesRepo::insert(conn, &new_role)?;
        Ok(created)
    }

    pub fn update(
        conn: &mut PgConnection,
        role_id: i32,
        req: &crate::routes::roles::UpdateRoleRequest,
    ) -> Result<Role, AppError> {
        let existing =
            RolesRepo::find_by_id(conn, role_id)?.ok_or_else(|| AppError::not_found("Role"))?;

        if let Some(name) = &req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Role name cannot be empty"));
            }
            if RolesRepo::name_exists_excluding(conn, name, Some(existing.id))? {
                return Err(AppError::conflict_with_code(
                    "Role name must be unique",
                    Some("name".to_string()),
                    error_codes::ROLE_NAME_EXISTS,
                ));
            }
        }

        let changes = RoleChangeset {
            name: req.name.clone(),
            description: req.description.clone(),
            updated_at: chrono::Utc::now(),
        };
        let updated = RolesRepo::update(conn, role_id, &changes)?;
        Ok(updated)
    }

    /// Roles are required on staff members, so a role still in use cannot
    /// be deleted.
    pub fn delete(conn: &mut PgConnection, role_id: i32) -> Result<(), AppError> {
        let existing =
            RolesRepo::find_by_id(conn, role_id)?.ok_or_else(|| AppError::not_found("Role"))?;

        let in_use = {
            use crate::schema::staff_members;
            staff_members::table
                .filter(staff_members::role_id.eq(existing.id))
                .select(staff_members::id)
                .first::<i32>(conn)
                .optional()?
                .is_some()
        };
        if in_use {
            return Err(AppError::conflict(
                "Role is still assigned to staff members",
                Some("role_id".to_string()),
            ));
        }

        RolesRepo::delete_by_id(conn, existing.id)?;
        Ok(())
    }
}
