use diesel::prelude::*;

use crate::{
    db::models::api::error_codes,
    db::models::staff::{NewStaffMember, StaffMember, StaffMemberChangeset, StaffMemberDetail},
    db::repositories::{departments::DepartmentsRepo, roles::RolesRepo, staff::StaffRepo},
    error::AppError,
    validation::staff::validate_staff_code,
};

pub struct StaffService;

impl StaffService {
    pub fn list(
        conn: &mut PgConnection,
        department_id: Option<i32>,
        role_id: Option<i32>,
    ) -> Result<Vec<StaffMemberDetail>, AppError> {
        let list = StaffRepo::list_detailed(conn, department_id, role_id)?;
        Ok(list)
    }

    pub fn get_by_id(conn: &mut PgConnection, staff_member_id: i32) -> Result<StaffMember, AppError> {
        let staff = StaffRepo::find_by_id(conn, staff_member_id)?
            .ok_or_else(|| AppError::not_found("Staff member"))?;
        Ok(staff)
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &crate::routes::staff::CreateStaffRequest,
    ) -> Result<StaffMember, AppError> {
        validate_staff_code(&req.staff_id)?;

        // The user account must exist and may carry only one staff profile
        {
            use crate::schema::users::dsl::*;
            users
                .filter(id.eq(req.user_id))
                .select(id)
                .first::<i32>(conn)
                .optional()?
                .ok_or_else(|| AppError::not_found("User"))?;
        }
        if StaffRepo::find_by_user_id(conn, req.user_id)?.is_some() {
            return Err(AppError::conflict(
                "User already has a staff profile",
                Some("user_id".to_string()),
            ));
        }

        RolesRepo::find_by_id(conn, req.role_id)?.ok_or_else(|| AppError::not_found("Role"))?;
        if let Some(dept) = req.department_id {
            DepartmentsRepo::find_by_id(conn, dept)?
                .ok_or_else(|| AppError::not_found("Department"))?;
        }

        // Write-time uniqueness pre-check, on top of the unique constraint
        if StaffRepo::staff_id_exists_excluding(conn, &req.staff_id, None)? {
            return Err(AppError::conflict_with_code(
                "Staff ID must be unique",
                Some("staff_id".to_string()),
                error_codes::STAFF_ID_EXISTS,
            ));
        }

        let new_staff = NewStaffMember {
            user_id: req.user_id,
            staff_id: req.staff_id.clone(),
            department_id: req.department_id,
            role_id: req.role_id,
            phone_number: req.phone_number.clone(),
            address: req.address.clone(),
        };
        let created = StaffRepo::insert(conn, &new_staff)?;
        Ok(created)
    }

    pub fn update(
        conn: &mut PgConnection,
        staff_member_id: i32,
        req: &crate::routes::staff::UpdateStaffRequest,
    ) -> Result<StaffMember, AppError> {
        let existing = StaffRepo::find_by_id(conn, staff_member_id)?
            .ok_or_else(|| AppError::not_found("Staff member"))?;

        if let Some(code) = &req.staff_id {
            validate_staff_code(code)?;
            if StaffRepo::staff_id_exists_excluding(conn, code, Some(existing.id))? {
                return Err(AppError::conflict_with_code(
                    "Staff ID must be unique",
                    Some("staff_id".to_string()),
                    error_codes::STAFF_ID_EXISTS,
                ));
            }
        }
        if let Some(role) = req.role_id {
            RolesRepo::find_by_id(conn, role)?.ok_or_else(|| AppError::not_found("Role"))?;
        }
        if let Some(Some(dept)) = req.department_id {
            DepartmentsRepo::find_by_id(conn, dept)?
                .ok_or_else(|| AppError::not_found("Department"))?;
        }

        let changes = StaffMemberChangeset {
            staff_id: req.staff_id.clone(),
            department_id: req.department_id,
            role_id: req.role_id,
            phone_number: req.phone_number.clone(),
            address: req.address.clone(),
            updated_at: chrono::Utc::now(),
        };
        let updated = StaffRepo::update(conn, staff_member_id, &changes)?;
        Ok(updated)
    }

    pub fn delete(conn: &mut PgConnection, staff_member_id: i32) -> Result<(), AppError> {
        let _existing = StaffRepo::find_by_id(conn, staff_member_id)?
            .ok_or_else(|| AppError::not_found("Staff member"))?;
        StaffRepo::delete_by_id(conn, staff_member_id)?;
        Ok(())
    }
}
