use diesel::prelude::*;

use crate::{
    db::models::api::error_codes,
    db::models::department::{Department, DepartmentChangeset, NewDepartment},
    db::repositories::{departments::DepartmentsRepo, staff::StaffRepo},
    error::AppError,
};

pub struct DepartmentsService;

impl DepartmentsService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Department>, AppError> {
        let list = DepartmentsRepo::list(conn)?;
        Ok(list)
    }

    pub fn get_by_id(conn: &mut PgConnection, department_id: i32) -> Result<Department, AppError> {
        let department = DepartmentsRepo::find_by_id(conn, department_id)?
            .ok_or_else(|| AppError::not_found("Department"))?;
        Ok(department)
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &crate::routes::departments::CreateDepartmentRequest,
    ) -> Result<Department, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Department name cannot be empty"));
        }
        if DepartmentsRepo::name_exists_excluding(conn, &req.name, None)? {
            return Err(AppError::conflict_with_code(
                "Department name must be unique",
                Some("name".to_string()),
                error_codes::DEPARTMENT_NAME_EXISTS,
            ));
        }

        let new_department = NewDepartment {
            name: req.name.clone(),
            description: req.description.clone(),
        };
        let created = DepartmentsRepo::insert(conn, &new_department)?;
        Ok(created)
    }

    pub fn update(
        conn: &mut PgConnection,
        department_id: i32,
        req: &crate::routes::departments::UpdateDepartmentRequest,
    ) -> Result<Department, AppError> {
        let existing = DepartmentsRepo::find_by_id(conn, department_id)?
            .ok_or_else(|| AppError::not_found("Department"))?;

        if let Some(name) = &req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Department name cannot be empty"));
            }
            if DepartmentsRepo::name_exists_excluding(conn, name, Some(existing.id))? {
                return Err(AppError::conflict_with_code(
                    "Department name must be unique",
                    Some("name".to_string()),
                    error_codes::DEPARTMENT_NAME_EXISTS,
                ));
            }
        }

        let changes = DepartmentChangeset {
            name: req.name.clone(),
            description: req.description.clone(),
            updated_at: chrono::Utc::now(),
        };
        let updated = DepartmentsRepo::update(conn, department_id, &changes)?;
        Ok(updated)
    }

    /// Deleting a department detaches its staff members first; both writes
    /// commit together.
    pub fn delete(conn: &mut PgConnection, department_id: i32) -> Result<(), AppError> {
        let _existing = DepartmentsRepo::find_by_id(conn, department_id)?
            .ok_or_else(|| AppError::not_found("Department"))?;

        conn.transaction::<(), AppError, _>(|conn| {
            StaffRepo::clear_department(conn, department_id)?;
            DepartmentsRepo::delete_by_id(conn, department_id)?;
            Ok(())
        })
    }
}
