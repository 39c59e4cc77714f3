use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    db::DbPool,
    db::models::api::ApiResponse,
    error::AppError,
    middleware::auth::AuthUserInfo,
    services::departments_service::DepartmentsService,
};

#[derive(Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn create_department(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Json(payload): Json<CreateDepartmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let department = DepartmentsService::create(&mut conn, &payload)?;
    let response = ApiResponse::created(department, "Department created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_departments(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let departments = DepartmentsService::list(&mut conn)?;
    let response = ApiResponse::success(departments, "Departments retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_department_by_id(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(department_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let department = DepartmentsService::get_by_id(&mut conn, department_id)?;
    let response = ApiResponse::success(department, "Department retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_department(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(department_id): Path<i32>,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let department = DepartmentsService::update(&mut conn, department_id, &payload)?;
    let response = ApiResponse::success(department, "Department updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_department(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(department_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    DepartmentsService::delete(&mut conn, department_id)?;
    let response = ApiResponse::<()>::ok("Department deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}
