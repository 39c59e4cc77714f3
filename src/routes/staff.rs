use axum::{
    Json,
    extract::{Path, Query, State},
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
    services::staff_service::StaffService,
};

#[derive(Deserialize)]
pub struct CreateStaffRequest {
    pub user_id: i32,
    pub staff_id: String,
    pub department_id: Option<i32>,
    pub role_id: i32,
    pub phone_number: String,
    pub address: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStaffRequest {
    pub staff_id: Option<String>,
    // Double option so "omit" and "set to null" both work
    pub department_id: Option<Option<i32>>,
    pub role_id: Option<i32>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize)]
pub struct StaffListQuery {
    pub department_id: Option<i32>,
    pub role_id: Option<i32>,
}

pub async fn create_staff_member(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Json(payload): Json<CreateStaffRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let staff = StaffService::create(&mut conn, &payload)?;
    let response = ApiResponse::created(staff, "Staff member created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_staff_members(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Query(query): Query<StaffListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let staff = StaffService::list(&mut conn, query.department_id, query.role_id)?;
    let response = ApiResponse::success(staff, "Staff members retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_staff_member_by_id(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(staff_member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let staff = StaffService::get_by_id(&mut conn, staff_member_id)?;
    let response = ApiResponse::success(staff, "Staff member retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_staff_member(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(staff_member_id): Path<i32>,
    Json(payload): Json<UpdateStaffRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let staff = StaffService::update(&mut conn, staff_member_id, &payload)?;
    let response = ApiResponse::success(staff, "Staff member updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_staff_member(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(staff_member_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    StaffService::delete(&mut conn, staff_member_id)?;
    let response = ApiResponse::<()>::ok("Staff member deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}
