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
    db::enums::AttendanceStatus,
    db::models::api::ApiResponse,
    error::AppError,
    middleware::auth::AuthUserInfo,
    services::attendance_service::AttendanceService,
};

#[derive(Deserialize)]
pub struct CheckInRequest {
    pub staff_id: String,
    pub shift_assignment_id: i32,
}

#[derive(Deserialize)]
pub struct UpdateAttendanceRequest {
    pub status: Option<AttendanceStatus>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct AttendanceListQuery {
    pub staff_id: Option<String>,
    pub status: Option<AttendanceStatus>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

pub async fn get_attendance_records(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Query(query): Query<AttendanceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let records = AttendanceService::list(
        &mut conn,
        query.staff_id.as_deref(),
        query.status,
        query.start_date,
        query.end_date,
    )?;
    let response = ApiResponse::success(records, "Attendance records retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_attendance_by_id(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(attendance_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let record = AttendanceService::get_by_id(&mut conn, attendance_id)?;
    let response = ApiResponse::success(record, "Attendance record retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_attendance(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(attendance_id): Path<i32>,
    Json(payload): Json<UpdateAttendanceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let record = AttendanceService::update(&mut conn, attendance_id, &payload)?;
    let response = ApiResponse::success(record, "Attendance record updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn check_in(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Json(payload): Json<CheckInRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let record =
        AttendanceService::check_in(&mut conn, &payload.staff_id, payload.shift_assignment_id)?;
    let response = ApiResponse::success(record, "Checked in successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn check_out(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Json(payload): Json<CheckInRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let record =
        AttendanceService::check_out(&mut conn, &payload.staff_id, payload.shift_assignment_id)?;
    let response = ApiResponse::success(record, "Checked out successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_attendance(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(attendance_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    AttendanceService::delete(&mut conn, attendance_id)?;
    let response = ApiResponse::<()>::ok("Attendance record deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}
