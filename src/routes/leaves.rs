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
    db::enums::{LeaveStatus, LeaveType},
    db::models::api::ApiResponse,
    error::AppError,
    middleware::auth::AuthUserInfo,
    services::context::RequestContext,
    services::leaves_service::LeavesService,
};

#[derive(Deserialize)]
pub struct CreateLeaveRequest {
    pub staff_member_id: i32,
    pub leave_type: LeaveType,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateLeaveRequest {
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct LeaveListQuery {
    pub staff_id: Option<String>,
    pub status: Option<LeaveStatus>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

pub async fn create_leave_request(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Json(payload): Json<CreateLeaveRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let request = LeavesService::create(&mut conn, &payload)?;
    let response = ApiResponse::created(request, "Leave request created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_leave_requests(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Query(query): Query<LeaveListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let requests = LeavesService::list(
        &mut conn,
        query.staff_id.as_deref(),
        query.status,
        query.start_date,
        query.end_date,
    )?;
    let response = ApiResponse::success(requests, "Leave requests retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_leave_request_by_id(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let request = LeavesService::get_by_id(&mut conn, request_id)?;
    let response = ApiResponse::success(request, "Leave request retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_leave_request(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(request_id): Path<i32>,
    Json(payload): Json<UpdateLeaveRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let request = LeavesService::update(&mut conn, request_id, &payload)?;
    let response = ApiResponse::success(request, "Leave request updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn approve_leave_request(
    State(pool): State<Arc<DbPool>>,
    auth_info: AuthUserInfo,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let ctx = RequestContext {
        user_id: auth_info.user.id,
    };
    let request = LeavesService::approve(&mut conn, &ctx, request_id)?;
    let response = ApiResponse::success(request, "Leave request approved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn reject_leave_request(
    State(pool): State<Arc<DbPool>>,
    auth_info: AuthUserInfo,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let ctx = RequestContext {
        user_id: auth_info.user.id,
    };
    let request = LeavesService::reject(&mut conn, &ctx, request_id)?;
    let response = ApiResponse::success(request, "Leave request rejected successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn cancel_leave_request(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let request = LeavesService::cancel(&mut conn, request_id)?;
    let response = ApiResponse::success(request, "Leave request cancelled successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_leave_request(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    LeavesService::delete(&mut conn, request_id)?;
    let response = ApiResponse::<()>::ok("Leave request deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}
