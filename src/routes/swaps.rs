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
    db::enums::SwapStatus,
    db::models::api::ApiResponse,
    error::AppError,
    middleware::auth::AuthUserInfo,
    services::swaps_service::SwapsService,
};

#[derive(Deserialize)]
pub struct CreateSwapRequest {
    pub requester_assignment_id: i32,
    pub recipient_id: i32,
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct SwapListQuery {
    pub staff_id: Option<String>,
    pub status: Option<SwapStatus>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

pub async fn create_swap_request(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Json(payload): Json<CreateSwapRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let request = SwapsService::create(&mut conn, &payload)?;
    let response = ApiResponse::created(request, "Shift swap request created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_swap_requests(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Query(query): Query<SwapListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let requests = SwapsService::list(
        &mut conn,
        query.staff_id.as_deref(),
        query.status,
        query.start_date,
        query.end_date,
    )?;
    let response = ApiResponse::success(requests, "Shift swap requests retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_swap_request_by_id(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let request = SwapsService::get_by_id(&mut conn, request_id)?;
    let response = ApiResponse::success(request, "Shift swap request retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn approve_swap_request(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let request = SwapsService::approve(&mut conn, request_id)?;
    let response = ApiResponse::success(request, "Shift swap request approved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn reject_swap_request(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let request = SwapsService::reject(&mut conn, request_id)?;
    let response = ApiResponse::success(request, "Shift swap request rejected successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_swap_request(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    SwapsService::delete(&mut conn, request_id)?;
    let response = ApiResponse::<()>::ok("Shift swap request deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}
