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
    services::shifts_service::ShiftsService,
};

#[derive(Deserialize)]
pub struct CreateShiftRequest {
    pub name: String,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
    #[serde(default = "default_break_duration")]
    pub break_duration: i32,
    #[serde(default)]
    pub is_night_shift: bool,
}

fn default_break_duration() -> i32 {
    30
}

#[derive(Deserialize)]
pub struct UpdateShiftRequest {
    pub name: Option<String>,
    pub start_time: Option<chrono::NaiveTime>,
    pub end_time: Option<chrono::NaiveTime>,
    pub break_duration: Option<i32>,
    pub is_night_shift: Option<bool>,
}

pub async fn create_shift(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Json(payload): Json<CreateShiftRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let shift = ShiftsService::create(&mut conn, &payload)?;
    let response = ApiResponse::created(shift, "Shift created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_shifts(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let shifts = ShiftsService::list(&mut conn)?;
    let response = ApiResponse::success(shifts, "Shifts retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_shift_by_id(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(shift_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let shift = ShiftsService::get_by_id(&mut conn, shift_id)?;
    let response = ApiResponse::success(shift, "Shift retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_shift(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(shift_id): Path<i32>,
    Json(payload): Json<UpdateShiftRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let shift = ShiftsService::update(&mut conn, shift_id, &payload)?;
    let response = ApiResponse::success(shift, "Shift updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_shift(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(shift_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    ShiftsService::delete(&mut conn, shift_id)?;
    let response = ApiResponse::<()>::ok("Shift deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}
