use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    db::DbPool,
    db::models::api::ApiResponse,
    db::models::assignment::ShiftAssignmentDetail,
    error::AppError,
    middleware::auth::AuthUserInfo,
    services::assignments_service::AssignmentsService,
};

#[derive(Deserialize)]
pub struct CreateAssignmentRequest {
    pub staff_member_id: i32,
    pub shift_id: i32,
    pub date: chrono::NaiveDate,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateAssignmentRequest {
    pub shift_id: Option<i32>,
    pub date: Option<chrono::NaiveDate>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct AssignmentListQuery {
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub staff_id: Option<String>,
    pub role_id: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct ScheduleQuery {
    pub start_date: Option<chrono::NaiveDate>,
    pub days: Option<i64>,
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub dates: Vec<String>,
    pub schedule: BTreeMap<String, Vec<ShiftAssignmentDetail>>,
}

pub async fn create_assignment(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Json(payload): Json<CreateAssignmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let assignment = AssignmentsService::create(&mut conn, &payload)?;
    let response = ApiResponse::created(assignment, "Shift assignment created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_assignments(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Query(query): Query<AssignmentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let assignments = AssignmentsService::list(
        &mut conn,
        query.start_date,
        query.end_date,
        query.staff_id.as_deref(),
        query.role_id,
        query.is_active,
    )?;
    let response = ApiResponse::success(assignments, "Shift assignments retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

/// Active assignments over a date window, grouped per day. Days without
/// assignments still appear with an empty list.
pub async fn get_schedule(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Query(query): Query<ScheduleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let start_date = query
        .start_date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    let days = query.days.unwrap_or(7).clamp(1, 62);
    let end_date = start_date + chrono::Duration::days(days - 1);

    let mut conn = pool.get()?;
    let details = AssignmentsService::schedule(&mut conn, start_date, end_date)?;

    let mut dates = Vec::new();
    let mut schedule: BTreeMap<String, Vec<ShiftAssignmentDetail>> = BTreeMap::new();
    let mut current = start_date;
    while current <= end_date {
        let key = current.format("%Y-%m-%d").to_string();
        dates.push(key.clone());
        schedule.insert(key, Vec::new());
        current = current + chrono::Duration::days(1);
    }

    for detail in details {
        let key = detail.assignment.date.format("%Y-%m-%d").to_string();
        if let Some(day) = schedule.get_mut(&key) {
            day.push(detail);
        }
    }

    let body = ScheduleResponse {
        start_date,
        end_date,
        dates,
        schedule,
    };
    let response = ApiResponse::success(body, "Schedule retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_assignment_by_id(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(assignment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let assignment = AssignmentsService::get_by_id(&mut conn, assignment_id)?;
    let response = ApiResponse::success(assignment, "Shift assignment retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_assignment(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(assignment_id): Path<i32>,
    Json(payload): Json<UpdateAssignmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let assignment = AssignmentsService::update(&mut conn, assignment_id, &payload)?;
    let response = ApiResponse::success(assignment, "Shift assignment updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_assignment(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(assignment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    AssignmentsService::delete(&mut conn, assignment_id)?;
    let response = ApiResponse::<()>::ok("Shift assignment deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}
