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
    services::roles_service::RolesService,
};

#[derive(Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn create_role(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Json(payload): Json<CreateRoleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let role = RolesService::create(&mut conn, &payload)?;
    let response = ApiResponse::created(role, "Role created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_roles(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let roles = RolesService::list(&mut conn)?;
    let response = ApiResponse::success(roles, "Roles retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_role_by_id(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(role_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let role = RolesService::get_by_id(&mut conn, role_id)?;
    let response = ApiResponse::success(role, "Role retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_role(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(role_id): Path<i32>,
    Json(payload): Json<UpdateRoleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    let role = RolesService::update(&mut conn, role_id, &payload)?;
    let response = ApiResponse::success(role, "Role updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_role(
    State(pool): State<Arc<DbPool>>,
    _auth_info: AuthUserInfo,
    Path(role_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.get()?;
    RolesService::delete(&mut conn, role_id)?;
    let response = ApiResponse::<()>::ok("Role deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}
