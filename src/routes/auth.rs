use axum::{
    Json, TypedHeader,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use bcrypt::{hash, verify};
use diesel::prelude::*;
use headers::Authorization;
use headers::authorization::Bearer;
use std::sync::Arc;

use crate::{
    AppState,
    db::models::{
        api::{ApiResponse, error_codes},
        auth::{
            AuthUser, LoginRequest, LoginResponse, NewUser, RefreshTokenRequest, RegisterRequest,
            User, UserProfile,
        },
    },
    db::repositories::staff::StaffRepo,
    error::AppError,
    middleware::auth::AuthUserInfo,
    schema,
    validation::ValidatedJson,
};

pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;

    let email_taken = schema::users::table
        .filter(schema::users::email.eq(&payload.email))
        .select(schema::users::id)
        .first::<i32>(&mut conn)
        .optional()?
        .is_some();
    if email_taken {
        return Err(AppError::conflict_with_code(
            "Email address already exists",
            Some("email".to_string()),
            error_codes::USER_EMAIL_EXISTS,
        ));
    }

    let username_taken = schema::users::table
        .filter(schema::users::username.eq(&payload.username))
        .select(schema::users::id)
        .first::<i32>(&mut conn)
        .optional()?
        .is_some();
    if username_taken {
        return Err(AppError::conflict_with_code(
            "Username already exists",
            Some("username".to_string()),
            error_codes::USER_USERNAME_EXISTS,
        ));
    }

    let password_hash = hash(payload.password.as_bytes(), state.config.bcrypt_cost)?;

    let new_user = NewUser {
        email: payload.email,
        username: payload.username,
        name: payload.name,
        password_hash,
    };
    let user: User = diesel::insert_into(schema::users::table)
        .values(&new_user)
        .get_result(&mut conn)?;

    let auth_user = AuthUser {
        id: user.id,
        email: user.email,
        username: user.username,
        name: user.name,
    };

    let response = ApiResponse::created(auth_user, "User registered successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;

    let user = schema::users::table
        .filter(schema::users::email.eq(&payload.email))
        .filter(schema::users::is_active.eq(true))
        .select(User::as_select())
        .first::<User>(&mut conn)
        .optional()?
        .ok_or_else(|| AppError::auth("Invalid credentials"))?;

    if !verify(payload.password.as_bytes(), &user.password_hash)? {
        return Err(AppError::auth("Invalid credentials"));
    }

    let auth_user = AuthUser {
        id: user.id,
        email: user.email,
        username: user.username,
        name: user.name,
    };

    let access_token = state.auth_service.generate_access_token(&auth_user)?;
    let refresh_token = state.auth_service.generate_refresh_token(auth_user.id)?;

    // Surface the staff profile linkage so clients can scope themselves
    let staff = StaffRepo::find_by_user_id(&mut conn, auth_user.id)?;

    let login_response = LoginResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth_service.access_token_lifetime().as_secs() as i64,
        user: auth_user,
        staff_member_id: staff.as_ref().map(|s| s.id),
        staff_id: staff.map(|s| s.staff_id),
    };

    let response = ApiResponse::success(login_response, "Login successful");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    let claims = state
        .auth_service
        .verify_refresh_token(&payload.refresh_token)
        .map_err(|_| AppError::auth("Invalid refresh token"))?;

    let mut conn = state.db.get()?;
    let user = schema::users::table
        .filter(schema::users::id.eq(claims.sub))
        .filter(schema::users::is_active.eq(true))
        .select(User::as_select())
        .first::<User>(&mut conn)
        .optional()?
        .ok_or_else(|| AppError::auth("Invalid refresh token"))?;

    let auth_user = AuthUser {
        id: user.id,
        email: user.email,
        username: user.username,
        name: user.name,
    };

    let access_token = state.auth_service.generate_access_token(&auth_user)?;
    let refresh_token = state.auth_service.generate_refresh_token(auth_user.id)?;

    let staff = StaffRepo::find_by_user_id(&mut conn, auth_user.id)?;

    let login_response = LoginResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth_service.access_token_lifetime().as_secs() as i64,
        user: auth_user,
        staff_member_id: staff.as_ref().map(|s| s.id),
        staff_id: staff.map(|s| s.staff_id),
    };

    let response = ApiResponse::success(login_response, "Token refreshed successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    _auth_info: AuthUserInfo,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<impl IntoResponse, AppError> {
    // Tokens are stateless; logging out is the client discarding a pair
    // that still verifies
    state
        .auth_service
        .verify_token(bearer.token())
        .map_err(|_| AppError::auth("Invalid token"))?;

    let response = ApiResponse::<()>::ok("Successfully logged out");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    auth_info: AuthUserInfo,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;

    let staff_member = StaffRepo::find_by_user_id(&mut conn, auth_info.user.id)?;

    let profile = UserProfile {
        id: auth_info.user.id,
        email: auth_info.user.email,
        username: auth_info.user.username,
        name: auth_info.user.name,
        staff_member,
    };

    let response = ApiResponse::success(profile, "Profile retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}
