pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod departments;
pub mod leaves;
pub mod roles;
pub mod shifts;
pub mod staff;
pub mod swaps;

use crate::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Routes that need the full AppState (auth service + config)
    let app_routes = Router::new()
        .route("/auth/profile", get(auth::get_profile))
        .route("/auth/logout", post(auth::logout))
        .with_state(state.clone());

    // Resource routes only need the database pool
    let db_routes = Router::new()
        .route("/departments", post(departments::create_department))
        .route("/departments", get(departments::get_departments))
        .route(
            "/departments/:department_id",
            get(departments::get_department_by_id),
        )
        .route(
            "/departments/:department_id",
            put(departments::update_department),
        )
        .route(
            "/departments/:department_id",
            delete(departments::delete_department),
        )
        .route("/roles", post(roles::create_role))
        .route("/roles", get(roles::get_roles))
        .route("/roles/:role_id", get(roles::get_role_by_id))
        .route("/roles/:role_id", put(roles::update_role))
        .route("/roles/:role_id", delete(roles::delete_role))
        .route("/staff", post(staff::create_staff_member))
        .route("/staff", get(staff::get_staff_members))
        .route("/staff/:staff_member_id", get(staff::get_staff_member_by_id))
        .route("/staff/:staff_member_id", put(staff::update_staff_member))
        .route(
            "/staff/:staff_member_id",
            delete(staff::delete_staff_member),
        )
        .route("/shifts", post(shifts::create_shift))
        .route("/shifts", get(shifts::get_shifts))
        .route("/shifts/:shift_id", get(shifts::get_shift_by_id))
        .route("/shifts/:shift_id", put(shifts::update_shift))
        .route("/shifts/:shift_id", delete(shifts::delete_shift))
        .route("/shift-assignments", post(assignments::create_assignment))
        .route("/shift-assignments", get(assignments::get_assignments))
        .route(
            "/shift-assignments/schedule",
            get(assignments::get_schedule),
        )
        .route(
            "/shift-assignments/:assignment_id",
            get(assignments::get_assignment_by_id),
        )
        .route(
            "/shift-assignments/:assignment_id",
            put(assignments::update_assignment),
        )
        .route(
            "/shift-assignments/:assignment_id",
            delete(assignments::delete_assignment),
        )
        .route("/leave-requests", post(leaves::create_leave_request))
        .route("/leave-requests", get(leaves::get_leave_requests))
        .route(
            "/leave-requests/:request_id",
            get(leaves::get_leave_request_by_id),
        )
        .route(
            "/leave-requests/:request_id",
            put(leaves::update_leave_request),
        )
        .route(
            "/leave-requests/:request_id",
            delete(leaves::delete_leave_request),
        )
        .route(
            "/leave-requests/:request_id/approve",
            post(leaves::approve_leave_request),
        )
        .route(
            "/leave-requests/:request_id/reject",
            post(leaves::reject_leave_request),
        )
        .route(
            "/leave-requests/:request_id/cancel",
            post(leaves::cancel_leave_request),
        )
        .route("/attendance", get(attendance::get_attendance_records))
        .route("/attendance/check-in", post(attendance::check_in))
        .route("/attendance/check-out", post(attendance::check_out))
        .route(
            "/attendance/:attendance_id",
            get(attendance::get_attendance_by_id),
        )
        .route(
            "/attendance/:attendance_id",
            put(attendance::update_attendance),
        )
        .route(
            "/attendance/:attendance_id",
            delete(attendance::delete_attendance),
        )
        .route("/shift-swaps", post(swaps::create_swap_request))
        .route("/shift-swaps", get(swaps::get_swap_requests))
        .route("/shift-swaps/:request_id", get(swaps::get_swap_request_by_id))
        .route(
            "/shift-swaps/:request_id",
            delete(swaps::delete_swap_request),
        )
        .route(
            "/shift-swaps/:request_id/approve",
            post(swaps::approve_swap_request),
        )
        .route(
            "/shift-swaps/:request_id/reject",
            post(swaps::reject_swap_request),
        )
        .with_state(Arc::new(state.db.clone()));

    app_routes.merge(db_routes)
}
