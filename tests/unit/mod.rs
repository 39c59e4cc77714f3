mod attendance;
mod auth;
mod leave;
mod shift;
mod staff;
mod swap;
