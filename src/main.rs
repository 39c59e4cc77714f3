use axum::{Router, Server, middleware::from_fn};
use diesel::{PgConnection, r2d2::{self, ConnectionManager as DbConnectionManager}};
use roster_backend::db::DbPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = match roster_backend::config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    roster_backend::init_tracing(&config);

    // Initialize database
    let manager = DbConnectionManager::<PgConnection>::new(&config.database_url);
    let db: DbPool = r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .min_idle(Some(config.database_min_connections))
        .connection_timeout(Duration::from_secs(config.database_connection_timeout))
        .build(manager)
        .expect("Failed to create database connection pool");

    let addr = config
        .server_address()
        .parse()
        .expect("Invalid server address");

    // Application state
    let state = Arc::new(roster_backend::AppState::new(db, config));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes that don't need authentication
    let auth_routes = Router::new()
        .route(
            "/auth/register",
            axum::routing::post(roster_backend::routes::auth::register),
        )
        .route(
            "/auth/login",
            axum::routing::post(roster_backend::routes::auth::login),
        )
        .route(
            "/auth/refresh",
            axum::routing::post(roster_backend::routes::auth::refresh_token),
        )
        .with_state(state.clone());

    // Everything else sits behind the bearer-token middleware
    let protected_routes = roster_backend::routes::create_router(state.clone()).layer(
        axum::middleware::from_fn_with_state(
            Arc::new(state.db.clone()),
            roster_backend::middleware::auth::auth_middleware,
        ),
    );

    let app = Router::new()
        .merge(auth_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(from_fn(roster_backend::middleware::logger::logger));

    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server failed");
}
