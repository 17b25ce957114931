//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use auth::domain::repository::SessionStore;
use auth::presentation::handlers::AuthAppState;
use auth::presentation::router::auth_router;
use auth::{AuthConfig, InMemorySessionStore, SqliteUserRepository};
use axum::{Json, Router, routing::get};
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often expired session bindings are swept out
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://main.db?mode=rwc".to_string());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    auth::infra::sqlite::init_schema(&pool).await?;

    tracing::info!("Schema initialized");

    // Auth configuration
    let config = AuthConfig {
        password_pepper: env::var("PASSWORD_PEPPER").ok().map(String::into_bytes),
        ..AuthConfig::default()
    };

    let state = AuthAppState::new(
        Arc::new(SqliteUserRepository::new(pool)),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(config),
    );

    // Recreate the built-in accounts; a failing entry is logged inside
    // and must not prevent startup
    let seeded = state.seed_users().await;
    tracing::info!(users_seeded = seeded, "Seed users recreated");

    // Periodic sweep of expired token bindings
    let sessions = Arc::clone(&state.sessions);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = sessions.cleanup_expired().await {
                tracing::warn!(error = %e, "Session cleanup failed");
            }
        }
    });

    // CORS configuration: public API, any origin, no credentials
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/", get(hello))
        .route("/ping", get(ping))
        .merge(auth_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn hello() -> Json<&'static str> {
    Json("Hello, World!")
}

async fn ping() -> Json<&'static str> {
    Json("pong")
}
