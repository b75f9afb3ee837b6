//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use contact::{ContactConfig, PgContactRepository, SmtpMailer, SmtpSettings, contact_router};
use platform::rate_limit::SlidingWindowLimiter;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,contact=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Contact configuration (rate limit defaults: 5 requests per hour)
    let mut config = ContactConfig::default();
    if let Ok(max) = env::var("RATE_LIMIT_MAX_REQUESTS") {
        config.rate_limit_max_requests = max.parse()?;
    }
    if let Ok(secs) = env::var("RATE_LIMIT_WINDOW_SECS") {
        config.rate_limit_window = Duration::from_secs(secs.parse()?);
    }

    // One limiter instance shared by every handler for the process lifetime
    let limiter = Arc::new(SlidingWindowLimiter::new(config.rate_limit_config()));

    // SMTP settings; missing credentials leave the mailer inert
    let mut smtp = SmtpSettings::default();
    if let Ok(host) = env::var("SMTP_HOST") {
        smtp.host = host;
    }
    if let Ok(port) = env::var("SMTP_PORT") {
        smtp.port = port.parse()?;
    }
    smtp.username = env::var("SMTP_USER").unwrap_or_default();
    smtp.password = env::var("SMTP_PASS").unwrap_or_default();
    smtp.operator_email = env::var("CONTACT_EMAIL").unwrap_or_default();

    let mailer = SmtpMailer::new(smtp)?;
    let repo = PgContactRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api", contact_router(repo, mailer, limiter, config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
