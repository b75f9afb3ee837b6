//! Contact Router

use crate::application::config::ContactConfig;
use crate::domain::notifier::ContactNotifier;
use crate::domain::repository::{ContactMessageRepository, StatusCheckRepository};
use crate::infra::postgres::PgContactRepository;
use crate::infra::smtp::SmtpMailer;
use crate::presentation::handlers::{self, ContactAppState};
use axum::{
    Router,
    routing::{get, post},
};
use platform::rate_limit::SlidingWindowLimiter;
use std::sync::Arc;

/// Create the contact router with PostgreSQL repository and SMTP mailer
pub fn contact_router(
    repo: PgContactRepository,
    mailer: SmtpMailer,
    limiter: Arc<SlidingWindowLimiter>,
    config: ContactConfig,
) -> Router {
    contact_router_generic(repo, mailer, limiter, config)
}

/// Create a generic contact router for any repository/notifier implementation
pub fn contact_router_generic<R, N>(
    repo: R,
    notifier: N,
    limiter: Arc<SlidingWindowLimiter>,
    config: ContactConfig,
) -> Router
where
    R: ContactMessageRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
    N: ContactNotifier + Clone + Send + Sync + 'static,
{
    let state = ContactAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        limiter,
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health::<R, N>))
        .route(
            "/status",
            get(handlers::list_status_checks::<R, N>).post(handlers::create_status_check::<R, N>),
        )
        .route("/contact", post(handlers::submit_contact::<R, N>))
        .route("/contact/messages", get(handlers::list_messages::<R, N>))
        .with_state(state)
}
