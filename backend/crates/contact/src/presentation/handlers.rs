//! HTTP Handlers

use crate::application::config::ContactConfig;
use crate::application::list_messages::{ListMessagesInput, ListMessagesUseCase};
use crate::application::status_check::{ListStatusChecksUseCase, RecordStatusCheckUseCase};
use crate::application::submit_message::{SubmitMessageInput, SubmitMessageUseCase};
use crate::domain::notifier::ContactNotifier;
use crate::domain::repository::{ContactMessageRepository, StatusCheckRepository};
use crate::domain::value_objects::MessageStatus;
use crate::error::ContactResult;
use crate::presentation::dto::{
    ContactCreateRequest, ContactMessageDto, ContactSubmitResponse, HealthResponse,
    HealthServices, ListMessagesQuery, MessageListResponse, StatusCheckCreateRequest,
    StatusCheckDto,
};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use platform::client::{extract_client_ip, extract_user_agent};
use std::sync::Arc;

/// Shared state for contact handlers
#[derive(Clone)]
pub struct ContactAppState<R, N>
where
    R: ContactMessageRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
    N: ContactNotifier + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
    pub limiter: Arc<platform::rate_limit::SlidingWindowLimiter>,
    pub config: Arc<ContactConfig>,
}

/// GET /api/
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello World" }))
}

/// POST /api/contact
pub async fn submit_contact<R, N>(
    State(state): State<ContactAppState<R, N>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<ContactCreateRequest>,
) -> ContactResult<Json<ContactSubmitResponse>>
where
    R: ContactMessageRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
    N: ContactNotifier + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    let user_agent = extract_user_agent(&headers);

    let use_case = SubmitMessageUseCase::new(
        state.repo.clone(),
        state.notifier.clone(),
        state.limiter.clone(),
    );

    let input = SubmitMessageInput {
        name: req.name,
        email: req.email,
        message: req.message,
        client_ip,
        user_agent,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(ContactSubmitResponse {
        success: true,
        message: "Thank you for your message! I'll get back to you within 24 hours.".to_string(),
        id: Some(output.message_id),
    }))
}

/// GET /api/contact/messages
pub async fn list_messages<R, N>(
    State(state): State<ContactAppState<R, N>>,
    Query(query): Query<ListMessagesQuery>,
) -> ContactResult<Json<MessageListResponse>>
where
    R: ContactMessageRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
    N: ContactNotifier + Clone + Send + Sync + 'static,
{
    let status = query
        .status
        .as_deref()
        .map(str::parse::<MessageStatus>)
        .transpose()?;

    let use_case = ListMessagesUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(ListMessagesInput {
            status,
            limit: query.limit,
            skip: query.skip,
        })
        .await?;

    // Echo the applied paging values, not the raw request values.
    Ok(Json(MessageListResponse {
        success: true,
        messages: output
            .messages
            .into_iter()
            .map(ContactMessageDto::from)
            .collect(),
        total: output.total,
        limit: output.limit,
        skip: output.skip,
    }))
}

/// POST /api/status
pub async fn create_status_check<R, N>(
    State(state): State<ContactAppState<R, N>>,
    Json(req): Json<StatusCheckCreateRequest>,
) -> ContactResult<Json<StatusCheckDto>>
where
    R: ContactMessageRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
    N: ContactNotifier + Clone + Send + Sync + 'static,
{
    let use_case = RecordStatusCheckUseCase::new(state.repo.clone());
    let check = use_case.execute(&req.client_name).await?;

    Ok(Json(StatusCheckDto::from(check)))
}

/// GET /api/status
pub async fn list_status_checks<R, N>(
    State(state): State<ContactAppState<R, N>>,
) -> ContactResult<Json<Vec<StatusCheckDto>>>
where
    R: ContactMessageRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
    N: ContactNotifier + Clone + Send + Sync + 'static,
{
    let use_case = ListStatusChecksUseCase::new(state.repo.clone(), state.config.clone());
    let checks = use_case.execute().await?;

    Ok(Json(checks.into_iter().map(StatusCheckDto::from).collect()))
}

/// GET /api/health
pub async fn health<R, N>(State(state): State<ContactAppState<R, N>>) -> Response
where
    R: ContactMessageRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
    N: ContactNotifier + Clone + Send + Sync + 'static,
{
    match state.repo.ping().await {
        Ok(()) => {
            let body = HealthResponse {
                status: "healthy".to_string(),
                timestamp: Utc::now(),
                services: HealthServices {
                    database: "connected".to_string(),
                    email: if state.notifier.is_configured() {
                        "configured".to_string()
                    } else {
                        "not_configured".to_string()
                    },
                },
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            let body = serde_json::json!({
                "status": "unhealthy",
                "message": "Database unreachable",
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}
