//! API DTOs (Data Transfer Objects)
//!
//! Wire format is snake_case, matching the JSON contract the frontend
//! already consumes.

use crate::domain::entities::{ContactMessage, StatusCheck};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request for POST /api/contact
#[derive(Debug, Clone, Deserialize)]
pub struct ContactCreateRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Response for POST /api/contact
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmitResponse {
    pub success: bool,
    pub message: String,
    pub id: Option<Uuid>,
}

/// One message in the admin listing
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessageDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageDto {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id.into_uuid(),
            name: message.name.into_db(),
            email: message.email.into_db(),
            message: message.message.into_db(),
            status: message.status.as_str().to_string(),
            ip_address: message.ip_address.map(|ip| ip.to_string()),
            user_agent: message.user_agent,
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

/// Response for GET /api/contact/messages
#[derive(Debug, Clone, Serialize)]
pub struct MessageListResponse {
    pub success: bool,
    pub messages: Vec<ContactMessageDto>,
    pub total: i64,
    pub limit: i64,
    pub skip: i64,
}

/// Query parameters for GET /api/contact/messages
#[derive(Debug, Clone, Deserialize)]
pub struct ListMessagesQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub skip: i64,
    #[serde(default)]
    pub status: Option<String>,
}

fn default_limit() -> i64 {
    50
}

/// Request for POST /api/status
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreateRequest {
    pub client_name: String,
}

/// One status check on the wire
#[derive(Debug, Clone, Serialize)]
pub struct StatusCheckDto {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl From<StatusCheck> for StatusCheckDto {
    fn from(check: StatusCheck) -> Self {
        Self {
            id: check.id.into_uuid(),
            client_name: check.client_name,
            timestamp: check.checked_at,
        }
    }
}

/// Response for GET /api/health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub services: HealthServices,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthServices {
    pub database: String,
    pub email: String,
}
