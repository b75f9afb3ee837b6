//! Domain Entities
//!
//! Core business entities for the contact domain.

use crate::domain::value_objects::{ContactName, EmailAddress, MessageBody, MessageStatus};
use chrono::{DateTime, Utc};
use kernel::id::{ContactMessageId, StatusCheckId};
use std::net::IpAddr;

/// ContactMessage entity - one submitted contact-form message
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: ContactName,
    pub email: EmailAddress,
    pub message: MessageBody,
    pub status: MessageStatus,
    pub ip_address: Option<IpAddr>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Create a new message in the `new` status
    pub fn new(
        name: ContactName,
        email: EmailAddress,
        message: MessageBody,
        ip_address: Option<IpAddr>,
        user_agent: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ContactMessageId::new(),
            name,
            email,
            message,
            status: MessageStatus::New,
            ip_address,
            user_agent,
            created_at: now,
            updated_at: now,
        }
    }
}

/// StatusCheck entity - legacy connectivity probe record
#[derive(Debug, Clone)]
pub struct StatusCheck {
    pub id: StatusCheckId,
    pub client_name: String,
    pub checked_at: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: StatusCheckId::new(),
            client_name: client_name.into(),
            checked_at: Utc::now(),
        }
    }
}
