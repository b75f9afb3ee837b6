//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{ContactMessage, StatusCheck};
use crate::domain::value_objects::MessageStatus;
use crate::error::ContactResult;

/// A page of contact messages plus the total matching count
#[derive(Debug, Clone)]
pub struct MessagePage {
    pub messages: Vec<ContactMessage>,
    pub total: i64,
}

/// Contact message repository trait
#[trait_variant::make(ContactMessageRepository: Send)]
pub trait LocalContactMessageRepository {
    /// Persist a new contact message
    async fn insert(&self, message: &ContactMessage) -> ContactResult<()>;

    /// List messages newest-first, optionally filtered by status
    async fn list(
        &self,
        status: Option<MessageStatus>,
        limit: i64,
        skip: i64,
    ) -> ContactResult<MessagePage>;

    /// Verify the backing store is reachable
    async fn ping(&self) -> ContactResult<()>;
}

/// Status check repository trait
#[trait_variant::make(StatusCheckRepository: Send)]
pub trait LocalStatusCheckRepository {
    /// Persist a new status check
    async fn insert(&self, check: &StatusCheck) -> ContactResult<()>;

    /// List the most recent status checks, capped at `limit`
    async fn list(&self, limit: i64) -> ContactResult<Vec<StatusCheck>>;
}
