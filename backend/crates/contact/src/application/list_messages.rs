//! List Messages Use Case (admin)

use crate::application::config::ContactConfig;
use crate::domain::entities::ContactMessage;
use crate::domain::repository::{ContactMessageRepository, MessagePage};
use crate::domain::value_objects::MessageStatus;
use crate::error::ContactResult;
use std::sync::Arc;

/// Input DTO for the admin listing
#[derive(Debug, Clone)]
pub struct ListMessagesInput {
    pub status: Option<MessageStatus>,
    pub limit: i64,
    pub skip: i64,
}

/// Output DTO for the admin listing
///
/// `limit` and `skip` are the values actually applied after clamping,
/// not the raw request values.
#[derive(Debug, Clone)]
pub struct ListMessagesOutput {
    pub messages: Vec<ContactMessage>,
    pub total: i64,
    pub limit: i64,
    pub skip: i64,
}

/// List Messages Use Case
pub struct ListMessagesUseCase<R>
where
    R: ContactMessageRepository,
{
    repo: Arc<R>,
    config: Arc<ContactConfig>,
}

impl<R> ListMessagesUseCase<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ContactConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: ListMessagesInput) -> ContactResult<ListMessagesOutput> {
        let limit = input.limit.clamp(1, self.config.list_max_limit);
        let skip = input.skip.max(0);

        let MessagePage { messages, total } = self.repo.list(input.status, limit, skip).await?;

        Ok(ListMessagesOutput {
            messages,
            total,
            limit,
            skip,
        })
    }
}
