//! Status Check Use Cases (legacy pair)

use crate::application::config::ContactConfig;
use crate::domain::entities::StatusCheck;
use crate::domain::repository::StatusCheckRepository;
use crate::error::{ContactError, ContactResult};
use std::sync::Arc;

/// Record Status Check Use Case
pub struct RecordStatusCheckUseCase<R>
where
    R: StatusCheckRepository,
{
    repo: Arc<R>,
}

impl<R> RecordStatusCheckUseCase<R>
where
    R: StatusCheckRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, client_name: &str) -> ContactResult<StatusCheck> {
        let client_name = client_name.trim();
        if client_name.is_empty() {
            return Err(ContactError::Validation(
                "client_name cannot be empty".to_string(),
            ));
        }

        let check = StatusCheck::new(client_name);
        self.repo.insert(&check).await?;

        Ok(check)
    }
}

/// List Status Checks Use Case
pub struct ListStatusChecksUseCase<R>
where
    R: StatusCheckRepository,
{
    repo: Arc<R>,
    config: Arc<ContactConfig>,
}

impl<R> ListStatusChecksUseCase<R>
where
    R: StatusCheckRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ContactConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> ContactResult<Vec<StatusCheck>> {
        self.repo.list(self.config.status_list_limit).await
    }
}
