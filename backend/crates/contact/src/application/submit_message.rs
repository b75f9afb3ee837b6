//! Submit Message Use Case

use crate::domain::entities::ContactMessage;
use crate::domain::notifier::ContactNotifier;
use crate::domain::repository::ContactMessageRepository;
use crate::domain::value_objects::{ContactName, EmailAddress, MessageBody};
use crate::error::{ContactError, ContactResult};
use platform::rate_limit::SlidingWindowLimiter;
use std::net::IpAddr;
use std::sync::Arc;

/// Input DTO for submit message
#[derive(Debug, Clone)]
pub struct SubmitMessageInput {
    pub name: String,
    pub email: String,
    pub message: String,
    pub client_ip: Option<IpAddr>,
    pub user_agent: Option<String>,
}

/// Output DTO for submit message
#[derive(Debug, Clone)]
pub struct SubmitMessageOutput {
    pub message_id: uuid::Uuid,
}

/// Submit Message Use Case
///
/// Admission (rate limit) is decided before any persistence or email
/// side effect. Once a message is persisted, notification failures are
/// logged and never roll anything back.
pub struct SubmitMessageUseCase<R, N>
where
    R: ContactMessageRepository,
    N: ContactNotifier,
{
    repo: Arc<R>,
    notifier: Arc<N>,
    limiter: Arc<SlidingWindowLimiter>,
}

impl<R, N> SubmitMessageUseCase<R, N>
where
    R: ContactMessageRepository,
    N: ContactNotifier,
{
    pub fn new(repo: Arc<R>, notifier: Arc<N>, limiter: Arc<SlidingWindowLimiter>) -> Self {
        Self {
            repo,
            notifier,
            limiter,
        }
    }

    pub async fn execute(&self, input: SubmitMessageInput) -> ContactResult<SubmitMessageOutput> {
        // Invalid input never consumes quota.
        let name = ContactName::new(input.name)?;
        let email = EmailAddress::new(input.email)?;
        let body = MessageBody::new(input.message)?;

        let client_key = input
            .client_ip
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let decision = self.limiter.check(&client_key);
        if !decision.allowed {
            return Err(ContactError::RateLimited {
                reset_at: decision.reset_at,
                remaining: decision.remaining,
            });
        }

        let message = ContactMessage::new(name, email, body, input.client_ip, input.user_agent);

        self.repo.insert(&message).await?;

        tracing::info!(
            contact_id = %message.id,
            client = %client_key,
            "Contact message stored"
        );

        // Best-effort notifications - the message is already persisted.
        if let Err(e) = self.notifier.notify_operator(&message).await {
            tracing::warn!(
                contact_id = %message.id,
                error = %e,
                "Failed to send notification email"
            );
        }
        if let Err(e) = self.notifier.send_confirmation(&message).await {
            tracing::warn!(
                contact_id = %message.id,
                error = %e,
                "Failed to send confirmation email"
            );
        }

        Ok(SubmitMessageOutput {
            message_id: message.id.into_uuid(),
        })
    }
}
