//! PostgreSQL Repository Implementations

use crate::domain::entities::{ContactMessage, StatusCheck};
use crate::domain::repository::{
    ContactMessageRepository, MessagePage, StatusCheckRepository,
};
use crate::domain::value_objects::{ContactName, EmailAddress, MessageBody, MessageStatus};
use crate::error::{ContactError, ContactResult};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ContactMessageRepository for PgContactRepository {
    async fn insert(&self, message: &ContactMessage) -> ContactResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (
                contact_message_id,
                name,
                email,
                message,
                status,
                ip_address,
                user_agent,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6::inet, $7, $8, $9)
            "#,
        )
        .bind(message.id.into_uuid())
        .bind(message.name.as_str())
        .bind(message.email.as_str())
        .bind(message.message.as_str())
        .bind(message.status.as_str())
        .bind(message.ip_address.as_ref().map(|ip| ip.to_string()))
        .bind(message.user_agent.as_deref())
        .bind(message.created_at)
        .bind(message.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(contact_id = %message.id, "Contact message created");

        Ok(())
    }

    async fn list(
        &self,
        status: Option<MessageStatus>,
        limit: i64,
        skip: i64,
    ) -> ContactResult<MessagePage> {
        let (rows, total) = match status {
            Some(status) => {
                let rows = sqlx::query_as::<_, ContactMessageRow>(
                    r#"
                    SELECT
                        contact_message_id,
                        name,
                        email,
                        message,
                        status,
                        ip_address::TEXT,
                        user_agent,
                        created_at,
                        updated_at
                    FROM contact_messages
                    WHERE status = $1
                    ORDER BY created_at DESC
                    OFFSET $2 LIMIT $3
                    "#,
                )
                .bind(status.as_str())
                .bind(skip)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;

                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM contact_messages WHERE status = $1",
                )
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await?;

                (rows, total)
            }
            None => {
                let rows = sqlx::query_as::<_, ContactMessageRow>(
                    r#"
                    SELECT
                        contact_message_id,
                        name,
                        email,
                        message,
                        status,
                        ip_address::TEXT,
                        user_agent,
                        created_at,
                        updated_at
                    FROM contact_messages
                    ORDER BY created_at DESC
                    OFFSET $1 LIMIT $2
                    "#,
                )
                .bind(skip)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;

                let total =
                    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact_messages")
                        .fetch_one(&self.pool)
                        .await?;

                (rows, total)
            }
        };

        let messages = rows
            .into_iter()
            .map(|row| row.into_entity())
            .collect::<ContactResult<Vec<_>>>()?;

        Ok(MessagePage { messages, total })
    }

    async fn ping(&self) -> ContactResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

impl StatusCheckRepository for PgContactRepository {
    async fn insert(&self, check: &StatusCheck) -> ContactResult<()> {
        sqlx::query(
            r#"
            INSERT INTO status_checks (status_check_id, client_name, checked_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(check.id.into_uuid())
        .bind(&check.client_name)
        .bind(check.checked_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self, limit: i64) -> ContactResult<Vec<StatusCheck>> {
        let rows = sqlx::query_as::<_, StatusCheckRow>(
            r#"
            SELECT status_check_id, client_name, checked_at
            FROM status_checks
            ORDER BY checked_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StatusCheckRow::into_entity).collect())
    }
}

#[derive(sqlx::FromRow)]
struct ContactMessageRow {
    contact_message_id: Uuid,
    name: String,
    email: String,
    message: String,
    status: String,
    ip_address: Option<String>,
    user_agent: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ContactMessageRow {
    fn into_entity(self) -> ContactResult<ContactMessage> {
        let status = self.status.parse::<MessageStatus>().map_err(|_| {
            ContactError::Internal(format!("Corrupt status in storage: {}", self.status))
        })?;

        Ok(ContactMessage {
            id: self.contact_message_id.into(),
            name: ContactName::from_db(self.name),
            email: EmailAddress::from_db(self.email),
            message: MessageBody::from_db(self.message),
            status,
            ip_address: self.ip_address.and_then(|ip| ip.parse().ok()),
            user_agent: self.user_agent,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct StatusCheckRow {
    status_check_id: Uuid,
    client_name: String,
    checked_at: DateTime<Utc>,
}

impl StatusCheckRow {
    fn into_entity(self) -> StatusCheck {
        StatusCheck {
            id: self.status_check_id.into(),
            client_name: self.client_name,
            checked_at: self.checked_at,
        }
    }
}
