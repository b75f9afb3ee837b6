//! SMTP Mailer
//!
//! lettre-backed implementation of the notifier port. When no SMTP
//! credentials are configured the mailer stays inert: sends fail with
//! an error the use case logs, and /health reports "not_configured".

use crate::domain::entities::ContactMessage;
use crate::domain::notifier::ContactNotifier;
use crate::error::{ContactError, ContactResult};
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// SMTP connection settings
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Operator address that receives new-message alerts
    pub operator_email: String,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            username: String::new(),
            password: String::new(),
            operator_email: String::new(),
        }
    }
}

impl SmtpSettings {
    fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.operator_email.is_empty()
    }
}

/// lettre-backed notifier
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    settings: SmtpSettings,
}

impl SmtpMailer {
    pub fn new(settings: SmtpSettings) -> ContactResult<Self> {
        let transport = if settings.is_complete() {
            let relay = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
                .map_err(|e| ContactError::EmailDelivery(e.to_string()))?
                .port(settings.port)
                .credentials(Credentials::new(
                    settings.username.clone(),
                    settings.password.clone(),
                ))
                .build();
            Some(relay)
        } else {
            tracing::warn!("SMTP credentials not configured, email notifications disabled");
            None
        };

        Ok(Self {
            transport,
            settings,
        })
    }

    fn from_mailbox(&self) -> ContactResult<Mailbox> {
        self.settings
            .username
            .parse()
            .map_err(|_| ContactError::EmailDelivery("Invalid SMTP sender address".to_string()))
    }

    async fn send(&self, email: Message) -> ContactResult<()> {
        let transport = self
            .transport
            .as_ref()
            .ok_or_else(|| ContactError::EmailDelivery("SMTP transport not configured".to_string()))?;

        transport
            .send(email)
            .await
            .map_err(|e| ContactError::EmailDelivery(e.to_string()))?;

        Ok(())
    }
}

impl ContactNotifier for SmtpMailer {
    fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    async fn notify_operator(&self, message: &ContactMessage) -> ContactResult<()> {
        let to: Mailbox = self.settings.operator_email.parse().map_err(|_| {
            ContactError::EmailDelivery("Invalid operator email address".to_string())
        })?;
        let reply_to: Mailbox = message
            .email
            .as_str()
            .parse()
            .map_err(|_| ContactError::EmailDelivery("Invalid sender address".to_string()))?;

        let (text, html) = operator_alert_bodies(message);

        let email = Message::builder()
            .from(self.from_mailbox()?)
            .to(to)
            .reply_to(reply_to)
            .subject(format!(
                "New Contact Form Message from {}",
                message.name.as_str()
            ))
            .multipart(MultiPart::alternative_plain_html(text, html))
            .map_err(|e| ContactError::EmailDelivery(e.to_string()))?;

        self.send(email).await?;

        tracing::info!(contact_id = %message.id, "Operator alert sent");
        Ok(())
    }

    async fn send_confirmation(&self, message: &ContactMessage) -> ContactResult<()> {
        let to: Mailbox = message
            .email
            .as_str()
            .parse()
            .map_err(|_| ContactError::EmailDelivery("Invalid recipient address".to_string()))?;

        let (text, html) = confirmation_bodies(message);

        let email = Message::builder()
            .from(self.from_mailbox()?)
            .to(to)
            .subject("Thank you for your message")
            .multipart(MultiPart::alternative_plain_html(text, html))
            .map_err(|e| ContactError::EmailDelivery(e.to_string()))?;

        self.send(email).await?;

        tracing::info!(contact_id = %message.id, "Confirmation sent");
        Ok(())
    }
}

fn operator_alert_bodies(message: &ContactMessage) -> (String, String) {
    let text = format!(
        "New Contact Form Message\n\n\
         Name: {name}\n\
         Email: {email}\n\
         Contact ID: {id}\n\n\
         Message:\n{body}\n\n\
         ---\n\
         This message was sent from your portfolio website contact form.\n",
        name = message.name.as_str(),
        email = message.email.as_str(),
        id = message.id,
        body = message.message.as_str(),
    );

    let html = format!(
        "<html><body>\
         <h2>New Contact Form Message</h2>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <p><strong>Contact ID:</strong> {id}</p>\
         <h3>Message:</h3>\
         <blockquote>{body}</blockquote>\
         <hr>\
         <p><small>This message was sent from your portfolio website contact form.</small></p>\
         </body></html>",
        name = escape_html(message.name.as_str()),
        email = escape_html(message.email.as_str()),
        id = message.id,
        body = escape_html(message.message.as_str()),
    );

    (text, html)
}

fn confirmation_bodies(message: &ContactMessage) -> (String, String) {
    let text = format!(
        "Hi {name},\n\n\
         Thank you for reaching out! I've received your message and will \
         get back to you within 24 hours.\n\n\
         Best regards\n\n\
         ---\n\
         This is an automated response from the portfolio website.\n",
        name = message.name.as_str(),
    );

    let html = format!(
        "<html><body>\
         <h2>Thank You for Your Message!</h2>\
         <p>Hi {name},</p>\
         <p>Thank you for reaching out! I've received your message and will \
         get back to you within 24 hours.</p>\
         <p>Best regards</p>\
         <hr>\
         <p><small>This is an automated response from the portfolio website.</small></p>\
         </body></html>",
        name = escape_html(message.name.as_str()),
    );

    (text, html)
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ContactName, EmailAddress, MessageBody};

    fn sample_message() -> ContactMessage {
        ContactMessage::new(
            ContactName::new("Ada <Lovelace>").unwrap(),
            EmailAddress::new("ada@example.com").unwrap(),
            MessageBody::new("Hello & goodbye, this is a test.").unwrap(),
            None,
            None,
        )
    }

    #[test]
    fn test_unconfigured_mailer_is_inert() {
        let mailer = SmtpMailer::new(SmtpSettings::default()).unwrap();
        assert!(!mailer.is_configured());
    }

    #[test]
    fn test_operator_alert_bodies_escape_html() {
        let message = sample_message();
        let (text, html) = operator_alert_bodies(&message);

        assert!(text.contains("Ada <Lovelace>"));
        assert!(html.contains("Ada &lt;Lovelace&gt;"));
        assert!(html.contains("Hello &amp; goodbye"));
        assert!(text.contains(&message.id.to_string()));
    }

    #[test]
    fn test_confirmation_bodies_address_sender() {
        let message = sample_message();
        let (text, html) = confirmation_bodies(&message);

        assert!(text.contains("Hi Ada <Lovelace>"));
        assert!(html.contains("within 24 hours"));
    }

    #[tokio::test]
    async fn test_unconfigured_send_fails_gracefully() {
        let mailer = SmtpMailer::new(SmtpSettings::default()).unwrap();
        let message = sample_message();

        let result = mailer.notify_operator(&message).await;
        assert!(matches!(result, Err(ContactError::EmailDelivery(_))));
    }
}
