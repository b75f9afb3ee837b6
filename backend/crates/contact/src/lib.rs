//! Contact Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository/notifier traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and SMTP implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Abuse Model
//! - The contact endpoint is guarded by a per-client sliding-window rate
//!   limiter; admission is decided before any persistence or email side
//!   effect
//! - Rejected submissions are never recorded against quota
//! - Email notifications are best-effort: failures are logged, the
//!   stored message and the consumed quota are never rolled back

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ContactConfig;
pub use error::{ContactError, ContactResult};
pub use infra::postgres::PgContactRepository;
pub use infra::smtp::{SmtpMailer, SmtpSettings};
pub use presentation::router::contact_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
