//! Notifier Trait
//!
//! Port for outbound email. The submit use case treats both
//! notifications as best-effort: failures are logged, never surfaced.

use crate::domain::entities::ContactMessage;
use crate::error::ContactResult;

/// Outbound email port
#[trait_variant::make(ContactNotifier: Send)]
pub trait LocalContactNotifier {
    /// Whether a transport is actually configured (surfaced by /health)
    fn is_configured(&self) -> bool;

    /// Alert the site operator about a new message (Reply-To: sender)
    async fn notify_operator(&self, message: &ContactMessage) -> ContactResult<()>;

    /// Confirm receipt to the person who submitted the form
    async fn send_confirmation(&self, message: &ContactMessage) -> ContactResult<()>;
}
