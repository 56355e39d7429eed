//! Email notifier collaborator trait.

use anyhow::Result;
use serde_json::Value;
use tracing::info;

use crate::options::Context;

/// Assembled parameters for one outbound reset-instructions email.
///
/// Exactly one of `page_handle` and `body` is set by the auth service: a
/// templated page handle when the caller configured one, otherwise a default
/// plaintext body embedding the reset link.
#[derive(Clone, Debug)]
pub struct EmailOptions {
    pub from: String,
    pub to: String,
    pub subject: String,
    /// Opaque SMTP settings passed through from the per-call options.
    pub smtp: Value,
    pub page_handle: Option<String>,
    pub body: Option<String>,
}

/// Email delivery collaborator.
///
/// Delivery failures propagate to the caller; the auth service does not
/// catch or retry them.
pub trait Notifier: Send + Sync {
    fn send_email(&self, options: &EmailOptions, context: &Context) -> Result<()>;
}

/// Notifier that logs instead of sending, for tests and local development.
///
/// The body is withheld from the log line since it embeds the reset link.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send_email(&self, options: &EmailOptions, context: &Context) -> Result<()> {
        info!(
            to = %options.to,
            subject = %options.subject,
            page_handle = options.page_handle.as_deref().unwrap_or("-"),
            context_keys = ?context.keys().collect::<Vec<_>>(),
            "email send stub"
        );
        Ok(())
    }
}
