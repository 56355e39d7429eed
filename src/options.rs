//! Per-call configuration for the auth operations.

use secrecy::SecretString;
use serde_json::Value;
use std::collections::BTreeMap;

/// Mutable key-value mapping handed through to the notifier.
///
/// The caller owns its lifecycle; `forgot_password` injects the reset link
/// and the looked-up entry before the notifier sees it.
pub type Context = BTreeMap<String, Value>;

/// Immutable per-call options.
///
/// The entry type and the id/password field names drive both the store
/// lookups and the tags of the returned outcome, so the error taxonomy is
/// caller-configurable. The plaintext password rides in a [`SecretString`]
/// and stays redacted in `Debug` output.
#[derive(Debug)]
pub struct AuthOptions {
    entry_type: String,
    id_field: String,
    id: String,
    password_field: String,
    password: Option<SecretString>,
    reset_token: Option<String>,
    reset_password_url: String,
    from: String,
    subject: String,
    smtp: Value,
    email_handle: Option<String>,
}

impl AuthOptions {
    #[must_use]
    pub fn new(
        entry_type: impl Into<String>,
        id_field: impl Into<String>,
        id: impl Into<String>,
        password_field: impl Into<String>,
    ) -> Self {
        Self {
            entry_type: entry_type.into(),
            id_field: id_field.into(),
            id: id.into(),
            password_field: password_field.into(),
            password: None,
            reset_token: None,
            reset_password_url: String::new(),
            from: String::new(),
            subject: String::new(),
            smtp: Value::Null,
            email_handle: None,
        }
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    #[must_use]
    pub fn with_reset_token(mut self, reset_token: impl Into<String>) -> Self {
        self.reset_token = Some(reset_token.into());
        self
    }

    #[must_use]
    pub fn with_reset_password_url(mut self, url: impl Into<String>) -> Self {
        self.reset_password_url = url.into();
        self
    }

    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    #[must_use]
    pub fn with_smtp(mut self, smtp: Value) -> Self {
        self.smtp = smtp;
        self
    }

    #[must_use]
    pub fn with_email_handle(mut self, handle: impl Into<String>) -> Self {
        self.email_handle = Some(handle.into());
        self
    }

    #[must_use]
    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    #[must_use]
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn password_field(&self) -> &str {
        &self.password_field
    }

    #[must_use]
    pub fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    #[must_use]
    pub fn reset_token(&self) -> Option<&str> {
        self.reset_token.as_deref()
    }

    #[must_use]
    pub fn reset_password_url(&self) -> &str {
        &self.reset_password_url
    }

    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn smtp(&self) -> &Value {
        &self.smtp
    }

    #[must_use]
    pub fn email_handle(&self) -> Option<&str> {
        self.email_handle.as_deref()
    }
}
