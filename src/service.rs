//! Credential auth orchestrator.
//!
//! Composes the entry store, the notifier and the secret hasher into three
//! public operations (sign-in, forgot-password, reset-password) plus a
//! passthrough lookup, and owns the reset-token state machine:
//!
//! - no token → `forgot_password` issues one (re-issue overwrites),
//! - a token within its lifetime is consumed by `reset_password`,
//! - a stale token stays in place and is reported as invalid; expiry is
//!   evaluated lazily at reset time, there is no background sweep.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::compare::constant_time_eq;
use crate::config::AuthConfig;
use crate::entry::{Entry, FieldValues, RESET_SENT_AT_FIELD, RESET_TOKEN_FIELD};
use crate::error::Error;
use crate::hasher::{Argon2Hasher, SecretHasher};
use crate::notify::{EmailOptions, Notifier};
use crate::options::{AuthOptions, Context};
use crate::outcome::AuthOutcome;
use crate::store::EntryStore;
use crate::token::generate_reset_token;

/// Query-string parameter appended to the configured reset URL.
const RESET_TOKEN_PARAM: &str = "auth_reset_token";

/// Context key receiving the assembled reset link.
const RESET_URL_CONTEXT_KEY: &str = "reset_password_url";

/// Stateless credential verification and password-reset service.
///
/// All durable state lives in the [`EntryStore`]; the service itself holds
/// no locks and may be called from multiple threads concurrently as long as
/// the store serializes per-entry mutations.
pub struct AuthService {
    store: Arc<dyn EntryStore>,
    notifier: Arc<dyn Notifier>,
    hasher: Arc<dyn SecretHasher>,
    config: AuthConfig,
}

impl AuthService {
    /// Build a service with the default Argon2id hasher and configuration.
    #[must_use]
    pub fn new(store: Arc<dyn EntryStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            hasher: Arc::new(Argon2Hasher),
            config: AuthConfig::new(),
        }
    }

    #[must_use]
    pub fn with_hasher(mut self, hasher: Arc<dyn SecretHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: AuthConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Fetch an entry by its store identifier; a pure store passthrough.
    pub fn find_authenticated_resource(
        &self,
        entry_type: &str,
        id: &str,
    ) -> Result<Option<Entry>, Error> {
        self.store.find(entry_type, id).map_err(Error::Store)
    }

    /// Verify a plaintext password against the stored hash. Read-only.
    ///
    /// An unknown id and a wrong password both report
    /// [`AuthOutcome::WrongCredentials`]; distinguishing them would allow
    /// user enumeration.
    pub fn sign_in(&self, options: &AuthOptions) -> Result<AuthOutcome, Error> {
        let Some(entry) =
            self.first_match(options.entry_type(), options.id_field(), options.id())?
        else {
            debug!(
                entry_type = options.entry_type(),
                "sign-in lookup matched no entry"
            );
            return Ok(AuthOutcome::WrongCredentials);
        };

        let hash_field = Entry::hash_field(options.password_field());
        // An entry without a stored hash cannot sign in; same outcome as a
        // wrong password.
        let Some(stored) = entry.str_field(&hash_field) else {
            return Ok(AuthOutcome::WrongCredentials);
        };

        let password = options
            .password()
            .map(ExposeSecret::expose_secret)
            .unwrap_or_default();
        let candidate = self
            .hasher
            .recompute_hash(password, stored)
            .map_err(Error::Hash)?;

        if constant_time_eq(candidate.as_bytes(), stored.as_bytes()) {
            Ok(AuthOutcome::SignedIn(entry))
        } else {
            debug!(
                entry_type = options.entry_type(),
                "sign-in password mismatch"
            );
            Ok(AuthOutcome::WrongCredentials)
        }
    }

    /// Issue a reset token and send reset instructions.
    ///
    /// The token pair is persisted before the notifier runs, so the link in
    /// the email always refers to stored state. Calling this again for the
    /// same entry overwrites the previous token.
    pub fn forgot_password(
        &self,
        options: &AuthOptions,
        context: &mut Context,
    ) -> Result<AuthOutcome, Error> {
        let Some(entry) =
            self.first_match(options.entry_type(), options.id_field(), options.id())?
        else {
            debug!(
                entry_type = options.entry_type(),
                id_field = options.id_field(),
                "forgot-password lookup matched no entry"
            );
            return Ok(AuthOutcome::WrongId {
                id_field: options.id_field().to_string(),
            });
        };

        let token = generate_reset_token().map_err(Error::Token)?;
        let sent_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut updates = FieldValues::new();
        updates.insert(RESET_TOKEN_FIELD.to_string(), Value::String(token.clone()));
        updates.insert(RESET_SENT_AT_FIELD.to_string(), Value::String(sent_at));
        let entry = self
            .store
            .update_decorated_entry(options.entry_type(), &entry, updates)
            .map_err(Error::Store)?;

        let reset_url = format!(
            "{}?{}={}",
            options.reset_password_url(),
            RESET_TOKEN_PARAM,
            token
        );
        context.insert(
            RESET_URL_CONTEXT_KEY.to_string(),
            Value::String(reset_url.clone()),
        );
        context.insert(singularize(options.entry_type()), entry.to_value());

        self.send_reset_password_instructions(options, &reset_url, context)?;

        info!(
            entry_type = options.entry_type(),
            "reset instructions issued"
        );
        Ok(AuthOutcome::ResetInstructionsSent {
            password_field: options.password_field().to_string(),
            entry,
        })
    }

    /// Consume a reset token and install a freshly hashed password.
    ///
    /// Blank tokens and short passwords short-circuit before any store
    /// access. Unknown and expired tokens share the
    /// [`AuthOutcome::InvalidToken`] outcome, so the response does not
    /// disclose whether a presented token ever existed.
    pub fn reset_password(&self, options: &AuthOptions) -> Result<AuthOutcome, Error> {
        let token = options.reset_token().map(str::trim).unwrap_or_default();
        if token.is_empty() {
            return Ok(AuthOutcome::InvalidToken);
        }

        let password = options
            .password()
            .map(ExposeSecret::expose_secret)
            .unwrap_or_default();
        if password.chars().count() < self.config.min_password_length() {
            return Ok(AuthOutcome::PasswordTooShort);
        }

        let Some(entry) = self.first_match(options.entry_type(), RESET_TOKEN_FIELD, token)? else {
            debug!(
                entry_type = options.entry_type(),
                "reset token matched no entry"
            );
            return Ok(AuthOutcome::InvalidToken);
        };

        let sent_at_raw = entry
            .str_field(RESET_SENT_AT_FIELD)
            .ok_or(Error::MissingField(RESET_SENT_AT_FIELD))?;
        let sent_at = DateTime::parse_from_rfc3339(sent_at_raw)
            .map_err(Error::malformed_sent_at)?
            .with_timezone(&Utc);

        let cutoff = Utc::now() - Duration::seconds(self.config.reset_token_lifetime_seconds());
        if sent_at < cutoff {
            debug!(entry_type = options.entry_type(), "reset token expired");
            return Ok(AuthOutcome::InvalidToken);
        }

        let new_hash = self.hasher.create_hash(password).map_err(Error::Hash)?;

        // One atomic write: install the new hash and clear the token pair,
        // making the token single-use.
        let mut updates = FieldValues::new();
        updates.insert(
            Entry::hash_field(options.password_field()),
            Value::String(new_hash),
        );
        updates.insert(RESET_TOKEN_FIELD.to_string(), Value::Null);
        updates.insert(RESET_SENT_AT_FIELD.to_string(), Value::Null);
        let entry = self
            .store
            .update_decorated_entry(options.entry_type(), &entry, updates)
            .map_err(Error::Store)?;

        info!(entry_type = options.entry_type(), "password reset completed");
        Ok(AuthOutcome::PasswordReset {
            password_field: options.password_field().to_string(),
            entry,
        })
    }

    fn first_match(
        &self,
        entry_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Entry>, Error> {
        let mut predicate = FieldValues::new();
        predicate.insert(field.to_string(), Value::String(value.to_string()));
        let matches = self
            .store
            .all(entry_type, &predicate)
            .map_err(Error::Store)?;
        Ok(matches.into_iter().next())
    }

    fn send_reset_password_instructions(
        &self,
        options: &AuthOptions,
        reset_url: &str,
        context: &Context,
    ) -> Result<(), Error> {
        let (page_handle, body) = match options.email_handle() {
            Some(handle) => (Some(handle.to_string()), None),
            None => (None, Some(default_reset_body(reset_url))),
        };

        let email = EmailOptions {
            from: options.from().to_string(),
            to: options.id().to_string(),
            subject: options.subject().to_string(),
            smtp: options.smtp().clone(),
            page_handle,
            body,
        };

        self.notifier
            .send_email(&email, context)
            .map_err(Error::Notify)
    }
}

/// Plaintext fallback body used when no email template handle is configured.
fn default_reset_body(reset_url: &str) -> String {
    format!(
        "Hi,\nTo reset your password please follow the link below: {reset_url}.\nThanks!\n"
    )
}

/// Reduce a plural entry type to the singular context key.
///
/// Covers the common English plural forms seen in entry type names; this is
/// not a general inflector.
fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    for suffix in ["ses", "xes", "zes", "ches", "shes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}
