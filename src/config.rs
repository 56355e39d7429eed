//! Service-level configuration.

const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
// Reset links expire one hour after issuance.
const DEFAULT_RESET_TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// Runtime configuration for [`AuthService`](crate::AuthService).
///
/// Both knobs are runtime fields rather than compile-time constants so
/// boundary values can be exercised without rebuilding.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    min_password_length: usize,
    reset_token_lifetime_seconds: i64,
}

impl AuthConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            reset_token_lifetime_seconds: DEFAULT_RESET_TOKEN_LIFETIME_SECONDS,
        }
    }

    #[must_use]
    pub fn with_min_password_length(mut self, length: usize) -> Self {
        self.min_password_length = length;
        self
    }

    #[must_use]
    pub fn with_reset_token_lifetime_seconds(mut self, seconds: i64) -> Self {
        self.reset_token_lifetime_seconds = seconds;
        self
    }

    #[must_use]
    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    #[must_use]
    pub fn reset_token_lifetime_seconds(&self) -> i64 {
        self.reset_token_lifetime_seconds
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new()
    }
}
